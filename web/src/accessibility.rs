//! Visitor-controlled display aids from the home page toolbar.

pub const BASE_TEXT_SIZE_PX: u32 = 16;
pub const MAX_TEXT_SIZE_PX: u32 = 28;
const TEXT_SIZE_STEP_PX: u32 = 2;

pub const TEXT_TO_SPEECH_NOTICE: &str =
    "Text-to-speech activated! Click on any text to hear it read aloud.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilitySettings {
    pub high_contrast: bool,
    pub text_size_px: u32,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            high_contrast: false,
            text_size_px: BASE_TEXT_SIZE_PX,
        }
    }
}

impl AccessibilitySettings {
    pub fn toggle_high_contrast(&mut self) {
        self.high_contrast = !self.high_contrast;
    }

    /// Grows by one step, wrapping back to the base size after the maximum.
    pub fn grow_text(&mut self) {
        self.text_size_px = if self.text_size_px >= MAX_TEXT_SIZE_PX {
            BASE_TEXT_SIZE_PX
        } else {
            (self.text_size_px + TEXT_SIZE_STEP_PX).min(MAX_TEXT_SIZE_PX)
        };
    }

    pub fn style(&self) -> String {
        format!("font-size: {}px;", self.text_size_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_grows_then_wraps() {
        let mut settings = AccessibilitySettings::default();
        let mut sizes = vec![];
        for _ in 0..7 {
            settings.grow_text();
            sizes.push(settings.text_size_px);
        }
        assert_eq!(sizes, vec![18, 20, 22, 24, 26, 28, 16]);
    }

    #[test]
    fn contrast_toggles() {
        let mut settings = AccessibilitySettings::default();
        settings.toggle_high_contrast();
        assert!(settings.high_contrast);
        settings.toggle_high_contrast();
        assert_eq!(settings, AccessibilitySettings::default());
    }
}
