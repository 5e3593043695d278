use leptos::prelude::*;
use thaw::*;

use crate::accessibility::{AccessibilitySettings, TEXT_TO_SPEECH_NOTICE};
use crate::components::status_message::InfoMessage;

pub fn provide_accessibility() -> RwSignal<AccessibilitySettings> {
    let settings = RwSignal::new(AccessibilitySettings::default());
    provide_context(settings);
    settings
}

#[component]
pub fn AccessibilityBar() -> impl IntoView {
    let settings = use_context::<RwSignal<AccessibilitySettings>>()
        .unwrap_or_else(|| RwSignal::new(AccessibilitySettings::default()));
    let notice = RwSignal::new(None::<String>);

    view! {
        <div class="accessibility-bar">
            <span>"Accessibility:"</span>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| notice.set(Some(TEXT_TO_SPEECH_NOTICE.to_string()))
            >
                "🔊 Text-to-Speech"
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| settings.update(|s| s.toggle_high_contrast())
            >
                "🎨 High Contrast"
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| settings.update(|s| s.grow_text())
            >
                "🔍 Text Size"
            </Button>
        </div>
        <InfoMessage message=Signal::from(notice)/>
    }
}
