use std::time::Duration;

use shared_types::InquiryType;

use crate::error::ContactError;

pub const CONTACT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: Option<InquiryType>,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// First name, last name, email, subject and message must be non-blank.
    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.subject,
            &self.message,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ContactError::MissingRequiredFields);
        }
        Ok(())
    }
}

/// Accordion where at most one answer is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn indicator(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            "−"
        } else {
            "+"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        ContactForm {
            first_name: "Sipho".into(),
            last_name: "Dlamini".into(),
            email: "sipho@example.com".into(),
            subject: "Club programs".into(),
            message: "Do you run Saturday clubs?".into(),
            ..Default::default()
        }
    }

    #[test]
    fn phone_and_inquiry_type_are_optional() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn whitespace_only_field_counts_as_missing() {
        let form = ContactForm {
            subject: "   ".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingRequiredFields));
        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::MissingRequiredFields)
        );
    }

    #[test]
    fn only_one_answer_open_at_a_time() {
        let mut faq = FaqAccordion::default();
        faq.toggle(0);
        faq.toggle(2);
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
        assert_eq!(faq.indicator(2), "−");
        assert_eq!(faq.indicator(0), "+");
    }

    #[test]
    fn toggling_the_open_answer_closes_it() {
        let mut faq = FaqAccordion::default();
        faq.toggle(1);
        faq.toggle(1);
        assert_eq!(faq, FaqAccordion::default());
    }
}
