use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared_types::{AgeGroup, ProgramInterest, TimeSlot, VisitType};

use super::selection::{BookingSelection, BookingState};
use crate::error::BookingError;

/// Stand-in for the round trip a real booking backend would take.
pub const BOOKING_SUBMIT_DELAY: Duration = Duration::from_millis(1200);

pub const BOOKING_SUCCESS_MESSAGE: &str =
    "Visit scheduled successfully! You will receive a confirmation email shortly.";

/// Free-text fields of the booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub child_name: String,
    pub child_age: String,
    pub program_interest: Option<ProgramInterest>,
    pub special_needs: String,
    pub questions: String,
}

impl BookingForm {
    fn has_contact_details(&self) -> bool {
        [&self.parent_name, &self.email, &self.phone]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// A booking that passed validation, shaped like the payload a backend
/// would receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRequest {
    pub visit_type: VisitType,
    pub age_group: Option<AgeGroup>,
    pub program_interest: Option<ProgramInterest>,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub child_name: Option<String>,
    pub child_age: Option<u8>,
    pub special_needs: Option<String>,
    pub questions: Option<String>,
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Checks the contact group first, then the schedule. Nothing is mutated on
/// failure.
pub fn validate_booking(
    form: &BookingForm,
    selection: &BookingSelection,
) -> Result<VisitRequest, BookingError> {
    if !form.has_contact_details() {
        return Err(BookingError::MissingRequiredFields);
    }
    let visit_type = selection
        .visit_type
        .ok_or(BookingError::MissingRequiredFields)?;

    let (date, time) = selection
        .date
        .zip(selection.time)
        .ok_or(BookingError::MissingSchedule)?;

    Ok(VisitRequest {
        visit_type,
        age_group: selection.age_group,
        program_interest: form.program_interest,
        date,
        time,
        parent_name: form.parent_name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        child_name: optional_text(&form.child_name),
        child_age: form.child_age.trim().parse().ok(),
        special_needs: optional_text(&form.special_needs),
        questions: optional_text(&form.questions),
    })
}

/// Where a simulated form submission currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    pub fn failed(error: impl std::fmt::Display) -> Self {
        SubmitStatus::Failed(error.to_string())
    }

    /// Drops back to `Idle` when a pending submission will never complete,
    /// e.g. its timer could not be scheduled. Other states are kept.
    pub fn abandon(&mut self) {
        if self.is_submitting() {
            *self = SubmitStatus::Idle;
        }
    }
}

/// First half of a booking submission. Rejects a second submit while one is
/// in flight and leaves `status` alone in that case. Otherwise validates,
/// recording the outcome in `status`.
pub fn begin_submit(
    status: &mut SubmitStatus,
    form: &BookingForm,
    selection: &BookingSelection,
) -> Result<VisitRequest, BookingError> {
    if status.is_submitting() {
        return Err(BookingError::AlreadySubmitting);
    }
    match validate_booking(form, selection) {
        Ok(request) => {
            *status = SubmitStatus::Submitting;
            Ok(request)
        }
        Err(err) => {
            *status = SubmitStatus::failed(err);
            Err(err)
        }
    }
}

/// Second half, run once the simulated round trip is over: the selection is
/// emptied and the success banner shown.
pub fn finish_submit(state: &mut BookingState, status: &mut SubmitStatus) {
    state.reset();
    *status = SubmitStatus::Succeeded(BOOKING_SUCCESS_MESSAGE.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete_form() -> BookingForm {
        BookingForm {
            parent_name: "Thandi Mokoena".into(),
            email: "thandi@example.com".into(),
            phone: "+27 82 555 0101".into(),
            ..Default::default()
        }
    }

    fn scheduled() -> BookingSelection {
        BookingSelection {
            visit_type: Some(VisitType::OnSite),
            age_group: None,
            date: NaiveDate::from_ymd_opt(2025, 4, 22),
            time: Some(TimeSlot::TwoPm),
        }
    }

    #[test]
    fn missing_visit_type_is_a_required_field_error() {
        let selection = BookingSelection {
            visit_type: None,
            ..scheduled()
        };
        assert_eq!(
            validate_booking(&complete_form(), &selection),
            Err(BookingError::MissingRequiredFields)
        );
        assert_eq!(
            validate_booking(&BookingForm::default(), &BookingSelection::default()),
            Err(BookingError::MissingRequiredFields)
        );
    }

    #[test]
    fn blank_contact_field_is_a_required_field_error() {
        for blank in ["parent_name", "email", "phone"] {
            let mut form = complete_form();
            match blank {
                "parent_name" => form.parent_name = "   ".into(),
                "email" => form.email.clear(),
                _ => form.phone.clear(),
            }
            assert_eq!(
                validate_booking(&form, &scheduled()),
                Err(BookingError::MissingRequiredFields),
                "{blank}"
            );
        }
    }

    #[test]
    fn missing_date_or_time_is_a_schedule_error() {
        let no_date = BookingSelection {
            date: None,
            ..scheduled()
        };
        let no_time = BookingSelection {
            time: None,
            ..scheduled()
        };
        assert_eq!(
            validate_booking(&complete_form(), &no_date),
            Err(BookingError::MissingSchedule)
        );
        assert_eq!(
            validate_booking(&complete_form(), &no_time),
            Err(BookingError::MissingSchedule)
        );
    }

    #[test]
    fn complete_booking_builds_a_request() {
        let mut form = complete_form();
        form.child_age = " 9 ".into();
        form.questions = "  ".into();
        form.program_interest = Some(ProgramInterest::Clubs);

        let request = validate_booking(&form, &scheduled()).unwrap();

        assert_eq!(request.visit_type, VisitType::OnSite);
        assert_eq!(request.time, TimeSlot::TwoPm);
        assert_eq!(request.child_age, Some(9));
        assert_eq!(request.questions, None);
        assert_eq!(request.program_interest, Some(ProgramInterest::Clubs));
    }

    #[test]
    fn visit_type_is_checked_even_with_contact_details() {
        let selection = BookingSelection {
            visit_type: None,
            ..scheduled()
        };
        let mut form = complete_form();
        assert_eq!(
            validate_booking(&form, &selection),
            Err(BookingError::MissingRequiredFields)
        );
        form.email.clear();
        assert_eq!(
            validate_booking(&form, &scheduled()),
            Err(BookingError::MissingRequiredFields)
        );
    }

    #[test]
    fn begin_submit_moves_idle_to_submitting() {
        let mut status = SubmitStatus::Idle;
        let request = begin_submit(&mut status, &complete_form(), &scheduled()).unwrap();
        assert_eq!(status, SubmitStatus::Submitting);
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2025, 4, 22).unwrap());
    }

    #[test]
    fn second_submit_is_rejected_while_submitting() {
        let mut status = SubmitStatus::Idle;
        begin_submit(&mut status, &complete_form(), &scheduled()).unwrap();

        assert_eq!(
            begin_submit(&mut status, &complete_form(), &scheduled()),
            Err(BookingError::AlreadySubmitting)
        );
        assert_eq!(status, SubmitStatus::Submitting);
    }

    #[test]
    fn failed_validation_keeps_the_selection() {
        let mut state = BookingState::new(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        state.selection = BookingSelection {
            time: None,
            ..scheduled()
        };
        let before = state;
        let mut status = SubmitStatus::Succeeded(BOOKING_SUCCESS_MESSAGE.to_string());

        let result = begin_submit(&mut status, &complete_form(), &state.selection);

        assert_eq!(result, Err(BookingError::MissingSchedule));
        assert_eq!(
            status,
            SubmitStatus::Failed("Please select a date and time for your visit.".into())
        );
        assert_eq!(state, before);
    }

    #[test]
    fn finish_submit_resets_the_selection_and_reports_success() {
        let mut state = BookingState::new(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        state.selection = BookingSelection {
            age_group: Some(AgeGroup::Primary),
            ..scheduled()
        };
        let calendar = state.calendar;
        let mut status = SubmitStatus::Idle;
        begin_submit(&mut status, &complete_form(), &state.selection).unwrap();

        finish_submit(&mut state, &mut status);

        assert_eq!(state.selection, BookingSelection::default());
        assert_eq!(state.calendar, calendar);
        assert_eq!(
            status,
            SubmitStatus::Succeeded(BOOKING_SUCCESS_MESSAGE.to_string())
        );
        assert!(begin_submit(&mut status, &complete_form(), &scheduled()).is_ok());
    }

    #[test]
    fn abandon_only_unlocks_a_pending_submission() {
        let mut status = SubmitStatus::Submitting;
        status.abandon();
        assert_eq!(status, SubmitStatus::Idle);

        let mut failed = SubmitStatus::Failed("x".into());
        failed.abandon();
        assert_eq!(failed, SubmitStatus::Failed("x".into()));
    }

    #[test]
    fn error_messages_name_the_missing_group() {
        assert_eq!(
            BookingError::MissingRequiredFields.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            BookingError::MissingSchedule.to_string(),
            "Please select a date and time for your visit."
        );
    }
}
