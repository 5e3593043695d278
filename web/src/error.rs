use thiserror::Error;

/// Why a visit booking could not be submitted. The messages are shown to
/// visitors as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,

    #[error("Please select a date and time for your visit.")]
    MissingSchedule,

    #[error("Your visit request is already being sent.")]
    AlreadySubmitting,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
}
