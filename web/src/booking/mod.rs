//! Visit booking: the month calendar, slot selection and the simulated
//! submission that sits behind the Book a Visit page.

pub mod calendar;
pub mod selection;
pub mod submission;

pub use calendar::{render_month, CalendarState, DayCell, MonthDirection, WEEKDAY_HEADERS};
pub use selection::{BookingSelection, BookingState};
pub use submission::{
    begin_submit, finish_submit, validate_booking, BookingForm, SubmitStatus, VisitRequest,
    BOOKING_SUBMIT_DELAY, BOOKING_SUCCESS_MESSAGE,
};
