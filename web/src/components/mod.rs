pub mod accessibility_bar;
pub mod age_group_tags;
pub mod booking_calendar;
pub mod choice_options;
pub mod faq_accordion;
pub mod navbar;
pub mod page_chrome;
pub mod status_message;
pub mod time_slot_picker;

// Re-export commonly used components
pub use booking_calendar::BookingCalendar;
pub use navbar::Navbar;
pub use page_chrome::{FeatureCard, Footer, PageHeader, RevealCard, SectionLink};
