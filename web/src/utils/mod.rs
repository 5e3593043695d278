pub mod scroll;
pub mod time_format;
pub mod timer;
