/// Time formatting for booking slots.
use chrono::NaiveTime;
use shared_types::TimeSlot;

/// Convert 24-hour `HH:MM` to 12-hour format: no leading zero on the hour,
/// always two minute digits ("09:00" -> "9:00 AM"). Input chrono can't parse
/// comes back unchanged.
pub fn convert_to_12_hour_format(time_24: &str) -> String {
    NaiveTime::parse_from_str(time_24, "%H:%M")
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| time_24.to_string())
}

/// The only place a slot's visible label comes from.
pub fn format_slot(slot: TimeSlot) -> String {
    convert_to_12_hour_format(slot.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn drops_leading_zero_and_keeps_minutes() {
        assert_eq!(convert_to_12_hour_format("09:00"), "9:00 AM");
        assert_eq!(convert_to_12_hour_format("10:30"), "10:30 AM");
        assert_eq!(convert_to_12_hour_format("14:00"), "2:00 PM");
        assert_eq!(convert_to_12_hour_format("15:30"), "3:30 PM");
    }

    #[test]
    fn midnight_and_noon() {
        assert_eq!(convert_to_12_hour_format("00:05"), "12:05 AM");
        assert_eq!(convert_to_12_hour_format("12:00"), "12:00 PM");
    }

    #[test]
    fn unparseable_input_is_returned_unchanged() {
        assert_eq!(convert_to_12_hour_format("All Day"), "All Day");
        assert_eq!(convert_to_12_hour_format("25:00"), "25:00");
    }

    #[test]
    fn slot_labels_read_as_twelve_hour_times() {
        let labels: Vec<String> = TimeSlot::ALL.iter().copied().map(format_slot).collect();
        assert_eq!(labels, ["9:00 AM", "10:30 AM", "2:00 PM", "3:30 PM"]);
    }
}
