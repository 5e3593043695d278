use chrono::{Datelike, Local, Months, NaiveDate};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthDirection {
    Prev,
    Next,
}

/// The month currently shown by the booking calendar.
///
/// Stored as the first day of that month so every state is a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    first_of_month: NaiveDate,
}

/// One square of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Filler before day 1 so the first date lands under its weekday.
    Blank,
    Day {
        date: NaiveDate,
        is_past: bool,
        is_selected: bool,
    },
}

impl DayCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayCell::Blank => None,
            DayCell::Day { date, .. } => Some(*date),
        }
    }

    /// Blanks and past dates can't be picked.
    pub fn is_disabled(&self) -> bool {
        match self {
            DayCell::Blank => true,
            DayCell::Day { is_past, .. } => *is_past,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, DayCell::Day { is_selected: true, .. })
    }
}

impl CalendarState {
    /// `month0` follows the 0 = January convention. Returns `None` for an
    /// out-of-range month or a year chrono can't represent.
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        let month = month0.checked_add(1)?;
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_of_month| Self { first_of_month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_of_month: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_of_month.year()
    }

    pub fn month0(&self) -> u32 {
        self.first_of_month.month0()
    }

    /// e.g. "April 2025"
    pub fn title(&self) -> String {
        self.first_of_month.format("%B %Y").to_string()
    }

    pub fn days_in_month(&self) -> u32 {
        self.days().count() as u32
    }

    /// 0 = Sunday
    pub fn leading_blanks(&self) -> u32 {
        self.first_of_month.weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month0() == self.month0()
    }

    /// Moves one month back or forward, rolling the year over. Stays put at
    /// the edges of chrono's date range.
    pub fn shifted(self, direction: MonthDirection) -> Self {
        let one = Months::new(1);
        let moved = match direction {
            MonthDirection::Prev => self.first_of_month.checked_sub_months(one),
            MonthDirection::Next => self.first_of_month.checked_add_months(one),
        };
        moved.map(Self::containing).unwrap_or(self)
    }

    pub fn render(&self, today: NaiveDate, selected: Option<NaiveDate>) -> Vec<DayCell> {
        let blanks = self.leading_blanks() as usize;
        let mut cells = Vec::with_capacity(blanks + self.days_in_month() as usize);

        cells.extend(std::iter::repeat(DayCell::Blank).take(blanks));

        cells.extend(self.days().map(|date| DayCell::Day {
            date,
            is_past: date < today,
            is_selected: selected == Some(date),
        }));

        cells
    }

    fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first_of_month
            .iter_days()
            .take_while(|date| self.contains(*date))
    }
}

/// Grid for one month: leading blanks, then one cell per day, with dates
/// before `today` disabled.
pub fn render_month(
    year: i32,
    month0: u32,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<DayCell> {
    CalendarState::new(year, month0)
        .map(|state| state.render(today, selected))
        .unwrap_or_default()
}

/// `month` is 1-based. Zero for a month chrono rejects.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    month
        .checked_sub(1)
        .and_then(|month0| CalendarState::new(year, month0))
        .map(|state| state.days_in_month())
        .unwrap_or(0)
}

/// Calendar date on the visitor's clock. No timezone normalisation.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn blanks(cells: &[DayCell]) -> usize {
        cells.iter().take_while(|c| **c == DayCell::Blank).count()
    }

    fn day_count(cells: &[DayCell]) -> usize {
        cells.iter().filter(|c| c.date().is_some()).count()
    }

    #[test]
    fn april_2025_starts_on_tuesday() {
        let cells = render_month(2025, 3, date(2025, 1, 1), None);
        assert_eq!(blanks(&cells), 2);
        assert_eq!(day_count(&cells), 30);
        assert_eq!(cells[2].date(), Some(date(2025, 4, 1)));
        assert_eq!(cells.last().and_then(DayCell::date), Some(date(2025, 4, 30)));
    }

    #[test]
    fn leading_blanks_match_weekday_of_the_first() {
        let today = date(2000, 1, 1);
        for year in [2023, 2024, 2025, 2100] {
            for month0 in 0..12 {
                let state = CalendarState::new(year, month0).unwrap();
                let cells = state.render(today, None);
                let first = date(year, month0 + 1, 1);
                assert_eq!(blanks(&cells), first.weekday().num_days_from_sunday() as usize);
                assert_eq!(day_count(&cells), state.days_in_month() as usize);
            }
        }
    }

    #[test]
    fn february_length_follows_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn month_lengths_cover_the_whole_year() {
        let lengths: Vec<u32> = (1..=12).map(|m| days_in_month(2025, m)).collect();
        assert_eq!(lengths, [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    }

    #[test]
    fn out_of_range_month_has_no_days() {
        assert_eq!(days_in_month(2025, 0), 0);
        assert_eq!(days_in_month(2025, 13), 0);
        assert!(CalendarState::new(2025, u32::MAX).is_none());
    }

    #[test]
    fn days_before_today_are_disabled() {
        let today = date(2025, 4, 15);
        let cells = render_month(2025, 3, today, None);
        for cell in &cells {
            if let Some(d) = cell.date() {
                assert_eq!(cell.is_disabled(), d < today, "{d}");
            }
        }
        let today_cell = cells.iter().find(|c| c.date() == Some(today)).unwrap();
        assert!(!today_cell.is_disabled());
    }

    #[test]
    fn selected_date_is_flagged_only_in_its_month() {
        let picked = date(2025, 4, 20);
        let april = render_month(2025, 3, date(2025, 4, 1), Some(picked));
        assert_eq!(april.iter().filter(|c| c.is_selected()).count(), 1);

        let may = render_month(2025, 4, date(2025, 4, 1), Some(picked));
        assert!(may.iter().all(|c| !c.is_selected()));
    }

    #[test]
    fn navigation_rolls_the_year() {
        let december = CalendarState::new(2025, 11).unwrap();
        let january = december.shifted(MonthDirection::Next);
        assert_eq!((january.year(), january.month0()), (2026, 0));
        assert_eq!(january.shifted(MonthDirection::Prev), december);
    }

    #[test]
    fn next_then_prev_renders_the_same_grid() {
        let today = date(2025, 4, 10);
        let april = CalendarState::containing(today);
        let round_trip = april.shifted(MonthDirection::Next).shifted(MonthDirection::Prev);
        assert_eq!(round_trip.render(today, None), april.render(today, None));
    }

    #[test]
    fn title_names_month_and_year() {
        assert_eq!(CalendarState::new(2025, 3).unwrap().title(), "April 2025");
    }

    #[test]
    fn invalid_month_renders_nothing() {
        assert!(CalendarState::new(2025, 12).is_none());
        assert!(render_month(2025, 12, date(2025, 1, 1), None).is_empty());
    }
}
