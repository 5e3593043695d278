use chrono::NaiveDate;
use shared_types::{AgeGroup, TimeSlot, VisitType};

use super::calendar::{CalendarState, DayCell, MonthDirection};

/// What the visitor has picked so far on the booking page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingSelection {
    pub visit_type: Option<VisitType>,
    pub age_group: Option<AgeGroup>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
}

impl BookingSelection {
    /// Clicking the active tag clears it.
    pub fn toggle_age_group(&mut self, tag: AgeGroup) {
        self.age_group = if self.age_group == Some(tag) {
            None
        } else {
            Some(tag)
        };
    }

    /// Ignored until a date is picked; slots aren't offered before that.
    pub fn select_time_slot(&mut self, slot: TimeSlot) -> bool {
        if self.date.is_none() {
            return false;
        }
        self.time = Some(slot);
        true
    }

    pub fn time_slots_visible(&self) -> bool {
        self.date.is_some()
    }

    pub fn clear_schedule(&mut self) {
        self.date = None;
        self.time = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Calendar plus selection, the single source the booking widget renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingState {
    pub calendar: CalendarState,
    pub selection: BookingSelection,
    pub today: NaiveDate,
}

impl BookingState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            calendar: CalendarState::containing(today),
            selection: BookingSelection::default(),
            today,
        }
    }

    /// Moves "today" to the visitor's clock once the page is live. A calendar
    /// still on the old today's month follows it, and a picked date that is
    /// now past or off-grid is dropped.
    pub fn set_today(&mut self, today: NaiveDate) {
        if self.calendar.contains(self.today) {
            self.calendar = CalendarState::containing(today);
        }
        self.today = today;
        if self
            .selection
            .date
            .is_some_and(|picked| picked < today || !self.calendar.contains(picked))
        {
            self.selection.clear_schedule();
        }
    }

    pub fn cells(&self) -> Vec<DayCell> {
        self.calendar.render(self.today, self.selection.date)
    }

    /// Picks a day from the visible month. Disabled cells and dates outside
    /// the month leave the selection untouched.
    pub fn select_day(&mut self, cell: &DayCell) -> bool {
        let Some(date) = cell.date() else {
            return false;
        };
        if date < self.today || !self.calendar.contains(date) {
            return false;
        }
        if self.selection.date != Some(date) {
            self.selection.time = None;
        }
        self.selection.date = Some(date);
        true
    }

    /// Leaving the month drops any picked date and time.
    pub fn navigate_month(&mut self, direction: MonthDirection) {
        self.calendar = self.calendar.shifted(direction);
        self.selection.clear_schedule();
    }

    /// Back to an empty form on the current month.
    pub fn reset(&mut self) {
        self.selection.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cell_for(state: &BookingState, d: NaiveDate) -> DayCell {
        state
            .cells()
            .into_iter()
            .find(|c| c.date() == Some(d))
            .unwrap()
    }

    #[test]
    fn past_day_can_never_be_selected() {
        let mut state = BookingState::new(date(2025, 4, 15));
        let past = cell_for(&state, date(2025, 4, 14));
        for _ in 0..3 {
            assert!(!state.select_day(&past));
        }
        assert_eq!(state.selection.date, None);
        assert!(!state.selection.time_slots_visible());
    }

    #[test]
    fn past_day_stays_unselectable_even_if_the_cell_lies() {
        let mut state = BookingState::new(date(2025, 4, 15));
        let forged = DayCell::Day {
            date: date(2025, 4, 1),
            is_past: false,
            is_selected: false,
        };
        assert!(!state.select_day(&forged));
        assert_eq!(state.selection.date, None);
    }

    #[test]
    fn blank_cell_is_ignored() {
        let mut state = BookingState::new(date(2025, 4, 1));
        assert!(!state.select_day(&DayCell::Blank));
    }

    #[test]
    fn selecting_a_second_day_replaces_the_first() {
        let mut state = BookingState::new(date(2025, 4, 1));
        let first = cell_for(&state, date(2025, 4, 10));
        let second = cell_for(&state, date(2025, 4, 12));

        assert!(state.select_day(&first));
        assert!(state.select_day(&second));

        let selected: Vec<_> = state.cells().into_iter().filter(DayCell::is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date(), Some(date(2025, 4, 12)));
        assert!(state.selection.time_slots_visible());
    }

    #[test]
    fn today_is_selectable() {
        let today = date(2025, 4, 15);
        let mut state = BookingState::new(today);
        assert!(state.select_day(&cell_for(&state, today)));
    }

    #[test]
    fn time_slot_requires_a_date() {
        let mut selection = BookingSelection::default();
        assert!(!selection.select_time_slot(TimeSlot::NineAm));
        assert_eq!(selection.time, None);
    }

    #[test]
    fn time_slot_is_idempotent_and_replaced_by_another() {
        let mut state = BookingState::new(date(2025, 4, 1));
        state.select_day(&cell_for(&state, date(2025, 4, 2)));

        state.selection.select_time_slot(TimeSlot::TwoPm);
        state.selection.select_time_slot(TimeSlot::TwoPm);
        assert_eq!(state.selection.time, Some(TimeSlot::TwoPm));

        state.selection.select_time_slot(TimeSlot::HalfPastTenAm);
        assert_eq!(state.selection.time, Some(TimeSlot::HalfPastTenAm));
    }

    #[test]
    fn picking_a_different_day_drops_the_time() {
        let mut state = BookingState::new(date(2025, 4, 1));
        state.select_day(&cell_for(&state, date(2025, 4, 2)));
        state.selection.select_time_slot(TimeSlot::NineAm);

        state.select_day(&cell_for(&state, date(2025, 4, 2)));
        assert_eq!(state.selection.time, Some(TimeSlot::NineAm));

        state.select_day(&cell_for(&state, date(2025, 4, 3)));
        assert_eq!(state.selection.time, None);
    }

    #[test]
    fn age_tag_toggles() {
        let mut selection = BookingSelection::default();
        selection.toggle_age_group(AgeGroup::Primary);
        selection.toggle_age_group(AgeGroup::Primary);
        assert_eq!(selection.age_group, None);

        selection.toggle_age_group(AgeGroup::Primary);
        selection.toggle_age_group(AgeGroup::Teen);
        assert_eq!(selection.age_group, Some(AgeGroup::Teen));
    }

    #[test]
    fn navigating_away_and_back_clears_the_schedule() {
        let today = date(2025, 4, 1);
        let mut state = BookingState::new(today);
        let original = state.cells();

        state.select_day(&cell_for(&state, date(2025, 4, 20)));
        state.selection.select_time_slot(TimeSlot::HalfPastThreePm);

        state.navigate_month(MonthDirection::Next);
        state.navigate_month(MonthDirection::Prev);

        assert_eq!(state.cells(), original);
        assert_eq!(state.selection.date, None);
        assert_eq!(state.selection.time, None);
        assert!(!state.selection.time_slots_visible());
    }

    #[test]
    fn navigation_keeps_visit_type_and_age_group() {
        let mut state = BookingState::new(date(2025, 4, 1));
        state.selection.visit_type = Some(VisitType::Online);
        state.selection.toggle_age_group(AgeGroup::EarlyYears);

        state.navigate_month(MonthDirection::Next);

        assert_eq!(state.selection.visit_type, Some(VisitType::Online));
        assert_eq!(state.selection.age_group, Some(AgeGroup::EarlyYears));
    }

    #[test]
    fn day_from_another_month_is_rejected() {
        let mut state = BookingState::new(date(2025, 4, 1));
        let may_cell = DayCell::Day {
            date: date(2025, 5, 3),
            is_past: false,
            is_selected: false,
        };
        assert!(!state.select_day(&may_cell));
    }

    #[test]
    fn set_today_follows_the_new_month() {
        let mut state = BookingState::new(date(2025, 4, 30));
        state.set_today(date(2025, 5, 1));

        assert_eq!(state.calendar, CalendarState::containing(date(2025, 5, 1)));
        assert!(!cell_for(&state, date(2025, 5, 1)).is_disabled());
    }

    #[test]
    fn set_today_keeps_a_month_the_visitor_navigated_to() {
        let mut state = BookingState::new(date(2025, 4, 10));
        state.navigate_month(MonthDirection::Next);
        state.navigate_month(MonthDirection::Next);
        state.select_day(&cell_for(&state, date(2025, 6, 20)));

        state.set_today(date(2025, 4, 11));

        assert_eq!(state.calendar, CalendarState::containing(date(2025, 6, 1)));
        assert_eq!(state.selection.date, Some(date(2025, 6, 20)));
    }

    #[test]
    fn set_today_drops_a_date_that_is_now_past() {
        let mut state = BookingState::new(date(2025, 4, 10));
        state.select_day(&cell_for(&state, date(2025, 4, 10)));
        state.selection.select_time_slot(TimeSlot::NineAm);
        state.selection.visit_type = Some(VisitType::OnSite);

        state.set_today(date(2025, 4, 11));

        assert_eq!(state.selection.date, None);
        assert_eq!(state.selection.time, None);
        assert_eq!(state.selection.visit_type, Some(VisitType::OnSite));
        assert!(cell_for(&state, date(2025, 4, 10)).is_disabled());
    }

    #[test]
    fn reset_empties_the_selection_but_keeps_the_month() {
        let mut state = BookingState::new(date(2025, 4, 1));
        state.navigate_month(MonthDirection::Next);
        let month = state.calendar;
        state.selection.visit_type = Some(VisitType::OnSite);
        state.select_day(&cell_for(&state, date(2025, 5, 6)));

        state.reset();

        assert_eq!(state.selection, BookingSelection::default());
        assert_eq!(state.calendar, month);
    }
}
