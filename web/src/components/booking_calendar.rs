use chrono::Datelike;
use leptos::prelude::*;
use thaw::*;

use crate::booking::{BookingState, DayCell, MonthDirection, WEEKDAY_HEADERS};
use crate::components::time_slot_picker::TimeSlotPicker;

/// Month grid for picking a visit date, with the slot panel underneath.
///
/// Everything is derived from `state`; navigation and clicks only update it.
#[component]
pub fn BookingCalendar(state: RwSignal<BookingState>) -> impl IntoView {
    let navigate = move |direction: MonthDirection| {
        state.update(|s| s.navigate_month(direction));
    };

    view! {
        <div class="calendar-container">
            <div class="calendar-header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    button_type=ButtonType::Button
                    on_click=move |_| navigate(MonthDirection::Prev)
                >
                    "← Previous"
                </Button>

                <div class="calendar-month">
                    {move || state.with(|s| s.calendar.title())}
                </div>

                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    button_type=ButtonType::Button
                    on_click=move |_| navigate(MonthDirection::Next)
                >
                    "Next →"
                </Button>
            </div>

            <div class="calendar-grid">
                {WEEKDAY_HEADERS
                    .iter()
                    .map(|day| view! { <div class="calendar-weekday">{*day}</div> })
                    .collect_view()}

                {move || {
                    state
                        .with(|s| s.cells())
                        .into_iter()
                        .map(|cell| match cell {
                            DayCell::Blank => {
                                view! { <div class="calendar-day empty"></div> }.into_any()
                            }
                            DayCell::Day { date, is_past, is_selected } => {
                                view! {
                                    <button
                                        type="button"
                                        class="calendar-day"
                                        class:available=!is_past
                                        class:disabled=is_past
                                        class:selected=is_selected
                                        disabled=is_past
                                        on:click=move |_| {
                                            state.update(|s| {
                                                s.select_day(&cell);
                                            });
                                        }
                                    >
                                        {date.day()}
                                    </button>
                                }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="date-picker-footer">
                {move || match state.with(|s| s.selection.date) {
                    Some(date) => view! {
                        <p class="selected-info">
                            "Selected: " {date.format("%A, %-d %B %Y").to_string()}
                        </p>
                    }
                    .into_any(),
                    None => view! {
                        <p class="no-selection">"Please select an available date"</p>
                    }
                    .into_any(),
                }}
            </div>

            <TimeSlotPicker state=state/>
        </div>
    }
}
