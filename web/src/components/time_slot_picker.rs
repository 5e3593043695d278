use leptos::prelude::*;
use shared_types::TimeSlot;

use crate::booking::BookingState;
use crate::utils::time_format::format_slot;

/// The four fixed visit times, shown once a date has been picked.
#[component]
pub fn TimeSlotPicker(state: RwSignal<BookingState>) -> impl IntoView {
    let visible = Memo::new(move |_| state.with(|s| s.selection.time_slots_visible()));

    view! {
        <Show when=move || visible.get()>
            <div class="time-slot-picker">
                <h4>"Available Time Slots"</h4>
                <div class="time-slots">
                    {TimeSlot::ALL
                        .iter()
                        .copied()
                        .map(|slot| {
                            view! {
                                <button
                                    type="button"
                                    class="time-slot"
                                    class:selected=move || {
                                        state.with(|s| s.selection.time == Some(slot))
                                    }
                                    data-time=slot.value()
                                    on:click=move |_| {
                                        state.update(|s| {
                                            s.selection.select_time_slot(slot);
                                        });
                                    }
                                >
                                    {format_slot(slot)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
