use leptos::prelude::*;
use shared_types::{AgeGroup, Choice};

use crate::booking::BookingState;

#[component]
pub fn AgeGroupTags(state: RwSignal<BookingState>) -> impl IntoView {
    view! {
        <div class="age-groups">
            {AgeGroup::ALL
                .iter()
                .copied()
                .map(|tag| {
                    view! {
                        <button
                            type="button"
                            class="age-tag"
                            class:selected=move || state.with(|s| s.selection.age_group == Some(tag))
                            on:click=move |_| state.update(|s| s.selection.toggle_age_group(tag))
                        >
                            {tag.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
