use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

use crate::booking::SubmitStatus;

/// Outcome banner for the simulated form submissions.
#[component]
pub fn SubmitStatusMessage(status: RwSignal<SubmitStatus>) -> impl IntoView {
    move || match status.get() {
        SubmitStatus::Failed(message) => view! {
            <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
        }
        .into_any(),
        SubmitStatus::Succeeded(message) => view! {
            <MessageBar intent=MessageBarIntent::Success>{message}</MessageBar>
        }
        .into_any(),
        SubmitStatus::Idle | SubmitStatus::Submitting => ().into_any(),
    }
}

#[component]
pub fn InfoMessage(message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! { <MessageBar intent=MessageBarIntent::Info>{text}</MessageBar> }
        })
    }
}
