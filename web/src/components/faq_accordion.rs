use leptos::prelude::*;

use crate::contact::FaqAccordion as AccordionState;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[component]
pub fn FaqAccordion(entries: &'static [FaqEntry]) -> impl IntoView {
    let accordion = RwSignal::new(AccordionState::default());

    view! {
        <div class="faq-container">
            {entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let is_open = move || accordion.with(|a| a.is_open(index));
                    view! {
                        <div class="faq-item">
                            <button
                                type="button"
                                class="faq-question"
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| accordion.update(|a| a.toggle(index))
                            >
                                <h4>{entry.question}</h4>
                                <span class="faq-toggle">
                                    {move || accordion.with(|a| a.indicator(index))}
                                </span>
                            </button>
                            <div class="faq-answer" class:active=is_open>
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
