use leptos::prelude::*;
use shared_types::Choice;

/// `<option>` list for a native `<select>`, preceded by an empty placeholder
/// entry. Selection is driven by the select's `prop:value`.
pub fn choice_options<T: Choice>(placeholder: &'static str) -> impl IntoView {
    let options = T::ALL
        .iter()
        .map(|choice| view! { <option value=choice.value()>{choice.label()}</option> })
        .collect_view();

    view! {
        <option value="">{placeholder}</option>
        {options}
    }
}

/// Form value of an optional choice, `""` when unset.
pub fn choice_value<T: Choice>(choice: Option<T>) -> &'static str {
    choice.map(|c| c.value()).unwrap_or("")
}
