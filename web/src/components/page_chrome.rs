use leptos::prelude::*;

use crate::site::SITE_NAME;
use crate::utils::scroll::{anchor_target, scroll_to_id};

/// Coloured banner at the top of every content page.
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-header__title">{title}</h1>
                <p class="page-header__subtitle">{subtitle}</p>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(tagline: &'static str) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>{format!("© 2025 {}. All rights reserved. | {}", SITE_NAME, tagline)}</p>
            </div>
        </footer>
    }
}

/// Card that fades in once it has been mounted in the browser.
///
/// Starts hidden during SSR and hydration, then flips to visible on the
/// first client-side effect run.
#[component]
pub fn RevealCard(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let revealed = RwSignal::new(false);

    Effect::new(move |_| {
        revealed.set(true);
    });

    view! {
        <div class=format!("reveal-card {}", class) class:reveal-card--visible=move || revealed.get()>
            {children()}
        </div>
    }
}

/// Icon, heading and a short paragraph. Used by most static sections.
#[component]
pub fn FeatureCard(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <RevealCard class="feature-card">
            <div class="feature-card__icon">{icon}</div>
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__text">{text}</p>
        </RevealCard>
    }
}

/// In-page `#anchor` link that scrolls smoothly instead of jumping.
#[component]
pub fn SectionLink(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                if let Some(id) = anchor_target(href) {
                    ev.prevent_default();
                    scroll_to_id(id);
                }
            }
        >
            {children()}
        </a>
    }
}
