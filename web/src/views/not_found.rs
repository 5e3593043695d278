use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::site::INFO_EMAIL;

/// 404 page with links back into the site.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    let navigate = use_navigate();
    let destinations = [
        ("/", "🏠 Go Home", "not-found__btn not-found__btn--primary"),
        ("/book-a-visit", "📅 Book a Visit", "not-found__btn not-found__btn--accent"),
        ("/what-we-offer", "🌈 Our Programs", "not-found__btn not-found__btn--outline"),
        ("/contact-us", "✉️ Contact Us", "not-found__btn not-found__btn--outline"),
    ];

    view! {
        <div class="not-found">
            <div class="not-found__inner">
                <div class="not-found__code">"404"</div>

                <div class="not-found__card">
                    <h1>"Page Not Found"</h1>
                    <p>
                        "We couldn't find the page you were looking for. It may have moved, or the link might be out of date."
                    </p>

                    <div class="not-found__actions">
                        {destinations
                            .into_iter()
                            .map(|(path, label, class)| {
                                let navigate = navigate.clone();
                                view! {
                                    <button class=class on:click=move |_| navigate(path, Default::default())>
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="not-found__help">
                    <p>"Still can't find what you're looking for?"</p>
                    <a href=format!("mailto:{}", INFO_EMAIL)>"📧 Email Us"</a>
                    <span>"|"</span>
                    <button
                        class="not-found__back"
                        on:click=move |_| {
                            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                                let _ = history.back();
                            }
                        }
                    >
                        "⬅️ Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
