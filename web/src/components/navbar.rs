use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::site::{is_active_link, LOGO_NAME_URL, NAV_LINKS, SITE_NAME};

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        <img src=LOGO_NAME_URL alt=format!("{} Logo", SITE_NAME)/>
                    </A>
                </div>

                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <a
                                    href=href
                                    class="navbar__link"
                                    class:navbar__link--active=move || {
                                        is_active_link(href, &location.pathname.get())
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <A href="/login" attr:class="navbar__link navbar__link--cta">
                        "Login"
                    </A>
                </div>
            </div>
        </nav>
    }
}
