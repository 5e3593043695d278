use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::accessibility_bar::provide_accessibility;
use crate::components::navbar::Navbar;
use crate::site::SITE_NAME;
use crate::views::{
    BookAVisitPage, ContactUsPage, HomePage, LoginPage, NotFoundPage, OurStoryPage,
    ParentInformationPage, StaffSupportersPage, WhatWeOfferPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let accessibility = provide_accessibility();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/malaika-web.css"/>
        <Title text=format!("{} | Heart-Focused Learning & Support", SITE_NAME)/>

        <ConfigProvider>
            <Router>
                <Navbar/>
                <main
                    class:high-contrast=move || accessibility.with(|a| a.high_contrast)
                    style=move || accessibility.with(|a| a.style())
                >
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("home") view=HomePage/>
                        <Route path=StaticSegment("our-story") view=OurStoryPage/>
                        <Route path=StaticSegment("what-we-offer") view=WhatWeOfferPage/>
                        <Route path=StaticSegment("staff-supporters") view=StaffSupportersPage/>
                        <Route path=StaticSegment("parent-information") view=ParentInformationPage/>
                        <Route path=StaticSegment("book-a-visit") view=BookAVisitPage/>
                        <Route path=StaticSegment("contact-us") view=ContactUsPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
