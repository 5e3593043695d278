use leptos::logging::log;
use leptos::prelude::*;
use shared_types::{Choice, DashboardType};
use thaw::*;

use crate::components::choice_options::{choice_options, choice_value};
use crate::components::status_message::InfoMessage;
use crate::login::{
    dashboard_summary, LoginForm, DEMO_EMAIL, DEMO_PASSWORD, DEMO_REVEAL_DELAY, DEMO_VISIBLE_FOR,
    LOGIN_DELAY,
};
use crate::site::{LOGO_MAIN_URL, SITE_NAME, SUPPORT_EMAIL};
use crate::utils::timer::OneShotTimer;

#[component]
pub fn LoginPage() -> impl IntoView {
    let dashboard = RwSignal::new(None::<DashboardType>);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_visible = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);
    let show_demo = RwSignal::new(false);

    let login_timer = OneShotTimer::new();
    let demo_reveal_timer = OneShotTimer::new();
    let demo_hide_timer = OneShotTimer::new();

    let form = Memo::new(move |_| LoginForm {
        dashboard: dashboard.get(),
        email: email.get(),
        password: password.get(),
    });

    let is_button_disabled = Memo::new(move |_| !form.with(LoginForm::is_valid) || loading.get());

    // Demo credentials pop up shortly after the page opens, then go away.
    Effect::new(move |_| {
        // Only the demo banner waits on these.
        let _ = demo_reveal_timer.start(DEMO_REVEAL_DELAY, move || {
            show_demo.set(true);
            if demo_hide_timer
                .start(DEMO_VISIBLE_FOR, move || show_demo.set(false))
                .is_err()
            {
                show_demo.set(false);
            }
        });
    });

    let submit_login = move || {
        let submitted = form.get_untracked();
        if !submitted.is_valid() || loading.get_untracked() {
            return;
        }
        loading.set(true);
        notice.set(None);

        let scheduled = login_timer.start(LOGIN_DELAY, move || {
            log!("login simulated for {}", choice_value(submitted.dashboard));
            notice.set(Some(submitted.simulation_notice()));
            loading.set(false);
        });
        if scheduled.is_err() {
            loading.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-container">
                <div class="branding-section">
                    <a href="/" class="logo">
                        <img src=LOGO_MAIN_URL alt=format!("{} Logo", SITE_NAME)/>
                    </a>
                    <p class="brand-tagline">
                        "Empowering neurodivergent children and their families through specialized support and community connection"
                    </p>
                    <div class="brand-features">
                        <div class="feature-item"><span class="feature-icon">"🎯"</span>"Heart Program Sessions"</div>
                        <div class="feature-item"><span class="feature-icon">"👥"</span>"Community Support"</div>
                        <div class="feature-item"><span class="feature-icon">"📈"</span>"Progress Tracking"</div>
                        <div class="feature-item"><span class="feature-icon">"🤝"</span>"Partnership Network"</div>
                    </div>
                </div>

                <div class="login-section">
                    <div class="login-header">
                        <h2 class="login-title">"Welcome Back"</h2>
                        <p class="login-subtitle">"Please login below to enter the website"</p>
                    </div>

                    <form class="login-form" on:submit=move |ev| {
                        ev.prevent_default();
                        submit_login();
                    }>
                        <div class="form-group">
                            <label for="dashboardType" class="form-label">"Select Dashboard"</label>
                            <select
                                id="dashboardType"
                                class="form-select"
                                prop:value=move || choice_value(dashboard.get())
                                on:change=move |ev| {
                                    dashboard.set(DashboardType::from_value(&event_target_value(&ev)));
                                }
                            >
                                {choice_options::<DashboardType>("Choose your dashboard type...")}
                            </select>

                            {move || dashboard.get().map(|selected| {
                                let (description, features) = dashboard_summary(selected);
                                view! {
                                    <div class="dashboard-info active">
                                        <div class="dashboard-title">{selected.label()}</div>
                                        <div class="dashboard-description">{description}</div>
                                        <ul class="feature-list">
                                            {features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                        </ul>
                                    </div>
                                }
                            })}
                        </div>

                        <div class="form-group">
                            <label for="loginEmail" class="form-label">"Email Address"</label>
                            <Input
                                id="loginEmail"
                                class="form-input"
                                placeholder="Enter your email address"
                                input_type=InputType::Email
                                value=email
                            />
                        </div>

                        <div class="form-group">
                            <label for="loginPassword" class="form-label">"Password"</label>
                            <div class="password-wrapper">
                                <Input
                                    id="loginPassword"
                                    class="form-input"
                                    placeholder="Enter your password"
                                    input_type=Signal::derive(move || if password_visible.get() { InputType::Text } else { InputType::Password })
                                    value=password
                                />
                                <button
                                    type="button"
                                    class="password-toggle"
                                    on:click=move |_| password_visible.update(|v| *v = !*v)
                                >
                                    {move || if password_visible.get() { "🙈" } else { "👁" }}
                                </button>
                            </div>
                        </div>

                        <InfoMessage message=Signal::from(notice)/>

                        <Button
                            class="login-button"
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            loading=Signal::from(loading)
                            disabled=Signal::from(is_button_disabled)
                        >
                            {move || form.with(|f| f.button_text(loading.get()))}
                        </Button>

                        <div class="forgot-password">
                            <a href="#forgot">"Forgot your password?"</a>
                        </div>
                    </form>

                    <div class="support-info">
                        <div class="support-title">"Need Help?"</div>
                        <div class="support-text">
                            "Contact our support team for assistance with account access or technical issues"
                        </div>
                        <a href=format!("mailto:{}", SUPPORT_EMAIL) class="support-contact">{SUPPORT_EMAIL}</a>
                    </div>
                </div>
            </div>

            <Show when=move || show_demo.get()>
                <div class="demo-info">
                    <strong>"Demo Credentials:"</strong><br/>
                    "Email: " {DEMO_EMAIL}<br/>
                    "Password: " {DEMO_PASSWORD}<br/>
                    <small>"Works with any dashboard type"</small>
                </div>
            </Show>
        </div>
    }
}
