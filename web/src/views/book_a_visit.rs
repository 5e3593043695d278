use leptos::logging::{log, warn};
use leptos::prelude::*;
use shared_types::{Choice, ProgramInterest, VisitType};
use thaw::*;

use crate::booking::calendar::local_today;
use crate::booking::{
    begin_submit, finish_submit, BookingForm, BookingState, SubmitStatus, BOOKING_SUBMIT_DELAY,
};
use crate::components::age_group_tags::AgeGroupTags;
use crate::components::booking_calendar::BookingCalendar;
use crate::components::choice_options::{choice_options, choice_value};
use crate::components::page_chrome::{Footer, PageHeader, RevealCard};
use crate::components::status_message::SubmitStatusMessage;
use crate::site::{ADDRESS_LINES, OFFICE_HOURS, PHONE_DISPLAY, VISITS_EMAIL};
use crate::utils::scroll::scroll_to_id;
use crate::utils::timer::OneShotTimer;

const BOOKING_FORM_ID: &str = "booking-form";

#[component]
pub fn BookAVisitPage() -> impl IntoView {
    let state = RwSignal::new(BookingState::new(local_today()));
    // The grid depends on "today", so it waits for the browser's clock
    // instead of rendering the server's.
    let calendar_ready = RwSignal::new(false);
    Effect::new(move |_| {
        state.update(|s| s.set_today(local_today()));
        calendar_ready.set(true);
    });

    // Free-text form fields
    let parent_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let child_name = RwSignal::new(String::new());
    let child_age = RwSignal::new(String::new());
    let program_interest = RwSignal::new(None::<ProgramInterest>);
    let special_needs = RwSignal::new(String::new());
    let questions = RwSignal::new(String::new());

    let status = RwSignal::new(SubmitStatus::Idle);
    let submit_timer = OneShotTimer::new();

    let is_submitting = Memo::new(move |_| status.with(SubmitStatus::is_submitting));

    let choose_visit_type = move |visit_type: VisitType| {
        state.update(|s| s.selection.visit_type = Some(visit_type));
        scroll_to_id(BOOKING_FORM_ID);
    };

    let clear_fields = move || {
        for field in [
            parent_name,
            email,
            phone,
            child_name,
            child_age,
            special_needs,
            questions,
        ] {
            field.set(String::new());
        }
        program_interest.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = BookingForm {
            parent_name: parent_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            child_name: child_name.get_untracked(),
            child_age: child_age.get_untracked(),
            program_interest: program_interest.get_untracked(),
            special_needs: special_needs.get_untracked(),
            questions: questions.get_untracked(),
        };

        let selection = state.with_untracked(|s| s.selection);
        let Some(Ok(request)) = status.try_update(|st| begin_submit(st, &form, &selection)) else {
            return;
        };

        let scheduled = submit_timer.start(BOOKING_SUBMIT_DELAY, move || {
            match serde_json::to_string(&request) {
                Ok(payload) => log!("visit booking simulated: {}", payload),
                Err(e) => warn!("failed to serialize visit request: {}", e),
            }
            clear_fields();
            let mut next = status.get_untracked();
            state.update(|s| finish_submit(s, &mut next));
            status.set(next);
        });
        if scheduled.is_err() {
            status.update(SubmitStatus::abandon);
        }
    };

    view! {
        <div class="page book-a-visit">
            <PageHeader
                title="Book a Visit"
                subtitle="Schedule your visit to experience Malaika House firsthand and discover how we can support your child's unique learning journey"
            />

            <section class="booking-options">
                <div class="container">
                    <h2>"Visit Options"</h2>
                    <p class="section-subtitle">"Choose the format that works best for your family"</p>

                    <div class="options-grid">
                        <RevealCard class="option-card">
                            <div class="option-header on-site">
                                <div class="option-icon">"🏠"</div>
                                <div>
                                    <div class="option-title">"On-Site Visit"</div>
                                    <div class="option-subtitle">"Experience our facility in person"</div>
                                </div>
                            </div>
                            <ul class="option-features">
                                <li>"Tour our learning spaces"</li>
                                <li>"Meet our team in person"</li>
                                <li>"Observe programs in action"</li>
                                <li>"Child can experience environment"</li>
                                <li>"Hands-on activity demonstration"</li>
                                <li>"Face-to-face consultation"</li>
                            </ul>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| choose_visit_type(VisitType::OnSite)
                            >
                                "Book On-Site Visit"
                            </Button>
                        </RevealCard>

                        <RevealCard class="option-card">
                            <div class="option-header">
                                <div class="option-icon">"💻"</div>
                                <div>
                                    <div class="option-title">"Online Consultation"</div>
                                    <div class="option-subtitle">"Connect from the comfort of home"</div>
                                </div>
                            </div>
                            <ul class="option-features">
                                <li>"Virtual facility tour"</li>
                                <li>"Video consultation with staff"</li>
                                <li>"Program overview presentation"</li>
                                <li>"Q&A session"</li>
                                <li>"Flexible scheduling"</li>
                                <li>"Follow-up resources provided"</li>
                            </ul>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| choose_visit_type(VisitType::Online)
                            >
                                "Book Online Visit"
                            </Button>
                        </RevealCard>
                    </div>
                </div>
            </section>

            <section id=BOOKING_FORM_ID class="booking-form-section">
                <div class="container form-container">
                    <h2>"Visit Booking Form"</h2>

                    <form id="visitBookingForm" on:submit=on_submit>
                        <div class="form-section">
                            <h3>"Visit Type"</h3>
                            <div class="form-group">
                                <label for="visitType">"Visit Type *"</label>
                                <select
                                    id="visitType"
                                    name="visitType"
                                    prop:value=move || choice_value(state.with(|s| s.selection.visit_type))
                                    on:change=move |ev| {
                                        let visit_type = VisitType::from_value(&event_target_value(&ev));
                                        state.update(|s| s.selection.visit_type = visit_type);
                                    }
                                >
                                    {choice_options::<VisitType>("Select visit type...")}
                                </select>
                            </div>
                        </div>

                        <div class="form-section">
                            <h3>"Visit Preferences"</h3>
                            <div class="filters">
                                <div class="filter-group">
                                    <label>"Age Group"</label>
                                    <AgeGroupTags state=state/>
                                </div>
                                <div class="filter-group">
                                    <label for="programInterest">"Program Interest"</label>
                                    <select
                                        id="programInterest"
                                        name="programInterest"
                                        prop:value=move || choice_value(program_interest.get())
                                        on:change=move |ev| {
                                            program_interest.set(ProgramInterest::from_value(&event_target_value(&ev)));
                                        }
                                    >
                                        {choice_options::<ProgramInterest>("Select program...")}
                                    </select>
                                </div>
                            </div>
                        </div>

                        <div class="form-section">
                            <h3>"Contact Information"</h3>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="parentName">"Parent/Guardian Name *"</label>
                                    <Input id="parentName" value=parent_name/>
                                </div>
                                <div class="form-group">
                                    <label for="email">"Email Address *"</label>
                                    <Input id="email" input_type=InputType::Email value=email/>
                                </div>
                            </div>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="phone">"Phone Number *"</label>
                                    <Input id="phone" input_type=InputType::Tel value=phone/>
                                </div>
                                <div class="form-group">
                                    <label for="childName">"Child's Name"</label>
                                    <Input id="childName" value=child_name/>
                                </div>
                            </div>
                            <div class="form-group">
                                <label for="childAge">"Child's Age"</label>
                                <Input id="childAge" value=child_age/>
                            </div>
                        </div>

                        <div class="form-section">
                            <h3>"Schedule Your Visit"</h3>
                            <Show
                                when=move || calendar_ready.get()
                                fallback=|| view! { <p class="no-selection">"Loading calendar..."</p> }
                            >
                                <BookingCalendar state=state/>
                            </Show>
                        </div>

                        <div class="form-section">
                            <h3>"Additional Information"</h3>
                            <div class="form-group">
                                <label>"Special Needs or Accommodations"</label>
                                <Textarea
                                    placeholder="Please let us know about any specific needs, interests, or concerns we should be aware of..."
                                    value=special_needs
                                />
                            </div>
                            <div class="form-group">
                                <label>"Questions or Comments"</label>
                                <Textarea
                                    placeholder="Any questions you'd like us to address during your visit..."
                                    value=questions
                                />
                            </div>
                        </div>

                        <div class="submit-section">
                            <SubmitStatusMessage status=status/>
                            <Button
                                class="submit-btn"
                                appearance=ButtonAppearance::Primary
                                button_type=ButtonType::Submit
                                loading=Signal::from(is_submitting)
                                disabled=Signal::from(is_submitting)
                            >
                                {move || if is_submitting.get() { "Scheduling..." } else { "Schedule Visit" }}
                            </Button>
                            <p class="submit-note">
                                "You will receive a confirmation email with visit details and any preparation materials."
                            </p>
                        </div>
                    </form>
                </div>
            </section>

            <section class="contact-info">
                <div class="container">
                    <h2>"Need Help Booking?"</h2>
                    <p class="section-subtitle">"Our team is here to help you schedule the perfect visit for your family"</p>

                    <div class="contact-grid">
                        <RevealCard class="contact-card">
                            <div class="contact-icon">"📞"</div>
                            <h4>"Call Us"</h4>
                            <p>{PHONE_DISPLAY}<br/>{OFFICE_HOURS}</p>
                        </RevealCard>
                        <RevealCard class="contact-card">
                            <div class="contact-icon">"✉️"</div>
                            <h4>"Email Us"</h4>
                            <p>{VISITS_EMAIL}<br/>"We respond within 24 hours"</p>
                        </RevealCard>
                        <RevealCard class="contact-card">
                            <div class="contact-icon">"📍"</div>
                            <h4>"Visit Us"</h4>
                            <p>{ADDRESS_LINES[0]}<br/>"Cape Town, South Africa"</p>
                        </RevealCard>
                    </div>
                </div>
            </section>

            <Footer tagline="We look forward to meeting you and your family."/>
        </div>
    }
}
