use leptos::logging::log;
use leptos::prelude::*;
use shared_types::{Choice, InquiryType};
use thaw::*;

use crate::booking::SubmitStatus;
use crate::components::choice_options::{choice_options, choice_value};
use crate::components::faq_accordion::{FaqAccordion, FaqEntry};
use crate::components::page_chrome::{Footer, PageHeader, RevealCard};
use crate::components::status_message::SubmitStatusMessage;
use crate::contact::{ContactForm, CONTACT_SUBMIT_DELAY, CONTACT_SUCCESS_MESSAGE};
use crate::site::{ADDRESS_LINES, FAX_DISPLAY, INFO_EMAIL, PHONE_DISPLAY, PHONE_HREF};
use crate::utils::timer::OneShotTimer;

const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I know if Malaika House is right for my child?",
        answer: "The best way is to book a visit! We encourage families to experience our environment firsthand. Our team will discuss your child's needs and help determine if our approach aligns with your goals.",
    },
    FaqEntry {
        question: "Do you offer financial assistance or payment plans?",
        answer: "Yes, we offer sliding scale fees and payment plans based on family circumstances. Please contact us confidentially to discuss options.",
    },
    FaqEntry {
        question: "Can a missed session be moved?",
        answer: "Cancellations made with 24 hours' notice can be transferred to a new session. Speak to our team and we will help you reschedule.",
    },
    FaqEntry {
        question: "Do you offer online consultations?",
        answer: "Yes. When you book a visit you can choose an online consultation instead of coming to our facility in person.",
    },
];

#[component]
pub fn ContactUsPage() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let inquiry_type = RwSignal::new(None::<InquiryType>);
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let status = RwSignal::new(SubmitStatus::Idle);
    let send_timer = OneShotTimer::new();
    let is_sending = Memo::new(move |_| status.with(SubmitStatus::is_submitting));

    let reset_form = move || {
        for field in [first_name, last_name, email, phone, subject, message] {
            field.set(String::new());
        }
        inquiry_type.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_sending.get_untracked() {
            return;
        }

        let form = ContactForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            inquiry_type: inquiry_type.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(err) = form.validate() {
            status.set(SubmitStatus::failed(err));
            return;
        }

        status.set(SubmitStatus::Submitting);
        let scheduled = send_timer.start(CONTACT_SUBMIT_DELAY, move || {
            log!(
                "contact message simulated: {} ({})",
                form.subject.trim(),
                choice_value(form.inquiry_type)
            );
            reset_form();
            status.set(SubmitStatus::Succeeded(CONTACT_SUCCESS_MESSAGE.to_string()));
        });
        if scheduled.is_err() {
            status.update(SubmitStatus::abandon);
        }
    };

    view! {
        <div class="page contact-us">
            <PageHeader
                title="Contact Us"
                subtitle="We're here to support you and answer any questions about our programs, services, or how Malaika House can help your family"
            />

            <section class="contact-methods">
                <div class="container methods-grid">
                    <RevealCard class="method-card">
                        <div class="method-icon">"📞"</div>
                        <h3>"Phone Support"</h3>
                        <p class="method-details">"Speak directly with our team for immediate assistance and personalized guidance"</p>
                        <div class="method-info"><strong>"General Inquiries:"</strong><br/>{PHONE_DISPLAY}</div>
                        <a href=PHONE_HREF class="method-cta">"Call Now"</a>
                    </RevealCard>
                    <RevealCard class="method-card">
                        <div class="method-icon">"✉️"</div>
                        <h3>"Email Support"</h3>
                        <p class="method-details">"Send us detailed questions and receive comprehensive responses within 24 hours"</p>
                        <div class="method-info"><strong>"General Information:"</strong><br/>{INFO_EMAIL}</div>
                        <a href=format!("mailto:{}", INFO_EMAIL) class="method-cta">"Send Email"</a>
                    </RevealCard>
                    <RevealCard class="method-card">
                        <div class="method-icon">"📠"</div>
                        <h3>"FAX Services"</h3>
                        <p class="method-details">"For official documents, forms, and confidential communications"</p>
                        <div class="method-info">"FAX: " {FAX_DISPLAY}</div>
                    </RevealCard>
                </div>
            </section>

            <section class="contact-form-section">
                <div class="container form-container">
                    <h2>"Send Us a Message"</h2>
                    <p class="section-subtitle">
                        "Have a question or need more information? Fill out the form below and we'll get back to you as soon as possible"
                    </p>

                    <form id="contactForm" on:submit=on_submit>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="firstName">"First Name *"</label>
                                <Input id="firstName" value=first_name/>
                            </div>
                            <div class="form-group">
                                <label for="lastName">"Last Name *"</label>
                                <Input id="lastName" value=last_name/>
                            </div>
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="contactEmail">"Email Address *"</label>
                                <Input id="contactEmail" input_type=InputType::Email value=email/>
                            </div>
                            <div class="form-group">
                                <label for="contactPhone">"Phone Number"</label>
                                <Input id="contactPhone" input_type=InputType::Tel value=phone/>
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="inquiryType">"Inquiry Type"</label>
                            <select
                                id="inquiryType"
                                prop:value=move || choice_value(inquiry_type.get())
                                on:change=move |ev| {
                                    inquiry_type.set(InquiryType::from_value(&event_target_value(&ev)));
                                }
                            >
                                {choice_options::<InquiryType>("Select inquiry type...")}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="subject">"Subject *"</label>
                            <Input id="subject" placeholder="Brief description of your inquiry" value=subject/>
                        </div>
                        <div class="form-group">
                            <label>"Message *"</label>
                            <Textarea placeholder="Please provide details about your inquiry..." value=message/>
                        </div>

                        <SubmitStatusMessage status=status/>
                        <Button
                            class="submit-btn"
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            loading=Signal::from(is_sending)
                            disabled=Signal::from(is_sending)
                        >
                            {move || if is_sending.get() { "Sending..." } else { "Send Message" }}
                        </Button>
                    </form>
                </div>
            </section>

            <section class="faq-section">
                <div class="container">
                    <h2>"Frequently Asked Questions"</h2>
                    <p class="section-subtitle">"Quick answers to common questions about Malaika House and our services"</p>
                    <FaqAccordion entries=FAQS/>
                </div>
            </section>

            <section class="location-section">
                <div class="container location-grid">
                    <div>
                        <h2>"Visit Our Location"</h2>
                        <p>
                            <strong>"Address:"</strong>
                            {ADDRESS_LINES
                                .iter()
                                .map(|line| view! { <br/>{*line} })
                                .collect_view()}
                        </p>
                        <p>
                            <strong>"Parking:"</strong> " On-site parking available" <br/>
                            <strong>"Accessibility:"</strong> " Wheelchair accessible facility"
                        </p>
                    </div>
                    <div class="map-placeholder">
                        <div class="map-placeholder__icon">"🗺️"</div>
                        <p>"Observatory, Cape Town"</p>
                    </div>
                </div>
            </section>

            <section class="emergency-section">
                <div class="container emergency-content">
                    <h3>"Emergency or Urgent Support"</h3>
                    <p>
                        "If you need immediate assistance or have an urgent concern about your child's well-being, please don't hesitate to contact us."
                    </p>
                    <div class="emergency-number">{PHONE_DISPLAY}</div>
                    <p class="emergency-note">
                        "For after-hours emergencies, leave a message and we will respond as quickly as possible. For immediate crisis support, please contact local emergency services."
                    </p>
                </div>
            </section>

            <Footer tagline="We're here to support you and your family every step of the way."/>
        </div>
    }
}
