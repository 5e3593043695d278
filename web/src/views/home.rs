use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::accessibility_bar::AccessibilityBar;
use crate::components::page_chrome::{FeatureCard, Footer, RevealCard, SectionLink};

struct Program {
    id: &'static str,
    title: &'static str,
    kind: &'static str,
    summary: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
}

const PROGRAMS: &[Program] = &[
    Program {
        id: "heart-program",
        title: "Heart Program",
        kind: "Exclusive Membership Program",
        summary: "Our flagship program designed for neurodivergent learners, offering specialized support and resources.",
        features: &[
            "Everyone & Anyone sessions",
            "Malaika House Morning Sessions",
            "Personalized learning plans",
            "Family support resources",
            "Progress tracking and reporting",
        ],
        cta: "Learn More",
    },
    Program {
        id: "malaika-house",
        title: "Club Programs",
        kind: "Internal & External Partnerships",
        summary: "Diverse club activities that build social skills, explore interests, and create community connections.",
        features: &[
            "Dungeons & Dragons Club",
            "Adventure Sessions",
            "Curiosity Club",
            "Square Peg Clubs",
            "Quicket Club Partnership",
        ],
        cta: "Explore Clubs",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home">
            <AccessibilityBar/>

            <section id="home" class="hero">
                <div class="container hero__content">
                    <h1>"Heart-Focused Learning & Support"</h1>
                    <p>
                        "Empowering neurodivergent learners through inclusive, accessible programs designed to nurture every child's unique potential"
                    </p>
                    <div class="cta-buttons">
                        <SectionLink href="#heart-program" class="cta-btn cta-primary">"Join Heart Program"</SectionLink>
                        <SectionLink href="#malaika-house" class="cta-btn cta-secondary">"Explore Malaika House"</SectionLink>
                    </div>
                </div>
            </section>

            <section class="about-section">
                <div class="container">
                    <h2 class="section-title">"About Malaika House"</h2>
                    <p class="section-subtitle">
                        "We believe every child deserves support that honors their unique learning style and celebrates their individual strengths"
                    </p>
                    <div class="features-grid">
                        <FeatureCard
                            icon="♥"
                            title="Heart-Centered Approach"
                            text="Our programs focus on emotional intelligence, empathy, and building meaningful connections while supporting academic growth."
                        />
                        <FeatureCard
                            icon="🌈"
                            title="Inclusive Environment"
                            text="We celebrate neurodiversity and create spaces where every learner feels valued, understood, and supported."
                        />
                        <FeatureCard
                            icon="🎯"
                            title="Personalized Learning"
                            text="Tailored programs that adapt to each child's unique needs, interests, and learning preferences."
                        />
                    </div>
                </div>
            </section>

            <section class="programs-section">
                <div class="container">
                    <h2 class="section-title">"Our Programs"</h2>
                    <p class="section-subtitle">
                        "Comprehensive support through specialized programs and inclusive club activities"
                    </p>
                    <div class="programs-grid">
                        {PROGRAMS
                            .iter()
                            .map(|program| {
                                view! {
                                    <div id=program.id>
                                        <RevealCard class="program-card">
                                            <div class="program-header">
                                                <h3>{program.title}</h3>
                                                <p>{program.kind}</p>
                                            </div>
                                            <div class="program-content">
                                                <p>{program.summary}</p>
                                                <ul class="program-features">
                                                    {program.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                                </ul>
                                                <A href="/what-we-offer" attr:class="program-btn">{program.cta}</A>
                                            </div>
                                        </RevealCard>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="contact-section">
                <div class="container">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="section-subtitle">"Ready to start your journey with Malaika House? We're here to help."</p>
                    <div class="contact-grid">
                        <RevealCard class="contact-card">
                            <h4>"Visit Us"</h4>
                            <p>
                                "Schedule a visit to see our facilities and meet our team. We offer both on-site and online consultation options."
                            </p>
                            <A href="/book-a-visit">"Book a Visit"</A>
                        </RevealCard>
                        <RevealCard class="contact-card">
                            <h4>"Get Information"</h4>
                            <p>
                                "Have questions about our programs, fees, or application process? Contact us for detailed information."
                            </p>
                            <A href="/contact-us">"Contact Us"</A>
                        </RevealCard>
                        <RevealCard class="contact-card">
                            <h4>"Join Our Community"</h4>
                            <p>
                                "Subscribe to our newsletter for updates on events, new programs, and success stories from our community."
                            </p>
                        </RevealCard>
                    </div>
                </div>
            </section>

            <Footer tagline="Heart-focused learning for every child."/>
        </div>
    }
}
