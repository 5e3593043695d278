use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_chrome::{FeatureCard, Footer, PageHeader, RevealCard};

struct Milestone {
    year: u16,
    title: &'static str,
    text: &'static str,
}

const JOURNEY: &[Milestone] = &[
    Milestone {
        year: 2020,
        title: "The Vision Begins",
        text: "Recognizing the gap in support for neurodivergent learners, our founders began developing the concept of heart-focused education.",
    },
    Milestone {
        year: 2021,
        title: "Community Building",
        text: "We started building relationships with families, educators, and support professionals who shared our vision.",
    },
    Milestone {
        year: 2022,
        title: "First Programs Launch",
        text: "Our initial pilot programs began, serving a small group of learners while we refined our approaches.",
    },
];

const APPROACH: &[(&str, &str)] = &[
    (
        "Assessment & Understanding",
        "We take time to truly understand each learner's strengths and interests through relationship-based assessment.",
    ),
    (
        "Personalized Planning",
        "We develop individualized plans that build on strengths while addressing goals.",
    ),
    (
        "Relationship Building",
        "Strong, trusting relationships with staff and peers form the foundation for learning.",
    ),
];

#[component]
pub fn OurStoryPage() -> impl IntoView {
    view! {
        <div class="page our-story">
            <PageHeader
                title="Our Story"
                subtitle="Born from a vision to create inclusive spaces where neurodivergent learners can thrive, Malaika House represents hope, community, and the power of heart-centered education"
            />

            <section class="mission-section">
                <div class="container two-column">
                    <div class="mission-text">
                        <h2>"Our Mission"</h2>
                        <p>
                            "At Malaika House, we believe that every child deserves an education that honors their unique way of learning and being in the world. Our mission is to create inclusive, supportive environments where neurodivergent learners can discover their strengths, build confidence, and develop the skills they need to thrive."
                        </p>
                        <p>
                            "We focus on the heart: not just academic achievement, but emotional intelligence, empathy, and the profound connections that make learning meaningful."
                        </p>
                    </div>
                    <FeatureCard
                        icon="♥"
                        title="Heart-Focused Learning"
                        text="We put relationships, understanding, and emotional well-being at the center of everything we do."
                    />
                </div>
            </section>

            <section class="values-section">
                <div class="container">
                    <h2 class="section-title">"Our Core Values"</h2>
                    <p class="section-subtitle">
                        "These principles guide every decision we make and every interaction we have with learners, families, and our community"
                    </p>
                    <div class="features-grid">
                        <FeatureCard
                            icon="🌈"
                            title="Celebrate Diversity"
                            text="We embrace neurodiversity as a natural and valuable part of human experience."
                        />
                        <FeatureCard
                            icon="🤝"
                            title="Build Connection"
                            text="Meaningful relationships are the foundation of learning."
                        />
                        <FeatureCard
                            icon="🌱"
                            title="Foster Growth"
                            text="We believe in the potential of every learner and create environments that nurture growth."
                        />
                    </div>
                </div>
            </section>

            <section class="journey-section">
                <div class="container">
                    <h2 class="section-title">"Our Journey"</h2>
                    <p class="section-subtitle">"The evolution of Malaika House from vision to thriving community"</p>
                    <div class="timeline">
                        {JOURNEY
                            .iter()
                            .map(|m| {
                                view! {
                                    <RevealCard class="timeline-item">
                                        <div class="timeline-year">{m.year}</div>
                                        <h4>{m.title}</h4>
                                        <p>{m.text}</p>
                                    </RevealCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="approach-section">
                <div class="container">
                    <h2 class="section-title">"Our Approach"</h2>
                    <div class="features-grid">
                        {APPROACH
                            .iter()
                            .enumerate()
                            .map(|(i, (title, text))| {
                                view! {
                                    <RevealCard class="approach-item">
                                        <div class="approach-number">{i + 1}</div>
                                        <h4>{*title}</h4>
                                        <p>{*text}</p>
                                    </RevealCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="team-preview">
                <div class="container">
                    <h2>"Meet Our Team"</h2>
                    <p>
                        "Our passionate, dedicated staff bring together expertise in education, psychology, therapy, and family support."
                    </p>
                    <A href="/staff-supporters" attr:class="cta-btn cta-primary">"Meet Our Staff & Supporters"</A>
                </div>
            </section>

            <Footer tagline="Building inclusive futures through heart-focused education."/>
        </div>
    }
}
