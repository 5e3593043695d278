use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_chrome::{FeatureCard, Footer, PageHeader, RevealCard};

struct ClubCategory {
    title: &'static str,
    summary: &'static str,
    clubs: &'static [(&'static str, &'static str)],
}

const CLUB_CATEGORIES: &[ClubCategory] = &[
    ClubCategory {
        title: "Internal Clubs",
        summary: "Clubs managed directly by Malaika House staff, designed to align with our heart-focused approach",
        clubs: &[
            ("Dungeons & Dragons Club", "Fantasy role-playing that builds creativity and social skills"),
            ("Adventure Sessions", "Outdoor and experiential learning opportunities"),
            ("Curiosity Club", "Science, exploration, and discovery-based activities"),
            ("Morning Circle Time", "Daily community building and emotional check-ins"),
        ],
    },
    ClubCategory {
        title: "External Partner Clubs",
        summary: "Collaborations with trusted partner organizations to expand opportunities for our learners",
        clubs: &[
            ("Square Peg Kids Club", "Specialized programs for neurodivergent children"),
            ("Square Peg Teens Club", "Teen-focused activities and social development"),
            ("Adult Square Pegs Club", "Support and activities for neurodivergent adults"),
            ("Quicket Club Partnership", "Special events and ticketed activities"),
        ],
    },
    ClubCategory {
        title: "Team WIL Integration",
        summary: "Connecting with broader community initiatives and learning opportunities",
        clubs: &[
            ("Neurodiversity Training", "Educational workshops and awareness sessions"),
            ("Community Fundraising", "BackaBuddy and other fundraising initiatives"),
            ("Google Docs Integration", "Digital collaboration and documentation"),
            ("Forms Management", "Streamlined registration and communication"),
        ],
    },
];

struct SessionOption {
    title: &'static str,
    summary: &'static str,
    perks: [&'static str; 4],
}

const SESSIONS: &[SessionOption] = &[
    SessionOption {
        title: "Solo Entry Sessions",
        summary: "Individual focused sessions for personalized attention and support",
        perks: [
            "One-on-one attention",
            "Customized pace and approach",
            "Flexible scheduling",
            "Progress tracking",
        ],
    },
    SessionOption {
        title: "Party for Two",
        summary: "Paired learning sessions that encourage peer interaction and collaborative skills",
        perks: [
            "Social skill development",
            "Peer learning opportunities",
            "Shared experiences",
            "Friendship building",
        ],
    },
    SessionOption {
        title: "2025 Session Pass",
        summary: "Full-term access providing comprehensive support throughout the school term",
        perks: [
            "July 22 - October term",
            "Multiple weekly sessions",
            "Priority booking",
            "Family support included",
        ],
    },
];

#[component]
pub fn WhatWeOfferPage() -> impl IntoView {
    view! {
        <div class="page what-we-offer">
            <PageHeader
                title="What We Offer"
                subtitle="Comprehensive programs and services designed to support neurodivergent learners and their families through every step of their journey"
            />

            <section class="heart-program-section">
                <div class="container">
                    <h2 class="section-title">"Heart Program - Exclusive Membership"</h2>
                    <p class="section-subtitle">
                        "Our flagship program provides comprehensive support for neurodivergent learners through personalized approaches and inclusive community building"
                    </p>
                    <div class="features-grid features-grid--four">
                        <FeatureCard
                            icon="👥"
                            title="Everyone & Anyone"
                            text="Open enrollment sessions welcoming all learners regardless of background or ability"
                        />
                        <FeatureCard
                            icon="🌅"
                            title="Morning Sessions"
                            text="Specialized morning programs designed specifically for our student members"
                        />
                        <FeatureCard
                            icon="📋"
                            title="Individual Plans"
                            text="Customized learning and support plans tailored to each child's unique needs"
                        />
                        <FeatureCard
                            icon="👨‍👩‍👧‍👦"
                            title="Family Support"
                            text="Resources and guidance for families navigating neurodivergent learning"
                        />
                    </div>
                </div>
            </section>

            <section class="clubs-section">
                <div class="container">
                    <h2 class="section-title">"Club Programs"</h2>
                    <p class="section-subtitle">
                        "Diverse activities that foster social connections, explore interests, and build confidence in supportive environments"
                    </p>
                    <div class="clubs-grid">
                        {CLUB_CATEGORIES
                            .iter()
                            .map(|category| {
                                view! {
                                    <RevealCard class="club-category">
                                        <h3>{category.title}</h3>
                                        <p class="category-description">{category.summary}</p>
                                        <ul class="club-list">
                                            {category
                                                .clubs
                                                .iter()
                                                .map(|(name, description)| {
                                                    view! {
                                                        <li>
                                                            <div class="club-name">{*name}</div>
                                                            <div class="club-description">{*description}</div>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </RevealCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="sessions-section">
                <div class="container">
                    <h2 class="section-title">"Malaika House Sessions"</h2>
                    <p class="section-subtitle">
                        "Flexible session options designed to meet diverse scheduling needs and learning preferences"
                    </p>
                    <div class="sessions-grid">
                        {SESSIONS
                            .iter()
                            .map(|session| {
                                view! {
                                    <RevealCard class="session-card">
                                        <h4>{session.title}</h4>
                                        <p class="session-description">{session.summary}</p>
                                        <ul class="session-features">
                                            {session.perks.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                                        </ul>
                                    </RevealCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="cta-section">
                <div class="container">
                    <h2>"Ready to Join Our Community?"</h2>
                    <p>
                        "Take the first step towards a supportive, inclusive learning environment where your child can thrive. We're here to answer your questions and help you find the right program fit."
                    </p>
                    <div class="cta-buttons">
                        <A href="/book-a-visit" attr:class="cta-btn cta-primary">"Book a Visit"</A>
                        <A href="/contact-us" attr:class="cta-btn cta-secondary">"Get Information"</A>
                    </div>
                </div>
            </section>

            <Footer tagline="Empowering neurodivergent learners with heart-focused programs."/>
        </div>
    }
}
