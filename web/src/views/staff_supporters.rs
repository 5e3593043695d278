use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_chrome::{Footer, PageHeader, RevealCard};

struct Leader {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
    strengths: [&'static str; 4],
}

const LEADERS: &[Leader] = &[
    Leader {
        name: "Amarta",
        role: "Co-Founder & Director",
        bio: "Amarta brings years of experience in education and a deep passion for creating inclusive learning environments. Her vision for heart-focused education has been the driving force behind Malaika House's development.",
        strengths: [
            "Educational Leadership Certification",
            "Neurodiversity Training Specialist",
            "Content Management & Curriculum Development",
            "Community Partnership Building",
        ],
    },
    Leader {
        name: "Elria",
        role: "Co-Founder & Creative Director",
        bio: "Elria leads our branding, design, and creative initiatives while also managing content and events. Her artistic vision ensures that every aspect of Malaika House reflects our values and mission.",
        strengths: [
            "Brand Development & Design Leadership",
            "Event Management & Coordination",
            "Creative Content Development",
            "Supporter Relations & Acknowledgments",
        ],
    },
];

struct StaffRole {
    icon: &'static str,
    title: &'static str,
    focus: &'static str,
    bio: &'static str,
    skills: [&'static str; 3],
}

const STAFF: &[StaffRole] = &[
    StaffRole {
        icon: "👨‍🏫",
        title: "Lead Learning Facilitator",
        focus: "Heart Program Specialist",
        bio: "Specialized in neurodivergent learning approaches with extensive experience in personalized education and social-emotional development.",
        skills: ["Autism Support", "ADHD Strategies", "Social Skills"],
    },
    StaffRole {
        icon: "👩‍💼",
        title: "Family Support Coordinator",
        focus: "Parent & Community Liaison",
        bio: "Dedicated to building strong relationships with families and providing resources and guidance throughout the learning journey.",
        skills: ["Family Counseling", "Resource Navigation", "Community Building"],
    },
    StaffRole {
        icon: "👨‍🎨",
        title: "Creative Arts Facilitator",
        focus: "Clubs & Activities Coordinator",
        bio: "Brings creativity and play into learning through art, music, drama, and hands-on activities that engage and inspire.",
        skills: ["Art Therapy", "Music Integration", "Creative Expression"],
    },
    StaffRole {
        icon: "👩‍⚕️",
        title: "Behavioral Support Specialist",
        focus: "Therapeutic Services",
        bio: "Provides behavioral support and therapeutic interventions to help learners develop coping strategies and self-regulation skills.",
        skills: ["Behavioral Analysis", "Self-Regulation", "Therapeutic Support"],
    },
];

/// Partner or sponsor tile. `kind` is empty for partners.
struct Supporter {
    icon: &'static str,
    name: &'static str,
    kind: &'static str,
    text: &'static str,
}

const PARTNERS: &[Supporter] = &[
    Supporter {
        icon: "🧩",
        name: "Square Peg",
        kind: "",
        text: "Partnering to provide specialized programs for kids, teens, and adults in the neurodivergent community.",
    },
    Supporter {
        icon: "🎫",
        name: "Quicket Club",
        kind: "",
        text: "Special events and ticketed activities that provide unique experiences for our learners.",
    },
    Supporter {
        icon: "🤝",
        name: "Team WIL Project",
        kind: "",
        text: "Collaborative initiatives for neurodiversity training, fundraising, and community awareness.",
    },
    Supporter {
        icon: "💰",
        name: "BackaBuddy",
        kind: "",
        text: "Fundraising platform supporting our mission and helping us reach more families in need.",
    },
];

const SPONSORS: &[Supporter] = &[
    Supporter {
        icon: "💼",
        name: "Corporate Sponsor A",
        kind: "Major Sponsor",
        text: "Providing significant funding support for our Heart Program and facility operations.",
    },
    Supporter {
        icon: "🏫",
        name: "Educational Foundation",
        kind: "Grant Provider",
        text: "Supporting our research and development of innovative neurodivergent learning approaches.",
    },
    Supporter {
        icon: "❤️",
        name: "Community Champions",
        kind: "Individual Donors",
        text: "Dedicated individuals who contribute regularly to support our mission and programs.",
    },
    Supporter {
        icon: "🏪",
        name: "Local Business Network",
        kind: "In-Kind Supporters",
        text: "Providing services, supplies, and resources that help us operate efficiently.",
    },
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "The team at Malaika House truly understands our child's needs. Their heart-focused approach has made such a difference in his confidence and learning.",
        "Sarah M.",
        "Parent of Heart Program Member",
    ),
    (
        "Working with Malaika House has been incredible. Their commitment to inclusive, personalized education aligns perfectly with our values.",
        "Dr. James L.",
        "Educational Consultant",
    ),
    (
        "As a partner organization, we've seen firsthand how Malaika House creates positive change in the lives of neurodivergent learners and their families.",
        "Maria K.",
        "Square Peg Representative",
    ),
];

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

fn supporter_cards(supporters: &'static [Supporter]) -> impl IntoView {
    supporters
        .iter()
        .map(|s| {
            view! {
                <RevealCard class="supporter-card">
                    <div class="supporter-icon">{s.icon}</div>
                    <div class="supporter-name">{s.name}</div>
                    <Show when=move || !s.kind.is_empty()>
                        <div class="supporter-kind">{s.kind}</div>
                    </Show>
                    <p>{s.text}</p>
                </RevealCard>
            }
        })
        .collect_view()
}

#[component]
pub fn StaffSupportersPage() -> impl IntoView {
    view! {
        <div class="page staff-supporters">
            <PageHeader
                title="Our Team & Supporters"
                subtitle="Meet the passionate individuals and organizations who make our heart-focused mission possible"
            />

            <section class="leadership-section">
                <div class="container">
                    <h2 class="section-title">"Leadership Team"</h2>
                    <p class="section-subtitle">
                        "Our founders and leaders who guide Malaika House with vision, expertise, and unwavering commitment to neurodivergent learners"
                    </p>
                    <div class="leadership-grid">
                        {LEADERS
                            .iter()
                            .map(|leader| {
                                view! {
                                    <RevealCard class="leader-card">
                                        <div class="leader-header">
                                            <div class="leader-avatar">{initial(leader.name)}</div>
                                            <div>
                                                <div class="leader-name">{leader.name}</div>
                                                <div class="leader-role">{leader.role}</div>
                                            </div>
                                        </div>
                                        <p class="leader-bio">{leader.bio}</p>
                                        <ul class="leader-strengths">
                                            {leader.strengths.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}
                                        </ul>
                                    </RevealCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="staff-section">
                <div class="container">
                    <h2 class="section-title">"Our Facilitators & Staff"</h2>
                    <p class="section-subtitle">
                        "Dedicated professionals who bring expertise, compassion, and creativity to every interaction with our learners and families"
                    </p>
                    <div class="staff-grid">
                        {STAFF
                            .iter()
                            .map(|staff| {
                                view! {
                                    <RevealCard class="staff-card">
                                        <div class="staff-icon">{staff.icon}</div>
                                        <div class="staff-title">{staff.title}</div>
                                        <div class="staff-focus">{staff.focus}</div>
                                        <p>{staff.bio}</p>
                                        <div class="skill-tags">
                                            {staff.skills.iter().map(|s| view! { <span class="skill-tag">{*s}</span> }).collect_view()}
                                        </div>
                                    </RevealCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="partners-section">
                <div class="container">
                    <h2 class="section-title">"Our Partners & Collaborators"</h2>
                    <p class="section-subtitle">
                        "Working together with trusted organizations to expand opportunities and support for our community"
                    </p>
                    <div class="supporters-grid">{supporter_cards(PARTNERS)}</div>
                </div>
            </section>

            <section class="sponsors-section">
                <div class="container">
                    <h2 class="section-title">"Our Supporters & Sponsors"</h2>
                    <p class="section-subtitle">
                        "We are grateful to the individuals and organizations who believe in our mission and support our work"
                    </p>
                    <div class="supporters-grid">{supporter_cards(SPONSORS)}</div>
                </div>
            </section>

            <section class="testimonials-section">
                <div class="container">
                    <h2 class="section-title">"What Our Community Says"</h2>
                    <p class="section-subtitle">
                        "Hear from families, partners, and supporters who have experienced the Malaika House difference"
                    </p>
                    <div class="testimonials-grid">
                        {TESTIMONIALS
                            .iter()
                            .map(|(quote, author, relation)| {
                                view! {
                                    <RevealCard class="testimonial-card">
                                        <p class="testimonial-quote">{format!("\"{}\"", quote)}</p>
                                        <div class="testimonial-author">{*author}</div>
                                        <div class="testimonial-relation">{*relation}</div>
                                    </RevealCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="join-section">
                <div class="container">
                    <h2>"Join Our Team"</h2>
                    <p>
                        "Are you passionate about neurodivergent education and heart-focused learning? We're always looking for dedicated individuals who share our vision and values."
                    </p>
                    <A href="/contact-us" attr:class="cta-btn cta-primary">"Get In Touch"</A>
                </div>
            </section>

            <Footer tagline="Powered by passionate people who believe in every learner's potential."/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn avatar_uses_first_letter() {
        assert_eq!(initial("Amarta"), "A");
        assert_eq!(initial(""), "");
    }

    #[test]
    fn only_sponsors_carry_a_kind() {
        assert!(PARTNERS.iter().all(|p| p.kind.is_empty()));
        assert!(SPONSORS.iter().all(|s| !s.kind.is_empty()));
    }
}
