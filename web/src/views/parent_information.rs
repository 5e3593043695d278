use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::page_chrome::{Footer, PageHeader, RevealCard, SectionLink};

const QUICK_LINKS: &[(&str, &str, &str, &str)] = &[
    ("#fees", "💰", "Fees & Pricing", "Transparent pricing for all our programs and services"),
    ("#application", "📝", "Application Process", "Step-by-step guide to joining our community"),
    ("#guidelines", "📋", "Guidelines & Expectations", "What to expect and how we work together"),
    ("#resources", "📚", "Support Resources", "Materials and tools to support your child's journey"),
];

struct PricingPlan {
    name: &'static str,
    price_rand: u32,
    per: &'static str,
    featured: bool,
    includes: &'static [&'static str],
    cta: &'static str,
}

const PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Solo Entry",
        price_rand: 450,
        per: "per session",
        featured: false,
        includes: &[
            "Individual focused session",
            "Personalized attention",
            "Flexible scheduling",
            "Progress tracking",
            "Family consultation included",
        ],
        cta: "Book Session",
    },
    PricingPlan {
        name: "Party for Two",
        price_rand: 750,
        per: "per session (2 children)",
        featured: true,
        includes: &[
            "Paired learning experience",
            "Social skill development",
            "Peer interaction opportunities",
            "Shared activities and games",
            "Family support for both families",
        ],
        cta: "Book for Two",
    },
    PricingPlan {
        name: "2025 Session Pass",
        price_rand: 2200,
        per: "per term (July 22 - Oct)",
        featured: false,
        includes: &[
            "Full term access",
            "Multiple weekly sessions",
            "Priority booking",
            "Comprehensive progress reports",
            "Family support program",
            "Auto-renewal option",
        ],
        cta: "Get Term Pass",
    },
];

const APPLICATION_STEPS: &[(&str, &str)] = &[
    (
        "Contact Us",
        "Reach out via phone, email, or contact form to learn about our programs and ask any questions you have about our approach.",
    ),
    (
        "Schedule a Visit",
        "Book a time to visit our facility, meet our team, and see if Malaika House feels like the right fit for your family.",
    ),
    (
        "Choose Your Program",
        "Based on your visit and discussion with our team, select the program option that best meets your child's needs and your family's schedule.",
    ),
    (
        "Complete Booking",
        "Fill out enrollment forms, process payment, and book your child's first session to begin their journey with us.",
    ),
];

const GUIDELINES: &[(&str, &str, [&str; 5])] = &[
    (
        "🤝",
        "Family Partnership",
        [
            "Open communication with staff",
            "Regular progress meetings",
            "Collaborative goal setting",
            "Shared celebration of successes",
            "Problem-solving together",
        ],
    ),
    (
        "📅",
        "Attendance & Scheduling",
        [
            "Consistent attendance encouraged",
            "24-hour cancellation notice",
            "Flexible rescheduling options",
            "Term-based planning approach",
            "Google Calendar integration",
        ],
    ),
    (
        "🛡️",
        "Safety & Well-being",
        [
            "Physical and emotional safety priority",
            "Inclusive, respectful environment",
            "Clear behavioral expectations",
            "Crisis support protocols",
            "Confidentiality maintained",
        ],
    ),
    (
        "📞",
        "Communication",
        [
            "Regular progress updates",
            "Multiple communication channels",
            "Prompt response to concerns",
            "Family education and support",
            "Community building opportunities",
        ],
    ),
];

const RESOURCES: &[(&str, &str, &str)] = &[
    ("📖", "Parent Handbook", "Comprehensive guide covering our approaches, policies, and practical tips for supporting neurodivergent learners."),
    ("🎯", "Learning Activities", "Home-based activities and exercises designed to reinforce skills and concepts from our programs."),
    ("🧠", "Neurodiversity Information", "Educational materials about different learning styles, strengths, and support strategies."),
    ("👥", "Community Resources", "Directory of local services, support groups, and organizations that serve neurodivergent families."),
    ("📱", "Digital Tools", "Recommended apps, websites, and digital resources that support learning and development."),
    ("💬", "Parent Network", "Connect with other Malaika House families for support, friendship, and shared experiences."),
];

/// Formats a whole-rand amount with thousands separators, e.g. `R2,200`.
pub fn format_rand(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("R{}", out)
}

#[component]
pub fn ParentInformationPage() -> impl IntoView {
    view! {
        <div class="page parent-information">
            <PageHeader
                title="Parent Information"
                subtitle="Everything you need to know about joining the Malaika House community and supporting your child's journey"
            />

            <section class="quick-links">
                <div class="container links-grid">
                    {QUICK_LINKS
                        .iter()
                        .map(|(href, icon, title, text)| {
                            view! {
                                <SectionLink href=*href class="quick-link-card">
                                    <div class="link-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </SectionLink>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="fees" class="fees-section">
                <div class="container">
                    <h2 class="section-title">"Fees & Pricing"</h2>
                    <p class="section-subtitle">
                        "Flexible pricing options designed to make our programs accessible while ensuring quality support for every learner"
                    </p>
                    <div class="pricing-grid">
                        {PLANS
                            .iter()
                            .map(|plan| {
                                view! {
                                    <RevealCard class=if plan.featured { "pricing-card featured" } else { "pricing-card" }>
                                        <Show when=move || plan.featured>
                                            <div class="popular-badge">"Most Popular"</div>
                                        </Show>
                                        <div class="plan-name">{plan.name}</div>
                                        <div class="plan-price">{format_rand(plan.price_rand)}</div>
                                        <div class="plan-period">{plan.per}</div>
                                        <ul class="plan-features">
                                            {plan.includes.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                        </ul>
                                        <A href="/book-a-visit" attr:class="plan-btn">{plan.cta}</A>
                                    </RevealCard>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="payment-info">
                        <h3>"Payment & Booking Information"</h3>
                        <p>"Payments must be processed before booking confirmation"</p>
                        <p>"Cancellations can be transferred to new sessions"</p>
                        <p>"Financial assistance available - contact us to discuss options"</p>
                    </div>
                </div>
            </section>

            <section id="application" class="application-section">
                <div class="container">
                    <h2 class="section-title">"Application Process"</h2>
                    <p class="section-subtitle">
                        "A simple, supportive process designed to ensure the best fit for your child and our community"
                    </p>
                    <div class="steps-grid">
                        {APPLICATION_STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, (title, text))| {
                                view! {
                                    <RevealCard class="step-card">
                                        <div class="step-number">{i + 1}</div>
                                        <h4>{*title}</h4>
                                        <p>{*text}</p>
                                    </RevealCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="guidelines" class="guidelines-section">
                <div class="container">
                    <h2 class="section-title">"Guidelines & Expectations"</h2>
                    <p class="section-subtitle">
                        "Our shared commitments to creating a safe, supportive, and effective learning environment"
                    </p>
                    <div class="guidelines-grid">
                        {GUIDELINES
                            .iter()
                            .map(|(icon, title, points)| {
                                view! {
                                    <RevealCard class="guideline-card">
                                        <div class="guideline-icon">{*icon}</div>
                                        <h4>{*title}</h4>
                                        <ul>{points.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}</ul>
                                    </RevealCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="resources" class="resources-section">
                <div class="container">
                    <h2 class="section-title">"Support Resources"</h2>
                    <p class="section-subtitle">
                        "Tools, materials, and information to support your child's learning journey at home and beyond"
                    </p>
                    <div class="resources-grid">
                        {RESOURCES
                            .iter()
                            .map(|(icon, title, text)| {
                                view! {
                                    <RevealCard class="resource-card">
                                        <div class="resource-icon">{*icon}</div>
                                        <h4>{*title}</h4>
                                        <p>{*text}</p>
                                    </RevealCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <Footer tagline="Supporting families on their unique learning journeys."/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rand_amounts_use_thousands_separators() {
        assert_eq!(format_rand(450), "R450");
        assert_eq!(format_rand(2200), "R2,200");
        assert_eq!(format_rand(1_250_000), "R1,250,000");
        assert_eq!(format_rand(0), "R0");
    }

    #[test]
    fn exactly_one_plan_is_featured() {
        assert_eq!(PLANS.iter().filter(|p| p.featured).count(), 1);
    }

    #[test]
    fn quick_links_point_at_page_sections() {
        for (href, ..) in QUICK_LINKS {
            assert!(href.starts_with('#'), "{href} is not an in-page link");
        }
    }
}
