//! Simulated sign-in. Nothing is checked against an account store; the page
//! only reports which dashboard the visitor would have been sent to.

use std::time::Duration;

use shared_types::DashboardType;

pub const LOGIN_DELAY: Duration = Duration::from_millis(2000);
pub const DEMO_REVEAL_DELAY: Duration = Duration::from_secs(3);
pub const DEMO_VISIBLE_FOR: Duration = Duration::from_secs(10);

pub const DEMO_EMAIL: &str = "demo@malaikahouse.com";
pub const DEMO_PASSWORD: &str = "demo123";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub dashboard: Option<DashboardType>,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_valid(&self) -> bool {
        self.dashboard.is_some() && !self.email.trim().is_empty() && !self.password.trim().is_empty()
    }

    pub fn button_text(&self, loading: bool) -> String {
        if loading {
            return "Logging in...".to_string();
        }
        match self.dashboard {
            Some(dashboard) if self.is_valid() => format!("Access {}", dashboard.dashboard_name()),
            _ => "Sign In".to_string(),
        }
    }

    pub fn simulation_notice(&self) -> String {
        let dashboard = self
            .dashboard
            .map(|d| d.dashboard_name())
            .unwrap_or("Dashboard");
        format!(
            "Login simulation: {} for {}. Redirecting to your dashboard...",
            dashboard,
            self.email.trim()
        )
    }
}

/// Bullet points shown in the info box for the chosen dashboard.
pub fn dashboard_summary(dashboard: DashboardType) -> (&'static str, &'static [&'static str]) {
    match dashboard {
        DashboardType::Admin => (
            "Full administrative access for Malaika House staff and directors",
            &[
                "Complete user management",
                "System analytics and reports",
                "Content management",
                "Payment and subscription oversight",
                "Integration management",
            ],
        ),
        DashboardType::Parent => (
            "For parents with children enrolled in Malaika House programs",
            &[
                "Child progress tracking",
                "Session booking and management",
                "Subscription and payment management",
                "Direct communication with staff",
                "Session reports and updates",
            ],
        ),
        DashboardType::Partner => (
            "For external organizations and club partners",
            &[
                "External club management",
                "Limited participant overview",
                "Session scheduling and coordination",
                "Communication with Malaika House",
                "Partnership resources and guidelines",
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ready() -> LoginForm {
        LoginForm {
            dashboard: Some(DashboardType::Parent),
            email: DEMO_EMAIL.into(),
            password: DEMO_PASSWORD.into(),
        }
    }

    #[test]
    fn needs_dashboard_email_and_password() {
        assert!(ready().is_valid());
        assert!(!LoginForm { dashboard: None, ..ready() }.is_valid());
        assert!(!LoginForm { password: " ".into(), ..ready() }.is_valid());
    }

    #[test]
    fn button_text_follows_form_state() {
        assert_eq!(ready().button_text(true), "Logging in...");
        assert_eq!(ready().button_text(false), "Access Parent Dashboard");
        assert_eq!(LoginForm::default().button_text(false), "Sign In");
        let half_filled = LoginForm {
            email: String::new(),
            ..ready()
        };
        assert_eq!(half_filled.button_text(false), "Sign In");
    }

    #[test]
    fn notice_names_dashboard_and_email() {
        let notice = ready().simulation_notice();
        assert!(notice.contains("Parent Dashboard"));
        assert!(notice.contains(DEMO_EMAIL));
    }
}
