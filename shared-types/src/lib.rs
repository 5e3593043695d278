use serde::{Deserialize, Serialize};

/// A closed set of options offered by one of the site's forms.
///
/// `value` is the stable form value (what a `<select>` carries), `label` is
/// what visitors read.
pub trait Choice: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn value(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.value() == value)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitType {
    #[serde(rename = "onsite")]
    OnSite,
    #[serde(rename = "online")]
    Online,
}

impl Choice for VisitType {
    const ALL: &'static [Self] = &[VisitType::OnSite, VisitType::Online];

    fn value(&self) -> &'static str {
        match self {
            VisitType::OnSite => "onsite",
            VisitType::Online => "online",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            VisitType::OnSite => "On-Site Visit",
            VisitType::Online => "Online Consultation",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    EarlyYears,
    Primary,
    Secondary,
    Teen,
}

impl Choice for AgeGroup {
    const ALL: &'static [Self] = &[
        AgeGroup::EarlyYears,
        AgeGroup::Primary,
        AgeGroup::Secondary,
        AgeGroup::Teen,
    ];

    fn value(&self) -> &'static str {
        match self {
            AgeGroup::EarlyYears => "early-years",
            AgeGroup::Primary => "primary",
            AgeGroup::Secondary => "secondary",
            AgeGroup::Teen => "teen",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AgeGroup::EarlyYears => "Early Years (3-6)",
            AgeGroup::Primary => "Primary (7-11)",
            AgeGroup::Secondary => "Secondary (12-16)",
            AgeGroup::Teen => "Teen (17+)",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramInterest {
    HeartProgram,
    Clubs,
    Sessions,
    General,
}

impl Choice for ProgramInterest {
    const ALL: &'static [Self] = &[
        ProgramInterest::HeartProgram,
        ProgramInterest::Clubs,
        ProgramInterest::Sessions,
        ProgramInterest::General,
    ];

    fn value(&self) -> &'static str {
        match self {
            ProgramInterest::HeartProgram => "heart-program",
            ProgramInterest::Clubs => "clubs",
            ProgramInterest::Sessions => "sessions",
            ProgramInterest::General => "general",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProgramInterest::HeartProgram => "Heart Program",
            ProgramInterest::Clubs => "Club Programs",
            ProgramInterest::Sessions => "Malaika House Sessions",
            ProgramInterest::General => "General Information",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryType {
    General,
    HeartProgram,
    Clubs,
    Sessions,
    Visit,
    Support,
    Partnership,
    Other,
}

impl Choice for InquiryType {
    const ALL: &'static [Self] = &[
        InquiryType::General,
        InquiryType::HeartProgram,
        InquiryType::Clubs,
        InquiryType::Sessions,
        InquiryType::Visit,
        InquiryType::Support,
        InquiryType::Partnership,
        InquiryType::Other,
    ];

    fn value(&self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::HeartProgram => "heart-program",
            InquiryType::Clubs => "clubs",
            InquiryType::Sessions => "sessions",
            InquiryType::Visit => "visit",
            InquiryType::Support => "support",
            InquiryType::Partnership => "partnership",
            InquiryType::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            InquiryType::General => "General Information",
            InquiryType::HeartProgram => "Heart Program",
            InquiryType::Clubs => "Club Programs",
            InquiryType::Sessions => "Malaika House Sessions",
            InquiryType::Visit => "Schedule a Visit",
            InquiryType::Support => "Family Support",
            InquiryType::Partnership => "Partnership Opportunities",
            InquiryType::Other => "Other",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardType {
    Admin,
    Parent,
    Partner,
}

impl DashboardType {
    /// Name used in the login button and the simulated redirect notice.
    pub fn dashboard_name(&self) -> &'static str {
        match self {
            DashboardType::Admin => "Admin Dashboard",
            DashboardType::Parent => "Parent Dashboard",
            DashboardType::Partner => "Partner Dashboard",
        }
    }
}

impl Choice for DashboardType {
    const ALL: &'static [Self] = &[
        DashboardType::Admin,
        DashboardType::Parent,
        DashboardType::Partner,
    ];

    fn value(&self) -> &'static str {
        match self {
            DashboardType::Admin => "admin",
            DashboardType::Parent => "parent",
            DashboardType::Partner => "partner",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DashboardType::Admin => "Admin Dashboard",
            DashboardType::Parent => "Internal Parent Dashboard",
            DashboardType::Partner => "External Partner Dashboard",
        }
    }
}

/// The four daily visit times, in display order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeSlot {
    #[serde(rename = "09:00")]
    NineAm,
    #[serde(rename = "10:30")]
    HalfPastTenAm,
    #[serde(rename = "14:00")]
    TwoPm,
    #[serde(rename = "15:30")]
    HalfPastThreePm,
}

/// Visible labels are formatted from `value` on the web side.
impl TimeSlot {
    pub const ALL: &'static [Self] = &[
        TimeSlot::NineAm,
        TimeSlot::HalfPastTenAm,
        TimeSlot::TwoPm,
        TimeSlot::HalfPastThreePm,
    ];

    /// 24-hour `HH:MM`, the same string serde writes.
    pub fn value(&self) -> &'static str {
        match self {
            TimeSlot::NineAm => "09:00",
            TimeSlot::HalfPastTenAm => "10:30",
            TimeSlot::TwoPm => "14:00",
            TimeSlot::HalfPastThreePm => "15:30",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_values_round_trip<T: Choice + PartialEq + std::fmt::Debug>() {
        for choice in T::ALL {
            assert_eq!(T::from_value(choice.value()), Some(*choice));
        }
        assert_eq!(T::from_value(""), None);
    }

    #[test]
    fn every_choice_is_found_by_its_form_value() {
        assert_values_round_trip::<VisitType>();
        assert_values_round_trip::<AgeGroup>();
        assert_values_round_trip::<ProgramInterest>();
        assert_values_round_trip::<InquiryType>();
        assert_values_round_trip::<DashboardType>();
    }

    #[test]
    fn serde_names_match_form_values() {
        assert_eq!(serde_json::to_string(&VisitType::OnSite).unwrap(), "\"onsite\"");
        assert_eq!(serde_json::to_string(&AgeGroup::EarlyYears).unwrap(), "\"early-years\"");
        assert_eq!(serde_json::to_string(&TimeSlot::HalfPastThreePm).unwrap(), "\"15:30\"");
        let parsed: DashboardType = serde_json::from_str("\"partner\"").unwrap();
        assert_eq!(parsed, DashboardType::Partner);
    }

    #[test]
    fn time_slots_are_ordered_through_the_day() {
        let mut sorted = TimeSlot::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, TimeSlot::ALL.to_vec());
        assert_eq!(TimeSlot::ALL.len(), 4);
    }

    #[test]
    fn time_slot_values_match_their_serde_names() {
        for slot in TimeSlot::ALL {
            let json = serde_json::to_string(slot).unwrap();
            assert_eq!(json, format!("\"{}\"", slot.value()));
        }
    }
}
