//! Fixed site details shared by the layout and the contact sections.

pub const SITE_NAME: &str = "Malaika House";

pub const LOGO_NAME_URL: &str =
    "https://i.postimg.cc/9QhL2Tz3/2022-12-10-Malaika-House-Name-only-png.png";
pub const LOGO_MAIN_URL: &str =
    "https://i.postimg.cc/D09ZbnHD/2022-12-10-Malaika-House-Main-Logo-PNG-RGB.png";

pub const PHONE_DISPLAY: &str = "+27 (0) 123 456 789";
pub const PHONE_HREF: &str = "tel:+27123456789";
pub const FAX_DISPLAY: &str = "+27 123 456 790";
pub const INFO_EMAIL: &str = "info@malaikahouse.co.za";
pub const VISITS_EMAIL: &str = "visits@malaikahouse.co.za";
pub const SUPPORT_EMAIL: &str = "support@malaikahouse.com";
pub const OFFICE_HOURS: &str = "Monday - Friday, 8AM - 5PM";

pub const ADDRESS_LINES: [&str; 4] = [
    "123 Learning Street",
    "Observatory, Cape Town",
    "Western Cape, 7925",
    "South Africa",
];

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/what-we-offer", label: "What We Offer" },
    NavLink { href: "/our-story", label: "Our Story" },
    NavLink { href: "/staff-supporters", label: "Staff & Supporters" },
    NavLink { href: "/parent-information", label: "Parent Information" },
    NavLink { href: "/book-a-visit", label: "Book a Visit" },
    NavLink { href: "/contact-us", label: "Contact Us" },
];

/// `/home` is an alias of `/`.
pub fn is_active_link(link_href: &str, current_path: &str) -> bool {
    let current = current_path.trim_end_matches('/');
    match link_href {
        "/" => current.is_empty() || current == "/home",
        href => current == href,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_link_matches_root_and_alias() {
        assert!(is_active_link("/", "/"));
        assert!(is_active_link("/", "/home"));
        assert!(!is_active_link("/", "/contact-us"));
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert!(is_active_link("/book-a-visit", "/book-a-visit/"));
        assert!(!is_active_link("/book-a-visit", "/contact-us"));
    }

    #[test]
    fn nav_links_are_unique() {
        let mut hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        hrefs.sort();
        hrefs.dedup();
        assert_eq!(hrefs.len(), NAV_LINKS.len());
    }
}
