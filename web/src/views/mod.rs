pub mod book_a_visit;
pub mod contact_us;
pub mod home;
pub mod login;
pub mod not_found;
pub mod our_story;
pub mod parent_information;
pub mod staff_supporters;
pub mod what_we_offer;

pub use book_a_visit::BookAVisitPage;
pub use contact_us::ContactUsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use our_story::OurStoryPage;
pub use parent_information::ParentInformationPage;
pub use staff_supporters::StaffSupportersPage;
pub use what_we_offer::WhatWeOfferPage;
