//! Page Components

mod contact;
mod dining;
mod experience;
mod home;
mod rooms;

pub use contact::ContactPage;
pub use dining::DiningPage;
pub use experience::ExperiencePage;
pub use home::HomePage;
pub use rooms::RoomsPage;
