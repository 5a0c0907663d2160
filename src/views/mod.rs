//! Page views.

mod bundles;
mod home;
mod navbar;
mod queues;

pub use bundles::BundlesView;
pub use home::GamesView;
pub use navbar::Navbar;
pub use queues::QueuesView;
