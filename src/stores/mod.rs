//! Global stores pages read from. Push handlers write here; components
//! re-render reactively.

pub mod bundles;
pub mod notices;
pub mod queues;

pub use bundles::{BundleFeed, BUNDLES};
pub use notices::{dismiss_notice, push_notice, Notice, NOTICES};
pub use queues::{QueueBoard, QUEUES};
