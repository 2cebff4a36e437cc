mod demo;
mod feed;
mod types;


pub use demo::demo_incidents;
pub use feed::{load_feed, parse_feed};
pub use types::{Incident, IncidentPoint, Priority};
