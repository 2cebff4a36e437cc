// Public API exports
pub mod clusterer;
pub mod config;
pub mod filter;
pub mod incident;
pub mod map;
pub mod position;

// Re-export main types for convenience
pub use clusterer::{cluster, select_cluster, Cluster, Marker, DEFAULT_THRESHOLD};
pub use config::{ConfigError, MapConfig};
pub use filter::{CategoryFilter, CategoryGroup, UnknownFilter};
pub use incident::{demo_incidents, load_feed, parse_feed, Incident, IncidentPoint, Priority};
pub use map::{build_map, MapError, MapView};
pub use position::{assign_position, position_incidents, Layout, Position, PositionError};
