mod centroid;
mod greedy;
mod types;

#[cfg(test)]
mod tests;

pub use greedy::{cluster, select_cluster, DEFAULT_THRESHOLD};
pub use types::{Cluster, Marker};
