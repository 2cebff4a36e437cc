use super::types::Cluster;
use crate::incident::IncidentPoint;
use log::debug;

/// Distance (in percent units) under which a point joins a cluster
pub const DEFAULT_THRESHOLD: f64 = 12.0;

/// Single-pass greedy clustering
///
/// Each point joins the first cluster whose current centroid is closer
/// than `threshold`, otherwise it starts a new cluster. Centroids move as
/// members are added, so the result depends on input order.
pub fn cluster(points: &[IncidentPoint], threshold: f64) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();

    for point in points {
        let target = clusters
            .iter()
            .position(|c| c.distance_to(point.top, point.left) < threshold);

        match target {
            Some(idx) => clusters[idx].push(point.clone()),
            None => clusters.push(Cluster::new(point.clone())),
        }
    }

    debug!(
        "Clustered {} points into {} markers (threshold {})",
        points.len(),
        clusters.len(),
        threshold
    );

    clusters
}

/// Look up the cluster a user tapped on
pub fn select_cluster<'a>(clusters: &'a [Cluster], id: &str) -> Option<&'a Cluster> {
    clusters.iter().find(|c| c.id() == id)
}
