use super::centroid::{compute_centroid, euclidean_distance};
use crate::filter::CategoryGroup;
use crate::incident::{IncidentPoint, Priority};
use serde::Serialize;

/// One or more incidents drawn as a single marker
///
/// The centroid always equals the mean of the current members, so the
/// fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    id: String,
    points: Vec<IncidentPoint>,
    top: f64,
    left: f64,
}

/// How the presentation layer should draw a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Marker {
    /// Icon and color picked from the incident's category group
    Single {
        group: CategoryGroup,
        priority: Priority,
    },
    /// Neutral count badge
    Multi { count: usize },
}

impl Cluster {
    /// Start a cluster at a single point; the cluster takes the point's id
    pub fn new(point: IncidentPoint) -> Self {
        Self {
            id: point.id.clone(),
            top: point.top,
            left: point.left,
            points: vec![point],
        }
    }

    pub fn push(&mut self, point: IncidentPoint) {
        self.points.push(point);
        let (top, left) = compute_centroid(&self.points);
        self.top = top;
        self.left = left;
    }

    pub fn distance_to(&self, top: f64, left: f64) -> f64 {
        euclidean_distance((self.top, self.left), (top, left))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn points(&self) -> &[IncidentPoint] {
        &self.points
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn highest_priority(&self) -> Priority {
        self.points
            .iter()
            .map(|p| p.priority)
            .max()
            .unwrap_or(Priority::Low)
    }

    pub fn marker(&self) -> Marker {
        match self.points.as_slice() {
            [only] => Marker::Single {
                group: CategoryGroup::classify(&only.category),
                priority: only.priority,
            },
            members => Marker::Multi {
                count: members.len(),
            },
        }
    }
}
