use crate::incident::IncidentPoint;

/// Mean (top, left) of a non-empty member list
pub fn compute_centroid(points: &[IncidentPoint]) -> (f64, f64) {
    let mut top = 0.0;
    let mut left = 0.0;

    for p in points {
        top += p.top;
        left += p.left;
    }

    let n = points.len() as f64;
    (top / n, left / n)
}

pub fn euclidean_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dt = a.0 - b.0;
    let dl = a.1 - b.1;
    (dt * dt + dl * dl).sqrt()
}
