use super::*;
use crate::filter::CategoryGroup;
use crate::incident::{demo_incidents, IncidentPoint, Priority};
use crate::position::{position_incidents, Layout};

fn make_point(id: &str, top: f64, left: f64) -> IncidentPoint {
    IncidentPoint {
        id: id.to_string(),
        category: "Vialidad".to_string(),
        priority: Priority::Medium,
        top,
        left,
    }
}

fn demo_points() -> Vec<IncidentPoint> {
    position_incidents(&demo_incidents(), &Layout::default()).unwrap()
}

fn generated_points() -> Vec<IncidentPoint> {
    (0..40)
        .map(|n| {
            let id = format!("R-{}", n);
            let pos = crate::position::assign_position(&id, &Layout::default()).unwrap();
            make_point(&id, pos.top, pos.left)
        })
        .collect()
}

fn ids(cluster: &Cluster) -> Vec<&str> {
    cluster.points().iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_empty_input() {
    assert!(cluster(&[], DEFAULT_THRESHOLD).is_empty());
}

#[test]
fn test_single_point() {
    let p = make_point("X", 33.0, 44.0);
    let clusters = cluster(&[p.clone()], DEFAULT_THRESHOLD);

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].points(), &[p]);
    assert_eq!(clusters[0].top(), 33.0);
    assert_eq!(clusters[0].left(), 44.0);
    assert_eq!(clusters[0].id(), "X");
}

#[test]
fn test_forced_ids_form_one_cluster() {
    let points: Vec<IncidentPoint> = demo_points()
        .into_iter()
        .filter(|p| ["D1", "D2", "D3"].contains(&p.id.as_str()))
        .collect();
    assert_eq!(points.len(), 3);

    let clusters = cluster(&points, DEFAULT_THRESHOLD);
    assert_eq!(clusters.len(), 1);
    assert_eq!(ids(&clusters[0]), vec!["D1", "D2", "D3"]);
}

#[test]
fn test_all_close_points_merge() {
    let points = vec![
        make_point("a", 50.0, 50.0),
        make_point("b", 51.0, 50.0),
        make_point("c", 50.0, 52.0),
        make_point("d", 49.0, 49.0),
    ];
    let clusters = cluster(&points, DEFAULT_THRESHOLD);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 4);
}

#[test]
fn test_first_matching_cluster_wins() {
    // the last point is exactly 10 away from both existing centroids
    let points = vec![
        make_point("a", 20.0, 20.0),
        make_point("b", 20.0, 40.0),
        make_point("c", 20.0, 30.0),
    ];
    let clusters = cluster(&points, DEFAULT_THRESHOLD);

    assert_eq!(clusters.len(), 2);
    assert_eq!(ids(&clusters[0]), vec!["a", "c"]);
    assert_eq!(ids(&clusters[1]), vec!["b"]);
    assert_eq!(clusters[0].left(), 25.0);
}

#[test]
fn test_distance_equal_to_threshold_does_not_merge() {
    let points = vec![make_point("a", 20.0, 20.0), make_point("b", 20.0, 32.0)];
    assert_eq!(cluster(&points, 12.0).len(), 2);
}

#[test]
fn test_order_changes_membership() {
    let p1 = make_point("p1", 0.0, 0.0);
    let p2 = make_point("p2", 0.0, 10.0);
    let p3 = make_point("p3", 0.0, 20.0);

    let forward = cluster(&[p1.clone(), p2.clone(), p3.clone()], 12.0);
    assert_eq!(ids(&forward[0]), vec!["p1", "p2"]);
    assert_eq!(ids(&forward[1]), vec!["p3"]);

    let reverse = cluster(&[p3, p2, p1], 12.0);
    assert_eq!(ids(&reverse[0]), vec!["p3", "p2"]);
    assert_eq!(ids(&reverse[1]), vec!["p1"]);
}

#[test]
fn test_clustering_is_idempotent() {
    let points = generated_points();
    assert_eq!(cluster(&points, 12.0), cluster(&points, 12.0));
}

#[test]
fn test_centroid_is_member_mean() {
    for points in [demo_points(), generated_points()] {
        for c in cluster(&points, DEFAULT_THRESHOLD) {
            let n = c.len() as f64;
            let top = c.points().iter().map(|p| p.top).sum::<f64>() / n;
            let left = c.points().iter().map(|p| p.left).sum::<f64>() / n;
            assert!((c.top() - top).abs() < 1e-9, "cluster {}", c.id());
            assert!((c.left() - left).abs() < 1e-9, "cluster {}", c.id());
        }
    }
}

#[test]
fn test_no_point_lost_or_duplicated() {
    for points in [demo_points(), generated_points()] {
        let clusters = cluster(&points, DEFAULT_THRESHOLD);
        let mut seen: Vec<&str> = clusters.iter().flat_map(ids).collect();
        assert_eq!(seen.len(), points.len());

        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), points.len());
    }
}

#[test]
fn test_cluster_id_comes_from_first_member() {
    for c in cluster(&generated_points(), DEFAULT_THRESHOLD) {
        assert_eq!(c.id(), c.points()[0].id);
    }
}

#[test]
fn test_larger_threshold_never_adds_clusters() {
    let thresholds = [0.0, 1.0, 4.0, 8.0, 12.0, 15.0, 20.0, 30.0, 50.0, 200.0];

    for points in [demo_points(), generated_points()] {
        let counts: Vec<usize> = thresholds
            .iter()
            .map(|&t| cluster(&points, t).len())
            .collect();

        assert_eq!(counts[0], points.len());
        assert_eq!(*counts.last().unwrap(), 1);
        for pair in counts.windows(2) {
            assert!(pair[1] <= pair[0], "counts not monotonic: {:?}", counts);
        }
    }
}

#[test]
fn test_marker_single_and_multi() {
    let mut water = make_point("w", 30.0, 30.0);
    water.category = "Agua".to_string();
    water.priority = Priority::High;

    let single = Cluster::new(water.clone());
    assert_eq!(
        single.marker(),
        Marker::Single {
            group: CategoryGroup::Water,
            priority: Priority::High
        }
    );

    let mut multi = single.clone();
    multi.push(make_point("x", 31.0, 31.0));
    assert_eq!(multi.marker(), Marker::Multi { count: 2 });
    assert_eq!(multi.highest_priority(), Priority::High);
}

#[test]
fn test_marker_serializes_with_kind_tag() {
    let json = serde_json::to_value(Marker::Multi { count: 3 }).unwrap();
    assert_eq!(json["kind"], "multi");
    assert_eq!(json["count"], 3);
}

#[test]
fn test_select_cluster_by_id() {
    let clusters = cluster(&demo_points(), DEFAULT_THRESHOLD);

    let selected = select_cluster(&clusters, "D1").unwrap();
    assert!(selected.len() >= 3);
    assert!(select_cluster(&clusters, "D2").is_none());
    assert!(select_cluster(&clusters, "missing").is_none());
}
