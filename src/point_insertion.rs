use geo_types::{Coord, LineString};

use crate::index::{epsilon_square, SpatialIndex};

/// Split each edge at every point from `points` lying within `epsilon` of
/// it, inserting a new vertex at the nearest position on the edge.
///
/// Candidate edges are narrowed with a spatial index before the expensive
/// per-point nearest-segment search runs, mirroring the original
/// `add_points` two-phase design: first find which edges a point's
/// ε-buffer touches, then, per edge, insert every attached point's nearest
/// position. New vertices are inserted back-to-front (by descending
/// segment index, then by descending distance-from-segment-start within a
/// segment) so earlier insertions never shift the indices later ones still
/// need.
pub fn add_points(points: &[Coord<f64>], edges: &[LineString<f64>], epsilon: f64) -> Vec<LineString<f64>> {
    if points.is_empty() {
        return edges.to_vec();
    }

    let mut edge_index = SpatialIndex::new();
    for (i, edge) in edges.iter().enumerate() {
        edge_index.insert(i, bbox_of(edge));
    }

    let mut attached: Vec<Vec<Coord<f64>>> = vec![Vec::new(); edges.len()];
    for &point in points {
        let zone = epsilon_square(point, epsilon);
        for candidate in edge_index.query(zone) {
            if point_near_linestring(point, &edges[candidate], epsilon) {
                attached[candidate].push(point);
            }
        }
    }

    edges
        .iter()
        .enumerate()
        .map(|(i, edge)| {
            if attached[i].is_empty() {
                edge.clone()
            } else {
                insert_points_into_edge(edge, &attached[i])
            }
        })
        .collect()
}

fn bbox_of(line: &LineString<f64>) -> geo_types::Rect<f64> {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for c in &line.0 {
        min_x = min_x.min(c.x);
        min_y = min_y.min(c.y);
        max_x = max_x.max(c.x);
        max_y = max_y.max(c.y);
    }
    geo_types::Rect::new(Coord { x: min_x, y: min_y }, Coord { x: max_x, y: max_y })
}

fn point_near_linestring(point: Coord<f64>, line: &LineString<f64>, epsilon: f64) -> bool {
    line.0
        .windows(2)
        .any(|seg| distance_to_segment(point, seg[0], seg[1]) <= epsilon)
}

fn distance_to_segment(p: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return ((p.x - a.x).powi(2) + (p.y - a.y).powi(2)).sqrt();
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let proj = Coord {
        x: a.x + t * dx,
        y: a.y + t * dy,
    };
    ((p.x - proj.x).powi(2) + (p.y - proj.y).powi(2)).sqrt()
}

fn insert_points_into_edge(line: &LineString<f64>, points: &[Coord<f64>]) -> LineString<f64> {
    let mut placements: Vec<(usize, f64, Coord<f64>)> = points
        .iter()
        .map(|&point| {
            let mut best = (0usize, f64::INFINITY, 0.0f64);
            for (seg_idx, seg) in line.0.windows(2).enumerate() {
                let (a, b) = (seg[0], seg[1]);
                let dist = distance_to_segment(point, a, b);
                if dist < best.1 {
                    let (dx, dy) = (b.x - a.x, b.y - a.y);
                    let len_sq = dx * dx + dy * dy;
                    let t = if len_sq == 0.0 {
                        0.0
                    } else {
                        (((point.x - a.x) * dx + (point.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
                    };
                    best = (seg_idx, dist, t);
                }
            }
            (best.0, best.2, point)
        })
        .collect();

    placements.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.partial_cmp(&a.1).unwrap()));

    let mut coords = line.0.clone();
    for (seg_idx, _, point) in placements {
        coords.insert(seg_idx + 1, point);
    }
    LineString::new(coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::line_string;

    #[test]
    fn point_on_segment_is_inserted_once() {
        let edges = vec![line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)]];
        let points = vec![Coord { x: 5.0, y: 0.0 }];
        let result = add_points(&points, &edges, 1e-6);
        assert_eq!(result[0].0.len(), 3);
        assert_eq!(result[0].0[1], Coord { x: 5.0, y: 0.0 });
    }

    #[test]
    fn untouched_edges_are_unchanged() {
        let edges = vec![line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)]];
        let points = vec![Coord { x: 100.0, y: 100.0 }];
        let result = add_points(&points, &edges, 1e-6);
        assert_eq!(result[0], edges[0]);
    }

    #[test]
    fn multiple_points_on_one_edge_insert_in_order() {
        let edges = vec![line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)]];
        let points = vec![Coord { x: 7.0, y: 0.0 }, Coord { x: 3.0, y: 0.0 }];
        let result = add_points(&points, &edges, 1e-6);
        assert_eq!(
            result[0].0,
            vec![
                Coord { x: 0.0, y: 0.0 },
                Coord { x: 3.0, y: 0.0 },
                Coord { x: 7.0, y: 0.0 },
                Coord { x: 10.0, y: 0.0 },
            ]
        );
    }
}
