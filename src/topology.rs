use std::collections::BTreeMap;

use geo_types::{Coord, LineString, Polygon, Rect};
use geos::Geom;

use crate::edge::Edge;
use crate::error::{PlanarGraphError, Result};
use crate::face::Face;
use crate::holes;
use crate::index::SpatialIndex;
use crate::indices::{EdgeIndex, FaceIndex, NodeIndex};
use crate::kernel;
use crate::node::Node;
use crate::ring::Ring;
use crate::ring_utils;

/// Assign nodes to a noded edge set by deduplicating endpoint coordinates.
///
/// Coordinates are compared by their bit pattern ordering (via a
/// `BTreeMap` keyed on `(f64, f64)` through `total_cmp`), the same
/// "dedup via an ordered map keyed on the coordinate" shape as the
/// `NodeMap`/`NodeKey` this crate's node deduplication is modeled on,
/// rather than hashing floats directly.
pub fn build_nodes(edges: &mut [Edge]) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut seen: BTreeMap<CoordKey, NodeIndex> = BTreeMap::new();

    for edge in edges.iter_mut() {
        let geom = edge.geom().clone();
        let start = *geom.0.first().expect("edge geometry is never empty");
        let end = *geom.0.last().expect("edge geometry is never empty");

        let start_idx = *seen.entry(CoordKey(start)).or_insert_with(|| {
            nodes.push(Node::new(start));
            NodeIndex(nodes.len() - 1)
        });
        let end_idx = *seen.entry(CoordKey(end)).or_insert_with(|| {
            nodes.push(Node::new(end));
            NodeIndex(nodes.len() - 1)
        });

        edge.set_start_node(start_idx);
        edge.set_end_node(end_idx);
    }

    nodes
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CoordKey(Coord<f64>);

impl Eq for CoordKey {}
impl Ord for CoordKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .x
            .total_cmp(&other.0.x)
            .then_with(|| self.0.y.total_cmp(&other.0.y))
    }
}
impl PartialOrd for CoordKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Build faces and rings from a noded edge set, wire up each edge's
/// `left_face`/`right_face`, and classify holes and floating edges.
///
/// Mirrors the shape of the original `_process_rings`: polygonize to get
/// face polygons, reconstruct each face's outer ring from the edges lying
/// on its boundary, assign the ring-adjacent face to each of those edges
/// on the side the ring's winding implies, classify holes via
/// `crate::holes::holes`, then assign every still-unassigned edge to the
/// one face whose interior contains it (a floating edge), erroring if
/// more than one face claims it rather than silently picking one.
pub fn build_faces_and_rings(edges: &mut [Edge], face_polygons: Vec<Polygon<f64>>) -> Result<(Vec<Face>, Vec<Ring>)> {
    let mut edge_index = SpatialIndex::new();
    for (i, edge) in edges.iter().enumerate() {
        edge_index.insert(i, bbox_of_linestring(edge.geom()));
    }

    let mut faces: Vec<Face> = face_polygons.iter().cloned().map(Face::new).collect();
    let mut rings: Vec<Ring> = Vec::new();

    for (face_idx, polygon) in face_polygons.iter().enumerate() {
        let ring_index = build_and_register_outer_ring(polygon.exterior(), edges, &edge_index, &mut rings, FaceIndex(face_idx))?;
        faces[face_idx].set_extring(ring_index);
    }

    let hole_fillers = holes::holes(&face_polygons)?;
    for (face_idx, per_hole) in hole_fillers.into_iter().enumerate() {
        for (hole_idx, fillers) in per_hole.into_iter().enumerate() {
            let ring_index = match fillers.as_slice() {
                [] => {
                    let interior = &face_polygons[face_idx].interiors()[hole_idx];
                    build_and_register_outer_ring(interior, edges, &edge_index, &mut rings, FaceIndex(face_idx))?
                }
                [single] => faces[*single]
                    .extring()
                    .expect("every face's outer ring is registered before holes are classified"),
                many => {
                    let filler_polys: Vec<Polygon<f64>> = many.iter().map(|&i| face_polygons[i].clone()).collect();
                    let unioned = kernel::union_polygons(&filler_polys)?;
                    let boundary = unioned
                        .0
                        .first()
                        .ok_or(PlanarGraphError::InvariantViolated {
                            detail: "union of hole-filling faces produced no polygon".into(),
                        })?
                        .exterior()
                        .clone();
                    build_and_register_outer_ring(&boundary, edges, &edge_index, &mut rings, FaceIndex(face_idx))?
                }
            };
            faces[face_idx].push_intring(ring_index);
        }
    }

    assign_floating_edges(edges, &faces, &face_polygons)?;

    Ok((faces, rings))
}

fn build_and_register_outer_ring(
    ring_line: &LineString<f64>,
    edges: &mut [Edge],
    edge_index: &SpatialIndex,
    rings: &mut Vec<Ring>,
    adjacent_face: FaceIndex,
) -> Result<crate::indices::RingIndex> {
    let candidates = edge_index.query(bbox_of_linestring(ring_line));
    let mut on_boundary: Vec<usize> = candidates
        .into_iter()
        .filter(|&i| linestring_lies_on_ring(edges[i].geom(), ring_line))
        .collect();
    on_boundary.sort_unstable();

    let geoms: Vec<LineString<f64>> = on_boundary.iter().map(|&i| edges[i].geom().clone()).collect();
    let steps = ring_utils::build_ring(&geoms)?;
    let is_clockwise = ring_utils::clockwise(ring_line)?;

    let mut ring_steps = Vec::with_capacity(steps.len());
    for (local_idx, direct) in steps {
        let edge_idx = on_boundary[local_idx];
        ring_steps.push((EdgeIndex(edge_idx), direct));

        // A clockwise ring traversed in its edges' own direction keeps its
        // bounded interior on the right; either mismatch (reversed
        // traversal, or a counter-clockwise ring) flips which side faces
        // the interior.
        if is_clockwise == direct {
            edges[edge_idx].set_right_face_if_unset(adjacent_face);
        } else {
            edges[edge_idx].set_left_face_if_unset(adjacent_face);
        }
    }

    rings.push(Ring::new(is_clockwise, ring_steps));
    Ok(crate::indices::RingIndex(rings.len() - 1))
}

/// Whether `candidate`'s coordinate sequence (forward or reversed) appears
/// as a contiguous run within `ring`'s cyclic coordinate sequence.
fn linestring_lies_on_ring(candidate: &LineString<f64>, ring: &LineString<f64>) -> bool {
    let ring_coords = &ring.0[..ring.0.len() - 1];
    if ring_coords.is_empty() {
        return false;
    }
    let forward = &candidate.0;
    let mut reversed = candidate.0.clone();
    reversed.reverse();

    is_cyclic_subsequence(ring_coords, forward) || is_cyclic_subsequence(ring_coords, &reversed)
}

fn is_cyclic_subsequence(haystack: &[Coord<f64>], needle: &[Coord<f64>]) -> bool {
    if needle.len() < 2 || needle.len() > haystack.len() + 1 {
        return false;
    }
    let n = haystack.len();
    for start in 0..n {
        let matches = needle.iter().enumerate().all(|(offset, coord)| {
            let haystack_coord = haystack[(start + offset) % n];
            coord.x == haystack_coord.x && coord.y == haystack_coord.y
        });
        if matches {
            return true;
        }
    }
    false
}

fn assign_floating_edges(edges: &mut [Edge], faces: &[Face], face_polygons: &[Polygon<f64>]) -> Result<()> {
    let mut face_index = SpatialIndex::new();
    for (i, polygon) in face_polygons.iter().enumerate() {
        face_index.insert(i, bbox_of_polygon(polygon));
    }

    for edge in edges.iter_mut() {
        if edge.left_face().is_some() || edge.right_face().is_some() {
            continue;
        }
        let bbox = bbox_of_linestring(edge.geom());
        let edge_geos = geos::Geometry::try_from(&geo_types::Geometry::LineString(edge.geom().clone()))
            .map_err(PlanarGraphError::from)?;

        let mut containing = Vec::new();
        for candidate in face_index.query(bbox) {
            let face_geos = geos::Geometry::try_from(&faces[candidate].geom().clone())
                .map_err(PlanarGraphError::from)?;
            let prepared = face_geos.to_prepared_geom().map_err(PlanarGraphError::from)?;
            if kernel::prepared_contains(&prepared, &edge_geos)? {
                containing.push(candidate);
            }
        }

        match containing.as_slice() {
            [] => {}
            [single] => edge.set_both_faces(FaceIndex(*single)),
            _ => {
                return Err(PlanarGraphError::InvariantViolated {
                    detail: format!(
                        "floating edge is contained by {} faces, expected at most one",
                        containing.len()
                    ),
                })
            }
        }
    }
    Ok(())
}

fn bbox_of_linestring(line: &LineString<f64>) -> Rect<f64> {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for c in &line.0 {
        min_x = min_x.min(c.x);
        min_y = min_y.min(c.y);
        max_x = max_x.max(c.x);
        max_y = max_y.max(c.y);
    }
    Rect::new(Coord { x: min_x, y: min_y }, Coord { x: max_x, y: max_y })
}

fn bbox_of_polygon(polygon: &Polygon<f64>) -> Rect<f64> {
    bbox_of_linestring(polygon.exterior())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::line_string;

    #[test]
    fn build_nodes_dedups_shared_endpoint() {
        let mut edges = vec![
            Edge::new(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)]),
            Edge::new(line_string![(x: 1.0, y: 0.0), (x: 1.0, y: 1.0)]),
        ];
        let nodes = build_nodes(&mut edges);
        assert_eq!(nodes.len(), 3);
        assert_eq!(edges[0].end_node(), edges[1].start_node());
    }
}
