use geo_types::{Coord, LineString};

use crate::error::{PlanarGraphError, Result};

/// Winding of a closed line string, with the y-axis pointing up: `true`
/// means clockwise.
///
/// Sums the cross products of consecutive edge vectors (the shoelace-style
/// signed-area test). A sum of exactly zero is treated as clockwise — this
/// matches the tie-break of the library this crate's ring model is drawn
/// from rather than picking a "more natural" default, since degenerate
/// zero-area rings never arise from a polygonizer in practice and the
/// choice is otherwise arbitrary.
pub fn clockwise(ring: &LineString<f64>) -> Result<bool> {
    if !ring.is_closed() || ring.0.len() < 4 {
        return Err(PlanarGraphError::InvalidGeometryKind {
            kind: "ring passed to clockwise() is not a closed line string",
        });
    }
    let coords = &ring.0;
    let origin = coords[0];
    let vectors: Vec<Coord<f64>> = coords[1..]
        .iter()
        .map(|c| Coord {
            x: c.x - origin.x,
            y: c.y - origin.y,
        })
        .collect();
    let mut sum = 0.0;
    for window in vectors.windows(2) {
        let (a, b) = (window[0], window[1]);
        sum += a.x * b.y - a.y * b.x;
    }
    Ok(!(0.0 < sum))
}

/// Orientation of `candidate` relative to `reference` at their shared
/// pivot: `true` if `candidate` should be traversed forward (its own start
/// coincides with the reference's current endpoint), `false` if it should
/// be traversed reversed.
pub fn orientation(reference_end: Coord<f64>, candidate: &LineString<f64>) -> Result<bool> {
    let first = *candidate.0.first().expect("edge geometry is never empty");
    let last = *candidate.0.last().expect("edge geometry is never empty");
    if coords_eq(reference_end, first) {
        Ok(true)
    } else if coords_eq(reference_end, last) {
        Ok(false)
    } else {
        Err(PlanarGraphError::OrientationMismatch)
    }
}

fn coords_eq(a: Coord<f64>, b: Coord<f64>) -> bool {
    a.x == b.x && a.y == b.y
}

/// One step of ring reconstruction: `edge_index` into the caller's edge
/// pool, and the direction it's traversed in (`true` = forward).
pub type RingStep = (usize, bool);

/// Reconstruct the ordered, oriented cycle of edges making up a ring from
/// an unordered pool of edges known to form exactly one simple cycle.
///
/// At each step, the next edge is the lowest-indexed not-yet-placed edge
/// whose start or end coordinate matches the current pivot. The original
/// implementation this is drawn from takes "the first edge encountered in
/// iteration order"; iterating candidate indices in ascending order (as
/// this does) reproduces that behavior deterministically rather than
/// leaving the tie-break dependent on hash iteration order or input
/// ordering happenstance.
pub fn build_ring(edges: &[LineString<f64>]) -> Result<Vec<RingStep>> {
    if edges.is_empty() {
        return Err(PlanarGraphError::RingReconstructionFailed);
    }
    let mut placed = vec![false; edges.len()];
    let mut steps = Vec::with_capacity(edges.len());

    let seed = &edges[0];
    let seed_start = *seed.0.first().expect("edge geometry is never empty");
    steps.push((0usize, true));
    placed[0] = true;
    let mut pivot = *seed.0.last().expect("edge geometry is never empty");

    while pivot != seed_start || steps.len() < edges.len() {
        let mut found = None;
        for (idx, edge) in edges.iter().enumerate() {
            if placed[idx] {
                continue;
            }
            let first = *edge.0.first().expect("edge geometry is never empty");
            let last = *edge.0.last().expect("edge geometry is never empty");
            if coords_eq(pivot, first) {
                found = Some((idx, true, last));
                break;
            }
            if coords_eq(pivot, last) {
                found = Some((idx, false, first));
                break;
            }
        }
        match found {
            Some((idx, forward, next_pivot)) => {
                placed[idx] = true;
                steps.push((idx, forward));
                pivot = next_pivot;
            }
            None => return Err(PlanarGraphError::RingReconstructionFailed),
        }
        if steps.len() > edges.len() {
            return Err(PlanarGraphError::RingReconstructionFailed);
        }
    }

    if pivot != seed_start || steps.len() != edges.len() {
        return Err(PlanarGraphError::RingReconstructionFailed);
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::line_string;

    fn square() -> LineString<f64> {
        line_string![
            (x: 0.0, y: 0.0),
            (x: 4.0, y: 0.0),
            (x: 4.0, y: 4.0),
            (x: 0.0, y: 4.0),
            (x: 0.0, y: 0.0),
        ]
    }

    #[test]
    fn counterclockwise_square_is_not_clockwise() {
        assert!(!clockwise(&square()).unwrap());
    }

    #[test]
    fn reversed_square_is_clockwise() {
        let mut reversed = square();
        reversed.0.reverse();
        assert!(clockwise(&reversed).unwrap());
    }

    #[test]
    fn build_ring_reassembles_four_sides_in_order() {
        let edges = vec![
            line_string![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0)],
            line_string![(x: 4.0, y: 4.0), (x: 4.0, y: 0.0)],
            line_string![(x: 4.0, y: 4.0), (x: 0.0, y: 4.0)],
            line_string![(x: 0.0, y: 4.0), (x: 0.0, y: 0.0)],
        ];
        let steps = build_ring(&edges).unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], (0, true));
    }

    #[test]
    fn build_ring_on_disconnected_edges_fails() {
        let edges = vec![
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)],
            line_string![(x: 10.0, y: 10.0), (x: 11.0, y: 10.0)],
        ];
        assert!(build_ring(&edges).is_err());
    }
}
