use geo_types::{Coord, Geometry, LineString, Rect};

use crate::edge::Edge;
use crate::error::Result;
use crate::index::SpatialIndex;
use crate::indices::InputId;
use crate::kernel;
use crate::point_insertion;

const EPSILON: f64 = 1e-9;

/// Attach source provenance to each graph edge: the set of input
/// geometries whose trace overlaps it.
///
/// The input entries are first re-split at every graph edge endpoint, so
/// an entry that spans several graph edges yields one re-split piece per
/// edge rather than one piece covering all of them; a graph edge is then
/// attributed to an entry exactly when their intersection is genuinely
/// one-dimensional, not a mere point touch at a shared endpoint. This is
/// the same shape as the original `process_sources`: derive the edge set,
/// split the raw entries at the edges' endpoints, then test
/// `is_1D_geometry(edge.intersection(entry))` per candidate pair.
pub fn process_sources(edges: &mut [Edge], entries: &[(InputId, LineString<f64>)]) -> Result<()> {
    let mut endpoints = Vec::with_capacity(edges.len() * 2);
    for edge in edges.iter() {
        endpoints.push(*edge.geom().0.first().expect("edge geometry is never empty"));
        endpoints.push(*edge.geom().0.last().expect("edge geometry is never empty"));
    }

    let entry_geoms: Vec<LineString<f64>> = entries.iter().map(|(_, geom)| geom.clone()).collect();
    let resplit = point_insertion::add_points(&endpoints, &entry_geoms, EPSILON);

    let mut entry_index = SpatialIndex::new();
    for (i, geom) in resplit.iter().enumerate() {
        entry_index.insert(i, bbox_of(geom));
    }

    for edge in edges.iter_mut() {
        let mut sources = Vec::new();
        for candidate in entry_index.query(bbox_of(edge.geom())) {
            let overlap = kernel::intersection(
                &Geometry::LineString(edge.geom().clone()),
                &Geometry::LineString(resplit[candidate].clone()),
            )?;
            if kernel::is_1d_geometry(&overlap) {
                sources.push(entries[candidate].0);
            }
        }
        edge.set_sources(sources);
    }
    Ok(())
}

fn bbox_of(line: &LineString<f64>) -> Rect<f64> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::line_string;

    #[test]
    fn overlapping_entry_is_recorded_as_source() {
        let mut edges = vec![Edge::new(line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)])];
        let entries = vec![(InputId(0), line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)])];
        process_sources(&mut edges, &entries).unwrap();
        assert_eq!(edges[0].sources(), &[InputId(0)]);
    }

    #[test]
    fn disjoint_entry_is_not_recorded() {
        let mut edges = vec![Edge::new(line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)])];
        let entries = vec![(InputId(0), line_string![(x: 100.0, y: 100.0), (x: 110.0, y: 100.0)])];
        process_sources(&mut edges, &entries).unwrap();
        assert!(edges[0].sources().is_empty());
    }
}
