use geo_types::{Polygon, Rect};
use geos::Geom;

use crate::error::{PlanarGraphError, Result};
use crate::index::SpatialIndex;
use crate::kernel;

/// For each face, find the other faces that fill its holes.
///
/// Returns, per face in `faces`, one entry per interior ring of that
/// face's polygon, each holding the indices of the faces whose exterior
/// lies inside that hole. A hole is filled by exactly one face when a
/// single face's exterior coincides with it; it's filled by several when
/// the hole is partitioned among adjacent faces, in which case all of
/// them are returned together so the caller can union them into the
/// hole's boundary.
///
/// Candidates are narrowed with a spatial index over face bounding boxes
/// before the exact `contains` check runs, the same two-phase shape as the
/// the original `holes()` helper: `face_si.intersection(hole.bounds)`
/// followed by `hole_polygon.contains(faces[i])`.
pub fn holes(faces: &[Polygon<f64>]) -> Result<Vec<Vec<Vec<usize>>>> {
    let mut index = SpatialIndex::new();
    for (i, face) in faces.iter().enumerate() {
        index.insert(i, bbox_of(face));
    }

    let mut out = Vec::with_capacity(faces.len());
    for (face_idx, face) in faces.iter().enumerate() {
        let mut per_hole = Vec::with_capacity(face.interiors().len());
        for interior in face.interiors() {
            let hole_polygon = Polygon::new(interior.clone(), Vec::new());
            let hole_geos = geos::Geometry::try_from(&hole_polygon).map_err(PlanarGraphError::from)?;
            let prepared = hole_geos.to_prepared_geom().map_err(PlanarGraphError::from)?;

            let mut fillers = Vec::new();
            for candidate in index.query(bbox_of(&hole_polygon)) {
                if candidate == face_idx {
                    continue;
                }
                let candidate_geos =
                    geos::Geometry::try_from(&faces[candidate]).map_err(PlanarGraphError::from)?;
                if !kernel::prepared_intersects(&prepared, &candidate_geos)? {
                    continue;
                }
                if kernel::prepared_contains(&prepared, &candidate_geos)? {
                    fillers.push(candidate);
                }
            }
            per_hole.push(fillers);
        }
        out.push(per_hole);
    }
    Ok(out)
}

fn bbox_of(polygon: &Polygon<f64>) -> Rect<f64> {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for c in polygon.exterior().coords() {
        min_x = min_x.min(c.x);
        min_y = min_y.min(c.y);
        max_x = max_x.max(c.x);
        max_y = max_y.max(c.y);
    }
    Rect::new(
        geo_types::Coord { x: min_x, y: min_y },
        geo_types::Coord { x: max_x, y: max_y },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::polygon;

    #[test]
    fn single_filler_face_is_found() {
        let outer = polygon![
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0), (x: 0.0, y: 0.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 2.0), (x: 1.0, y: 1.0)]],
        ];
        let inner = polygon![
            (x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 2.0), (x: 1.0, y: 1.0),
        ];
        let faces = vec![outer, inner];
        let result = holes(&faces).unwrap();
        assert_eq!(result[0].len(), 1);
        assert_eq!(result[0][0], vec![1]);
        assert!(result[1].is_empty());
    }
}
