use geo_types::{Geometry, LineString};

use crate::error::{PlanarGraphError, Result};

/// Flatten any `geo_types::Geometry` into the line strings it contributes
/// to a planar graph.
///
/// Points and multipoints contribute nothing (a planar graph has no
/// zero-dimensional edges); polygons contribute their exterior and every
/// interior ring; geometry collections recurse and flatten. This mirrors
/// the per-geometry-kind dispatch the original library performs by
/// `__class__`, done here with a `match` over `Geometry`'s variants.
pub fn edges_of(geometry: &Geometry<f64>) -> Result<Vec<LineString<f64>>> {
    let mut out = Vec::new();
    collect_edges(geometry, &mut out)?;
    Ok(out)
}

fn collect_edges(geometry: &Geometry<f64>, out: &mut Vec<LineString<f64>>) -> Result<()> {
    match geometry {
        Geometry::Point(_) | Geometry::MultiPoint(_) => {}
        Geometry::Line(line) => {
            out.push(LineString::new(vec![line.start, line.end]));
        }
        Geometry::LineString(line_string) => {
            out.push(line_string.clone());
        }
        Geometry::MultiLineString(multi) => {
            out.extend(multi.iter().cloned());
        }
        Geometry::Polygon(polygon) => {
            out.push(polygon.exterior().clone());
            out.extend(polygon.interiors().iter().cloned());
        }
        Geometry::MultiPolygon(multi) => {
            for polygon in multi {
                out.push(polygon.exterior().clone());
                out.extend(polygon.interiors().iter().cloned());
            }
        }
        Geometry::GeometryCollection(collection) => {
            for inner in collection {
                collect_edges(inner, out)?;
            }
        }
        Geometry::Rect(rect) => {
            out.push(rect.to_polygon().exterior().clone());
        }
        Geometry::Triangle(triangle) => {
            out.push(triangle.to_polygon().exterior().clone());
        }
        #[allow(unreachable_patterns)]
        _ => {
            return Err(PlanarGraphError::InvalidGeometryKind {
                kind: "unsupported geometry variant",
            })
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{coord, line_string, polygon, Geometry, MultiPoint, Point};

    #[test]
    fn linestring_passes_through_unchanged() {
        let ls = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)];
        let edges = edges_of(&Geometry::LineString(ls.clone())).unwrap();
        assert_eq!(edges, vec![ls]);
    }

    #[test]
    fn polygon_yields_exterior_and_interiors() {
        let poly = polygon![
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0), (x: 0.0, y: 0.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 2.0), (x: 1.0, y: 1.0)]],
        ];
        let edges = edges_of(&Geometry::Polygon(poly)).unwrap();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn points_contribute_no_edges() {
        let multi = MultiPoint::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        let edges = edges_of(&Geometry::MultiPoint(multi)).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn geometry_collection_recurses_and_flattens() {
        let a = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)]);
        let b = Geometry::LineString(line_string![(x: 1.0, y: 0.0), (x: 1.0, y: 1.0)]);
        let nested = Geometry::GeometryCollection(geo_types::GeometryCollection(vec![a, b]));
        let outer = Geometry::GeometryCollection(geo_types::GeometryCollection(vec![
            nested,
            Geometry::Point(Point::from(coord! { x: 5.0, y: 5.0 })),
        ]));
        let edges = edges_of(&outer).unwrap();
        assert_eq!(edges.len(), 2);
    }
}
