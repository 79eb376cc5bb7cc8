use geo_types::{LineString, MultiLineString, MultiPolygon, Polygon};
use geos::Geom;

use crate::error::{PlanarGraphError, Result};

/// Façade over the operations this crate needs from an external geometry
/// kernel but `geo`/`geo-types` don't provide natively over line strings:
/// noding a bundle of possibly-overlapping lines into a maximal simple
/// arrangement, and recovering polygon faces from a noded arrangement.
///
/// `geo::algorithm::BooleanOps` covers polygon/polygon union, but has
/// nothing for `LineString`; `geos` (the real GEOS C++ bindings, built with
/// the `geo` feature for `geo-types` interop) is where JTS-family libraries
/// put these, matching the original library's own reliance on
/// `shapely.ops.unary_union`/`linemerge`/`polygonize` — themselves a GEOS
/// wrapper.
pub fn merge_lines(lines: &[LineString<f64>]) -> Result<MultiLineString<f64>> {
    if lines.is_empty() {
        return Ok(MultiLineString::new(Vec::new()));
    }
    let multi = MultiLineString::new(lines.to_vec());
    let geos_geom = geos::Geometry::try_from(&multi).map_err(PlanarGraphError::from)?;
    let unioned = geos_geom.unary_union().map_err(PlanarGraphError::from)?;
    let merged = unioned.line_merge().map_err(PlanarGraphError::from)?;
    let back: geo_types::Geometry<f64> = (&merged).try_into().map_err(PlanarGraphError::from)?;
    match back {
        geo_types::Geometry::LineString(ls) => Ok(MultiLineString::new(vec![ls])),
        geo_types::Geometry::MultiLineString(mls) => Ok(mls),
        other => Err(PlanarGraphError::Kernel(format!(
            "line_merge returned unexpected geometry kind: {other:?}"
        ))),
    }
}

/// Recover the polygon faces bounded by a set of noded, non-crossing lines.
pub fn polygonize(lines: &[LineString<f64>]) -> Result<MultiPolygon<f64>> {
    if lines.is_empty() {
        return Ok(MultiPolygon::new(Vec::new()));
    }
    let geoms: Result<Vec<geos::Geometry>> = lines
        .iter()
        .map(|ls| geos::Geometry::try_from(ls).map_err(PlanarGraphError::from))
        .collect();
    let geoms = geoms?;
    let refs: Vec<&geos::Geometry> = geoms.iter().collect();
    let polygonized = geos::Geometry::polygonize(&refs).map_err(PlanarGraphError::from)?;
    let back: geo_types::Geometry<f64> = (&polygonized).try_into().map_err(PlanarGraphError::from)?;
    match back {
        geo_types::Geometry::Polygon(p) => Ok(MultiPolygon::new(vec![p])),
        geo_types::Geometry::MultiPolygon(mp) => Ok(mp),
        geo_types::Geometry::GeometryCollection(collection) if collection.0.is_empty() => {
            Ok(MultiPolygon::new(Vec::new()))
        }
        other => Err(PlanarGraphError::Kernel(format!(
            "polygonize returned unexpected geometry kind: {other:?}"
        ))),
    }
}

/// Union a set of polygons into their combined area, following the
/// "multiple faces fill one hole" case where the hole boundary is the
/// union of the filling faces rather than any single one of them.
pub fn union_polygons(polygons: &[Polygon<f64>]) -> Result<MultiPolygon<f64>> {
    if polygons.is_empty() {
        return Ok(MultiPolygon::new(Vec::new()));
    }
    let multi = MultiPolygon::new(polygons.to_vec());
    let geos_geom = geos::Geometry::try_from(&multi).map_err(PlanarGraphError::from)?;
    let unioned = geos_geom.unary_union().map_err(PlanarGraphError::from)?;
    let back: geo_types::Geometry<f64> = (&unioned).try_into().map_err(PlanarGraphError::from)?;
    match back {
        geo_types::Geometry::Polygon(p) => Ok(MultiPolygon::new(vec![p])),
        geo_types::Geometry::MultiPolygon(mp) => Ok(mp),
        other => Err(PlanarGraphError::Kernel(format!(
            "union_polygons returned unexpected geometry kind: {other:?}"
        ))),
    }
}

/// `a.contains(b)`, via a prepared geometry so repeated containment checks
/// against the same `a` (as in floating-edge classification) don't re-pay
/// the preparation cost each call.
pub fn prepared_contains(a: &geos::PreparedGeometry, b: &geos::Geometry) -> Result<bool> {
    a.contains(b).map_err(PlanarGraphError::from)
}

/// `a.intersects(b)` via a prepared geometry.
pub fn prepared_intersects(a: &geos::PreparedGeometry, b: &geos::Geometry) -> Result<bool> {
    a.intersects(b).map_err(PlanarGraphError::from)
}

/// Exact intersection of two geometries, for narrowing spatial-index
/// candidates down to the precise overlap during source attribution.
pub fn intersection(
    a: &geo_types::Geometry<f64>,
    b: &geo_types::Geometry<f64>,
) -> Result<geo_types::Geometry<f64>> {
    let ga = geos::Geometry::try_from(a).map_err(PlanarGraphError::from)?;
    let gb = geos::Geometry::try_from(b).map_err(PlanarGraphError::from)?;
    let result = ga.intersection(&gb).map_err(PlanarGraphError::from)?;
    (&result).try_into().map_err(PlanarGraphError::from)
}

/// Whether a geometry is purely one-dimensional: a line string, a multi
/// line string, or a geometry collection that transitively contains one
/// and nothing of higher dimension. Used to decide whether an
/// intersection between a candidate edge and a re-split source entry is a
/// shared trace (1-D) versus a mere point touch or an areal overlap.
pub fn is_1d_geometry(geometry: &geo_types::Geometry<f64>) -> bool {
    use geo_types::Geometry::*;
    match geometry {
        LineString(ls) => !ls.0.is_empty(),
        MultiLineString(mls) => !mls.0.is_empty(),
        GeometryCollection(collection) => collection.0.iter().any(is_1d_geometry),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{line_string, polygon, Geometry};

    #[test]
    fn is_1d_geometry_accepts_line_strings() {
        let ls = Geometry::LineString(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]);
        assert!(is_1d_geometry(&ls));
    }

    #[test]
    fn is_1d_geometry_rejects_polygons() {
        let poly = Geometry::Polygon(geo_types::polygon![
            (x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 0.0),
        ]);
        assert!(!is_1d_geometry(&poly));
    }

    #[test]
    fn is_1d_geometry_rejects_empty_collection() {
        let empty = Geometry::GeometryCollection(geo_types::GeometryCollection(Vec::new()));
        assert!(!is_1d_geometry(&empty));
    }
}
