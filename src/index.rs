use geo_types::{Coord, Rect};
use rstar::{RTree, RTreeObject, AABB};

/// A bounding-box index: insert items keyed by an integer id and a bbox,
/// then query for the ids of every item whose bbox overlaps a given bbox.
///
/// This is the one spatial-index shape the rest of the crate ever needs —
/// ring reconstruction, hole classification, point insertion, source
/// attribution, and floating-edge classification all narrow their candidate
/// sets through this wrapper before running an exact geometric predicate.
/// Backed by `rstar`, following the envelope-construction pattern
/// `geo-types` itself uses to implement `RTreeObject` for `LineString` and
/// `Polygon` (see `geo-types`'s own `rstar` integration).
#[derive(Debug, Default)]
pub struct SpatialIndex {
    tree: RTree<IndexedRect>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct IndexedRect {
    id: usize,
    rect: Rect<f64>,
}

impl RTreeObject for IndexedRect {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.rect.min().x, self.rect.min().y],
            [self.rect.max().x, self.rect.max().y],
        )
    }
}

impl SpatialIndex {
    /// Build an empty index.
    pub fn new() -> Self {
        SpatialIndex {
            tree: RTree::new(),
        }
    }

    /// Bulk-build an index from `(id, bbox)` pairs. Cheaper than repeated
    /// `insert` for a known-size batch.
    pub fn bulk_load(items: Vec<(usize, Rect<f64>)>) -> Self {
        let tree = RTree::bulk_load(
            items
                .into_iter()
                .map(|(id, rect)| IndexedRect { id, rect })
                .collect(),
        );
        SpatialIndex { tree }
    }

    /// Insert one item's id and bbox.
    pub fn insert(&mut self, id: usize, bbox: Rect<f64>) {
        self.tree.insert(IndexedRect { id, rect: bbox });
    }

    /// Return the ids of every inserted item whose bbox overlaps `bbox`.
    pub fn query(&self, bbox: Rect<f64>) -> Vec<usize> {
        let envelope = AABB::from_corners([bbox.min().x, bbox.min().y], [bbox.max().x, bbox.max().y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|item| item.id)
            .collect()
    }
}

/// Build a `Rect` containing a single point, expanded by `epsilon` in every
/// direction. Used to form the query bbox for ε-radius point lookups (point
/// insertion, source attribution).
pub fn epsilon_square(point: Coord<f64>, epsilon: f64) -> Rect<f64> {
    Rect::new(
        Coord {
            x: point.x - epsilon,
            y: point.y - epsilon,
        },
        Coord {
            x: point.x + epsilon,
            y: point.y + epsilon,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect<f64> {
        Rect::new(Coord { x: x0, y: y0 }, Coord { x: x1, y: y1 })
    }

    #[test]
    fn query_returns_only_overlapping_ids() {
        let mut index = SpatialIndex::new();
        index.insert(0, rect(0.0, 0.0, 1.0, 1.0));
        index.insert(1, rect(5.0, 5.0, 6.0, 6.0));

        let mut hits = index.query(rect(0.5, 0.5, 0.6, 0.6));
        hits.sort_unstable();
        assert_eq!(hits, vec![0]);
    }

    #[test]
    fn query_with_no_overlap_is_empty() {
        let mut index = SpatialIndex::new();
        index.insert(0, rect(0.0, 0.0, 1.0, 1.0));
        assert!(index.query(rect(10.0, 10.0, 11.0, 11.0)).is_empty());
    }
}
