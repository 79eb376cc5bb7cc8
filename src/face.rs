use geo_types::Polygon;

use crate::indices::RingIndex;

/// A simply-connected bounded region cut out by the graph's edges.
///
/// The unbounded exterior of the plane is never represented as a `Face`.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    geom: Polygon<f64>,
    extring: Option<RingIndex>,
    intrings: Vec<RingIndex>,
}

impl Face {
    pub(crate) fn new(geom: Polygon<f64>) -> Self {
        Face {
            geom,
            extring: None,
            intrings: Vec::new(),
        }
    }

    /// The face's polygon, as produced by polygonizing the graph's edges.
    pub fn geom(&self) -> &Polygon<f64> {
        &self.geom
    }

    /// Index of the ring bounding this face's outer perimeter.
    pub fn extring(&self) -> Option<RingIndex> {
        self.extring
    }

    /// Indices of the rings bounding this face's holes, if any.
    pub fn intrings(&self) -> &[RingIndex] {
        &self.intrings
    }

    pub(crate) fn set_extring(&mut self, ring: RingIndex) {
        self.extring = Some(ring);
    }

    pub(crate) fn push_intring(&mut self, ring: RingIndex) {
        self.intrings.push(ring);
    }
}
