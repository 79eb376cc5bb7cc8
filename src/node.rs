use geo_types::Coord;

/// A distinct point that is the endpoint of one or more edges.
///
/// Created during the topological pass when a new endpoint coordinate is
/// first encountered; immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    coord: Coord<f64>,
}

impl Node {
    pub(crate) fn new(coord: Coord<f64>) -> Self {
        Node { coord }
    }

    /// The node's position.
    pub fn coord(&self) -> Coord<f64> {
        self.coord
    }
}
