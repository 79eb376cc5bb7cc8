use geo_types::LineString;

use crate::indices::{FaceIndex, InputId, NodeIndex};

/// A maximal, simple (non-self-intersecting) polyline between two nodes.
///
/// This is based on the planar-graph `Edge` the rest of this crate is
/// modeled on: a one-dimensional line whose endpoints are nodes and whose
/// interior contains no node and touches no other edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    geom: LineString<f64>,
    start_node: Option<NodeIndex>,
    end_node: Option<NodeIndex>,
    left_face: Option<FaceIndex>,
    right_face: Option<FaceIndex>,
    sources: Vec<InputId>,
}

impl Edge {
    pub(crate) fn new(geom: LineString<f64>) -> Self {
        Edge {
            geom,
            start_node: None,
            end_node: None,
            left_face: None,
            right_face: None,
            sources: Vec::new(),
        }
    }

    /// The edge's coordinate sequence. The first and last coordinates are
    /// the positions of `start_node` and `end_node` once those are set.
    pub fn geom(&self) -> &LineString<f64> {
        &self.geom
    }

    /// The node at the start of the stored coordinate order, once the
    /// topological pass has run.
    pub fn start_node(&self) -> Option<NodeIndex> {
        self.start_node
    }

    /// The node at the end of the stored coordinate order, once the
    /// topological pass has run.
    pub fn end_node(&self) -> Option<NodeIndex> {
        self.end_node
    }

    /// The face lying to the left of the edge when walking from
    /// `start_node` to `end_node` in the stored coordinate order.
    pub fn left_face(&self) -> Option<FaceIndex> {
        self.left_face
    }

    /// The face lying to the right of the edge when walking from
    /// `start_node` to `end_node` in the stored coordinate order.
    pub fn right_face(&self) -> Option<FaceIndex> {
        self.right_face
    }

    /// Identifiers of the input geometries whose traces contributed to this
    /// edge, sorted and deduplicated. Empty unless provenance was requested.
    pub fn sources(&self) -> &[InputId] {
        &self.sources
    }

    pub(crate) fn set_start_node(&mut self, node: NodeIndex) {
        self.start_node = Some(node);
    }

    pub(crate) fn set_end_node(&mut self, node: NodeIndex) {
        self.end_node = Some(node);
    }

    pub(crate) fn set_left_face_if_unset(&mut self, face: FaceIndex) {
        if self.left_face.is_none() {
            self.left_face = Some(face);
        }
    }

    pub(crate) fn set_right_face_if_unset(&mut self, face: FaceIndex) {
        if self.right_face.is_none() {
            self.right_face = Some(face);
        }
    }

    pub(crate) fn set_both_faces(&mut self, face: FaceIndex) {
        self.left_face = Some(face);
        self.right_face = Some(face);
    }

    pub(crate) fn set_sources(&mut self, mut sources: Vec<InputId>) {
        sources.sort_unstable();
        sources.dedup();
        self.sources = sources;
    }
}
