use geo_types::Geometry;

use crate::adapters;
use crate::config::Config;
use crate::edge::Edge;
use crate::error::Result;
use crate::face::Face;
use crate::indices::InputId;
use crate::kernel;
use crate::node::Node;
use crate::planarize;
use crate::ring::Ring;
use crate::sources;
use crate::topology;

/// Accumulates input geometry before the graph is built.
///
/// Open for `add_geometry` calls; consuming `finalize` is the only way to
/// get a [`PlanarGraph`], so "already built" is a type-level fact rather
/// than a runtime flag the caller could forget to check — unlike the
/// original library's `_done` guard on a long-lived mutable object, here
/// the type system rejects calling `add_geometry` on an already-finalized
/// graph at compile time.
#[derive(Debug, Clone)]
pub struct PlanarGraphBuilder {
    config: Config,
    entries: Vec<geo_types::LineString<f64>>,
    sourced_entries: Vec<(InputId, geo_types::LineString<f64>)>,
    next_id: u64,
}

impl PlanarGraphBuilder {
    pub fn new(config: Config) -> Self {
        PlanarGraphBuilder {
            config,
            entries: Vec::new(),
            sourced_entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Add one input geometry's traces to the pending edge pool. Assigns
    /// it a fresh [`InputId`] when the builder is configured to track
    /// provenance.
    pub fn add_geometry(&mut self, geometry: &Geometry<f64>) -> Result<()> {
        let edges = adapters::edges_of(geometry)?;
        if self.config.bsrce() {
            let id = InputId(self.next_id);
            self.next_id += 1;
            for edge in &edges {
                self.sourced_entries.push((id, edge.clone()));
            }
        }
        self.entries.extend(edges);
        Ok(())
    }

    /// Consume the builder and build the graph.
    ///
    /// An empty builder (no geometry ever added) yields an empty graph
    /// rather than an error, matching the original library's early return
    /// when `self._entries` is empty and source tracking wasn't
    /// requested.
    pub fn finalize(self) -> Result<PlanarGraph> {
        if self.entries.is_empty() {
            return Ok(PlanarGraph {
                config: self.config,
                nodes: Vec::new(),
                edges: Vec::new(),
                faces: Vec::new(),
                rings: Vec::new(),
            });
        }

        let merged = planarize::geometric_process(&self.entries)?;
        let mut edges: Vec<Edge> = merged.into_iter().map(Edge::new).collect();

        let nodes = if self.config.bnode() {
            topology::build_nodes(&mut edges)
        } else {
            Vec::new()
        };

        let (faces, rings) = if self.config.bface() {
            let edge_geoms: Vec<_> = edges.iter().map(|edge| edge.geom().clone()).collect();
            let face_polygons = kernel::polygonize(&edge_geoms)?.0;
            topology::build_faces_and_rings(&mut edges, face_polygons)?
        } else {
            (Vec::new(), Vec::new())
        };

        if self.config.bsrce() {
            sources::process_sources(&mut edges, &self.sourced_entries)?;
        }

        Ok(PlanarGraph {
            config: self.config,
            nodes,
            edges,
            faces,
            rings,
        })
    }
}

/// A built planar graph: nodes, edges, faces, and the rings bounding
/// faces, read-only from here on.
#[derive(Debug, Clone)]
pub struct PlanarGraph {
    config: Config,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
    rings: Vec<Ring>,
}

impl PlanarGraph {
    /// The configuration the graph was built with.
    pub fn config(&self) -> Config {
        self.config
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
}
