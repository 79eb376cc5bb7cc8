//! Build a planar graph — nodes, edges, faces, and the rings bounding
//! them — from one or more 2-D [`geo_types::Geometry`] inputs.
//!
//! Start with [`PlanarGraphBuilder::new`], feed it geometry via
//! [`PlanarGraphBuilder::add_geometry`], then call
//! [`PlanarGraphBuilder::finalize`] to get a [`PlanarGraph`]. [`Config`]
//! controls how much of the graph gets built: just the noded edges, plus
//! deduplicated nodes, plus polygon faces and their bounding rings, plus
//! per-edge source provenance back to the input geometries that
//! contributed to it.
//!
//! ```
//! use planargraph::{Config, PlanarGraphBuilder};
//! use geo_types::{line_string, Geometry};
//!
//! let mut builder = PlanarGraphBuilder::new(Config::new(false, false, true, false));
//! builder
//!     .add_geometry(&Geometry::LineString(line_string![
//!         (x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0),
//!         (x: 0.0, y: 4.0), (x: 0.0, y: 0.0),
//!     ]))
//!     .unwrap();
//! let graph = builder.finalize().unwrap();
//! assert_eq!(graph.faces().len(), 1);
//! ```

mod adapters;
mod config;
mod edge;
mod error;
mod face;
mod graph;
mod holes;
mod index;
mod indices;
mod kernel;
mod node;
mod planarize;
mod point_insertion;
mod ring;
mod ring_utils;
mod sources;
mod topology;

pub use adapters::edges_of;
pub use config::Config;
pub use edge::Edge;
pub use error::{PlanarGraphError, Result};
pub use face::Face;
pub use graph::{PlanarGraph, PlanarGraphBuilder};
pub use indices::{EdgeIndex, FaceIndex, InputId, NodeIndex, RingIndex};
pub use node::Node;
pub use ring::Ring;
