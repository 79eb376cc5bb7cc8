use core::fmt;

/// Errors produced while building or finalizing a [`crate::PlanarGraph`].
///
/// All of these abort `finalize` before it returns, the way any other error
/// in this crate does: there is no partially-built graph to observe
/// afterwards, since the builder that held the pending state was consumed by
/// the call.
#[derive(Debug)]
pub enum PlanarGraphError {
    /// An adapter in [`crate::adapters`] was asked to extract edges from a
    /// `geo_types::Geometry` variant it does not know how to decompose.
    ///
    /// Every variant that exists today is handled; this is kept for
    /// forward-compatibility with future `geo-types` releases.
    InvalidGeometryKind {
        /// The `geo_types::Geometry` variant name that had no adapter rule.
        kind: &'static str,
    },

    /// [`crate::ring_utils::orientation`] was given an edge whose coordinates
    /// are not a contiguous subsequence of the reference ring in either
    /// direction.
    OrientationMismatch,

    /// [`crate::ring_utils::build_ring`] could not find an edge meeting the
    /// current pivot coordinate before exhausting the supplied edge bag.
    RingReconstructionFailed,

    /// An invariant the topology pipeline depends on did not hold.
    ///
    /// In particular, a floating edge (§4.9 of SPEC_FULL.md) was found
    /// contained in more than one face's polygon, which the source this
    /// crate is based on only asserted on in debug builds. Here it is a
    /// real error in every build.
    InvariantViolated {
        /// Human-readable description of which invariant failed and where.
        detail: String,
    },

    /// The `geos` geometry kernel rejected an operation or a conversion
    /// between `geo_types` and `geos::Geometry` failed.
    Kernel(String),
}

impl fmt::Display for PlanarGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanarGraphError::InvalidGeometryKind { kind } => {
                write!(f, "no edge-extraction rule for geometry kind {kind}")
            }
            PlanarGraphError::OrientationMismatch => {
                write!(f, "orientation: edge is not a subsequence of the reference ring in either direction")
            }
            PlanarGraphError::RingReconstructionFailed => {
                write!(f, "build_ring: no remaining edge meets the current pivot")
            }
            PlanarGraphError::InvariantViolated { detail } => {
                write!(f, "invariant violated: {detail}")
            }
            PlanarGraphError::Kernel(message) => {
                write!(f, "geometry kernel error: {message}")
            }
        }
    }
}

impl std::error::Error for PlanarGraphError {}

impl From<geos::Error> for PlanarGraphError {
    fn from(err: geos::Error) -> Self {
        PlanarGraphError::Kernel(err.to_string())
    }
}

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, PlanarGraphError>;
