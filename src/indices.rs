use core::fmt;

macro_rules! index_newtype {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// The raw vector position this index refers to.
            pub fn get(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

index_newtype!(NodeIndex, "Index of a [`crate::Node`] in a [`crate::PlanarGraph`]'s node list.");
index_newtype!(EdgeIndex, "Index of an [`crate::Edge`] in a [`crate::PlanarGraph`]'s edge list.");
index_newtype!(FaceIndex, "Index of a [`crate::Face`] in a [`crate::PlanarGraph`]'s face list.");
index_newtype!(RingIndex, "Index of a [`crate::Ring`] in a [`crate::PlanarGraph`]'s ring list.");

/// Identifies one `add_geometry` call, returned only when source provenance
/// (`bsrce`) is enabled. Multiple edges extracted from a single input
/// geometry share the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputId(pub(crate) u64);

impl InputId {
    /// The raw identifier value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
