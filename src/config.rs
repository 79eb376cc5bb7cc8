/// Which parts of the graph to build.
///
/// The four flags form an implication lattice, `bsrce ⇒ btopo ⇒ (bnode ∧
/// bface)`: asking for source provenance requires the topological
/// cross-links, and asking for topology requires both nodes and faces.
/// [`Config::new`] normalizes a combination that violates the lattice by
/// *promoting* the weaker flags rather than rejecting the combination, which
/// matches the planar-graph library this crate is modeled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    bnode: bool,
    bface: bool,
    btopo: bool,
    bsrce: bool,
}

impl Config {
    /// Build a normalized configuration from the four requested flags.
    pub fn new(bnode: bool, bface: bool, btopo: bool, bsrce: bool) -> Self {
        // source provenance needs topology; topology needs nodes and faces.
        let btopo = btopo || bsrce;
        let bnode = bnode || btopo;
        let bface = bface || btopo;
        Config {
            bnode,
            bface,
            btopo,
            bsrce,
        }
    }

    /// Build nodes (distinct endpoint coordinates).
    pub fn bnode(self) -> bool {
        self.bnode
    }

    /// Build faces (bounded regions cut out by the edges).
    pub fn bface(self) -> bool {
        self.bface
    }

    /// Build the topological cross-links between edges, faces, and rings.
    pub fn btopo(self) -> bool {
        self.btopo
    }

    /// Compute per-edge source provenance.
    pub fn bsrce(self) -> bool {
        self.bsrce
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn bsrce_promotes_topology_nodes_and_faces() {
        let config = Config::new(false, false, false, true);
        assert!(config.bsrce());
        assert!(config.btopo());
        assert!(config.bnode());
        assert!(config.bface());
    }

    #[test]
    fn btopo_promotes_nodes_and_faces_only() {
        let config = Config::new(false, false, true, false);
        assert!(config.btopo());
        assert!(config.bnode());
        assert!(config.bface());
        assert!(!config.bsrce());
    }

    #[test]
    fn independent_flags_are_left_alone() {
        let config = Config::new(true, false, false, false);
        assert!(config.bnode());
        assert!(!config.bface());
        assert!(!config.btopo());
        assert!(!config.bsrce());
    }
}
