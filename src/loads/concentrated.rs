//! Concentrated loads applied directly to nodes

use serde::{Deserialize, Serialize};

/// A concentrated force applied to a set of nodes at one local DOF
///
/// Semantically equivalent to a Neumann boundary condition but declared
/// in its own collection; both are merged additively into the global
/// force vector at assembly time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcentratedLoad {
    /// Targeted node ids
    pub nodes: Vec<usize>,
    /// Local DOF index at each node
    pub local_dof: usize,
    /// Force magnitude
    pub value: f64,
}

impl ConcentratedLoad {
    /// Create a new concentrated load
    pub fn new(nodes: Vec<usize>, local_dof: usize, value: f64) -> Self {
        Self {
            nodes,
            local_dof,
            value,
        }
    }

    /// Create an axial load on a single node
    pub fn axial(node: usize, value: f64) -> Self {
        Self::new(vec![node], 0, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axial_load() {
        let load = ConcentratedLoad::axial(4, -500.0);
        assert_eq!(load.nodes, vec![4]);
        assert_eq!(load.local_dof, 0);
        assert_eq!(load.value, -500.0);
    }
}
