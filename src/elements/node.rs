//! Node element - represents a point on the global axis

use serde::{Deserialize, Serialize};

/// A node in the 1D finite element mesh
///
/// Node ids are positional: a node's id is its index in the model's node
/// list, assigned when the node is added.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Node {
    /// Coordinate along the global axis
    pub x: f64,
}

impl Node {
    /// Create a new node at the given coordinate
    pub fn new(x: f64) -> Self {
        Self { x }
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        (other.x - self.x).abs()
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(1.5);
        assert_eq!(node.x, 1.5);
    }

    #[test]
    fn test_node_distance_is_unsigned() {
        let n1 = Node::new(3.0);
        let n2 = Node::new(-1.0);
        assert!((n1.distance_to(&n2) - 4.0).abs() < 1e-10);
        assert!((n2.distance_to(&n1) - 4.0).abs() < 1e-10);
    }
}
