//! Elements and element blocks

use serde::{Deserialize, Serialize};

/// A two-node bar element
///
/// Connectivity is an ordered pair: `nodes[0]` is local node 0 and
/// `nodes[1]` is local node 1. The element owns no state beyond its
/// connectivity; length and section properties come from the mesh and
/// the owning block at assembly time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Element {
    /// Node ids of the two end nodes
    pub nodes: [usize; 2],
}

impl Element {
    /// Create a new element connecting two nodes
    pub fn new(i_node: usize, j_node: usize) -> Self {
        Self {
            nodes: [i_node, j_node],
        }
    }
}

/// An element block binding a material and section properties to a set
/// of elements
///
/// Every element must belong to exactly one block; the block supplies
/// the (E, A) pair used to form that element's local stiffness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementBlock {
    /// Material id (index into the model's material list)
    pub material: usize,
    /// Cross-sectional area shared by all elements in the block
    pub area: f64,
    /// Element ids covered by this block
    pub elements: Vec<usize>,
}

impl ElementBlock {
    /// Create a new block with the given material, area and elements
    pub fn new(material: usize, area: f64, elements: Vec<usize>) -> Self {
        Self {
            material,
            area,
            elements,
        }
    }

    /// Create a block with the default unit area
    pub fn with_unit_area(material: usize, elements: Vec<usize>) -> Self {
        Self::new(material, 1.0, elements)
    }
}
