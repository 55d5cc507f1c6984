//! Mesh entities: nodes, elements, materials and element blocks

mod block;
mod material;
mod node;

pub use block::{Element, ElementBlock};
pub use material::Material;
pub use node::Node;
