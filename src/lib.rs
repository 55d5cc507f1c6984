//! Bar Solver - a native Rust 1D finite element library
//!
//! This library assembles and solves linear finite element problems for
//! axially loaded bar/truss structures with two-node elements,
//! supporting:
//! - Dirichlet (prescribed displacement) and Neumann (nodal force)
//!   boundary conditions
//! - Concentrated nodal loads
//! - Distributed body-force and gravity loads with consistent nodal
//!   load integration
//! - Symmetry-preserving Dirichlet elimination and a dense direct solve
//!
//! ## Example
//! ```rust
//! use bar_solver::prelude::*;
//!
//! let mut model = BarModel::new();
//!
//! // Material and mesh
//! let steel = model.add_material(Material::steel());
//! let n0 = model.add_node(Node::new(0.0));
//! let n1 = model.add_node(Node::new(1.0));
//! let n2 = model.add_node(Node::new(2.0));
//! let e0 = model.add_element(Element::new(n0, n1));
//! let e1 = model.add_element(Element::new(n1, n2));
//! model.add_block(ElementBlock::new(steel, 0.01, vec![e0, e1]));
//!
//! // Fix the left end, pull on the right end
//! model.add_boundary_condition(BoundaryCondition::fixed(vec![n0], 0));
//! model.add_concentrated_load(ConcentratedLoad::axial(n2, 1000.0));
//!
//! let solution = model.solve().unwrap();
//! assert!(solution.node_displacement(n2, 0).unwrap() > 0.0);
//! ```

pub mod assembly;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::elements::{Element, ElementBlock, Material, Node};
    pub use crate::error::{BarError, BarResult};
    pub use crate::loads::{
        BcKind, BoundaryCondition, ConcentratedLoad, DistributedKind, DistributedLoad,
    };
    pub use crate::math::{global_dof, DOF_PER_NODE};
    pub use crate::model::BarModel;
    pub use crate::results::Solution;
}
