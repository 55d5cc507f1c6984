//! Boundary conditions - prescribed displacements and forces

use serde::{Deserialize, Serialize};

/// Kind of boundary condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BcKind {
    /// Prescribes the displacement value directly
    Dirichlet,
    /// Prescribes a nodal force
    Neumann,
}

/// A boundary condition targeting a set of nodes at one local DOF
///
/// Dirichlet conditions fix the displacement at each targeted DOF;
/// Neumann conditions add a nodal force. Node sets and kinds arrive
/// already resolved from the input layer - the solver never sees named
/// sets or raw strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryCondition {
    /// Kind of condition
    pub kind: BcKind,
    /// Targeted node ids
    pub nodes: Vec<usize>,
    /// Local DOF index at each node
    pub local_dof: usize,
    /// Prescribed displacement (Dirichlet) or force (Neumann)
    pub value: f64,
}

impl BoundaryCondition {
    /// Create a new boundary condition
    pub fn new(kind: BcKind, nodes: Vec<usize>, local_dof: usize, value: f64) -> Self {
        Self {
            kind,
            nodes,
            local_dof,
            value,
        }
    }

    /// Create a Dirichlet condition prescribing a displacement
    pub fn dirichlet(nodes: Vec<usize>, local_dof: usize, value: f64) -> Self {
        Self::new(BcKind::Dirichlet, nodes, local_dof, value)
    }

    /// Create a Dirichlet condition fixing the targeted DOFs at zero
    pub fn fixed(nodes: Vec<usize>, local_dof: usize) -> Self {
        Self::dirichlet(nodes, local_dof, 0.0)
    }

    /// Create a Neumann condition prescribing a nodal force
    pub fn neumann(nodes: Vec<usize>, local_dof: usize, value: f64) -> Self {
        Self::new(BcKind::Neumann, nodes, local_dof, value)
    }
}
