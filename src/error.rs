//! Error types for the bar solver

use thiserror::Error;

/// Main error type for solver operations
#[derive(Error, Debug)]
pub enum BarError {
    #[error("Node {0} not found in model")]
    NodeNotFound(usize),

    #[error("Element {0} not found in model")]
    ElementNotFound(usize),

    #[error("Material {0} not found in model")]
    MaterialNotFound(usize),

    #[error("Element {0} is not covered by any element block")]
    ElementNotInBlock(usize),

    #[error("Local DOF {local_dof} at node {node} is out of range (dof per node = {dof_per_node})")]
    DofOutOfRange {
        node: usize,
        local_dof: usize,
        dof_per_node: usize,
    },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid property: {0}")]
    InvalidProperty(String),

    #[error("Invalid load direction: {0}")]
    InvalidDirection(String),

    #[error("DOF {dof} has conflicting prescribed displacements {first} and {second}")]
    ConflictingConstraint { dof: usize, first: f64, second: f64 },

    #[error("Singular stiffness matrix - model may be unstable or have insufficient supports")]
    SingularMatrix,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for solver operations
pub type BarResult<T> = Result<T, BarError>;
