//! Distributed loads over element sets

use serde::{Deserialize, Serialize};

/// Kind of distributed load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributedKind {
    /// Uniform body force per unit volume (the classical "BX" load)
    BodyForce,
    /// Gravity/acceleration load - scaled by the material density
    Gravity,
}

/// A distributed load applied over a set of elements
///
/// The direction is a unit vector with exactly one component in this 1D
/// formulation; its sign orients the load along the global axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Kind of load
    pub kind: DistributedKind,
    /// Targeted element ids
    pub elements: Vec<usize>,
    /// Load magnitude (force per volume for `BodyForce`, acceleration
    /// for `Gravity`)
    pub value: f64,
    /// Unit direction vector - must have exactly one component
    pub direction: Vec<f64>,
}

impl DistributedLoad {
    /// Create a new distributed load
    pub fn new(kind: DistributedKind, elements: Vec<usize>, value: f64, direction: Vec<f64>) -> Self {
        Self {
            kind,
            elements,
            value,
            direction,
        }
    }

    /// Create a uniform body-force load along the positive axis
    pub fn body_force(elements: Vec<usize>, value: f64) -> Self {
        Self::new(DistributedKind::BodyForce, elements, value, vec![1.0])
    }

    /// Create a gravity load acting along the negative axis
    pub fn gravity(elements: Vec<usize>, g: f64) -> Self {
        Self::new(DistributedKind::Gravity, elements, g, vec![-1.0])
    }
}
