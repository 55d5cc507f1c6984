//! Boundary conditions and load types

mod boundary;
mod concentrated;
mod distributed;

pub use boundary::{BcKind, BoundaryCondition};
pub use concentrated::ConcentratedLoad;
pub use distributed::{DistributedKind, DistributedLoad};
