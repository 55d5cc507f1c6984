//! Result types for a solved model

use serde::{Deserialize, Serialize};

use crate::error::{BarError, BarResult};
use crate::math::{global_dof, Mat, Vec as BarVec, DOF_PER_NODE};

/// Solution of an assemble-and-solve run
///
/// `stiffness` and `force` are the assembled pre-elimination artifacts:
/// the stiffness matrix before Dirichlet rows/columns were modified and
/// the loads-only force vector. Keeping them under the original DOF
/// numbering allows reaction recovery at constrained DOFs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Full nodal displacement vector, prescribed values included
    pub displacements: BarVec,
    /// Assembled global stiffness matrix, before elimination
    pub stiffness: Mat,
    /// Assembled global force vector, before elimination
    pub force: BarVec,
}

impl Solution {
    /// Displacement at a node's local DOF
    pub fn node_displacement(&self, node: usize, local_dof: usize) -> BarResult<f64> {
        if local_dof >= DOF_PER_NODE {
            return Err(BarError::DofOutOfRange {
                node,
                local_dof,
                dof_per_node: DOF_PER_NODE,
            });
        }
        let dof = global_dof(node, local_dof, DOF_PER_NODE);
        if dof >= self.displacements.len() {
            return Err(BarError::NodeNotFound(node));
        }
        Ok(self.displacements[dof])
    }

    /// Recover nodal reactions from the pre-elimination system
    ///
    /// `R = K_original * u - F_original`; entries at unconstrained DOFs
    /// are zero up to round-off.
    pub fn reactions(&self) -> BarVec {
        &self.stiffness * &self.displacements - &self.force
    }

    /// Serialize the solution artifacts to pretty-printed JSON
    pub fn to_json(&self) -> BarResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_solution() -> Solution {
        // One bar with unit stiffness, fixed at DOF 0, unit tip load
        let k = 4.0;
        Solution {
            displacements: BarVec::from_vec(vec![0.0, 0.25]),
            stiffness: Mat::from_row_slice(2, 2, &[k, -k, -k, k]),
            force: BarVec::from_vec(vec![0.0, 1.0]),
        }
    }

    #[test]
    fn test_node_displacement_lookup() {
        let solution = sample_solution();
        assert_relative_eq!(solution.node_displacement(1, 0).unwrap(), 0.25);
        assert!(matches!(
            solution.node_displacement(5, 0),
            Err(BarError::NodeNotFound(5))
        ));
        assert!(matches!(
            solution.node_displacement(0, 3),
            Err(BarError::DofOutOfRange { .. })
        ));
    }

    #[test]
    fn test_reactions_balance_applied_load() {
        let solution = sample_solution();
        let r = solution.reactions();
        assert_relative_eq!(r[0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(r[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_to_json_round_trip() {
        let solution = sample_solution();
        let json = solution.to_json().unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(back.displacements[1], 0.25, epsilon = 1e-15);
        assert_relative_eq!(back.stiffness[(0, 1)], -4.0, epsilon = 1e-15);
    }
}
