//! Mathematical utilities for the 1D bar formulation

use nalgebra::{DMatrix, DVector, Matrix2, Vector2};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// 2x2 matrix for the two-node bar element stiffness
pub type Mat2 = Matrix2<f64>;
/// 2-element vector for bar element forces/displacements
pub type Vec2 = Vector2<f64>;

/// Number of degrees of freedom per node in the axial formulation
pub const DOF_PER_NODE: usize = 1;

/// Compute the global degree-of-freedom index for a node and local DOF.
///
/// This is the single source of truth for the (node, local DOF) to
/// matrix/vector index mapping. Assumes a uniform number of DOFs per
/// node across the mesh.
///
/// GLOBAL DOF = NODE NUMBER x NUMBER OF DOF PER NODE + LOCAL DOF
pub fn global_dof(node: usize, local_dof: usize, dof_per_node: usize) -> usize {
    debug_assert!(
        local_dof < dof_per_node,
        "local DOF {} out of range for {} DOF per node",
        local_dof,
        dof_per_node
    );
    node * dof_per_node + local_dof
}

/// Compute the local stiffness matrix for a two-node bar element
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `a` - Cross-sectional area
/// * `length` - Element length
///
/// # Returns
/// 2x2 local stiffness matrix `(E*A/L) * [[1, -1], [-1, 1]]`.
/// The result is symmetric and positive semi-definite (rank 1 - an
/// unconstrained bar carries one rigid-body mode).
pub fn bar_stiffness(e: f64, a: f64, length: f64) -> Mat2 {
    let ea_l = e * a / length;

    Mat2::new(ea_l, -ea_l, -ea_l, ea_l)
}

/// Solve a linear system using LU decomposition
///
/// Returns `None` if the matrix is singular.
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_global_dof_is_bijective() {
        // Every (node, local DOF) pair must map to a unique index in
        // [0, n_nodes * dof_per_node) and cover the whole range.
        for dof_per_node in 1..4 {
            let n_nodes = 7;
            let mut seen = vec![false; n_nodes * dof_per_node];
            for node in 0..n_nodes {
                for local in 0..dof_per_node {
                    let i = global_dof(node, local, dof_per_node);
                    assert!(i < seen.len());
                    assert!(!seen[i], "index {} mapped twice", i);
                    seen[i] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_bar_stiffness_values() {
        let k = bar_stiffness(210e9, 0.01, 2.0);
        let ea_l = 210e9 * 0.01 / 2.0;

        assert_relative_eq!(k[(0, 0)], ea_l, epsilon = 1e-6);
        assert_relative_eq!(k[(0, 1)], -ea_l, epsilon = 1e-6);
        assert_relative_eq!(k[(1, 0)], -ea_l, epsilon = 1e-6);
        assert_relative_eq!(k[(1, 1)], ea_l, epsilon = 1e-6);
    }

    #[test]
    fn test_bar_stiffness_is_singular_alone() {
        // Rank 1: rows sum to zero (rigid-body translation mode).
        let k = bar_stiffness(200e9, 0.005, 1.5);
        assert_relative_eq!(k[(0, 0)] + k[(0, 1)], 0.0, epsilon = 1e-6);
        assert_relative_eq!(k[(1, 0)] + k[(1, 1)], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_solve_linear_system() {
        let a = Mat::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 4.0]);
        let b = Vec::from_vec(vec![2.0, 8.0]);
        let x = solve_linear_system(&a, &b).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_singular_system_returns_none() {
        let a = Mat::from_row_slice(2, 2, &[1.0, -1.0, -1.0, 1.0]);
        let b = Vec::from_vec(vec![1.0, 0.0]);
        assert!(solve_linear_system(&a, &b).is_none());
    }
}
