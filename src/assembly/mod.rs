//! Global system assembly and Dirichlet elimination
//!
//! The global stiffness matrix and force vector live in a mutable
//! [`SystemBuilder`] that is threaded through the assembly functions, so
//! assembly stays pure with respect to the model and is testable one
//! element at a time.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use log::debug;

use crate::error::{BarError, BarResult};
use crate::loads::{BcKind, DistributedKind};
use crate::math::{self, global_dof, Mat, Mat2, Vec as BarVec, Vec2};
use crate::model::BarModel;

/// Mutable accumulator for the global stiffness matrix and force vector
///
/// Created zero-initialized for `n_nodes * dof_per_node` DOFs; element
/// stiffness and load contributions are scatter-added in place, and
/// contributions targeting shared DOFs accumulate.
#[derive(Debug, Clone)]
pub struct SystemBuilder {
    k: Mat,
    f: BarVec,
    dof_per_node: usize,
}

impl SystemBuilder {
    /// Create a builder with zeroed stiffness and force for the given mesh size
    pub fn new(num_nodes: usize, dof_per_node: usize) -> Self {
        let num_dofs = num_nodes * dof_per_node;
        Self {
            k: Mat::zeros(num_dofs, num_dofs),
            f: BarVec::zeros(num_dofs),
            dof_per_node,
        }
    }

    /// Total number of global DOFs
    pub fn num_dofs(&self) -> usize {
        self.f.len()
    }

    /// Number of DOFs per node this builder was sized for
    pub fn dof_per_node(&self) -> usize {
        self.dof_per_node
    }

    /// Scatter-add a 2x2 element stiffness at the given global DOFs
    pub fn add_stiffness(&mut self, dofs: &[usize; 2], ke: &Mat2) {
        for a in 0..2 {
            for b in 0..2 {
                self.k[(dofs[a], dofs[b])] += ke[(a, b)];
            }
        }
    }

    /// Add a force contribution at the given global DOF
    pub fn add_force(&mut self, dof: usize, value: f64) {
        self.f[dof] += value;
    }

    /// Consume the builder, yielding the assembled (K, F) pair
    pub fn finish(self) -> (Mat, BarVec) {
        (self.k, self.f)
    }
}

/// Assemble every element's local stiffness into the global matrix
///
/// Walks the element blocks, forms each element's 2x2 local stiffness
/// from the block's (E, A) and the element length, and scatter-adds it
/// through the DOF indexer. Fails on non-positive modulus or area
/// (reported with the block id) and on degenerate elements (reported
/// with the element id and its node pair).
pub fn assemble_stiffness(model: &BarModel, builder: &mut SystemBuilder) -> BarResult<()> {
    let dof_per_node = builder.dof_per_node();

    for (block_id, block) in model.blocks.iter().enumerate() {
        let material = model
            .materials
            .get(block.material)
            .ok_or(BarError::MaterialNotFound(block.material))?;

        if material.e <= 0.0 {
            return Err(BarError::InvalidProperty(format!(
                "block {}: modulus must be positive, got {}",
                block_id, material.e
            )));
        }
        if block.area <= 0.0 {
            return Err(BarError::InvalidProperty(format!(
                "block {}: area must be positive, got {}",
                block_id, block.area
            )));
        }

        for &element_id in &block.elements {
            let element = model
                .elements
                .get(element_id)
                .ok_or(BarError::ElementNotFound(element_id))?;

            let length = element_length(model, element_id)?;
            let ke = math::bar_stiffness(material.e, block.area, length);

            let [n0, n1] = element.nodes;
            let dofs = [
                global_dof(n0, 0, dof_per_node),
                global_dof(n1, 0, dof_per_node),
            ];
            builder.add_stiffness(&dofs, &ke);
        }
    }

    debug!(
        "assembled stiffness for {} elements in {} blocks ({} DOFs)",
        model.elements.len(),
        model.blocks.len(),
        builder.num_dofs()
    );

    Ok(())
}

/// Assemble all load sources into the global force vector
///
/// Neumann boundary conditions and concentrated loads are merged
/// additively; distributed loads are converted to consistent end-node
/// forces (each end node receives half the total element force).
/// `element_block` maps each element id to its owning block, if any.
pub fn assemble_loads(
    model: &BarModel,
    element_block: &[Option<usize>],
    builder: &mut SystemBuilder,
) -> BarResult<()> {
    let dof_per_node = builder.dof_per_node();

    // Neumann boundary conditions
    for bc in &model.boundary_conditions {
        if bc.kind != BcKind::Neumann {
            continue;
        }
        for &node in &bc.nodes {
            builder.add_force(global_dof(node, bc.local_dof, dof_per_node), bc.value);
        }
    }

    // Concentrated loads - an alternative place to define nodal forces,
    // merged additively with Neumann conditions
    for load in &model.concentrated_loads {
        for &node in &load.nodes {
            builder.add_force(global_dof(node, load.local_dof, dof_per_node), load.value);
        }
    }

    // Distributed loads
    for dload in &model.distributed_loads {
        let sign = direction_sign(&dload.direction)?;

        for &element_id in &dload.elements {
            let block_id = element_block
                .get(element_id)
                .copied()
                .flatten()
                .ok_or(BarError::ElementNotInBlock(element_id))?;
            let block = &model.blocks[block_id];
            let length = element_length(model, element_id)?;

            // Total equivalent element force
            let q = match dload.kind {
                DistributedKind::BodyForce => dload.value * block.area * length * sign,
                DistributedKind::Gravity => {
                    let material = model
                        .materials
                        .get(block.material)
                        .ok_or(BarError::MaterialNotFound(block.material))?;
                    if material.rho < 0.0 {
                        return Err(BarError::InvalidProperty(format!(
                            "material {}: density must be non-negative, got {}",
                            block.material, material.rho
                        )));
                    }
                    material.rho * block.area * length * dload.value * sign
                }
            };

            // Consistent load for a linear bar under constant body
            // force: each end node receives Q/2
            let qe = Vec2::repeat(q / 2.0);
            let [n0, n1] = model.elements[element_id].nodes;
            builder.add_force(global_dof(n0, 0, dof_per_node), qe[0]);
            builder.add_force(global_dof(n1, 0, dof_per_node), qe[1]);
        }
    }

    debug!(
        "assembled loads: {} boundary conditions, {} concentrated, {} distributed",
        model.boundary_conditions.len(),
        model.concentrated_loads.len(),
        model.distributed_loads.len()
    );

    Ok(())
}

/// Collect prescribed displacements as a DOF -> value map
///
/// Identical (DOF, value) pairs from separate conditions are idempotent;
/// two differing values on one DOF are an ambiguous constraint and fail
/// with both values reported.
pub fn collect_dirichlet(model: &BarModel, dof_per_node: usize) -> BarResult<BTreeMap<usize, f64>> {
    let mut prescribed = BTreeMap::new();

    for bc in &model.boundary_conditions {
        if bc.kind != BcKind::Dirichlet {
            continue;
        }
        for &node in &bc.nodes {
            let dof = global_dof(node, bc.local_dof, dof_per_node);
            match prescribed.entry(dof) {
                Entry::Vacant(entry) => {
                    entry.insert(bc.value);
                }
                Entry::Occupied(entry) => {
                    let existing = *entry.get();
                    if (existing - bc.value).abs() > 1e-12 {
                        return Err(BarError::ConflictingConstraint {
                            dof,
                            first: existing,
                            second: bc.value,
                        });
                    }
                }
            }
        }
    }

    Ok(prescribed)
}

/// Enforce prescribed displacements by row/column modification
///
/// For each constrained DOF `i` with value `u_i`: move the known
/// contribution `K[j,i] * u_i` to the load side for every other DOF `j`,
/// zero row and column `i`, then set `K[i,i] = 1` and `F[i] = u_i` so the
/// row trivially enforces the prescribed value. Symmetry is preserved and
/// the DOF numbering is unchanged, keeping the eliminated system aligned
/// with the assembled artifacts.
pub fn eliminate_dirichlet(k: &mut Mat, f: &mut BarVec, prescribed: &BTreeMap<usize, f64>) {
    let num_dofs = f.len();

    for (&i, &value) in prescribed {
        for j in 0..num_dofs {
            if j != i {
                f[j] -= k[(j, i)] * value;
            }
        }
        for j in 0..num_dofs {
            k[(i, j)] = 0.0;
            k[(j, i)] = 0.0;
        }
        k[(i, i)] = 1.0;
        f[i] = value;
    }

    debug!("eliminated {} prescribed DOFs", prescribed.len());
}

fn element_length(model: &BarModel, element_id: usize) -> BarResult<f64> {
    let element = model
        .elements
        .get(element_id)
        .ok_or(BarError::ElementNotFound(element_id))?;
    let [n0, n1] = element.nodes;
    let x0 = model
        .nodes
        .get(n0)
        .ok_or(BarError::NodeNotFound(n0))?;
    let x1 = model
        .nodes
        .get(n1)
        .ok_or(BarError::NodeNotFound(n1))?;

    let length = x0.distance_to(x1);
    if length < 1e-10 {
        return Err(BarError::InvalidGeometry(format!(
            "zero-length element {} between nodes {} and {}",
            element_id, n0, n1
        )));
    }
    Ok(length)
}

fn direction_sign(direction: &[f64]) -> BarResult<f64> {
    if direction.len() != 1 {
        return Err(BarError::InvalidDirection(format!(
            "1D problem expects one direction component, got {:?}",
            direction
        )));
    }
    if direction[0] > 0.0 {
        Ok(1.0)
    } else if direction[0] < 0.0 {
        Ok(-1.0)
    } else {
        Err(BarError::InvalidDirection(format!(
            "direction component must be non-zero, got {}",
            direction[0]
        )))
    }
}
