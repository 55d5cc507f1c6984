//! Bar model - problem container and the assemble-and-solve pipeline

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::assembly::{self, SystemBuilder};
use crate::elements::{Element, ElementBlock, Material, Node};
use crate::error::{BarError, BarResult};
use crate::loads::{BoundaryCondition, ConcentratedLoad, DistributedLoad};
use crate::math::{self, DOF_PER_NODE};
use crate::results::Solution;

/// The 1D finite element model
///
/// Holds the resolved problem description: node coordinates, element
/// connectivity, materials, element blocks, boundary conditions and
/// loads. Ids are positional - each `add_*` method returns the index of
/// the added entity. The model is read-only during a solve; the global
/// system is built fresh on every [`BarModel::solve`] call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BarModel {
    /// Nodes in the mesh, indexed by node id
    pub nodes: Vec<Node>,
    /// Materials, indexed by material id
    pub materials: Vec<Material>,
    /// Elements, indexed by element id
    pub elements: Vec<Element>,
    /// Element blocks binding materials and section properties to elements
    pub blocks: Vec<ElementBlock>,
    /// Dirichlet and Neumann boundary conditions
    pub boundary_conditions: Vec<BoundaryCondition>,
    /// Concentrated nodal loads
    pub concentrated_loads: Vec<ConcentratedLoad>,
    /// Distributed element loads
    pub distributed_loads: Vec<DistributedLoad>,
}

impl BarModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its id
    pub fn add_node(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Add a material, returning its id
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Add an element, returning its id
    pub fn add_element(&mut self, element: Element) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Add an element block, returning its id
    pub fn add_block(&mut self, block: ElementBlock) -> usize {
        self.blocks.push(block);
        self.blocks.len() - 1
    }

    /// Add a boundary condition
    pub fn add_boundary_condition(&mut self, bc: BoundaryCondition) {
        self.boundary_conditions.push(bc);
    }

    /// Add a concentrated load
    pub fn add_concentrated_load(&mut self, load: ConcentratedLoad) {
        self.concentrated_loads.push(load);
    }

    /// Add a distributed load
    pub fn add_distributed_load(&mut self, load: DistributedLoad) {
        self.distributed_loads.push(load);
    }

    /// Total number of global DOFs
    pub fn num_dofs(&self) -> usize {
        self.nodes.len() * DOF_PER_NODE
    }

    /// Assemble and solve the model
    ///
    /// Pipeline: validate references, assemble the global (K, F) pair,
    /// snapshot it, eliminate Dirichlet DOFs and solve the modified
    /// system. The returned [`Solution`] carries the full displacement
    /// vector together with the pre-elimination stiffness and force
    /// artifacts for inspection and reaction recovery.
    pub fn solve(&self) -> BarResult<Solution> {
        self.validate()?;

        let element_block = self.element_block_map();

        let mut builder = SystemBuilder::new(self.nodes.len(), DOF_PER_NODE);
        assembly::assemble_stiffness(self, &mut builder)?;
        assembly::assemble_loads(self, &element_block, &mut builder)?;
        let (stiffness, force) = builder.finish();

        let prescribed = assembly::collect_dirichlet(self, DOF_PER_NODE)?;
        debug!(
            "solving {} DOFs with {} prescribed",
            self.num_dofs(),
            prescribed.len()
        );

        let mut k = stiffness.clone();
        let mut f = force.clone();
        assembly::eliminate_dirichlet(&mut k, &mut f, &prescribed);

        let displacements =
            math::solve_linear_system(&k, &f).ok_or(BarError::SingularMatrix)?;

        info!(
            "solved model: {} nodes, {} elements, {} DOFs",
            self.nodes.len(),
            self.elements.len(),
            self.num_dofs()
        );

        Ok(Solution {
            displacements,
            stiffness,
            force,
        })
    }

    /// Check every node/element/material/DOF reference before assembly
    ///
    /// Input-shape errors are surfaced here, naming the offending
    /// reference, so assembly never indexes out of bounds.
    fn validate(&self) -> BarResult<()> {
        let num_nodes = self.nodes.len();
        let num_elements = self.elements.len();

        for (element_id, element) in self.elements.iter().enumerate() {
            let [n0, n1] = element.nodes;
            for node in [n0, n1] {
                if node >= num_nodes {
                    return Err(BarError::NodeNotFound(node));
                }
            }
            if n0 == n1 {
                return Err(BarError::InvalidGeometry(format!(
                    "element {} references node {} twice",
                    element_id, n0
                )));
            }
        }

        for block in &self.blocks {
            if block.material >= self.materials.len() {
                return Err(BarError::MaterialNotFound(block.material));
            }
            for &element_id in &block.elements {
                if element_id >= num_elements {
                    return Err(BarError::ElementNotFound(element_id));
                }
            }
        }

        for bc in &self.boundary_conditions {
            self.check_nodal_target(&bc.nodes, bc.local_dof)?;
        }
        for load in &self.concentrated_loads {
            self.check_nodal_target(&load.nodes, load.local_dof)?;
        }

        for dload in &self.distributed_loads {
            for &element_id in &dload.elements {
                if element_id >= num_elements {
                    return Err(BarError::ElementNotFound(element_id));
                }
            }
        }

        Ok(())
    }

    fn check_nodal_target(&self, nodes: &[usize], local_dof: usize) -> BarResult<()> {
        for &node in nodes {
            if node >= self.nodes.len() {
                return Err(BarError::NodeNotFound(node));
            }
            if local_dof >= DOF_PER_NODE {
                return Err(BarError::DofOutOfRange {
                    node,
                    local_dof,
                    dof_per_node: DOF_PER_NODE,
                });
            }
        }
        Ok(())
    }

    /// Map each element id to the block that covers it
    fn element_block_map(&self) -> Vec<Option<usize>> {
        let mut map = vec![None; self.elements.len()];
        for (block_id, block) in self.blocks.iter().enumerate() {
            for &element_id in &block.elements {
                map[element_id] = Some(block_id);
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::DistributedKind;
    use approx::assert_relative_eq;

    fn two_node_bar(area: f64, e: f64, length: f64) -> BarModel {
        let mut model = BarModel::new();
        let mat = model.add_material(Material::with_modulus(e));
        let n0 = model.add_node(Node::new(0.0));
        let n1 = model.add_node(Node::new(length));
        let elem = model.add_element(Element::new(n0, n1));
        model.add_block(ElementBlock::new(mat, area, vec![elem]));
        model
    }

    #[test]
    fn test_single_element_cantilever() {
        let (area, e, length, force) = (0.02, 70e9, 1.5, 300.0);
        let mut model = two_node_bar(area, e, length);
        model.add_boundary_condition(BoundaryCondition::fixed(vec![0], 0));
        model.add_boundary_condition(BoundaryCondition::neumann(vec![1], 0, force));

        let solution = model.solve().unwrap();
        let expected = force * length / (area * e);
        assert_relative_eq!(solution.displacements[1], expected, max_relative = 1e-9);
        assert_relative_eq!(solution.displacements[0], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_unknown_node_in_bc_fails_before_assembly() {
        let mut model = two_node_bar(0.01, 210e9, 1.0);
        model.add_boundary_condition(BoundaryCondition::fixed(vec![99], 0));
        assert!(matches!(model.solve(), Err(BarError::NodeNotFound(99))));
    }

    #[test]
    fn test_local_dof_out_of_range_fails() {
        let mut model = two_node_bar(0.01, 210e9, 1.0);
        model.add_boundary_condition(BoundaryCondition::fixed(vec![0], 1));
        assert!(matches!(
            model.solve(),
            Err(BarError::DofOutOfRange { local_dof: 1, .. })
        ));
    }

    #[test]
    fn test_degenerate_element_fails() {
        let mut model = BarModel::new();
        let mat = model.add_material(Material::steel());
        let n0 = model.add_node(Node::new(2.0));
        let n1 = model.add_node(Node::new(2.0));
        let elem = model.add_element(Element::new(n0, n1));
        model.add_block(ElementBlock::new(mat, 0.01, vec![elem]));
        model.add_boundary_condition(BoundaryCondition::fixed(vec![n0], 0));

        assert!(matches!(model.solve(), Err(BarError::InvalidGeometry(_))));
    }

    #[test]
    fn test_non_positive_area_fails() {
        let mut model = two_node_bar(-0.01, 210e9, 1.0);
        model.add_boundary_condition(BoundaryCondition::fixed(vec![0], 0));
        assert!(matches!(model.solve(), Err(BarError::InvalidProperty(_))));
    }

    #[test]
    fn test_distributed_load_on_uncovered_element_fails() {
        let mut model = BarModel::new();
        let mat = model.add_material(Material::steel());
        let n0 = model.add_node(Node::new(0.0));
        let n1 = model.add_node(Node::new(1.0));
        let n2 = model.add_node(Node::new(2.0));
        let e0 = model.add_element(Element::new(n0, n1));
        let e1 = model.add_element(Element::new(n1, n2));
        // Block covers only the first element
        model.add_block(ElementBlock::new(mat, 0.01, vec![e0]));
        model.add_boundary_condition(BoundaryCondition::fixed(vec![n0], 0));
        model.add_distributed_load(DistributedLoad::new(
            DistributedKind::BodyForce,
            vec![e1],
            100.0,
            vec![1.0],
        ));

        assert!(matches!(
            model.solve(),
            Err(BarError::ElementNotInBlock(1))
        ));
    }

    #[test]
    fn test_prescribed_displacement_is_enforced_exactly() {
        let (area, e, length, force) = (0.01, 210e9, 2.0, 1000.0);
        let mut model = two_node_bar(area, e, length);
        model.add_boundary_condition(BoundaryCondition::dirichlet(vec![0], 0, 1e-3));
        model.add_boundary_condition(BoundaryCondition::neumann(vec![1], 0, force));

        let solution = model.solve().unwrap();
        assert_relative_eq!(solution.displacements[0], 1e-3, epsilon = 1e-15);
        let expected_tip = 1e-3 + force * length / (area * e);
        assert_relative_eq!(solution.displacements[1], expected_tip, max_relative = 1e-9);
    }
}
