//! Bar Solver Example - Hanging steel rod

use bar_solver::prelude::*;

fn main() {
    env_logger::init();

    println!("=== Bar Solver Example: Hanging Steel Rod ===\n");

    // A 2 m steel rod hanging from its top end, loaded by its own
    // weight plus a 1 kN pull at the free end.
    //
    //   N0  (fixed)
    //   |
    //   E0
    //   |
    //   N1
    //   |
    //   E1
    //   |
    //   N2  <- 1 kN
    //
    let area = 0.01; // 10 cm x 10 cm cross section
    let tip_force = 1000.0;
    let g = 9.81;

    let mut model = BarModel::new();

    let steel = model.add_material(Material::steel());

    let n0 = model.add_node(Node::new(0.0));
    let n1 = model.add_node(Node::new(1.0));
    let n2 = model.add_node(Node::new(2.0));

    let e0 = model.add_element(Element::new(n0, n1));
    let e1 = model.add_element(Element::new(n1, n2));
    model.add_block(ElementBlock::new(steel, area, vec![e0, e1]));

    // Fix the top end
    model.add_boundary_condition(BoundaryCondition::fixed(vec![n0], 0));

    // Self weight over both elements, pulling toward negative x...
    model.add_distributed_load(DistributedLoad::gravity(vec![e0, e1], g));

    // ...plus the tip force (also toward negative x: same sense as gravity)
    model.add_concentrated_load(ConcentratedLoad::axial(n2, -tip_force));

    println!("Running solve...\n");
    let solution = model.solve().expect("Solve failed");

    println!("Node Displacements:");
    for node in [n0, n1, n2] {
        let u = solution.node_displacement(node, 0).unwrap();
        println!("  N{}: u = {:.6} mm", node, u * 1000.0);
    }

    let reactions = solution.reactions();
    println!("\nSupport Reaction:");
    println!("  N{}: R = {:.3} kN", n0, reactions[0] / 1000.0);

    println!("\nAssembled force vector (pre-elimination):");
    for node in [n0, n1, n2] {
        println!("  F[{}] = {:.3} N", node, solution.force[node]);
    }

    println!("\nSolution as JSON:");
    println!("{}", solution.to_json().expect("Serialization failed"));

    println!("\n=== Analysis Complete ===");
}
