//! Benchmarks for the bar solver

use bar_solver::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn create_refined_bar(num_elements: usize) -> BarModel {
    let mut model = BarModel::new();

    let steel = model.add_material(Material::steel());
    let length = 10.0;

    for i in 0..=num_elements {
        let x = length * (i as f64) / (num_elements as f64);
        model.add_node(Node::new(x));
    }

    let mut elements = Vec::with_capacity(num_elements);
    for i in 0..num_elements {
        elements.push(model.add_element(Element::new(i, i + 1)));
    }
    model.add_block(ElementBlock::new(steel, 0.01, elements));

    model.add_boundary_condition(BoundaryCondition::fixed(vec![0], 0));
    model.add_distributed_load(DistributedLoad::gravity(
        (0..num_elements).collect(),
        9.81,
    ));
    model.add_concentrated_load(ConcentratedLoad::axial(num_elements, -1000.0));

    model
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_and_solve");

    for size in [10, 50, 200] {
        let model = create_refined_bar(size);
        group.bench_function(format!("bar_{}_elements", size), |b| {
            b.iter(|| black_box(&model).solve().unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
