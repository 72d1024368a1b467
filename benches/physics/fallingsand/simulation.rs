use criterion::{black_box, criterion_group, Criterion};
use hue_sand::physics::fallingsand::brush::{Brush, BrushPaint, DEFAULT_RANDOM_HUE_RANGE};
use hue_sand::physics::fallingsand::data::sand_grid::SandGrid;
use hue_sand::physics::fallingsand::simulation::Simulator;
use hue_sand::physics::fallingsand::util::vectors::CellVector;
use rand::{rngs::StdRng, SeedableRng};

/// A canvas the size a 1000x500 window gets, with a few blobs of sand
fn get_sand_grid() -> SandGrid {
    let mut grid = SandGrid::new(300, 150);
    let mut rng = StdRng::seed_from_u64(0);
    for col in (10..300).step_by(40) {
        let brush = Brush::new(CellVector::new(col, 40), 12);
        grid.paint_brush(&brush, &BrushPaint::Random(DEFAULT_RANDOM_HUE_RANGE), &mut rng);
    }
    grid
}

fn bench_step(c: &mut Criterion) {
    let grid = get_sand_grid();
    let mut simulator = Simulator::from_seed(0);
    c.bench_function("step", |b| {
        b.iter(|| {
            simulator.step(black_box(&grid));
        })
    });
}

criterion_group!(benches, bench_step);
