use criterion::{black_box, criterion_group, Criterion};
use hue_sand::physics::fallingsand::brush::{Brush, BrushPaint};
use hue_sand::physics::fallingsand::data::sand_grid::SandGrid;
use hue_sand::physics::fallingsand::elements::hue::Hue;
use hue_sand::physics::fallingsand::util::color::canvas_background;
use hue_sand::physics::fallingsand::util::vectors::CellVector;
use rand::{rngs::StdRng, SeedableRng};

fn get_sand_grid() -> SandGrid {
    let mut grid = SandGrid::new(300, 150);
    let brush = Brush::new(CellVector::new(150, 75), 60);
    grid.paint_brush(
        &brush,
        &BrushPaint::Fixed(Hue(200.0)),
        &mut StdRng::seed_from_u64(0),
    );
    grid
}

fn bench_get_texture(c: &mut Criterion) {
    let grid = get_sand_grid();
    c.bench_function("get_texture", |b| {
        b.iter(|| {
            black_box(&grid).get_texture(canvas_background());
        })
    });
}

fn bench_count_grains(c: &mut Criterion) {
    let grid = get_sand_grid();
    c.bench_function("count_grains", |b| {
        b.iter(|| black_box(&grid).count_grains())
    });
}

criterion_group!(benches, bench_get_texture, bench_count_grains);
