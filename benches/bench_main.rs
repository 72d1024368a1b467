use criterion::criterion_main;

mod physics;

criterion_main! {
    physics::fallingsand::simulation::benches,
    physics::fallingsand::data::sand_grid::benches,
}
