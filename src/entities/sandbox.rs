use std::ops::Range;

use bevy::ecs::system::Resource;
use bevy::log::{debug, info};
use bevy::math::Vec2;
use rand::{rngs::StdRng, SeedableRng};

use crate::gui::paint_mode::{PaintMode, PaintModeController};
use crate::physics::fallingsand::brush::{Brush, DEFAULT_BRUSH_RADIUS, DEFAULT_RANDOM_HUE_RANGE};
use crate::physics::fallingsand::data::sand_grid::SandGrid;
use crate::physics::fallingsand::elements::cell::CellState;
use crate::physics::fallingsand::elements::hue::{Hue, HUE_MODULUS, START_HUE};
use crate::physics::fallingsand::simulation::Simulator;
use crate::physics::fallingsand::util::vectors::CellVector;

/// Everything the host needs to run one sand box: the live grid,
/// the simulator, the paint mode, and the knobs that size them.
#[derive(Resource)]
pub struct SandboxData {
    grid: SandGrid,
    simulator: Simulator<StdRng>,
    brush_rng: StdRng,
    paint_mode: PaintModeController,
    cell_size: f32,
    brush_radius: u32,
    canvas_fraction: f32,
    steps_per_second: f64,
    generation: u64,
}

/// Builds a [`SandboxData`]
pub struct SandboxBuilder {
    num_cols: usize,
    num_rows: usize,
    cell_size: f32,
    brush_radius: u32,
    hue_modulus: f32,
    start_hue: Hue,
    random_hue_range: Range<f32>,
    canvas_fraction: f32,
    seed: Option<u64>,
    steps_per_second: f64,
}

impl Default for SandboxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SandboxBuilder {
    pub fn new() -> Self {
        Self {
            num_cols: 0,
            num_rows: 0,
            cell_size: 2.0,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            hue_modulus: HUE_MODULUS,
            start_hue: START_HUE,
            random_hue_range: DEFAULT_RANDOM_HUE_RANGE,
            canvas_fraction: 0.6,
            seed: None,
            steps_per_second: 200.0,
        }
    }

    /// Starting grid size, the host usually resizes once the window exists
    pub fn dimensions(mut self, num_cols: usize, num_rows: usize) -> Self {
        self.num_cols = num_cols;
        self.num_rows = num_rows;
        self
    }

    /// Width and height of one cell in pixels
    pub fn cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn brush_radius(mut self, brush_radius: u32) -> Self {
        self.brush_radius = brush_radius;
        self
    }

    pub fn hue_modulus(mut self, hue_modulus: f32) -> Self {
        self.hue_modulus = hue_modulus;
        self
    }

    pub fn start_hue(mut self, start_hue: Hue) -> Self {
        self.start_hue = start_hue;
        self
    }

    pub fn random_hue_range(mut self, random_hue_range: Range<f32>) -> Self {
        self.random_hue_range = random_hue_range;
        self
    }

    /// How much of the window's width and height the canvas takes up
    pub fn canvas_fraction(mut self, canvas_fraction: f32) -> Self {
        self.canvas_fraction = canvas_fraction;
        self
    }

    /// Makes every coin flip and random hue repeatable
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn steps_per_second(mut self, steps_per_second: f64) -> Self {
        self.steps_per_second = steps_per_second;
        self
    }

    pub fn build(self) -> SandboxData {
        debug_assert!(self.cell_size > 0.0, "cell_size must be positive");
        debug_assert!(self.hue_modulus > 0.0, "hue_modulus must be positive");
        debug_assert!(
            !self.random_hue_range.is_empty(),
            "random_hue_range must not be empty"
        );
        debug_assert!(
            self.canvas_fraction > 0.0 && self.canvas_fraction <= 1.0,
            "canvas_fraction must be in (0, 1]"
        );
        debug_assert!(
            self.steps_per_second > 0.0,
            "steps_per_second must be positive"
        );
        let (simulator, brush_rng) = match self.seed {
            Some(seed) => (
                Simulator::from_seed(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (Simulator::from_entropy(), StdRng::from_entropy()),
        };
        SandboxData {
            grid: SandGrid::new(self.num_cols, self.num_rows),
            simulator,
            brush_rng,
            paint_mode: PaintModeController::new(
                self.start_hue,
                self.hue_modulus,
                self.random_hue_range,
            ),
            cell_size: self.cell_size,
            brush_radius: self.brush_radius,
            canvas_fraction: self.canvas_fraction,
            steps_per_second: self.steps_per_second,
            generation: 0,
        }
    }
}

/* Getters */
impl SandboxData {
    pub fn get_grid(&self) -> &SandGrid {
        &self.grid
    }
    pub fn get_cell(&self, pos: CellVector) -> CellState {
        self.grid.get(pos)
    }
    pub fn get_mode(&self) -> PaintMode {
        self.paint_mode.get_mode()
    }
    pub fn get_paint_mode(&self) -> &PaintModeController {
        &self.paint_mode
    }
    pub fn get_generation(&self) -> u64 {
        self.generation
    }
    pub fn get_cell_size(&self) -> f32 {
        self.cell_size
    }
    pub fn get_brush_radius(&self) -> u32 {
        self.brush_radius
    }
    pub fn get_steps_per_second(&self) -> f64 {
        self.steps_per_second
    }
}

/// Host operations
impl SandboxData {
    /// Throws the old grid away, grains are not carried over
    pub fn resize(&mut self, num_cols: usize, num_rows: usize) {
        info!("Resizing sand grid to {}x{}", num_cols, num_rows);
        self.grid = SandGrid::new(num_cols, num_rows);
    }

    pub fn clear(&mut self) {
        info!("Clearing sand grid");
        self.grid = SandGrid::new(self.grid.get_num_cols(), self.grid.get_num_rows());
    }

    pub fn toggle_mode(&mut self, mode: PaintMode) {
        self.paint_mode.toggle(mode);
    }

    /// One brush stroke at a cell, using the current paint mode
    pub fn brush_paint_at(&mut self, center: CellVector) {
        let brush = Brush::new(center, self.brush_radius);
        let paint = self.paint_mode.brush_paint();
        let changed = self
            .grid
            .paint_brush(&brush, &paint, &mut self.brush_rng);
        self.paint_mode.finish_stroke();
        debug!(
            "Brush stroke at {:?} in {:?} mode changed {} cells",
            center,
            self.paint_mode.get_mode(),
            changed
        );
    }

    /// Advance one generation, the new grid replaces the old one
    pub fn step(&mut self) {
        self.grid = self.simulator.step(&self.grid);
        self.generation += 1;
    }
}

/// Pixel to cell conversions
impl SandboxData {
    /// The cell under a pixel, measured from the canvas' top left corner
    pub fn pixel_to_cell(&self, pixel: Vec2) -> CellVector {
        CellVector::new(
            (pixel.x / self.cell_size).floor() as isize,
            (pixel.y / self.cell_size).floor() as isize,
        )
    }

    /// How many cells fit on the canvas of a window this size
    pub fn canvas_cells(&self, window_width: f32, window_height: f32) -> (usize, usize) {
        let canvas_width = (window_width * self.canvas_fraction).floor();
        let canvas_height = (window_height * self.canvas_fraction).floor();
        (
            (canvas_width / self.cell_size).floor().max(0.0) as usize,
            (canvas_height / self.cell_size).floor().max(0.0) as usize,
        )
    }

    /// Size of the drawn grid in pixels
    pub fn canvas_pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.grid.get_num_cols() as f32 * self.cell_size,
            self.grid.get_num_rows() as f32 * self.cell_size,
        )
    }

    /// Top left corner of the canvas when it is centered in the window
    pub fn canvas_origin(&self, window_size: Vec2) -> Vec2 {
        (window_size - self.canvas_pixel_size()) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::fallingsand::elements::cell::Cell;

    fn sandbox() -> SandboxData {
        SandboxBuilder::new().dimensions(40, 30).seed(17).build()
    }

    #[test]
    fn test_builder_defaults() {
        let sandbox = SandboxBuilder::new().build();
        assert_eq!(sandbox.get_cell_size(), 2.0);
        assert_eq!(sandbox.get_brush_radius(), 5);
        assert_eq!(sandbox.get_steps_per_second(), 200.0);
        assert_eq!(sandbox.get_mode(), PaintMode::Normal);
        assert_eq!(sandbox.get_paint_mode().get_hue(), Hue(200.0));
        assert_eq!(sandbox.get_grid().get_num_cols(), 0);
    }

    #[test]
    fn test_normal_stroke_paints_random_warm_hues() {
        let mut sandbox = sandbox();
        sandbox.brush_paint_at(CellVector::new(20, 15));
        assert_eq!(sandbox.get_grid().count_grains(), 81);
        assert!(sandbox
            .get_grid()
            .iter_grains()
            .all(|(_, hue)| (30.0..50.0).contains(&hue.0)));
        assert_eq!(sandbox.get_paint_mode().get_hue(), Hue(200.0));
    }

    #[test]
    fn test_color_cycle_strokes_share_a_hue_then_advance() {
        let mut sandbox = sandbox();
        sandbox.toggle_mode(PaintMode::ColorCycle);
        sandbox.brush_paint_at(CellVector::new(8, 8));
        assert_eq!(sandbox.get_cell(CellVector::new(8, 8)), CellState::Occupied(Hue(200.0)));
        sandbox.brush_paint_at(CellVector::new(30, 8));
        assert_eq!(sandbox.get_cell(CellVector::new(30, 8)), CellState::Occupied(Hue(201.0)));
        assert_eq!(sandbox.get_paint_mode().get_hue(), Hue(202.0));
    }

    #[test]
    fn test_color_cycle_wraps() {
        let mut sandbox = SandboxBuilder::new()
            .dimensions(10, 10)
            .start_hue(Hue(359.0))
            .seed(1)
            .build();
        sandbox.toggle_mode(PaintMode::ColorCycle);
        sandbox.brush_paint_at(CellVector::new(5, 5));
        assert_eq!(sandbox.get_paint_mode().get_hue(), Hue(0.0));

        // A zero hue grain is still a grain
        sandbox.resize(3, 3);
        sandbox.brush_paint_at(CellVector::new(1, 1));
        assert_eq!(
            sandbox.get_cell(CellVector::new(1, 1)),
            CellState::Occupied(Hue(0.0))
        );
        assert_eq!(sandbox.get_grid().count_grains(), 9);
    }

    #[test]
    fn test_erase_stroke() {
        let mut sandbox = sandbox();
        sandbox.brush_paint_at(CellVector::new(20, 15));
        sandbox.toggle_mode(PaintMode::Erase);
        sandbox.brush_paint_at(CellVector::new(20, 15));
        assert_eq!(sandbox.get_grid().count_grains(), 0);
        // Erasing does not move the color cycle
        assert_eq!(sandbox.get_paint_mode().get_hue(), Hue(200.0));
    }

    #[test]
    fn test_stroke_off_the_grid_changes_nothing() {
        let mut sandbox = sandbox();
        sandbox.brush_paint_at(CellVector::new(-50, -50));
        assert_eq!(sandbox.get_grid().count_grains(), 0);
    }

    #[test]
    fn test_step_replaces_grid_and_counts_generations() {
        let mut sandbox = sandbox();
        sandbox.brush_paint_at(CellVector::new(20, 5));
        let before = sandbox.get_grid().clone();
        sandbox.step();
        assert_eq!(sandbox.get_generation(), 1);
        assert_ne!(sandbox.get_grid(), &before);
        // Grains can collide on the edge of the blob, but never appear from nowhere
        assert!(sandbox.get_grid().count_grains() <= before.count_grains());
        assert!(sandbox.get_grid().count_grains() > 0);
    }

    #[test]
    fn test_resize_discards_grains() {
        let mut sandbox = sandbox();
        sandbox.brush_paint_at(CellVector::new(5, 5));
        sandbox.resize(12, 7);
        assert_eq!(sandbox.get_grid().get_num_cols(), 12);
        assert_eq!(sandbox.get_grid().get_num_rows(), 7);
        assert_eq!(sandbox.get_grid().count_grains(), 0);
    }

    #[test]
    fn test_clear_keeps_size() {
        let mut sandbox = sandbox();
        sandbox.brush_paint_at(CellVector::new(5, 5));
        sandbox.clear();
        assert_eq!(sandbox.get_grid(), &SandGrid::new(40, 30));
        assert_eq!(sandbox.get_cell(CellVector::new(5, 5)), CellState::Empty);
        assert_eq!(sandbox.get_cell(CellVector::new(40, 0)), CellState::OutOfBounds);
    }

    #[test]
    fn test_pixel_to_cell_floors() {
        let sandbox = sandbox();
        assert_eq!(sandbox.pixel_to_cell(Vec2::new(0.0, 0.0)), CellVector::ZERO);
        assert_eq!(sandbox.pixel_to_cell(Vec2::new(3.9, 4.0)), CellVector::new(1, 2));
        assert_eq!(sandbox.pixel_to_cell(Vec2::new(-0.5, 1.0)), CellVector::new(-1, 0));
    }

    #[test]
    fn test_canvas_cells_and_geometry() {
        let mut sandbox = sandbox();
        assert_eq!(sandbox.canvas_cells(1000.0, 500.0), (300, 150));
        assert_eq!(sandbox.canvas_cells(3.0, 3.0), (0, 0));
        sandbox.resize(300, 150);
        assert_eq!(sandbox.canvas_pixel_size(), Vec2::new(600.0, 300.0));
        assert_eq!(
            sandbox.canvas_origin(Vec2::new(1000.0, 500.0)),
            Vec2::new(200.0, 100.0)
        );
    }

    #[test]
    fn test_get_cell_matches_grid() {
        let mut sandbox = sandbox();
        sandbox.toggle_mode(PaintMode::ColorCycle);
        sandbox.brush_paint_at(CellVector::new(0, 0));
        assert_eq!(sandbox.get_cell(CellVector::ZERO), CellState::Occupied(Hue(200.0)));
        assert_eq!(
            sandbox.get_grid().get_grid().checked_get(CellVector::ZERO).copied(),
            Ok(Cell::Grain(Hue(200.0)))
        );
    }
}
