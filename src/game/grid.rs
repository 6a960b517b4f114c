use rand::Rng;

use super::action::Velocity;
use super::config::GameConfig;

/// A pixel position on the playfield, aligned to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by a pixel delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell along a velocity
    pub fn stepped(&self, velocity: Velocity, cell_size: i32) -> Self {
        self.moved_by(velocity.dx * cell_size, velocity.dy * cell_size)
    }
}

/// Coordinate arithmetic for a bounded, wrap-around plane of square cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWorld {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl GridWorld {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.width, config.height, config.cell_size)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Number of cell columns
    pub fn cols(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cell rows
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Wrap a position that left the playfield.
    ///
    /// Past the far edge a coordinate restarts at 0. Below zero it lands on the
    /// bound itself rather than the last cell, so a segment leaving through the
    /// left or top edge sits one cell outside the visible grid for a tick.
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(wrap_axis(pos.x, self.width), wrap_axis(pos.y, self.height))
    }

    /// Whether a position falls on a visible cell
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Pick a uniformly random grid-aligned cell
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Position {
        let col = rng.gen_range(0..self.cols());
        let row = rng.gen_range(0..self.rows());
        Position::new(col * self.cell_size, row * self.cell_size)
    }
}

fn wrap_axis(value: i32, bound: i32) -> i32 {
    let mut value = value;
    if value >= bound {
        value = 0;
    }
    if value < 0 {
        value = bound;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn world() -> GridWorld {
        GridWorld::new(800, 600, 40)
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(80, 120);
        assert_eq!(pos.stepped(Velocity::new(1, 0), 40), Position::new(120, 120));
        assert_eq!(pos.stepped(Velocity::new(0, -1), 40), Position::new(80, 80));
        assert_eq!(pos.stepped(Velocity::ZERO, 40), pos);
    }

    #[test]
    fn test_dimensions() {
        let world = world();
        assert_eq!(world.cols(), 20);
        assert_eq!(world.rows(), 15);
    }

    #[test]
    fn test_wrap_far_edge_resets_to_zero() {
        let world = world();
        assert_eq!(world.wrap(Position::new(800, 120)), Position::new(0, 120));
        assert_eq!(world.wrap(Position::new(80, 600)), Position::new(80, 0));
        assert_eq!(world.wrap(Position::new(840, 640)), Position::new(0, 0));
    }

    #[test]
    fn test_wrap_negative_lands_on_bound() {
        let world = world();
        assert_eq!(world.wrap(Position::new(-40, 120)), Position::new(800, 120));
        assert_eq!(world.wrap(Position::new(80, -40)), Position::new(80, 600));
        assert!(!world.contains(Position::new(800, 120)));
    }

    #[test]
    fn test_wrap_leaves_inside_positions_alone() {
        let world = world();
        assert_eq!(world.wrap(Position::new(0, 0)), Position::new(0, 0));
        assert_eq!(world.wrap(Position::new(760, 560)), Position::new(760, 560));
    }

    #[test]
    fn test_random_cell_is_aligned_and_inside() {
        let world = world();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let cell = world.random_cell(&mut rng);
            assert!(world.contains(cell));
            assert_eq!(cell.x % 40, 0);
            assert_eq!(cell.y % 40, 0);
        }
    }
}
