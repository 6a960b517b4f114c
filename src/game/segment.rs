use super::action::Velocity;
use super::grid::{GridWorld, Position};

/// One cell of the snake's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub position: Position,
    pub velocity: Velocity,
    pub is_head: bool,
}

impl Segment {
    pub fn head(position: Position, velocity: Velocity) -> Self {
        Self {
            position,
            velocity,
            is_head: true,
        }
    }

    pub fn body(position: Position, velocity: Velocity) -> Self {
        Self {
            position,
            velocity,
            is_head: false,
        }
    }

    /// Advance one cell along the current velocity and wrap at the edges
    pub fn advance(&mut self, grid: &GridWorld) {
        let moved = self.position.stepped(self.velocity, grid.cell_size());
        self.position = grid.wrap(moved);
    }

    /// A body segment placed directly behind this one, moving the same way.
    ///
    /// The position is not wrapped; the next `advance` brings it back inside.
    pub fn trailing(&self, cell_size: i32) -> Self {
        Self::body(
            self.position.stepped(self.velocity.reversed(), cell_size),
            self.velocity,
        )
    }
}
