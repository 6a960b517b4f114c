//! Renderable snapshot of a round.
//!
//! A [`Scene`] is everything a drawing backend needs: one sprite per snake
//! segment and one for the candy, in pixel coordinates.

use crate::game::{GameRound, Position};

/// Fill color of a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Green,
    Red,
}

/// An eye mark on the head, in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eye {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub position: Position,
    pub size: i32,
    pub color: Tint,
    pub is_head: bool,
}

impl Sprite {
    /// Two eyes a third of the way into the cell; empty for anything but a head
    pub fn eyes(&self) -> Vec<Eye> {
        if !self.is_head {
            return Vec::new();
        }

        let size = self.size as f32;
        let x = self.position.x as f32;
        let y = self.position.y as f32;
        let radius = size / 10.0;

        vec![
            Eye {
                x: x + size / 3.0,
                y: y + size / 3.0,
                radius,
            },
            Eye {
                x: x + size * 2.0 / 3.0,
                y: y + size / 3.0,
                radius,
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub candy: Sprite,
    /// Snake sprites, head first
    pub segments: Vec<Sprite>,
}

impl Scene {
    pub fn capture(round: &GameRound) -> Self {
        let size = round.grid().cell_size();

        let segments = round
            .snake()
            .segments()
            .iter()
            .map(|seg| Sprite {
                position: seg.position,
                size,
                color: Tint::Green,
                is_head: seg.is_head,
            })
            .collect();

        Self {
            candy: Sprite {
                position: round.candy(),
                size,
                color: Tint::Red,
                is_head: false,
            },
            segments,
        }
    }
}
