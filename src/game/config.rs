use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fastest pace the game loop is asked to keep, in ticks per second
pub const MAX_TICK_RATE: u32 = 1000;

/// Largest playfield, in cells, the renderer rasterizes every frame
pub const MAX_CELLS: i64 = 1 << 16;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the playfield in pixels
    pub width: i32,
    /// Height of the playfield in pixels
    pub height: i32,
    /// Side length of one grid cell in pixels
    pub cell_size: i32,
    /// Where a fresh snake's head is placed
    pub start_x: i32,
    pub start_y: i32,

    // Pacing
    /// Ticks per second with zero rounds played
    pub base_tick_rate: u32,
    /// Upper bound on ticks per second
    pub max_tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            cell_size: 40,
            start_x: 80,
            start_y: 120,
            base_tick_rate: 2,
            max_tick_rate: 15,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom playfield size
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
            ..Default::default()
        }
    }

    /// A 5x5 grid of 10px cells, starting in the top-left corner
    pub fn small() -> Self {
        Self {
            start_x: 0,
            start_y: 0,
            ..Self::new(50, 50, 10)
        }
    }

    /// Read a JSON config file; missing fields fall back to the defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&raw).context("Failed to parse config file")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.width > 0 && self.width % self.cell_size == 0,
            "width {} is not a positive multiple of the cell size {}",
            self.width,
            self.cell_size
        );
        ensure!(
            self.height > 0 && self.height % self.cell_size == 0,
            "height {} is not a positive multiple of the cell size {}",
            self.height,
            self.cell_size
        );
        ensure!(
            (0..self.width).contains(&self.start_x) && (0..self.height).contains(&self.start_y),
            "start position ({}, {}) is outside the grid",
            self.start_x,
            self.start_y
        );
        ensure!(
            self.start_x % self.cell_size == 0 && self.start_y % self.cell_size == 0,
            "start position ({}, {}) is not aligned to the grid",
            self.start_x,
            self.start_y
        );
        ensure!(
            self.base_tick_rate > 0 && self.base_tick_rate <= self.max_tick_rate,
            "tick rates must satisfy 0 < base ({}) <= max ({})",
            self.base_tick_rate,
            self.max_tick_rate
        );
        ensure!(
            self.max_tick_rate <= MAX_TICK_RATE,
            "max tick rate {} exceeds {}",
            self.max_tick_rate,
            MAX_TICK_RATE
        );
        // A coordinate parked on the bound must still take one more step
        ensure!(
            self.width.checked_add(self.cell_size).is_some()
                && self.height.checked_add(self.cell_size).is_some(),
            "playfield {}x{} with cell size {} is too large",
            self.width,
            self.height,
            self.cell_size
        );
        let cells =
            i64::from(self.width / self.cell_size) * i64::from(self.height / self.cell_size);
        ensure!(
            cells <= MAX_CELLS,
            "playfield has {} cells, more than the {} supported",
            cells,
            MAX_CELLS
        );
        Ok(())
    }
}
