use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;

use super::{
    action::Direction,
    config::GameConfig,
    grid::{GridWorld, Position},
    snake::Snake,
};

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInfo {
    /// The head reached the candy and the snake grew
    pub ate_candy: bool,
    /// The head ran into the body and the round was reset
    pub collided: bool,
}

/// One live snake, one candy, and the round counter that sets the pace
pub struct GameRound {
    config: GameConfig,
    grid: GridWorld,
    snake: Snake,
    candy: Position,
    rounds: u32,
    rng: StdRng,
}

impl GameRound {
    /// Create a new round with entropy-seeded candy placement
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a new round whose candy placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let grid = GridWorld::from_config(&config);
        let snake = Snake::new(Self::start_position(&config));
        let candy = grid.random_cell(&mut rng);

        Self {
            config,
            grid,
            snake,
            candy,
            rounds: 0,
            rng,
        }
    }

    fn start_position(config: &GameConfig) -> Position {
        Position::new(config.start_x, config.start_y)
    }

    /// Point the snake in a new direction; the turn reaches the head on the
    /// next tick and each follower one tick after its leader
    pub fn steer(&mut self, direction: Direction) {
        self.snake.steer(direction);
    }

    /// Execute one tick: move, then grow, then check for self-collision
    pub fn tick(&mut self) -> TickInfo {
        let mut info = TickInfo::default();

        self.snake.update(&self.grid);

        if self.snake.head().position == self.candy {
            self.candy = self.grid.random_cell(&mut self.rng);
            self.snake.grow(self.grid.cell_size());
            self.rounds += 1;
            info.ate_candy = true;
            tracing::debug!(
                rounds = self.rounds,
                length = self.snake.len(),
                candy = ?self.candy,
                "candy eaten"
            );
        }

        if self.snake.bites_itself() {
            tracing::info!(
                rounds = self.rounds,
                length = self.snake.len(),
                "snake bit itself, starting over"
            );
            self.reset();
            info.collided = true;
        }

        info
    }

    /// Replace the snake and candy and zero the round counter
    pub fn reset(&mut self) {
        self.snake = Snake::new(Self::start_position(&self.config));
        self.candy = self.grid.random_cell(&mut self.rng);
        self.rounds = 0;
    }

    /// Suggested ticks per second: speeds up with every candy, up to a cap
    pub fn tick_rate(&self) -> u32 {
        self.rounds
            .saturating_add(self.config.base_tick_rate)
            .min(self.config.max_tick_rate)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate().max(1)
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn candy(&self) -> Position {
        self.candy
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn grid(&self) -> &GridWorld {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn place_candy(&mut self, pos: Position) {
        self.candy = pos;
    }

    #[cfg(test)]
    pub(crate) fn replace_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}
