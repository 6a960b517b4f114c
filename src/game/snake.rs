use super::action::{Direction, Velocity};
use super::grid::{GridWorld, Position};
use super::segment::Segment;
use super::turns::{TurnId, TurnQueue};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    segments: Vec<Segment>,
    /// Heading requested by the player, read by the head when a turn is due
    direction: Velocity,
    turns: TurnQueue,
    /// Head position as of the last update
    position: Position,
}

impl Snake {
    /// A one-segment snake standing still until the first turn
    pub fn new(head: Position) -> Self {
        Self {
            segments: vec![Segment::head(head, Velocity::ZERO)],
            direction: Velocity::ZERO,
            turns: TurnQueue::new(),
            position: head,
        }
    }

    /// A straight snake of `length` segments, all moving in `direction`,
    /// with the body laid out behind the head
    pub fn with_length(head: Position, direction: Direction, length: usize, cell_size: i32) -> Self {
        let velocity = direction.velocity();
        let mut segments = vec![Segment::head(head, velocity)];

        for i in 1..length.max(1) {
            let behind = segments[i - 1].trailing(cell_size);
            segments.push(behind);
        }

        Self {
            segments,
            direction: velocity,
            turns: TurnQueue::new(),
            position: head,
        }
    }

    /// Change the heading and queue a turn that travels down the body.
    ///
    /// Every call queues a turn, even when the heading does not change.
    pub fn steer(&mut self, direction: Direction) -> TurnId {
        self.direction = direction.velocity();
        let id = self.turns.enqueue();
        tracing::trace!(turn = id, ?direction, "turn queued");
        id
    }

    /// Advance every segment by one tick.
    ///
    /// Segments are visited tail first, so a follower that is due to turn
    /// copies the velocity its leader held before the leader moved this tick.
    pub fn update(&mut self, grid: &GridWorld) {
        for idx in (0..self.segments.len()).rev() {
            if self.turns.is_due(idx) {
                self.segments[idx].velocity = if idx == 0 {
                    self.direction
                } else {
                    self.segments[idx - 1].velocity
                };
            }
            self.segments[idx].advance(grid);
        }

        let expired = self.turns.advance(self.segments.len());
        if expired > 0 {
            tracing::trace!(expired, pending = self.turns.len(), "turns expired");
        }

        self.position = self.head().position;
    }

    /// Append one segment behind the current tail
    pub fn grow(&mut self, cell_size: i32) {
        let tail = self.tail().trailing(cell_size);
        self.segments.push(tail);
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Body segments (excluding head)
    pub fn body_segments(&self) -> &[Segment] {
        &self.segments[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().iter().any(|seg| seg.position == pos)
    }

    /// Whether the head currently overlaps any other segment
    pub fn bites_itself(&self) -> bool {
        self.collides_with_body(self.head().position)
    }

    pub fn direction(&self) -> Velocity {
        self.direction
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn turns(&self) -> &TurnQueue {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridWorld {
        GridWorld::new(800, 600, 40)
    }

    fn velocities(snake: &Snake) -> Vec<Velocity> {
        snake.segments().iter().map(|s| s.velocity).collect()
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(80, 120));
        assert_eq!(snake.len(), 1);
        assert!(snake.head().is_head);
        assert_eq!(snake.direction(), Velocity::ZERO);
        assert_eq!(snake.position(), Position::new(80, 120));
    }

    #[test]
    fn test_snake_with_length() {
        let snake = Snake::with_length(Position::new(120, 40), Direction::Right, 3, 40);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.segments()[1].position, Position::new(80, 40));
        assert_eq!(snake.segments()[2].position, Position::new(40, 40));
        assert!(snake.body_segments().iter().all(|s| !s.is_head));
    }

    #[test]
    fn test_update_without_input_does_not_move() {
        let mut snake = Snake::new(Position::new(80, 120));
        snake.update(&grid());
        assert_eq!(snake.position(), Position::new(80, 120));
        assert!(snake.turns().is_empty());
    }

    #[test]
    fn test_head_turns_on_the_tick_it_is_steered() {
        let mut snake = Snake::new(Position::new(80, 120));
        snake.steer(Direction::Right);
        snake.update(&grid());
        assert_eq!(snake.position(), Position::new(120, 120));

        snake.steer(Direction::Down);
        snake.update(&grid());
        assert_eq!(snake.position(), Position::new(120, 160));
    }

    #[test]
    fn test_followers_turn_one_tick_apart() {
        let mut snake = Snake::with_length(Position::new(200, 200), Direction::Right, 3, 40);
        let right = Velocity::new(1, 0);
        let down = Velocity::new(0, 1);

        snake.steer(Direction::Down);
        snake.update(&grid());
        assert_eq!(velocities(&snake), vec![down, right, right]);

        snake.update(&grid());
        assert_eq!(velocities(&snake), vec![down, down, right]);

        snake.update(&grid());
        assert_eq!(velocities(&snake), vec![down, down, down]);
    }

    #[test]
    fn test_queued_turns_read_live_direction() {
        let mut snake = Snake::new(Position::new(80, 120));
        snake.steer(Direction::Up);
        snake.steer(Direction::Left);
        assert_eq!(snake.turns().len(), 2);

        snake.update(&grid());
        assert_eq!(snake.head().velocity, Velocity::new(-1, 0));
        assert_eq!(snake.position(), Position::new(40, 120));
    }

    #[test]
    fn test_turn_on_single_segment_expires() {
        let mut snake = Snake::new(Position::new(80, 120));
        snake.steer(Direction::Right);
        snake.update(&grid());
        assert_eq!(snake.turns().len(), 1);
        snake.update(&grid());
        assert!(snake.turns().is_empty());
    }

    #[test]
    fn test_grow_places_tail_behind() {
        let mut snake = Snake::with_length(Position::new(120, 40), Direction::Down, 2, 40);
        let old_tail = *snake.tail();
        snake.grow(40);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail().position, Position::new(120, -40));
        assert_eq!(snake.tail().velocity, old_tail.velocity);
        assert!(!snake.tail().is_head);
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::with_length(Position::new(200, 200), Direction::Right, 3, 40);
        assert!(!snake.collides_with_body(Position::new(200, 200))); // head
        assert!(snake.collides_with_body(Position::new(160, 200))); // body
        assert!(!snake.collides_with_body(Position::new(400, 400))); // empty
        assert!(!snake.bites_itself());
    }
}
