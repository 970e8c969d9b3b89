use super::action::Direction;
use super::cloud::Cloud;

/// A pixel position on the playfield. Snake and food positions are always
/// multiples of the block size; clouds are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one block in a direction
    pub fn moved_in_direction(&self, direction: Direction, block_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * block_size, dy * block_size)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Segments still owed from eaten food; consumed one per advance
    pub pending_growth: u32,
}

impl Snake {
    /// Create a snake at the fixed starting spot: a 3-segment vertical body
    /// heading down, head at (block, 3*block). One growth is pending so the
    /// visible body settles at 4 segments after the first advance.
    pub fn spawn(block_size: i32) -> Self {
        let mut snake = Self {
            body: Vec::new(),
            direction: Direction::Down,
            pending_growth: 0,
        };
        snake.respawn(block_size);
        snake
    }

    /// Reset to the starting body in place
    pub fn respawn(&mut self, block_size: i32) {
        self.body.clear();
        self.body.extend([
            Position::new(block_size, 3 * block_size),
            Position::new(block_size, 2 * block_size),
            Position::new(block_size, block_size),
        ]);
        self.direction = Direction::Down;
        self.pending_growth = 1;
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Change direction, unless the new direction would reverse into the
    /// segment directly behind the head
    pub fn steer(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    /// Register one eaten food; the body catches up on later advances
    pub fn eat(&mut self) {
        self.pending_growth += 1;
    }

    /// Move one block in the current direction, consuming a pending growth
    /// instead of dropping the tail when one is owed
    pub fn advance(&mut self, block_size: i32) {
        let new_head = self.head().moved_in_direction(self.direction, block_size);
        self.body.insert(0, new_head);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop();
        }
    }

    /// Check if a position collides with the snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// True if the head occupies the same cell as any non-head segment
    pub fn self_collision(&self) -> bool {
        self.collides_with_body(self.head())
    }

    /// True if the head has left the playfield
    pub fn out_of_bounds(&self, width: i32, height: i32) -> bool {
        let head = self.head();
        head.x < 0 || head.x >= width || head.y < 0 || head.y >= height
    }

    /// Visible length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the playfield
    Wall,
    /// Snake ran into itself
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Decorative clouds; never removed, only repositioned
    pub clouds: Vec<Cloud>,
    /// Cloud population the engine tops the list up to each tick
    pub cloud_target: usize,
    pub width: i32,
    pub height: i32,
    pub block_size: i32,
    pub ticks: u32,
    pub is_alive: bool,
}

impl GameState {
    pub fn new(
        snake: Snake,
        food: Position,
        clouds: Vec<Cloud>,
        width: i32,
        height: i32,
        block_size: i32,
    ) -> Self {
        let cloud_target = clouds.len();
        Self {
            snake,
            food,
            clouds,
            cloud_target,
            width,
            height,
            block_size,
            ticks: 0,
            is_alive: true,
        }
    }

    /// Check if a position is within the playfield bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Current score, derived from the visible body length. Reads -1 for the
    /// one tick between respawn and the first advance.
    pub fn score(&self) -> i32 {
        self.snake.len() as i32 - 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(100, 100);
        assert_eq!(pos.moved_by(20, 0), Position::new(120, 100));
        assert_eq!(pos.moved_by(-20, 0), Position::new(80, 100));
        assert_eq!(
            pos.moved_in_direction(Direction::Down, 20),
            Position::new(100, 120)
        );
        assert_eq!(
            pos.moved_in_direction(Direction::Up, 20),
            Position::new(100, 80)
        );
    }

    #[test]
    fn test_snake_spawn() {
        let snake = Snake::spawn(20);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(20, 60));
        assert_eq!(snake.body[1], Position::new(20, 40));
        assert_eq!(snake.body[2], Position::new(20, 20));
        assert_eq!(snake.direction, Direction::Down);
        assert_eq!(snake.pending_growth, 1);
    }

    #[test]
    fn test_advance_consumes_pending_growth() {
        let mut snake = Snake::spawn(20);

        // First advance realizes the initial pending segment
        snake.advance(20);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(20, 80));

        // Steady state: constant length
        snake.advance(20);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(20, 100));

        // Eating defers growth to the next advance
        snake.eat();
        assert_eq!(snake.len(), 4);
        snake.advance(20);
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn test_growth_lag_at_most_one() {
        // With at most one food per tick, the visible body lags the target
        // length by at most one pending segment after every advance.
        let mut snake = Snake::spawn(20);

        for i in 0..12 {
            if i % 3 == 0 {
                snake.eat();
            }
            snake.advance(20);
            assert!(snake.pending_growth <= 1);
        }
    }

    #[test]
    fn test_opposite_steer_ignored() {
        let mut snake = Snake::spawn(20);
        assert_eq!(snake.direction, Direction::Down);

        snake.steer(Direction::Up);
        assert_eq!(snake.direction, Direction::Down);

        snake.steer(Direction::Left);
        assert_eq!(snake.direction, Direction::Left);

        snake.steer(Direction::Right);
        assert_eq!(snake.direction, Direction::Left);
    }

    #[test]
    fn test_self_collision() {
        let mut snake = Snake {
            body: vec![
                Position::new(20, 60),
                Position::new(20, 40),
                Position::new(20, 20),
            ],
            direction: Direction::Up,
            pending_growth: 0,
        };
        assert!(!snake.self_collision());

        // Moving up puts the head on (20, 40), an existing segment
        snake.advance(20);
        assert_eq!(snake.head(), Position::new(20, 40));
        assert!(snake.self_collision());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut snake = Snake::spawn(20);

        snake.body[0] = Position::new(0, 0);
        assert!(!snake.out_of_bounds(800, 800));

        snake.body[0] = Position::new(780, 780);
        assert!(!snake.out_of_bounds(800, 800));

        snake.body[0] = Position::new(800, 100);
        assert!(snake.out_of_bounds(800, 800));

        snake.body[0] = Position::new(100, 800);
        assert!(snake.out_of_bounds(800, 800));

        snake.body[0] = Position::new(-20, 100);
        assert!(snake.out_of_bounds(800, 800));

        snake.body[0] = Position::new(100, -20);
        assert!(snake.out_of_bounds(800, 800));
    }

    #[test]
    fn test_score_derivation() {
        let snake = Snake::spawn(20);
        let state = GameState::new(snake, Position::new(100, 100), Vec::new(), 800, 800, 20);

        // 3 visible segments at spawn, settles to 4 after the first advance
        assert_eq!(state.score(), -1);

        let mut state = state;
        state.snake.advance(20);
        assert_eq!(state.score(), 0);
    }
}
