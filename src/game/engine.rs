use super::{
    action::Action,
    cloud::Cloud,
    config::GameConfig,
    state::{CollisionType, GameState, Position, Snake},
};
use rand::Rng;

/// Information about a tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
}

/// Result of a game tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has ended
    pub terminated: bool,
    /// Additional information about the tick
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the state for a brand-new session: snake at the starting spot,
    /// food somewhere free, the initial cloud population at the edges
    pub fn new_game(&mut self) -> GameState {
        let snake = Snake::spawn(self.config.block_size);
        let food = self.spawn_food(&snake);

        let clouds = (0..self.config.initial_cloud_count)
            .map(|_| {
                Cloud::spawn(
                    &mut self.rng,
                    self.config.cloud_size,
                    self.config.width,
                    self.config.height,
                )
            })
            .collect();

        GameState::new(
            snake,
            food,
            clouds,
            self.config.width,
            self.config.height,
            self.config.block_size,
        )
    }

    /// Reset snake, food and tick counter in place after a game over.
    /// Clouds and the grown cloud target persist across restarts.
    pub fn restart(&mut self, state: &mut GameState) {
        state.snake.respawn(self.config.block_size);
        state.food = self.spawn_food(&state.snake);
        state.ticks = 0;
        state.is_alive = true;
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    collision: None,
                },
            };
        }

        // Queued steering input; 180-degree turns are rejected by the snake
        if let Action::Move(direction) = action {
            state.snake.steer(direction);
        }

        state.snake.advance(self.config.block_size);

        // Drift the cloud layer, recycling clouds that reached the far edge
        for cloud in &mut state.clouds {
            cloud.drift(state.width, state.height);
            if cloud.past_far_edge(state.width, state.height) {
                cloud.respawn(&mut self.rng, state.width, state.height);
            }
        }

        let ate_food = state.snake.head() == state.food;
        if ate_food {
            state.snake.eat();
            state.food = self.spawn_food(&state.snake);

            // The sky fills in as the snake grows: one extra cloud every
            // fifth body segment
            if state.snake.len() % 5 == 0 {
                state.cloud_target += 1;
            }
        }

        // Top the population back up to the target
        while state.clouds.len() < state.cloud_target {
            let cloud = Cloud::spawn(
                &mut self.rng,
                self.config.cloud_size,
                state.width,
                state.height,
            );
            state.clouds.push(cloud);
        }

        state.ticks += 1;

        // Terminal collisions are checked after the move, so the state keeps
        // the offending head position for the game-over screen
        let collision = self.check_collision(state);
        if let Some(collision) = collision {
            state.is_alive = false;
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food,
                    collision: Some(collision),
                },
            };
        }

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_food,
                collision: None,
            },
        }
    }

    fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        if state.snake.out_of_bounds(state.width, state.height) {
            return Some(CollisionType::Wall);
        }

        if state.snake.self_collision() {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn food on a random grid cell not occupied by the snake
    fn spawn_food(&mut self, snake: &Snake) -> Position {
        let cells_x = self.config.cells_x();
        let cells_y = self.config.cells_y();

        loop {
            let x = self.rng.gen_range(0..cells_x) * self.config.block_size;
            let y = self.rng.gen_range(0..cells_y) * self.config.block_size;
            let pos = Position::new(x, y);

            if !snake.body.contains(&pos) {
                return pos;
            }
        }
    }
}
