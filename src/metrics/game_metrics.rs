use std::time::{Duration, Instant};

/// Session metrics. The highscore is the maximum score observed during this
/// process run; nothing here is persisted.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: i32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Track the running score so the highscore updates live, not only at
    /// game over
    pub fn observe_score(&mut self, score: i32) {
        if score > self.high_score {
            self.high_score = score;
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: i32) {
        self.games_played += 1;
        self.observe_score(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
