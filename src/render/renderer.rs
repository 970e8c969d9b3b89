use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{GameState, Position};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the playfield horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.is_alive {
            let field = self.render_field(game_area, state);
            frame.render_widget(field, game_area);
        } else {
            let game_over = self.render_game_over(game_area, state);
            frame.render_widget(game_over, game_area);
        }

        let controls = self.render_controls(chunks[2], state);
        frame.render_widget(controls, chunks[2]);
    }

    /// One character cell per grid block. Snake and food sit on top of the
    /// cloud layer; clouds shade every cell their rectangle overlaps.
    fn render_field(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let block = state.block_size;
        let mut lines = Vec::new();

        for cy in 0..(state.height / block) {
            let mut spans = Vec::new();

            for cx in 0..(state.width / block) {
                let pos = Position::new(cx * block, cy * block);

                let cell = if pos == state.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.body.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == state.food {
                    Span::styled(
                        "@ ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if state
                    .clouds
                    .iter()
                    .any(|c| c.covers_cell(pos.x, pos.y, block))
                {
                    Span::styled("░░", Style::default().fg(Color::White))
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" cloud-snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, _area: Rect, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Highscore: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    /// The banner gets a fresh random color every frame, so it flickers
    /// through the palette while the game sits on this screen
    fn render_game_over(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let mut rng = rand::thread_rng();
        let banner_color = Color::Rgb(rng.gen(), rng.gen(), rng.gen());

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default()
                    .fg(banner_color)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press any key to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Esc",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(banner_color)),
        )
    }

    fn render_controls(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let text = if state.is_alive {
            vec![Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" to steer | "),
                Span::styled("Ctrl+C", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])]
        } else {
            vec![Line::from(vec![
                Span::raw("any key to restart | "),
                Span::styled("Esc", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])]
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
