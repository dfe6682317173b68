use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Cell, Coord, GameSession, SessionStatus, HEAD_RANK};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &GameSession, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], session, metrics);
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

        if session.status() == SessionStatus::Active {
            let grid = self.render_grid(game_area, session);
            frame.render_widget(grid, game_area);
        } else {
            let game_over = self.render_game_over(game_area, session);
            frame.render_widget(game_over, game_area);
        }

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    /// One glyph per playable cell, row-major. Wall cells are never drawn;
    /// the widget border frames the playfield instead.
    fn render_grid(&self, _area: Rect, session: &GameSession) -> Paragraph<'_> {
        let board = session.board();
        let mut lines = Vec::new();

        for y in 1..=board.playable_height() {
            let mut spans = Vec::new();

            for x in 1..=board.playable_width() {
                let cell = match board.at(Coord::new(x as i32, y as i32)) {
                    Cell::Segment(HEAD_RANK) => Span::styled(
                        "@",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Cell::Segment(_) => Span::styled("O", Style::default().fg(Color::Green)),
                    Cell::Fruit => Span::styled(
                        "F",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Cell::Poison => Span::styled("P", Style::default().fg(Color::Magenta)),
                    Cell::Empty | Cell::Wall => {
                        Span::styled(".", Style::default().fg(Color::DarkGray))
                    }
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
                    .title(" serpent "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        session: &GameSession,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Moves: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.moves().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, _area: Rect, session: &GameSession) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.final_score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press any key to return to the menu",
                Style::default().fg(Color::Gray),
            )]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to abandon the game"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
