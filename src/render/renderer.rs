use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::scene::{Scene, Sprite, Tint};
use crate::game::{GameRound, GridWorld};
use crate::metrics::GameMetrics;

/// What occupies one terminal cell of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    /// A sprite's fill; `eyes` marks which half of the cell carries an eye
    Filled { tint: Tint, eyes: [bool; 2] },
}

impl CellKind {
    fn from_sprite(sprite: &Sprite) -> Self {
        let mut eyes = [false; 2];
        let half = sprite.size as f32 / 2.0;
        for eye in sprite.eyes() {
            let offset = eye.x - sprite.position.x as f32;
            eyes[usize::from(offset >= half)] = true;
        }

        CellKind::Filled {
            tint: sprite.color,
            eyes,
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, round: &GameRound, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(round, metrics);
        frame.render_widget(stats, chunks[0]);

        let scene = Scene::capture(round);
        let grid = self.render_grid(&scene, round.grid());
        frame.render_widget(grid, chunks[1]);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Rasterize a scene onto the grid's cells, candy first so the snake
    /// covers a candy that spawned under it
    pub fn cell_map(scene: &Scene, grid: &GridWorld) -> Vec<Vec<CellKind>> {
        let mut cells = vec![vec![CellKind::Empty; grid.cols() as usize]; grid.rows() as usize];

        let mut paint = |sprite: &Sprite| {
            // Segments parked on the bound after a negative wrap are off-screen
            if !grid.contains(sprite.position) {
                return;
            }
            let col = (sprite.position.x / grid.cell_size()) as usize;
            let row = (sprite.position.y / grid.cell_size()) as usize;
            cells[row][col] = CellKind::from_sprite(sprite);
        };

        paint(&scene.candy);
        for sprite in scene.segments.iter().rev() {
            paint(sprite);
        }

        cells
    }

    fn render_grid(&self, scene: &Scene, grid: &GridWorld) -> Paragraph<'_> {
        let lines: Vec<Line> = Self::cell_map(scene, grid)
            .into_iter()
            .map(|row| Line::from(row.into_iter().map(cell_span).collect::<Vec<_>>()))
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, round: &GameRound, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Rounds: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                round.rounds().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}/s", round.tick_rate()),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                round.snake().len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Ticks: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.ticks.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Restarts: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.restarts.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Green => Color::Green,
        Tint::Red => Color::Red,
    }
}

fn cell_span(kind: CellKind) -> Span<'static> {
    match kind {
        CellKind::Filled { tint, eyes } => {
            // One terminal column per half cell
            let glyph: String = eyes.iter().map(|&eye| if eye { '•' } else { ' ' }).collect();
            let mut style = Style::default().fg(Color::Black).bg(tint_color(tint));
            if eyes.contains(&true) {
                style = style.add_modifier(Modifier::BOLD);
            }
            Span::styled(glyph, style)
        }
        CellKind::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
