use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::framebuffer::Framebuffer;
use crate::game;

/// Upper half block: foreground paints the top cell, background the bottom
const HALF_BLOCK: &str = "▀";

/// Presents the game framebuffer in the terminal
pub struct Renderer {
    block_size: u32,
}

impl Renderer {
    pub fn new(block_size: u32) -> Self {
        Self { block_size }
    }

    pub fn render(&self, frame: &mut Frame, framebuffer: &Framebuffer, paused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let view = FramebufferView::new(framebuffer, self.block_size);
        let (cols, rows) = view.size();

        // Center the board, borders included
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(cols.saturating_add(2))])
            .flex(Flex::Center)
            .split(chunks[0])[0];
        let game_area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(rows.saturating_add(2))])
            .flex(Flex::Center)
            .split(game_area)[0];

        let border = self.render_border(paused);
        let inner = border.inner(game_area);
        frame.render_widget(border, game_area);
        frame.render_widget(view, inner);

        let controls = self.render_controls(paused);
        frame.render_widget(controls, chunks[1]);
    }

    fn render_border(&self, paused: bool) -> Block<'static> {
        let title = if paused { " Snake (paused) " } else { " Snake " };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(title)
    }

    fn render_controls(&self, paused: bool) -> Paragraph<'static> {
        let space_hint = if paused { " to resume | " } else { " to pause | " };

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled(
                "Space",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(space_hint),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// Samples one pixel per grid cell and packs two cell rows per terminal row
pub struct FramebufferView<'a> {
    framebuffer: &'a Framebuffer,
    block_size: u32,
}

impl<'a> FramebufferView<'a> {
    pub fn new(framebuffer: &'a Framebuffer, block_size: u32) -> Self {
        Self {
            framebuffer,
            block_size: block_size.max(1),
        }
    }

    /// Terminal columns and rows needed to show the whole grid
    pub fn size(&self) -> (u16, u16) {
        let cols = self.framebuffer.width() / self.block_size;
        let rows = (self.framebuffer.height() / self.block_size).div_ceil(2);
        (
            u16::try_from(cols).unwrap_or(u16::MAX),
            u16::try_from(rows).unwrap_or(u16::MAX),
        )
    }

    fn cell_color(&self, col: u32, row: u32) -> game::Color {
        self.framebuffer
            .pixel(col * self.block_size, row * self.block_size)
            .unwrap_or(game::Color::BLACK)
    }
}

impl Widget for FramebufferView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = self.size();

        for row in 0..rows.min(area.height) {
            for col in 0..cols.min(area.width) {
                let top = self.cell_color(col as u32, row as u32 * 2);
                let bottom = self.cell_color(col as u32, row as u32 * 2 + 1);

                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(HALF_BLOCK)
                        .set_fg(to_terminal_color(top))
                        .set_bg(to_terminal_color(bottom));
                }
            }
        }
    }
}

fn to_terminal_color(color: game::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
