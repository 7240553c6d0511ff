use crate::ui::theme::{GLOBAL_BORDER, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_not_found(frame: &mut Frame<'_>, area: Rect, id: u32) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            "Project not found",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::from(format!("No project with id {}.", id)).centered(),
        Line::from(""),
        Line::from("Press l to go to the project list.").centered(),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
