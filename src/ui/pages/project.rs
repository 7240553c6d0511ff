use super::{list_item, render_selectable_list};
use crate::catalog::{Expert, Project};
use crate::ui::theme::{ACCENT, DISABLED_TEXT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Expert roster on the left, details of the highlighted expert on the right.
pub fn render_project(frame: &mut Frame<'_>, area: Rect, project: &Project, selection: usize) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let roster_block = Block::default()
        .title(format!(" {} · {} ", project.name, project.client))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = roster_block.inner(columns[0]);
    frame.render_widget(roster_block, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(
        Paragraph::new(Line::styled(
            project.description.clone(),
            Style::default().fg(DISABLED_TEXT),
        ))
        .wrap(Wrap { trim: true }),
        rows[0],
    );

    if project.experts.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "No experts recommended yet.",
                Style::default().fg(DISABLED_TEXT),
            )),
            rows[1],
        );
    } else {
        let items = project
            .experts
            .iter()
            .map(|expert| list_item(expert.name.clone(), expert.country.clone()))
            .collect();
        render_selectable_list(frame, rows[1], Block::default(), items, selection);
    }

    let details = project
        .experts
        .get(selection)
        .map(expert_details)
        .unwrap_or_default();
    let details_block = Block::default()
        .title(" Expert ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(details)
            .block(details_block)
            .wrap(Wrap { trim: false }),
        columns[1],
    );
}

fn expert_details(expert: &Expert) -> Vec<Line<'static>> {
    let label = Style::default().fg(DISABLED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let field = |name: &'static str, text: &str| {
        Line::from(vec![
            Span::styled(format!("{:<13}", name), label),
            Span::styled(text.to_string(), value),
        ])
    };

    let mut lines = vec![
        Line::styled(
            expert.name.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("{} at {}", expert.title, expert.company)),
        Line::from(""),
        field("Network", &expert.network),
        field("Country", &expert.country),
        field("Availability", &expert.availability),
        Line::from(""),
        Line::styled("Perspective", label),
        Line::styled(expert.perspective.clone(), value),
    ];

    if !expert.experience.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Experience", label));
        for item in &expert.experience {
            lines.push(Line::styled(
                format!("• {} at {} ({})", item.title, item.company, item.duration),
                value,
            ));
        }
    }

    if !expert.availability_blocks.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Usually free", label));
        for block in &expert.availability_blocks {
            lines.push(Line::styled(
                format!("• {}: {}", block.day, block.slots.join(", ")),
                value,
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Enter to schedule a call",
        Style::default().fg(ACCENT),
    ));
    lines
}
