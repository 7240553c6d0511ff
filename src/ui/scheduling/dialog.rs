//! Dialog rendering for the scheduling overlay.

use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::catalog::Expert;
use crate::scheduling::{
    first_selectable_date, format_long_date, month_grid, Phase, SchedulingSession, TimeSlot,
};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED_TEXT, HEADER_TEXT, POPUP_BORDER, STATUS_OK,
};

use super::state::{FormField, SchedulingDialogState};

/// Width of the scheduling dialog, borders included.
const DIALOG_WIDTH: u16 = 60;

/// Column where field values start in the Form phase.
const LABEL_WIDTH: usize = 12;

/// What the container hands the dialog on every frame.
#[derive(Debug, Clone, Copy)]
pub struct SchedulingDialogProps<'a> {
    pub selected_expert: Option<&'a Expert>,
    pub is_scheduling_dialog_open: bool,
}

/// Render the scheduling dialog overlay.
///
/// Draws nothing when the dialog is closed or there is no expert.
pub fn render_scheduling_dialog(
    frame: &mut Frame,
    state: &SchedulingDialogState,
    props: SchedulingDialogProps<'_>,
) {
    let Some(lines) = dialog_lines(state, props) else {
        return;
    };

    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect_by_size(frame.area(), DIALOG_WIDTH, height);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" Schedule expert call ", Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Body lines for the current phase, or `None` when nothing should render.
pub fn dialog_lines(
    state: &SchedulingDialogState,
    props: SchedulingDialogProps<'_>,
) -> Option<Vec<Line<'static>>> {
    if !props.is_scheduling_dialog_open {
        return None;
    }
    let expert = props.selected_expert?;
    let SchedulingDialogState::Open {
        today,
        session,
        focus,
    } = state
    else {
        return None;
    };

    let mut lines = expert_header(expert);
    match session.phase {
        Phase::Form => lines.extend(form_lines(session, *focus, *today)),
        Phase::Review => lines.extend(review_lines(session)),
        Phase::Confirmation => lines.extend(confirmation_lines(session)),
    }
    Some(lines)
}

fn expert_header(expert: &Expert) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            expert.name.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            format!("{} at {}", expert.title, expert.company),
            Style::default().fg(DISABLED_TEXT),
        ))
        .centered(),
        Line::from(""),
    ]
}

fn form_lines(session: &SchedulingSession, focus: FormField, today: NaiveDate) -> Vec<Line<'static>> {
    let date = session
        .date
        .map(format_long_date)
        .unwrap_or_else(|| "Pick a date".to_string());
    let start = session
        .start_time
        .map(|slot| slot.to_string())
        .unwrap_or_else(|| "Select start time".to_string());
    let end = session
        .end_time
        .map(|slot| slot.to_string())
        .unwrap_or_else(|| "Select end time".to_string());

    let mut lines = vec![
        field_line("Date", date, session.date.is_some(), focus == FormField::Date),
        field_line(
            "Start time",
            start,
            session.start_time.is_some(),
            focus == FormField::StartTime,
        ),
        field_line(
            "End time",
            end,
            session.end_time.is_some(),
            focus == FormField::EndTime,
        ),
        Line::from(""),
    ];

    if let Some(minutes) = session.duration() {
        lines.push(
            Line::from(Span::styled(
                format!("Call duration: {} minutes", minutes),
                Style::default().fg(DISABLED_TEXT),
            ))
            .centered(),
        );
        lines.push(Line::from(""));
    }

    lines.push(button_line(
        "Review call request",
        session.can_review(),
        focus == FormField::Submit,
    ));

    if focus == FormField::Date {
        lines.push(Line::from(""));
        lines.extend(calendar_lines(session.date, today));
    }

    lines.push(Line::from(""));
    lines.push(hint_line("Tab: Next  ←→↑↓: Change  Enter: Select  Esc: Close"));
    lines
}

fn review_lines(session: &SchedulingSession) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "  Call Details:",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        detail_line("Date", date_or_placeholder(session.date)),
        detail_line("Start Time", slot_or_placeholder(session.start_time)),
        detail_line("End Time", slot_or_placeholder(session.end_time)),
    ];
    if let Some(minutes) = session.duration() {
        lines.push(detail_line("Duration", format!("{} minutes", minutes)));
    }
    lines.push(Line::from(""));
    lines.push(button_line("Send call request to expert", true, true));
    lines.push(Line::from(""));
    lines.push(hint_line("Enter: Send  Esc: Close"));
    lines
}

fn confirmation_lines(session: &SchedulingSession) -> Vec<Line<'static>> {
    let text = Style::default().fg(HEADER_TEXT);
    let time = format!(
        "{} - {}",
        slot_or_placeholder(session.start_time),
        slot_or_placeholder(session.end_time)
    );
    vec![
        Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(STATUS_OK)),
            Span::styled("Call request sent", text.add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            "  Your request has been sent to the expert network.",
            text,
        )),
        Line::from(Span::styled(
            "  You will receive a calendar invite when the call",
            text,
        )),
        Line::from(Span::styled("  has been confirmed.", text)),
        Line::from(""),
        detail_line("Date", date_or_placeholder(session.date)),
        detail_line("Time", time),
        Line::from(""),
        button_line("Close", true, true),
    ]
}

fn field_line(label: &str, value: String, is_set: bool, focused: bool) -> Line<'static> {
    let mut value_style = if is_set {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default().fg(DISABLED_TEXT)
    };
    if focused {
        value_style = value_style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
    }
    let marker = if focused { "▸ " } else { "  " };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(
            format!("{:<width$}", label, width = LABEL_WIDTH),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(format!(" ‹ {} › ", value), value_style),
    ])
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {}: ", label), Style::default().fg(DISABLED_TEXT)),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}

fn button_line(label: &str, enabled: bool, focused: bool) -> Line<'static> {
    let style = match (enabled, focused) {
        (false, _) => Style::default()
            .fg(DISABLED_TEXT)
            .add_modifier(Modifier::DIM),
        (true, true) => Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(HEADER_TEXT),
    };
    Line::from(Span::styled(format!("[ {} ]", label), style)).centered()
}

fn hint_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(DISABLED_TEXT).add_modifier(Modifier::DIM),
    ))
    .centered()
}

/// Month view around the selected date. Today and earlier are dimmed.
fn calendar_lines(selected: Option<NaiveDate>, today: NaiveDate) -> Vec<Line<'static>> {
    let anchor = selected.unwrap_or_else(|| first_selectable_date(today));
    let mut lines = vec![
        Line::from(Span::styled(
            anchor.format("%B %Y").to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Mo Tu We Th Fr Sa Su",
            Style::default().fg(DISABLED_TEXT),
        ))
        .centered(),
    ];

    for week in month_grid(anchor) {
        let mut spans = Vec::with_capacity(14);
        for (idx, day) in week.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" "));
            }
            let Some(day) = day else {
                spans.push(Span::raw("  "));
                continue;
            };
            let style = if Some(*day) == selected {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else if *day <= today {
                Style::default()
                    .fg(DISABLED_TEXT)
                    .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            spans.push(Span::styled(format!("{:>2}", day.day()), style));
        }
        lines.push(Line::from(spans).centered());
    }
    lines
}

fn date_or_placeholder(date: Option<NaiveDate>) -> String {
    date.map(format_long_date)
        .unwrap_or_else(|| "Not selected".to_string())
}

fn slot_or_placeholder(slot: Option<TimeSlot>) -> String {
    slot.map(|slot| slot.to_string())
        .unwrap_or_else(|| "Not selected".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn expert() -> Expert {
        Catalog::sample().unwrap().projects[0].experts[0].clone()
    }

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn open_state() -> SchedulingDialogState {
        SchedulingDialogState::Open {
            today: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            session: SchedulingSession::default(),
            focus: FormField::Date,
        }
    }

    #[test]
    fn nothing_renders_without_expert_or_when_closed() {
        let expert = expert();
        let no_expert = SchedulingDialogProps {
            selected_expert: None,
            is_scheduling_dialog_open: true,
        };
        assert!(dialog_lines(&open_state(), no_expert).is_none());

        let closed = SchedulingDialogProps {
            selected_expert: Some(&expert),
            is_scheduling_dialog_open: false,
        };
        assert!(dialog_lines(&open_state(), closed).is_none());
    }

    #[test]
    fn empty_form_shows_placeholders_and_calendar() {
        let expert = expert();
        let props = SchedulingDialogProps {
            selected_expert: Some(&expert),
            is_scheduling_dialog_open: true,
        };
        let rendered = text(&dialog_lines(&open_state(), props).unwrap());
        assert!(rendered.contains(&expert.name));
        assert!(rendered.contains("Pick a date"));
        assert!(rendered.contains("Select start time"));
        assert!(rendered.contains("Select end time"));
        assert!(rendered.contains("[ Review call request ]"));
        assert!(rendered.contains("October 2026"));
        assert!(!rendered.contains("Call duration"));
    }
}
