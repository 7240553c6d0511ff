//! Routed pages drawn into the body region.

mod not_found;
mod project;
mod project_list;

pub use not_found::render_not_found;
pub use project::render_project;
pub use project_list::render_project_list;

use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, HighlightSpacing, List, ListItem, ListState};
use ratatui::Frame;

/// One list row: label plus a dimmed detail.
fn list_item(label: String, detail: String) -> ListItem<'static> {
    let style = Style::default().fg(HEADER_TEXT);
    ListItem::new(Line::from(vec![
        Span::styled(label, style),
        Span::styled(format!("  {}", detail), style.add_modifier(Modifier::DIM)),
    ]))
}

/// Draw `items` with `selection` highlighted. `ListState` scrolls so the
/// highlighted row stays inside `area`.
fn render_selectable_list(
    frame: &mut Frame<'_>,
    area: Rect,
    block: Block<'static>,
    items: Vec<ListItem<'static>>,
    selection: usize,
) {
    let selected = (!items.is_empty()).then(|| selection.min(items.len() - 1));
    let list = List::new(items)
        .block(block.border_style(Style::default().fg(GLOBAL_BORDER)))
        .highlight_symbol("▸ ")
        .highlight_spacing(HighlightSpacing::Always)
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}
