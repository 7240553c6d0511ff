use super::{list_item, render_selectable_list};
use crate::catalog::Catalog;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

pub fn render_project_list(frame: &mut Frame<'_>, area: Rect, catalog: &Catalog, selection: usize) {
    let items = catalog
        .projects
        .iter()
        .map(|project| {
            let detail = format!(
                "{} · {} experts",
                project.client,
                project.experts.len()
            );
            list_item(project.name.clone(), detail)
        })
        .collect();

    let block = Block::default().title(" Projects ").borders(Borders::ALL);
    render_selectable_list(frame, area, block, items, selection);
}
