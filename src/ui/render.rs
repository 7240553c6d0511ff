use crate::router::Route;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::pages::{render_not_found, render_project, render_project_list};
use crate::ui::scheduling::render_scheduling_dialog;
use ratatui::widgets::Clear;
use ratatui::Frame;

const LIST_HINTS: &str = " ↑↓ Move  Enter Open  q Quit";
const PROJECT_HINTS: &str = " ↑↓ Move  Enter Schedule call  l Projects  q Quit";
const NOT_FOUND_HINTS: &str = " l Projects  q Quit";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let title = match app.route() {
        Route::ProjectList => "Projects",
        Route::Project { .. } => app
            .current_project()
            .map_or("Project not found", |project| project.name.as_str()),
    };
    let header_widget = Header::new(app.router().href(app.route()), title);
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let hints = match app.route() {
        Route::ProjectList => {
            render_project_list(frame, body, app.catalog(), app.project_selection());
            LIST_HINTS
        }
        Route::Project { id } => match app.current_project() {
            Some(project) => {
                render_project(frame, body, project, app.expert_selection());
                PROJECT_HINTS
            }
            None => {
                render_not_found(frame, body, id);
                NOT_FOUND_HINTS
            }
        },
    };

    let footer_widget = Footer::new(hints);
    frame.render_widget(footer_widget.widget(footer), footer);

    render_scheduling_dialog(frame, app.scheduling_dialog(), app.scheduling_props());
}
