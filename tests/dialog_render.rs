//! Rendering checks against ratatui's in-memory backend.

mod common;

use common::*;
use crossterm::event::KeyCode;
use expertconnect::router::Route;
use expertconnect::ui::app::App;
use expertconnect::ui::input::handle_key;
use expertconnect::ui::mvi::Reducer;
use expertconnect::ui::render::draw;
use expertconnect::ui::scheduling::{
    dialog_lines, SchedulingDialogProps, SchedulingDialogState, SchedulingIntent,
    SchedulingReducer,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(app: &App) -> String {
    render_sized(app, 100, 45)
}

fn render_sized(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        handle_key(app, press_key(*code));
    }
}

#[test]
fn project_page_lists_experts() {
    let app = make_app();
    let screen = render(&app);
    assert!(screen.contains("ExpertConnect"));
    assert!(screen.contains("/project/1"));
    assert!(screen.contains(&sample_expert().name));
    assert!(!screen.contains("Schedule expert call"));
}

#[test]
fn project_list_page_renders() {
    let app = make_app_at(Route::ProjectList);
    let screen = render(&app);
    assert!(screen.contains("Projects"));
    for project in &sample_catalog().projects {
        assert!(screen.contains(&project.name));
    }
}

#[test]
fn unknown_project_shows_not_found() {
    let app = make_app_at(Route::Project { id: 99 });
    assert!(render(&app).contains("Project not found"));
}

#[test]
fn open_dialog_shows_form_placeholders() {
    let mut app = make_app();
    press(&mut app, &[KeyCode::Enter]);
    let screen = render(&app);
    let expert = sample_expert();
    assert!(screen.contains("Schedule expert call"));
    assert!(screen.contains(&expert.name));
    assert!(screen.contains(&format!("{} at {}", expert.title, expert.company)));
    assert!(screen.contains("Pick a date"));
    assert!(screen.contains("Select start time"));
    assert!(screen.contains("Select end time"));
    assert!(screen.contains("Review call request"));
    assert!(!screen.contains("Call duration"));
}

#[test]
fn filled_form_shows_live_duration() {
    let mut app = make_app();
    press(
        &mut app,
        &[
            KeyCode::Enter,
            KeyCode::Right,
            KeyCode::Tab,
            KeyCode::Down,
            KeyCode::Tab,
            KeyCode::Down,
            KeyCode::Right,
        ],
    );
    let screen = render(&app);
    assert!(screen.contains("October 19th, 2026"));
    assert!(screen.contains("00:00"));
    assert!(screen.contains("01:15"));
    assert!(screen.contains("Call duration: 75 minutes"));
}

#[test]
fn review_and_confirmation_views() {
    let mut app = make_app();
    press(
        &mut app,
        &[
            KeyCode::Enter,
            KeyCode::Right,
            KeyCode::Tab,
            KeyCode::Down,
            KeyCode::Tab,
            KeyCode::Down,
            KeyCode::Tab,
            KeyCode::Enter,
        ],
    );
    let review = render(&app);
    assert!(review.contains("Call Details:"));
    assert!(review.contains("Duration: 15 minutes"));
    assert!(review.contains("Send call request to expert"));

    press(&mut app, &[KeyCode::Enter]);
    let confirmation = render(&app);
    assert!(confirmation.contains("Call request sent"));
    assert!(confirmation.contains("Time: 00:00 - 00:15"));
    assert!(confirmation.contains("[ Close ]"));
}

#[test]
fn absent_expert_renders_nothing() {
    let state = SchedulingReducer::reduce(
        SchedulingDialogState::Hidden,
        SchedulingIntent::Open { today: today() },
    );
    let props = SchedulingDialogProps {
        selected_expert: None,
        is_scheduling_dialog_open: true,
    };
    assert!(dialog_lines(&state, props).is_none());

    let mut app = make_app();
    app.set_scheduling_dialog_open(true);
    assert!(!render(&app).contains("Schedule expert call"));
}

#[test]
fn closed_flag_renders_nothing_even_with_expert() {
    let expert = sample_expert();
    let state = SchedulingReducer::reduce(
        SchedulingDialogState::Hidden,
        SchedulingIntent::Open { today: today() },
    );
    let props = SchedulingDialogProps {
        selected_expert: Some(&expert),
        is_scheduling_dialog_open: false,
    };
    assert!(dialog_lines(&state, props).is_none());
}

#[test]
fn long_roster_keeps_highlighted_expert_on_screen() {
    let mut app = make_app_with(long_roster_catalog(40), Route::Project { id: 1 });
    for _ in 0..30 {
        press(&mut app, &[KeyCode::Down]);
    }
    assert_eq!(app.expert_selection(), 30);

    let screen = render_sized(&app, 100, 24);
    assert!(screen.contains("▸ Expert Number 30"), "{}", screen);
    assert!(!screen.contains("Expert Number 0 "));
}

#[test]
fn long_project_list_keeps_highlighted_project_on_screen() {
    let mut app = make_app_with(many_projects_catalog(50), Route::ProjectList);
    for _ in 0..45 {
        press(&mut app, &[KeyCode::Down]);
    }
    assert_eq!(app.project_selection(), 45);

    let screen = render_sized(&app, 100, 24);
    assert!(screen.contains("▸ Project Number 45"), "{}", screen);
}

#[test]
fn form_key_hints_are_shown_once() {
    let mut app = make_app();
    press(&mut app, &[KeyCode::Enter]);
    let screen = render(&app);
    assert_eq!(screen.matches("Esc").count(), 1, "{}", screen);
}
