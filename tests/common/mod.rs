//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use expertconnect::catalog::{Catalog, Expert};
use expertconnect::router::{Route, Router};
use expertconnect::scheduling::TimeSlot;
use expertconnect::ui::app::App;
use std::sync::Arc;

/// Fixed "today" so date-picker assertions do not drift.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

pub fn tomorrow() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn slot(label: &str) -> TimeSlot {
    label.parse().expect("valid slot label")
}

pub fn sample_catalog() -> Catalog {
    Catalog::sample().expect("bundled catalog is valid")
}

/// First expert of the landing project.
pub fn sample_expert() -> Expert {
    sample_catalog().projects[0].experts[0].clone()
}

/// App on the landing project with the clock pinned to [`today`].
pub fn make_app() -> App {
    make_app_at(Route::Project { id: 1 })
}

pub fn make_app_at(route: Route) -> App {
    let mut app = App::new(sample_catalog(), Router::default(), route);
    app.set_clock(Arc::new(today));
    app
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Catalog with one project whose roster holds `experts` numbered experts.
pub fn long_roster_catalog(experts: u32) -> Catalog {
    let mut catalog = sample_catalog();
    let template = sample_expert();
    let project = &mut catalog.projects[0];
    project.experts = (0..experts)
        .map(|n| Expert {
            id: 1000 + n,
            name: format!("Expert Number {}", n),
            ..template.clone()
        })
        .collect();
    catalog
}

/// Catalog with `projects` numbered projects.
pub fn many_projects_catalog(projects: u32) -> Catalog {
    let mut catalog = sample_catalog();
    let template = catalog.projects[0].clone();
    catalog.projects = (0..projects)
        .map(|n| expertconnect::catalog::Project {
            id: n + 1,
            name: format!("Project Number {}", n),
            ..template.clone()
        })
        .collect();
    catalog
}

pub fn make_app_with(catalog: Catalog, route: Route) -> App {
    let mut app = App::new(catalog, Router::default(), route);
    app.set_clock(Arc::new(today));
    app
}
