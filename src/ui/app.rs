use crate::catalog::{Catalog, Expert, Project};
use crate::router::{Route, RouteError, Router};
use crate::scheduling::{format_long_date, Phase};
use crate::ui::mvi::Reducer;
use crate::ui::scheduling::{
    SchedulingDialogProps, SchedulingDialogState, SchedulingIntent, SchedulingReducer,
};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use uuid::Uuid;

/// Source of "today" for the date picker.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Container state: current page, list cursors and the scheduling dialog.
pub struct App {
    should_quit: bool,
    router: Router,
    route: Route,
    catalog: Catalog,
    project_selection: usize,
    expert_selection: usize,
    /// Expert handed to the scheduling dialog.
    selected_expert: Option<Expert>,
    /// Visibility flag the container controls.
    is_scheduling_dialog_open: bool,
    /// State of the scheduling dialog (MVI pattern).
    scheduling_dialog: SchedulingDialogState,
    clock: Clock,
}

impl App {
    pub fn new(catalog: Catalog, router: Router, route: Route) -> Self {
        Self {
            should_quit: false,
            router,
            route,
            catalog,
            project_selection: 0,
            expert_selection: 0,
            selected_expert: None,
            is_scheduling_dialog_open: false,
            scheduling_dialog: SchedulingDialogState::default(),
            clock: Arc::new(|| Local::now().date_naive()),
        }
    }

    /// Replace the clock (tests pin "today").
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route == route {
            return;
        }
        tracing::debug!(target: "router", from = %self.route, to = %route, "Navigate");
        self.route = route;
        self.expert_selection = 0;
        if let Route::Project { id } = route {
            if let Some(index) = self.catalog.projects.iter().position(|p| p.id == id) {
                self.project_selection = index;
            }
        }
    }

    pub fn navigate_path(&mut self, path: &str) -> Result<(), RouteError> {
        let route = self.router.resolve(path)?;
        self.navigate(route);
        Ok(())
    }

    /// Project shown on a project route, if it exists.
    pub fn current_project(&self) -> Option<&Project> {
        match self.route {
            Route::Project { id } => self.catalog.project(id),
            Route::ProjectList => None,
        }
    }

    pub fn project_selection(&self) -> usize {
        self.project_selection
    }

    pub fn expert_selection(&self) -> usize {
        self.expert_selection
    }

    /// Move the cursor of the current page's list, wrapping at both ends.
    pub fn move_selection(&mut self, direction: i32) {
        let len = match self.route {
            Route::ProjectList => self.catalog.projects.len(),
            Route::Project { .. } => self.current_project().map_or(0, |p| p.experts.len()),
        };
        let current = match self.route {
            Route::ProjectList => self.project_selection,
            Route::Project { .. } => self.expert_selection,
        };
        let next = wrap_index(current, len, direction);
        match self.route {
            Route::ProjectList => self.project_selection = next,
            Route::Project { .. } => self.expert_selection = next,
        }
    }

    /// Open the project highlighted on the list page.
    pub fn open_selected_project(&mut self) {
        let Some(id) = self.catalog.projects.get(self.project_selection).map(|p| p.id) else {
            return;
        };
        self.navigate(Route::Project { id });
    }

    pub fn highlighted_expert(&self) -> Option<&Expert> {
        self.current_project()?.experts.get(self.expert_selection)
    }

    // ========================================================================
    // Scheduling dialog (MVI pattern)
    // ========================================================================

    pub fn selected_expert(&self) -> Option<&Expert> {
        self.selected_expert.as_ref()
    }

    pub fn is_scheduling_dialog_open(&self) -> bool {
        self.is_scheduling_dialog_open
    }

    pub fn scheduling_dialog(&self) -> &SchedulingDialogState {
        &self.scheduling_dialog
    }

    /// Props passed to the dialog renderer.
    pub fn scheduling_props(&self) -> SchedulingDialogProps<'_> {
        SchedulingDialogProps {
            selected_expert: self.selected_expert.as_ref(),
            is_scheduling_dialog_open: self.is_scheduling_dialog_open,
        }
    }

    /// True when the dialog is on screen and should receive keys.
    pub fn scheduling_dialog_active(&self) -> bool {
        self.is_scheduling_dialog_open
            && self.selected_expert.is_some()
            && self.scheduling_dialog.is_visible()
    }

    /// Dispatch an intent to the scheduling dialog reducer.
    pub fn dispatch_scheduling(&mut self, intent: SchedulingIntent) {
        let before = self.scheduling_dialog.phase();
        dispatch_mvi!(self, scheduling_dialog, SchedulingReducer, intent);
        let after = self.scheduling_dialog.phase();
        if before == Some(Phase::Review) && after == Some(Phase::Confirmation) {
            self.log_call_request();
        }
    }

    /// Schedule a call with the expert highlighted on the project page.
    pub fn schedule_highlighted_expert(&mut self) {
        if let Some(expert) = self.highlighted_expert().cloned() {
            self.open_scheduling_dialog(expert);
        }
    }

    pub fn open_scheduling_dialog(&mut self, expert: Expert) {
        tracing::info!(target: "scheduling", expert_id = expert.id, expert = %expert.name, "Scheduling dialog opened");
        // Opening for an expert always starts a fresh session
        if self.is_scheduling_dialog_open {
            self.close_scheduling_dialog();
        }
        self.selected_expert = Some(expert);
        self.set_scheduling_dialog_open(true);
    }

    /// Container-side control of the visibility flag.
    ///
    /// Opening starts a fresh session; closing discards it and notifies the
    /// container through [`App::close_scheduling_dialog`]. Setting the flag
    /// to its current value changes nothing.
    pub fn set_scheduling_dialog_open(&mut self, open: bool) {
        if open == self.is_scheduling_dialog_open {
            return;
        }
        if open {
            let today = (self.clock)();
            self.is_scheduling_dialog_open = true;
            self.dispatch_scheduling(SchedulingIntent::Open { today });
        } else {
            self.close_scheduling_dialog();
        }
    }

    /// Dialog close notification: reset the session, then drop the flag.
    pub fn close_scheduling_dialog(&mut self) {
        self.dispatch_scheduling(SchedulingIntent::Close);
        if self.is_scheduling_dialog_open {
            tracing::debug!(target: "scheduling", "Scheduling dialog closed");
        }
        self.is_scheduling_dialog_open = false;
    }

    /// Submission is simulated: the request only goes to the log.
    fn log_call_request(&self) {
        let Some(session) = self.scheduling_dialog.session() else {
            return;
        };
        let request_id = Uuid::new_v4();
        tracing::info!(
            target: "scheduling",
            %request_id,
            expert_id = self.selected_expert.as_ref().map(|e| e.id),
            date = %session.date.map(format_long_date).unwrap_or_default(),
            start = %session.start_time.map(|s| s.to_string()).unwrap_or_default(),
            end = %session.end_time.map(|s| s.to_string()).unwrap_or_default(),
            duration_minutes = session.duration(),
            "Call request sent"
        );
    }
}

fn wrap_index(current: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    }
}
