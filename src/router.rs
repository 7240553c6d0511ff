//! In-app navigation between the project list and project pages.

use std::fmt;
use thiserror::Error;

/// Path the root route redirects to.
pub const LANDING_PATH: &str = "/project/1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ProjectList,
    Project { id: u32 },
}

impl Route {
    /// Canonical path without the base path.
    pub fn path(&self) -> String {
        match self {
            Route::ProjectList => "/project-list".to_string(),
            Route::Project { id } => format!("/project/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("No route matches '{0}'")]
    NotFound(String),
}

/// Resolves paths to routes under an optional base path.
#[derive(Debug, Clone)]
pub struct Router {
    base_path: String,
}

impl Router {
    /// `base_path` is stripped from incoming paths; "/" or "" means none.
    pub fn new(base_path: &str) -> Self {
        let trimmed = base_path.trim_end_matches('/');
        Self {
            base_path: trimmed.to_string(),
        }
    }

    pub fn base_path(&self) -> &str {
        if self.base_path.is_empty() {
            "/"
        } else {
            &self.base_path
        }
    }

    /// Full path for a route, including the base path.
    pub fn href(&self, route: Route) -> String {
        format!("{}{}", self.base_path, route.path())
    }

    pub fn resolve(&self, path: &str) -> Result<Route, RouteError> {
        let not_found = || RouteError::NotFound(path.to_string());
        let relative = if self.base_path.is_empty() {
            path
        } else {
            path.strip_prefix(&self.base_path)
                .filter(|rest| rest.is_empty() || rest.starts_with('/'))
                .ok_or_else(not_found)?
        };

        let relative = relative.trim_end_matches('/');
        let relative = if relative.is_empty() {
            tracing::debug!(target: "router", "Redirecting {} to {}", path, LANDING_PATH);
            LANDING_PATH
        } else {
            relative
        };

        let segments: Vec<&str> = relative.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["project-list"] => Ok(Route::ProjectList),
            ["project", id] => id
                .parse()
                .map(|id| Route::Project { id })
                .map_err(|_| not_found()),
            _ => Err(not_found()),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}
