use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::types::{Catalog, Project};

const SAMPLE_CATALOG: &str = include_str!("sample.json");

/// Errors that can occur when loading a project catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog validation failed: {message}")]
    ValidationError { message: String },
}

impl Catalog {
    /// Loads a catalog from a JSON file and validates it.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content, path)
    }

    /// The catalog bundled with the binary.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(SAMPLE_CATALOG, Path::new("<built-in sample>"))
    }

    fn from_json(content: &str, origin: &Path) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
                path: origin.to_path_buf(),
                source: e,
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validates the catalog.
    ///
    /// Checks:
    /// - At least one project exists
    /// - Project ids are unique
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.projects.is_empty() {
            return Err(CatalogError::ValidationError {
                message: "At least one project must be defined".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::ValidationError {
                    message: format!("Duplicate project id {}", project.id),
                });
            }
        }

        Ok(())
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_is_valid() {
        let catalog = Catalog::sample().unwrap();
        let project = catalog.project(1).expect("project 1 is the landing page");
        assert!(!project.experts.is_empty());
        assert!(project.experts.iter().all(|e| !e.availability_blocks.is_empty()));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{"projects": [
            {"id": 1, "name": "A", "client": "X", "description": ""},
            {"id": 1, "name": "B", "client": "Y", "description": ""}
        ]}"#;
        let err = Catalog::from_json(json, Path::new("dup.json")).unwrap_err();
        assert!(err.to_string().contains("Duplicate project id 1"));
    }
}
