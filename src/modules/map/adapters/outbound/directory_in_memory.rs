// In memory implementation of the collaborator ports.
//
// Purpose
// - Stand in for the people, user type and user modules in tests and local runs.
//
// Responsibilities
// - Hold a snapshot of people, selections and the current profile.
// - Load that snapshot from a JSON seed file where every field is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modules::map::core::pins::{Pin, UserProfile, UserType};
use crate::modules::map::core::ports::{PeopleProvider, UserProvider, UserTypeProvider};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InMemoryDirectory {
    pub people: Vec<Pin>,
    pub selected_tags: Vec<String>,
    pub user_types: Vec<UserType>,
    pub selected_user_types: Vec<i64>,
    pub user_profile: Option<UserProfile>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let directory = Self::from_json(&json)?;
        tracing::debug!(
            people = directory.people.len(),
            user_types = directory.user_types.len(),
            "seed loaded from {}",
            path.display()
        );
        Ok(directory)
    }
}

impl PeopleProvider for InMemoryDirectory {
    fn list(&self) -> Vec<Pin> {
        self.people.clone()
    }

    fn selected_tags(&self) -> Vec<String> {
        self.selected_tags.clone()
    }
}

impl UserTypeProvider for InMemoryDirectory {
    fn user_types(&self) -> Vec<UserType> {
        self.user_types.clone()
    }

    fn selected_user_types(&self) -> Vec<i64> {
        self.selected_user_types.clone()
    }
}

impl UserProvider for InMemoryDirectory {
    fn user_profile(&self) -> Option<UserProfile> {
        self.user_profile.clone()
    }
}
