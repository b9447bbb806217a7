//! Project store: the in-memory project list mirrored to a `StoragePort`.
//!
//! The whole collection lives under a single key as a JSON array. Every
//! mutation rewrites it in full; there is no incremental update.

use std::rc::Rc;
use forge_types::{Result, project::Project};
use crate::ports::StoragePort;

pub const PROJECTS_KEY: &str = "forge:projects";

pub struct ProjectStore {
    storage: Rc<dyn StoragePort>,
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Read the persisted collection. A missing key, a failed read or
    /// malformed JSON all yield an empty store.
    pub fn load(storage: Rc<dyn StoragePort>) -> Self {
        let projects = match Self::try_load(storage.as_ref()) {
            Ok(projects) => {
                log::info!(
                    "Loaded {} project(s) from {}",
                    projects.len(),
                    storage.backend_name()
                );
                projects
            }
            Err(e) => {
                log::warn!("Discarding persisted projects ({}), starting empty", e);
                Vec::new()
            }
        };
        Self { storage, projects }
    }

    /// Like [`ProjectStore::load`] but surfaces the failure instead of
    /// falling back.
    pub fn try_load(storage: &dyn StoragePort) -> Result<Vec<Project>> {
        match storage.get(PROJECTS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the collection. Memory is updated even if the write fails.
    pub fn save_all(&mut self, projects: Vec<Project>) -> Result<()> {
        self.projects = projects;
        let json = serde_json::to_string(&self.projects)?;
        self.storage.set(PROJECTS_KEY, &json)
    }

    pub fn add(&mut self, project: Project) -> Result<()> {
        let mut next = self.projects.clone();
        next.push(project);
        self.save_all(next)
    }

    /// Returns `false` (without writing) when no project has `id`.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let next = self
            .projects
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        self.save_all(next)?;
        Ok(true)
    }

    /// Wipe the backing store entirely, not just the projects key. Memory is
    /// emptied even if the backend fails.
    pub fn clear_all(&mut self) -> Result<()> {
        self.projects.clear();
        self.storage.clear()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
