//! Project lookup by slug
//!
//! Two backends share the [`ProjectStore`] trait: a PostgREST-style REST
//! table (the hosted database) and a JSON file loaded at startup for local
//! runs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::error::{BriefError, BriefResult};
use crate::project::Project;

/// Columns requested from the projects table.
const PROJECT_COLUMNS: &str =
    "slug,title,category,location,status,short_description,long_description";

/// Read-only source of project records
pub trait ProjectStore: Send + Sync {
    /// `Ok(None)` when no project has this slug.
    fn find_by_slug(&self, slug: &str) -> BriefResult<Option<Project>>;
}

/// Projects table behind a PostgREST / Supabase REST endpoint
pub struct RestProjectStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestProjectStore {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> BriefResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    fn query_url(&self, slug: &str) -> String {
        format!(
            "{}/rest/v1/projects?slug=eq.{}&select={}&limit=1",
            self.base_url,
            urlencoding::encode(slug),
            PROJECT_COLUMNS
        )
    }
}

impl ProjectStore for RestProjectStore {
    fn find_by_slug(&self, slug: &str) -> BriefResult<Option<Project>> {
        let url = self.query_url(slug);
        debug!("Querying project store: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            warn!("Project query returned {}: {}", status, body.trim());
            return Err(BriefError::Store(format!("project query returned {}", status)));
        }

        let rows: Vec<Project> = serde_json::from_str(&body)?;
        Ok(rows.into_iter().next())
    }
}

/// Projects loaded once from a JSON array on disk
#[derive(Debug, Default)]
pub struct JsonFileProjectStore {
    projects: HashMap<String, Project>,
}

impl JsonFileProjectStore {
    pub fn load(path: &Path) -> BriefResult<Self> {
        let raw = fs::read_to_string(path)?;
        let store = Self::from_json(&raw)?;
        debug!("Loaded {} project(s) from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn from_json(raw: &str) -> BriefResult<Self> {
        let projects: Vec<Project> = serde_json::from_str(raw)?;
        Ok(Self::from_projects(projects))
    }

    /// The first record wins when a slug appears twice.
    pub fn from_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let mut by_slug = HashMap::new();
        for project in projects {
            if by_slug.contains_key(&project.slug) {
                warn!("Duplicate project slug '{}' ignored", project.slug);
                continue;
            }
            by_slug.insert(project.slug.clone(), project);
        }
        Self { projects: by_slug }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectStore for JsonFileProjectStore {
    fn find_by_slug(&self, slug: &str) -> BriefResult<Option<Project>> {
        Ok(self.projects.get(slug).cloned())
    }
}
