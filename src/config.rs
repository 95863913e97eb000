//! Runtime configuration
//!
//! [`BriefOptions`] drives one brief generation and is what library callers
//! construct. [`ServerConfig`] is the command line / environment surface of
//! the server binary and produces both the options and the store settings.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use clap::{ArgAction, Parser};

use crate::content::CompanyProfile;
use crate::error::{BriefError, BriefResult};
use crate::field::DEFAULT_FOOTER_TEMPLATE;
use crate::renderer::RenderOptions;
use crate::types::PageGeometry;

/// Settings for generating a single brief
#[derive(Debug, Clone)]
pub struct BriefOptions {
    pub geometry: PageGeometry,
    /// Footer text with `{PAGE}` and `{NUMPAGES}` fields.
    pub footer_template: String,
    pub company: CompanyProfile,
    pub compress: bool,
    /// Stamp `/CreationDate` with the current time.
    pub creation_date: bool,
}

impl BriefOptions {
    /// Serializer settings for one render; reads the clock when dated.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            compress: self.compress,
            creation_date: self.creation_date.then(Utc::now),
            author: self.company.name.clone(),
        }
    }
}

impl Default for BriefOptions {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),
            footer_template: DEFAULT_FOOTER_TEMPLATE.to_string(),
            company: CompanyProfile::default(),
            compress: true,
            creation_date: true,
        }
    }
}

/// Where project records come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSource {
    Rest { url: String, api_key: String },
    File(PathBuf),
}

#[derive(Debug, Parser)]
#[command(name = "investor-brief-server", version, about = "Serve investor brief PDFs for portfolio projects")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "BRIEF_BIND", default_value = "127.0.0.1:8787")]
    pub bind: String,

    /// Base URL of the REST project database
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    /// API key sent with every project query
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_key: Option<String>,

    /// JSON file with an array of projects, used instead of the REST database
    #[arg(long, env = "BRIEF_PROJECTS_FILE")]
    pub projects_file: Option<PathBuf>,

    /// Flate-compress page content streams
    #[arg(long, env = "BRIEF_COMPRESS", default_value_t = true, action = ArgAction::Set)]
    pub compress: bool,

    /// Write the generation time into the document info
    #[arg(long, env = "BRIEF_CREATION_DATE", default_value_t = true, action = ArgAction::Set)]
    pub creation_date: bool,

    /// Timeout for project store requests, in seconds
    #[arg(long, env = "BRIEF_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Request worker threads (defaults to the number of CPUs)
    #[arg(long, env = "BRIEF_WORKERS")]
    pub workers: Option<usize>,

    /// Holding company named in the About section
    #[arg(long, env = "BRIEF_COMPANY", default_value = "Portfolio Holdings")]
    pub company: String,

    /// Footer template
    #[arg(long, env = "BRIEF_FOOTER", default_value = DEFAULT_FOOTER_TEMPLATE)]
    pub footer: String,
}

impl ServerConfig {
    /// Exactly one of the REST database or the JSON file must be configured.
    pub fn store_source(&self) -> BriefResult<StoreSource> {
        let url = self.supabase_url.as_deref().map(str::trim).filter(|v| !v.is_empty());
        let key = self.supabase_key.as_deref().map(str::trim).filter(|v| !v.is_empty());

        match (url, key, &self.projects_file) {
            (Some(_), _, Some(_)) => Err(BriefError::Config(
                "configure either SUPABASE_URL or BRIEF_PROJECTS_FILE, not both".to_string(),
            )),
            (Some(url), Some(key), None) => Ok(StoreSource::Rest {
                url: url.to_string(),
                api_key: key.to_string(),
            }),
            (Some(_), None, None) => Err(BriefError::Config(
                "SUPABASE_ANON_KEY is required with SUPABASE_URL".to_string(),
            )),
            (None, _, Some(path)) => Ok(StoreSource::File(path.clone())),
            (None, _, None) => Err(BriefError::Config(
                "no project store configured: set SUPABASE_URL and SUPABASE_ANON_KEY, or BRIEF_PROJECTS_FILE"
                    .to_string(),
            )),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn worker_count(&self) -> usize {
        self.workers.filter(|n| *n > 0).unwrap_or_else(num_cpus::get)
    }

    pub fn brief_options(&self) -> BriefOptions {
        BriefOptions {
            geometry: PageGeometry::default(),
            footer_template: self.footer.clone(),
            company: CompanyProfile::new(self.company.trim()),
            compress: self.compress,
            creation_date: self.creation_date,
        }
    }
}
