//! Document assembly
//!
//! Turns one project record into the ordered sections of an investor brief.
//! Assembly is a pure function of the project and the fixed content tables;
//! it never fails.

use log::debug;

use crate::content::{CompanyProfile, CATEGORY_CONTENT, DISCLAIMER, REVENUE_MODELS, RISKS, ROADMAP};
use crate::project::Project;

pub const SUMMARY: &str = "Summary";
pub const PROJECT_OVERVIEW: &str = "Project Overview";
pub const INVESTMENT_HIGHLIGHTS: &str = "Investment Highlights";
pub const WHY_NOW: &str = "Why Now";
pub const REVENUE_MODEL: &str = "Revenue Model";
pub const ROADMAP_TITLE: &str = "Roadmap";
pub const RISK_SUMMARY: &str = "Risk Summary";
pub const ABOUT: &str = "About";
pub const DISCLAIMER_TITLE: &str = "Disclaimer";

/// Body of a section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    /// Free text, wrapped to the column width.
    Paragraph { text: String },
    /// One single-line bullet per item.
    BulletList { items: Vec<String> },
}

/// A titled block of content
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
    /// Rendered in the small muted style.
    pub fine_print: bool,
}

impl Section {
    pub fn paragraph(title: &str, text: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            body: SectionBody::Paragraph { text: text.into() },
            fine_print: false,
        }
    }

    pub fn bullets<I, S>(title: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.to_string(),
            body: SectionBody::BulletList {
                items: items.into_iter().map(Into::into).collect(),
            },
            fine_print: false,
        }
    }

    fn fine_print(mut self) -> Self {
        self.fine_print = true;
        self
    }
}

/// Metadata shown above the first section
#[derive(Debug, Clone, PartialEq)]
pub struct BriefHeader {
    pub title: String,
    pub category: String,
    pub location: Option<String>,
    pub status: String,
}

impl BriefHeader {
    /// Non-empty metadata values joined for the line under the title.
    pub fn metadata_line(&self) -> String {
        [Some(self.category.as_str()), self.location.as_deref(), Some(self.status.as_str())]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join("  ·  ")
    }
}

/// Everything the layout engine needs to draw one brief
#[derive(Debug, Clone, PartialEq)]
pub struct Brief {
    pub header: BriefHeader,
    pub sections: Vec<Section>,
}

/// Build the brief for `project`.
pub fn assemble(project: &Project, company: &CompanyProfile) -> Brief {
    let category = CATEGORY_CONTENT.select(&project.category);
    let revenue = REVENUE_MODELS.select(&project.slug);
    debug!(
        "Assembling brief for '{}': category rule '{}', revenue rule '{}'",
        project.slug, category.name, revenue.name
    );

    let overview = if project.long_description.trim().is_empty() {
        project.short_description.as_str()
    } else {
        project.long_description.as_str()
    };

    let sections = vec![
        Section::paragraph(SUMMARY, project.short_description.as_str()),
        Section::paragraph(PROJECT_OVERVIEW, overview),
        Section::bullets(INVESTMENT_HIGHLIGHTS, category.content.highlights.iter().copied()),
        Section::bullets(WHY_NOW, category.content.why_now.iter().copied()),
        Section::bullets(REVENUE_MODEL, revenue.content.iter().copied()),
        Section::bullets(ROADMAP_TITLE, ROADMAP),
        Section::bullets(RISK_SUMMARY, RISKS),
        Section::paragraph(ABOUT, company.about.as_str()),
        Section::paragraph(DISCLAIMER_TITLE, DISCLAIMER).fine_print(),
    ];

    Brief {
        header: BriefHeader {
            title: project.title.clone(),
            category: project.category.clone(),
            location: project.location().map(str::to_string),
            status: project.status.clone(),
        },
        sections,
    }
}
