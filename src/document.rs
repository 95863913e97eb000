//! In-memory page model produced by the layout engine
//!
//! A `Document` is a flat list of pages, each holding positioned draw
//! commands in PDF user space (origin bottom-left, y grows upward). It is
//! built once per request and handed to the renderer for serialization.

use crate::types::{Color, FontWeight, Size};

/// A positioned run of text on one line
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    /// Baseline position.
    pub y: f64,
    pub font_size: f64,
    pub weight: FontWeight,
    pub color: Color,
}

/// Something drawn on a page
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text(TextRun),
    /// Horizontal separator line.
    Rule {
        x1: f64,
        x2: f64,
        y: f64,
        thickness: f64,
        color: Color,
    },
}

/// One page of the document
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub size: Size,
    pub commands: Vec<DrawCommand>,
}

impl Page {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Text runs on this page, in drawing order.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(run) => Some(run),
            DrawCommand::Rule { .. } => None,
        })
    }
}

/// The whole laid-out document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Written into the PDF info dictionary.
    pub title: String,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every drawn string in page order, footers included.
    pub fn text_content(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|page| page.text_runs())
            .map(|run| run.text.as_str())
            .collect()
    }
}
