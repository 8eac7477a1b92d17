//! Rendering of repository lists
//!
//! Records are mapped to structured [`RepoRow`]s and handed to a [`Surface`].
//! The surface owns presentation; nothing here builds markup. Terminal, plain
//! text and in-memory surfaces are provided.

use std::io::IsTerminal;
use std::sync::Arc;

use crate::models::RepositoryRecord;

mod memory;
mod plain;
mod terminal;

pub use memory::{MemorySurface, View};
pub use plain::PlainSurface;
pub use terminal::TerminalSurface;

/// Shown in place of rows when a user has no repositories
pub const EMPTY_MESSAGE: &str = "No repositories found.";

// ============================================================================
// Row model
// ============================================================================

/// Visual marker attached to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Success,
    Danger,
}

/// Open-issue state of a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueStatus {
    /// No open issues
    Clear,
    /// At least one open issue
    Open { count: u64 },
}

impl IssueStatus {
    pub fn from_count(count: u64) -> Self {
        if count > 0 {
            IssueStatus::Open { count }
        } else {
            IssueStatus::Clear
        }
    }

    pub fn marker(&self) -> Marker {
        match self {
            IssueStatus::Clear => Marker::Success,
            IssueStatus::Open { .. } => Marker::Danger,
        }
    }

    /// Badge text, `"N issue(s)"`; `None` when there is nothing to count
    pub fn badge_text(&self) -> Option<String> {
        match self {
            IssueStatus::Clear => None,
            IssueStatus::Open { count } => Some(format!("{} issue(s)", count)),
        }
    }
}

/// One rendered row: the `owner/name` label plus its issue status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRow {
    pub label: String,
    pub status: IssueStatus,
}

impl From<&RepositoryRecord> for RepoRow {
    fn from(record: &RepositoryRecord) -> Self {
        Self {
            label: record.label(),
            status: IssueStatus::from_count(record.open_issues_count),
        }
    }
}

// ============================================================================
// Surface Trait
// ============================================================================

/// A place results are drawn on
///
/// The surface has two regions: the row container and the search-term echo.
/// `clear` empties the container only. Implementations use interior
/// mutability so one surface can be shared across in-flight submissions.
pub trait Surface: Send + Sync {
    /// Remove every row and any empty-state message
    fn clear(&self);

    /// Echo the username the rows belong to
    fn set_search_term(&self, term: &str);

    /// Append a row below the existing ones
    fn append_row(&self, row: RepoRow);

    /// Show an inline empty-state message in the container
    fn show_empty(&self, message: &str);

    /// Show a modal-style notification; the container is left as is
    fn notify(&self, message: &str);

    /// Flush any buffered output
    fn flush(&self) {}
}

/// Replace the container's contents with `records`
///
/// An empty list shows [`EMPTY_MESSAGE`] and leaves the search term alone.
/// Otherwise the search term is set to `username` and one row is appended per
/// record, in the order given.
pub fn render_results(surface: &dyn Surface, records: &[RepositoryRecord], username: &str) {
    surface.clear();

    if records.is_empty() {
        surface.show_empty(EMPTY_MESSAGE);
        surface.flush();
        return;
    }

    surface.set_search_term(username);
    for record in records {
        surface.append_row(RepoRow::from(record));
    }
    surface.flush();
}

/// Which surface to draw on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Symbols and ANSI colours
    Colored,
    /// Symbols only (`NO_COLOR` set)
    Monochrome,
    /// One tab-separated line per row
    Plain,
}

/// Pick a surface kind
///
/// `--plain` or a non-TTY stdout gives plain text; `NO_COLOR` (any non-empty
/// value) keeps the terminal layout without colours.
pub fn surface_kind(plain: bool, is_terminal: bool, no_color: Option<&str>) -> SurfaceKind {
    if plain || !is_terminal {
        SurfaceKind::Plain
    } else if no_color.is_some_and(|v| !v.is_empty()) {
        SurfaceKind::Monochrome
    } else {
        SurfaceKind::Colored
    }
}

/// Surface for stdout, see [`surface_kind`]
pub fn default_surface(plain: bool) -> Arc<dyn Surface> {
    let no_color = std::env::var("NO_COLOR").ok();
    match surface_kind(plain, std::io::stdout().is_terminal(), no_color.as_deref()) {
        SurfaceKind::Colored => Arc::new(TerminalSurface::new()),
        SurfaceKind::Monochrome => Arc::new(TerminalSurface::without_colors()),
        SurfaceKind::Plain => Arc::new(PlainSurface::new()),
    }
}
