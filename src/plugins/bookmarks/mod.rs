use crate::actions::{Action, ActionKind};
use crate::plugin::Plugin;
use crate::settings::Settings;
use std::path::PathBuf;
use tracing::{debug, warn};

pub mod source;

use source::{BookmarkEntry, BookmarkSource};

pub const APP_ICON: &str = "Images/app.png";
pub const LINK_ICON: &str = "Images/link.png";

/// Searches the Edge bookmarks file by name.
///
/// The file is re-read on every query so edits made in the browser show up
/// immediately.
pub struct EdgeBookmarksPlugin {
    path: Option<PathBuf>,
}

impl EdgeBookmarksPlugin {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let path = settings.bookmarks_path();
        if path.is_none() {
            warn!("could not determine the Edge bookmarks location");
        }
        Self { path }
    }

    fn load(&self) -> anyhow::Result<BookmarkSource> {
        match &self.path {
            Some(path) => source::load(path),
            None => Ok(BookmarkSource::Missing),
        }
    }
}

fn not_found_notice() -> Action {
    Action {
        label: "Edge Bookmarks file not found".into(),
        desc: "Ensure Edge is installed and bookmarks are saved".into(),
        icon: APP_ICON.into(),
        action: ActionKind::Notice,
        keep_open: true,
    }
}

fn unreadable_notice(err: &anyhow::Error) -> Action {
    Action {
        label: "Edge Bookmarks file could not be read".into(),
        desc: format!("{err:#}"),
        icon: APP_ICON.into(),
        action: ActionKind::Notice,
        keep_open: true,
    }
}

fn bookmark_action(entry: BookmarkEntry) -> Action {
    Action {
        label: entry.name,
        desc: entry.url.clone(),
        icon: LINK_ICON.into(),
        action: ActionKind::OpenUrl(entry.url),
        keep_open: false,
    }
}

impl Plugin for EdgeBookmarksPlugin {
    fn search(&self, query: &str) -> Vec<Action> {
        let roots = match self.load() {
            Ok(BookmarkSource::Loaded(roots)) => roots,
            Ok(BookmarkSource::Missing) => return vec![not_found_notice()],
            Err(e) => {
                warn!("failed to load bookmarks: {e:#}");
                return vec![unreadable_notice(&e)];
            }
        };
        let entries = roots.entries();
        debug!(count = entries.len(), "loaded bookmarks");
        source::filter(entries, query)
            .into_iter()
            .map(bookmark_action)
            .collect()
    }

    fn name(&self) -> &str {
        "edge_bookmarks"
    }

    fn description(&self) -> &str {
        "Search Microsoft Edge bookmarks by name"
    }
}
