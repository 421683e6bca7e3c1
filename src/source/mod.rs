//! Review retrieval seam. The analysis core only ever sees the ordered text
//! blocks these sources hand back.

pub mod loader;

pub use self::loader::{parse_page, PageFormat};

use crate::error::{ReviewGramError, RgResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

pub trait ReviewSource {
    /// Reviews on page `page` (1-based), or `None` once pagination runs out.
    fn fetch_page(&self, content_id: &str, page: usize) -> RgResult<Option<Vec<String>>>;

    /// Pages `1..=page_count` flattened in order. A missing page ends the walk early.
    fn fetch_reviews(&self, content_id: &str, page_count: usize) -> RgResult<Vec<String>> {
        let mut reviews = Vec::new();
        for page in 1..=page_count {
            info!("Fetching page {}", page);
            match self.fetch_page(content_id, page)? {
                Some(batch) => {
                    debug!("   -> {} reviews on page {}", batch.len(), page);
                    reviews.extend(batch);
                }
                None => {
                    warn!(
                        "Only {} of {} requested pages exist for '{}'",
                        page - 1,
                        page_count,
                        content_id
                    );
                    break;
                }
            }
        }
        Ok(reviews)
    }
}

/// Pages held in memory, keyed by content id.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pages: HashMap<String, Vec<Vec<String>>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages<I, P, S>(mut self, content_id: &str, pages: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = pages
            .into_iter()
            .map(|p| p.into_iter().map(Into::into).collect())
            .collect();
        self.pages.insert(content_id.to_string(), pages);
        self
    }
}

impl ReviewSource for InMemorySource {
    fn fetch_page(&self, content_id: &str, page: usize) -> RgResult<Option<Vec<String>>> {
        let pages = self
            .pages
            .get(content_id)
            .ok_or_else(|| ReviewGramError::Source(format!("unknown content id '{}'", content_id)))?;
        Ok(page.checked_sub(1).and_then(|i| pages.get(i)).cloned())
    }
}

/// Reads `<root>/<content_id>/page-<n>.{txt,json,csv}`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn content_dir(&self, content_id: &str) -> RgResult<PathBuf> {
        let well_formed = !content_id.is_empty()
            && content_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !well_formed {
            return Err(ReviewGramError::Source(format!(
                "content id '{}' must be ASCII letters, digits, '-' or '_'",
                content_id
            )));
        }

        let dir = self.root.join(content_id);
        if !dir.is_dir() {
            return Err(ReviewGramError::Source(format!(
                "no reviews for '{}' under {}",
                content_id,
                self.root.display()
            )));
        }
        Ok(dir)
    }
}

impl ReviewSource for DirectorySource {
    fn fetch_page(&self, content_id: &str, page: usize) -> RgResult<Option<Vec<String>>> {
        let dir = self.content_dir(content_id)?;
        for format in PageFormat::iter() {
            let path = dir.join(format!("page-{}.{}", page, format));
            if path.is_file() {
                debug!("   Reading {}", path.display());
                return parse_page(&path, format).map(Some);
            }
        }
        Ok(None)
    }
}
