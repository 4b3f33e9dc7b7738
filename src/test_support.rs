//! In-memory collaborator fakes shared by the client test modules.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::convert::{IdConverter, MovieId, NativeId, Provider, ShowId};
use crate::error::ResolutionError;
use crate::fetch::Fetcher;
use crate::page::Page;

/// Serves fixture HTML by URL; unknown URLs fail like a dead link.
/// Form POSTs are recorded for assertion.
pub(crate) struct MockFetcher {
    pages: HashMap<String, String>,
    pub posts: Rc<RefCell<Vec<(String, Vec<(String, String)>)>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            posts: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }
}

impl Fetcher for MockFetcher {
    fn fetch(
        &self,
        url: &str,
        _language: &str,
        post: Option<&[(&str, &str)]>,
    ) -> Result<Page, ResolutionError> {
        if let Some(form) = post {
            self.posts.borrow_mut().push((
                url.to_string(),
                form.iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ));
        }
        self.pages
            .get(url)
            .map(|html| Page::parse(html))
            .ok_or_else(|| ResolutionError::Fetch {
                url: url.to_string(),
                reason: "no fixture registered".to_string(),
            })
    }
}

/// Deterministic converter: even native IDs become movie IDs, odd ones
/// show IDs, both unchanged. Alternate IDs resolve to their digits.
#[derive(Default)]
pub(crate) struct StaticConverter {
    pub fail_alternate: bool,
}

impl IdConverter for StaticConverter {
    fn native_to_target(
        &self,
        _provider: Provider,
        native_ids: &[NativeId],
    ) -> Result<(Vec<MovieId>, Vec<ShowId>), ResolutionError> {
        let movie_ids = native_ids.iter().copied().filter(|id| id % 2 == 0).collect();
        let show_ids = native_ids.iter().copied().filter(|id| id % 2 == 1).collect();
        Ok((movie_ids, show_ids))
    }

    fn alternate_to_target(
        &self,
        alternate_id: &str,
        _fail_on_miss: bool,
    ) -> Result<MovieId, ResolutionError> {
        if self.fail_alternate {
            return Err(ResolutionError::Conversion(format!(
                "no mapping for {alternate_id}"
            )));
        }
        alternate_id
            .trim_start_matches("tt")
            .parse()
            .map_err(|_| ResolutionError::Conversion(format!("bad alternate ID {alternate_id}")))
    }
}
