//! Shared test utilities: canned HTTP responses and page fixtures.

use crate::{client::Fetch, error::TransportError, site::HeaderProfile, Error, Result};
use std::{cell::RefCell, collections::HashMap};
use url::form_urlencoded;

/// In-memory [`Fetch`]: serves canned bodies, 404 for everything else.
///
/// Records the profile used by each request.
#[derive(Default)]
pub(crate) struct FakeFetcher {
    responses: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<(String, &'static str)>>,
}

impl FakeFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Serves `body` at `url`.
    pub(crate) fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(url.to_owned(), body.into());
        self
    }

    /// Returns the requested URLs, in order.
    pub(crate) fn urls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// Returns the name of the profile used by each request, in order.
    pub(crate) fn profiles(&self) -> Vec<&'static str> {
        self.requests
            .borrow()
            .iter()
            .map(|&(_, profile)| profile)
            .collect()
    }
}

impl Fetch for FakeFetcher {
    fn fetch(&self, url: &str, profile: &HeaderProfile) -> Result<Vec<u8>> {
        self.requests
            .borrow_mut()
            .push((url.to_owned(), profile.name()));

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| Error::transport(url, TransportError::Status(404)))
    }
}

/// URL-encodes a gallery descriptor, like the site does.
pub(crate) fn encode_option(json: &str) -> String {
    form_urlencoded::byte_serialize(json.as_bytes()).collect()
}

/// Builds a mobile article page with one anchor per app option.
pub(crate) fn article_page<S: AsRef<str>>(options: &[S]) -> String {
    let anchors = options
        .iter()
        .map(|option| {
            format!(
                r#"<a href="mdprapp://photo" data-mdprapp-option="{}">photos</a>"#,
                option.as_ref()
            )
        })
        .collect::<String>();

    format!(
        r#"<!DOCTYPE html>
<html><head><title>article</title></head><body>
<div class="p-articleHeader"><a data-mdprapp-option="broken%">header</a></div>
<div class="p-articleBody"><p>Lorem ipsum</p>{anchors}</div>
</body></html>"#
    )
}
