use crate::{site::Site, Error, Result};
use std::{fmt, str::FromStr};

/// A supported article URL.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ArticleUrl(String);

impl ArticleUrl {
    /// Validates `raw` as an article URL of `site`.
    ///
    /// Surrounding whitespaces are ignored.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidUrl`] when the domain marker is missing or
    /// the disallowed marker is present (the latter always wins).
    pub fn new(raw: &str, site: &Site) -> Result<Self> {
        let url = raw.trim();

        if !url.contains(site.domain_marker)
            || url.contains(site.disallowed_marker)
        {
            return Err(Error::InvalidUrl(raw.to_owned()));
        }

        Ok(Self(url.to_owned()))
    }

    /// Returns the article ID: the last non-empty path segment.
    ///
    /// The query string and the fragment, if any, are not part of it.
    pub fn id(&self) -> ArticleID {
        let path = self
            .0
            .split(&['?', '#'][..])
            .next()
            .unwrap_or_default();
        // Can't be empty: the domain marker guarantees a non-empty segment.
        let segment = path
            .split('/')
            .rev()
            .find(|segment| !segment.is_empty())
            .unwrap_or(path);

        ArticleID(segment.to_owned())
    }

    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ArticleUrl {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value, &Site::MDPR)
    }
}

/// Article ID on mdpr.jp, an opaque token.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ArticleID(String);

impl ArticleID {
    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
