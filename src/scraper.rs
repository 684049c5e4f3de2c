//! Article to image list resolution.

use crate::{
    article::ArticleUrl, client::Fetch, endpoint, gallery, site::Site, Client,
    Result,
};

/// Resolves mdpr.jp articles into their gallery images.
///
/// Holds no mutable state: a scraper can be shared across threads (as long
/// as its fetcher can) and used for any number of articles.
#[derive(Clone)]
pub struct Scraper<F = Client> {
    /// HTTP client.
    fetcher: F,
    /// Site contract.
    site: Site,
}

impl Scraper {
    /// Initializes a new scraper for mdpr.jp, over HTTP.
    pub fn new() -> Self {
        Self::with_fetcher(Client::new(), Site::MDPR)
    }
}

impl Default for Scraper {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetch> Scraper<F> {
    /// Initializes a new scraper using a custom fetcher and site contract.
    pub fn with_fetcher(fetcher: F, site: Site) -> Self {
        Self { fetcher, site }
    }

    /// Returns the underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Returns the site contract.
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Validates `raw` as an article URL.
    ///
    /// # Errors
    ///
    /// See [`ArticleUrl::new`].
    pub fn check(&self, raw: &str) -> Result<ArticleUrl> {
        ArticleUrl::new(raw, &self.site)
    }

    /// Retrieves the gallery API URL of `article`.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::EndpointNotFound`] if no descriptor of the
    /// article body targets this article, [`crate::Error::MalformedPayload`]
    /// if one can't be decoded.
    pub fn resolve_endpoint(&self, article: &ArticleUrl) -> Result<String> {
        endpoint::resolve(&self.fetcher, &self.site, article)
    }

    /// Lists the images of the gallery at `api_url`.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::MalformedPayload`] if any image lacks an
    /// URL.
    pub fn list_images(&self, api_url: &str) -> Result<Vec<String>> {
        gallery::list_images(&self.fetcher, &self.site, api_url)
    }

    /// Returns the full-resolution image URLs of the article at `url`.
    ///
    /// # Errors
    ///
    /// The first failing stage aborts the resolution, its error is returned
    /// as is.
    pub fn get_images(&self, url: &str) -> Result<Vec<String>> {
        let article = self.check(url)?;
        let api_url = self.resolve_endpoint(&article)?;

        self.list_images(&api_url)
    }
}
