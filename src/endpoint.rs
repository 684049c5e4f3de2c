//! Gallery endpoint discovery, from the mobile article page.

use crate::{
    article::{ArticleID, ArticleUrl},
    client::Fetch,
    models,
    selectors::ARTICLE_LINK_SELECTOR,
    site::Site,
    Error, Result,
};
use kuchiki::traits::*;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Returns the URL of the mobile rendering of the article `id`.
pub(crate) fn mobile_index_url(site: &Site, id: &ArticleID) -> String {
    format!("{}{}{id}", site.mobile_host, site.mobile_article_path)
}

/// Retrieves the gallery API URL of `article`.
///
/// # Errors
///
/// Fails if the page can't be fetched, if an anchor carries an undecodable
/// descriptor, or if no descriptor points to this article.
pub fn resolve<F>(fetcher: &F, site: &Site, article: &ArticleUrl) -> Result<String>
where
    F: Fetch + ?Sized,
{
    let id = article.id();
    let url = mobile_index_url(site, &id);

    let body = fetcher.fetch(&url, &site.web_profile)?;
    let html = String::from_utf8(body)
        .map_err(|err| Error::malformed("read article HTML", err))?;

    find_endpoint(&html, &id, site)
}

/// Looks for the first article body anchor whose descriptor targets `id`.
fn find_endpoint(html: &str, id: &ArticleID, site: &Site) -> Result<String> {
    let document = kuchiki::parse_html().one(html);

    let mut anchors = 0;
    for anchor in ARTICLE_LINK_SELECTOR.filter(document.descendants().elements())
    {
        anchors += 1;
        // No attribute behaves like an empty one: not a valid descriptor.
        let descriptor = {
            let attributes = anchor.attributes.borrow();
            parse_descriptor(
                attributes
                    .get(site.app_option_attribute)
                    .unwrap_or_default(),
            )?
        };

        // First match wins, later anchors are never considered.
        if descriptor.url.contains(id.as_str()) {
            log::debug!("article {id}: gallery at {}", descriptor.url);
            return Ok(format!("{}{}", site.api_host, descriptor.url));
        }
        log::trace!("article {id}: skip anchor to {}", descriptor.url);
    }

    log::debug!("article {id}: no match among {anchors} anchor(s)");
    Err(Error::EndpointNotFound(id.to_string()))
}

/// Decodes the URL-encoded JSON descriptor of an anchor.
fn parse_descriptor(option: &str) -> Result<models::endpoint::Descriptor> {
    let json = query_unescape(option)
        .map_err(|err| Error::malformed("decode gallery descriptor", err))?;

    serde_json::from_str(&json)
        .map_err(|err| Error::malformed("parse gallery descriptor", err))
}

/// Invalid URL-encoded string.
#[derive(Debug, Error)]
enum DecodeError {
    #[error("invalid escape sequence at byte {0}")]
    Escape(usize),
    #[error("decoded value is not UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

/// Decodes a query-string component: `+` is a space, `%XX` a byte.
///
/// Unlike `form_urlencoded`, malformed escapes are rejected.
fn query_unescape(value: &str) -> Result<String, DecodeError> {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => decoded.push(b' '),
            b'%' => {
                let byte = bytes
                    .get(i + 1..i + 3)
                    .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                    .ok_or(DecodeError::Escape(i))?;
                decoded.push(byte);
                i += 2;
            },
            byte => decoded.push(byte),
        }
        i += 1;
    }

    Ok(String::from_utf8(decoded)?)
}
