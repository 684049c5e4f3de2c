//! mdpimg - Resolve mdpr.jp article galleries into full-resolution images.
//!
//! ```no_run
//! let images = mdpimg::get_images("https://mdpr.jp/news/detail/12345")?;
//! for url in images {
//!     println!("{url}");
//! }
//! # Ok::<(), mdpimg::Error>(())
//! ```

pub mod fs;
pub mod site;
pub mod termio;

mod article;
mod client;
mod endpoint;
mod error;
mod gallery;
mod models;
mod scraper;
mod selectors;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use article::{ArticleID, ArticleUrl};
pub use client::{Client, Fetch};
pub use error::{Error, Result, TransportError};
pub use scraper::Scraper;
pub use site::{HeaderProfile, Site};

/// Returns the full-resolution image URLs of the mdpr.jp article at `url`,
/// in gallery order.
///
/// # Errors
///
/// See [`Error`]: every failure is reported with its kind, nothing is
/// retried.
pub fn get_images(url: &str) -> Result<Vec<String>> {
    Scraper::new().get_images(url)
}
