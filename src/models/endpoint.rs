//! Mininal model of the descriptor embedded in the article anchors.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Descriptor {
    // API path, relative to the API host.
    pub url: String,
}
