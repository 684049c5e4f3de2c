//! Mininal model of the data returned by the gallery API.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    // Images, in display order.
    pub list: Vec<Image>,
}

#[derive(Debug, Deserialize)]
pub struct Image {
    // Full-resolution image URL.
    pub url: String,
}
