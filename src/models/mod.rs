pub mod endpoint;
pub mod gallery;
