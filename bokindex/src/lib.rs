mod catalog_url;
mod client;
pub mod domain;

pub(crate) use catalog_url::*;
pub use client::*;
pub use domain::*;
