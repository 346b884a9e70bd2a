use serde::{Deserialize, Serialize};

/// Filter vocabulary served by `GET /filters/`. Either list may be missing
/// from the response body.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetOptions {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub authors: Vec<String>,
}
