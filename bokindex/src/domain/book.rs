use serde::{Deserialize, Serialize};

/// A single catalog entry as returned inside the search envelope.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub published: bool,
}
