/// Publication-status constraint. `Unset` means no constraint; the wire
/// encoding (literal `true`/`false`, absent when unset) exists only in
/// [`SearchFilters::query_params`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedFilter {
    #[default]
    Unset,
    Published,
    Unpublished,
}

impl PublishedFilter {
    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            PublishedFilter::Unset => None,
            PublishedFilter::Published => Some("true"),
            PublishedFilter::Unpublished => Some("false"),
        }
    }
}

/// Facet constraints for a search request. Unset fields produce no query
/// parameter at all.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SearchFilters {
    pub category: Option<String>,
    pub author: Option<String>,
    pub published: PublishedFilter,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.author.is_none()
            && self.published == PublishedFilter::Unset
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Key/value pairs in wire order: category, author, published.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(author) = &self.author {
            params.push(("author", author.clone()));
        }
        if let Some(published) = self.published.as_wire() {
            params.push(("published", published.to_string()));
        }
        params
    }
}
