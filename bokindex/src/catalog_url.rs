#[derive(Debug, Clone)]
pub struct CatalogUrl(String);

impl AsRef<str> for CatalogUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl CatalogUrl {
    /// Creates a new CatalogUrl, stripping any trailing slashes from the base.
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into().trim_end_matches('/').to_string())
    }

    /// Append the given path to the URL. A trailing slash on `path` is kept,
    /// since the catalog routes all end in one.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    /// Append a single query parameter, percent-encoding the value.
    pub fn with_param(&self, key: &str, value: &str) -> Self {
        let encoded = urlencoding::encode(value);
        if self.0.contains('?') {
            Self(format!("{}&{}={}", self.0, key, encoded))
        } else {
            Self(format!("{}?{}={}", self.0, key, encoded))
        }
    }
}
