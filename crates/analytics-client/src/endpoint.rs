//! Endpoint path and query-string construction

/// A relative endpoint path with optional query parameters
///
/// Built fresh for every call; `build` renders the path with the query
/// string percent-encoded.
#[derive(Debug, Clone)]
pub struct Endpoint {
    path: String,
    query: Vec<(String, String)>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter; values are encoded at build time
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Render the endpoint as `path` or `path?k=v&...`
    pub fn build(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.query {
            serializer.append_pair(key, value);
        }
        format!("{}?{}", self.path, serializer.finish())
    }
}
