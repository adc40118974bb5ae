use std::fmt;

/// Path and query of the current page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pathname: String,
    search: String,
}

impl Location {
    /// `search` may be given with or without its leading `?`.
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        let search = search.into();
        let search = match search.strip_prefix('?') {
            Some(stripped) => stripped.to_string(),
            None => search,
        };
        Self {
            pathname: pathname.into(),
            search,
        }
    }

    /// Split a relative URL such as `/products.html?c=acne#grid`.
    ///
    /// The fragment is discarded.
    pub fn parse(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        match url.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(url, ""),
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Query string without the leading `?`
    pub fn search(&self) -> &str {
        &self.search
    }

    /// URL for the same path carrying `query`; the bare path when `query` is empty.
    pub fn with_query(&self, query: &str) -> String {
        if query.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, query)
        }
    }

    pub fn href(&self) -> String {
        self.with_query(&self.search)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.href())
    }
}

/// Session history of the page.
///
/// Filter changes rewrite the current entry in place: there is no way to
/// push an entry, so the back button never steps through filter changes
/// and nothing reloads.
pub trait History {
    fn replace_state(&mut self, url: &str);
}

/// In-memory history with a single current entry.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    replacements: usize,
}

impl MemoryHistory {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            replacements: 0,
        }
    }

    pub fn current(&self) -> &Location {
        // `entries` is never empty: it starts with one and is only replaced.
        &self.entries[self.entries.len() - 1]
    }

    /// Number of navigable entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl History for MemoryHistory {
    fn replace_state(&mut self, url: &str) {
        let last = self.entries.len() - 1;
        self.entries[last] = Location::parse(url);
        self.replacements += 1;
    }
}
