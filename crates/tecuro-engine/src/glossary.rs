//! Approximate search over the ingredient glossary.
//!
//! Every searchable field (name, aliases, tags) is scored against the query
//! on a 0.0 (exact substring) to 1.0 (nothing in common) scale. The query is
//! slid across longer fields so a typo inside a long name still scores well.
//! An ingredient matches when its best field is at or under the threshold.

use serde::Serialize;

use tecuro_types::Ingredient;

/// Maximum accepted score
pub const DEFAULT_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'a> {
    pub ingredient: &'a Ingredient,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct Glossary {
    entries: Vec<Ingredient>,
    threshold: f64,
}

impl Default for Glossary {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Glossary {
    pub fn new(entries: Vec<Ingredient>) -> Self {
        Self {
            entries,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn entries(&self) -> &[Ingredient] {
        &self.entries
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matching entries, best first; ties keep glossary order.
    ///
    /// A blank query matches everything with a perfect score.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return self
                .entries
                .iter()
                .map(|ingredient| SearchHit {
                    ingredient,
                    score: 0.0,
                })
                .collect();
        }

        let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
        let mut hits: Vec<SearchHit<'_>> = self
            .entries
            .iter()
            .filter_map(|ingredient| {
                let score = ingredient
                    .search_fields()
                    .map(|field| field_score(&needle, field))
                    .fold(1.0_f64, f64::min);
                (score <= self.threshold).then_some(SearchHit { ingredient, score })
            })
            .collect();

        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        hits
    }

    /// Entries to display for a search box value.
    pub fn filter(&self, query: &str) -> Vec<&Ingredient> {
        self.search(query)
            .into_iter()
            .map(|hit| hit.ingredient)
            .collect()
    }
}

fn field_score(needle: &[char], field: &str) -> f64 {
    let haystack: Vec<char> = field.chars().flat_map(char::to_lowercase).collect();
    if haystack.is_empty() {
        return 1.0;
    }
    if haystack.windows(needle.len()).any(|w| w == needle) {
        return 0.0;
    }

    let query: String = needle.iter().collect();
    if haystack.len() <= needle.len() {
        let whole: String = haystack.iter().collect();
        return 1.0 - strsim::normalized_levenshtein(&query, &whole);
    }

    // Windows one shorter and one longer than the query absorb a dropped
    // or doubled letter.
    let lengths = [needle.len().saturating_sub(1), needle.len(), needle.len() + 1];
    let mut best = 0.0_f64;
    for len in lengths.into_iter().filter(|&len| len > 0 && len <= haystack.len()) {
        for window in haystack.windows(len) {
            let candidate: String = window.iter().collect();
            best = best.max(strsim::normalized_levenshtein(&query, &candidate));
        }
    }
    1.0 - best
}
