use std::collections::BTreeSet;

use tecuro_types::{CatalogItem, FilterState, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub value: String,
    pub checked: bool,
}

/// A set of facet checkboxes (all concern filters, or all trait filters)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxGroup {
    boxes: Vec<Checkbox>,
}

impl CheckboxGroup {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            boxes: values
                .into_iter()
                .map(|value| Checkbox {
                    value: value.into(),
                    checked: false,
                })
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Checkbox> {
        self.boxes.iter()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Set every checkbox carrying `value`. Returns false when there is none.
    pub fn set_checked(&mut self, value: &str, checked: bool) -> bool {
        let mut found = false;
        for checkbox in self.boxes.iter_mut().filter(|c| c.value == value) {
            checkbox.checked = checked;
            found = true;
        }
        found
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.boxes.iter().any(|c| c.value == value && c.checked)
    }

    /// Values of every checked box, in control order
    pub fn checked_values(&self) -> Vec<String> {
        self.boxes
            .iter()
            .filter(|c| c.checked)
            .map(|c| c.value.clone())
            .collect()
    }

    /// Check exactly the boxes whose value is selected.
    pub fn sync(&mut self, selected: &BTreeSet<String>) {
        for checkbox in &mut self.boxes {
            checkbox.checked = selected.contains(&checkbox.value);
        }
    }
}

/// The sort dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSelect {
    value: String,
    options: Vec<String>,
}

impl Default for SortSelect {
    fn default() -> Self {
        Self::new([SortKey::ALPHA, SortKey::POP])
    }
}

impl SortSelect {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: SortKey::ALPHA.to_string(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn sync(&mut self, key: &SortKey) {
        self.value = key.as_str().to_string();
    }
}

/// Every filter control on the product page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    pub concerns: CheckboxGroup,
    pub traits: CheckboxGroup,
    pub sort: SortSelect,
}

impl Controls {
    pub fn new(concerns: CheckboxGroup, traits: CheckboxGroup, sort: SortSelect) -> Self {
        Self {
            concerns,
            traits,
            sort,
        }
    }

    /// One checkbox per distinct concern tag and per trait name in the
    /// catalog, each group sorted.
    pub fn from_catalog(products: &[CatalogItem]) -> Self {
        let concerns: BTreeSet<&str> = products
            .iter()
            .flat_map(|p| p.concerns.iter().map(String::as_str))
            .filter(|c| !c.is_empty())
            .collect();
        let traits: BTreeSet<&str> = products
            .iter()
            .flat_map(|p| p.traits.keys().map(String::as_str))
            .collect();

        Self {
            concerns: CheckboxGroup::new(concerns),
            traits: CheckboxGroup::new(traits),
            sort: SortSelect::default(),
        }
    }

    /// Reflect the filter state in the controls.
    pub fn sync(&mut self, state: &FilterState) {
        self.concerns.sync(&state.selected_concerns);
        self.traits.sync(&state.selected_traits);
        self.sort.sync(&state.sort_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_toggles_stay_unique() {
        let mut group = CheckboxGroup::new(["acne", "dryness"]);
        group.set_checked("acne", true);
        group.set_checked("acne", true);
        group.set_checked("dryness", true);
        group.set_checked("dryness", false);

        assert_eq!(group.checked_values(), vec!["acne"]);
    }

    #[test]
    fn test_unknown_value_is_reported() {
        let mut group = CheckboxGroup::new(["acne"]);
        assert!(!group.set_checked("redness", true));
        assert!(group.checked_values().is_empty());
    }

    #[test]
    fn test_sync_from_state() {
        let mut controls = Controls::new(
            CheckboxGroup::new(["acne", "dryness"]),
            CheckboxGroup::new(["vegan"]),
            SortSelect::default(),
        );
        let state = FilterState::new()
            .with_concerns(["dryness", "not-a-control"])
            .with_traits(["vegan"])
            .with_sort("pop");

        controls.sync(&state);

        assert!(!controls.concerns.is_checked("acne"));
        assert!(controls.concerns.is_checked("dryness"));
        assert!(controls.traits.is_checked("vegan"));
        assert_eq!(controls.sort.value(), "pop");
    }

    #[test]
    fn test_from_catalog_collects_distinct_facets() {
        let products = vec![
            CatalogItem::new("A")
                .with_concerns(["redness", "acne"])
                .with_trait("vegan", true),
            CatalogItem::new("B")
                .with_concerns(["acne"])
                .with_trait("fragranceFree", false),
        ];

        let controls = Controls::from_catalog(&products);

        let concerns: Vec<&str> = controls.concerns.iter().map(|c| c.value.as_str()).collect();
        let traits: Vec<&str> = controls.traits.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(concerns, vec!["acne", "redness"]);
        assert_eq!(traits, vec!["fragranceFree", "vegan"]);
        assert_eq!(controls.sort.options(), &["alpha".to_string(), "pop".to_string()]);
    }
}
