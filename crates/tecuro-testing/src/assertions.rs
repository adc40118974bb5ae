//! Assertions over `--format json` output, which wraps every result in
//! a `content` object.

use anyhow::{Context, Result};
use serde_json::Value;

/// Suit ids of the `groups` array, in order.
pub fn group_ids(json: &Value) -> Result<Vec<String>> {
    let groups = json["content"]["groups"]
        .as_array()
        .context("Expected 'content.groups' array in JSON")?;

    groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            group["suitId"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Group {} missing suitId", i))
        })
        .collect()
}

/// Item names of the group with `suit_id`, in order.
pub fn item_names(json: &Value, suit_id: &str) -> Result<Vec<String>> {
    let groups = json["content"]["groups"]
        .as_array()
        .context("Expected 'content.groups' array in JSON")?;
    let group = groups
        .iter()
        .find(|group| group["suitId"] == suit_id)
        .with_context(|| format!("No group for suit {}", suit_id))?;
    let items = group["items"]
        .as_array()
        .with_context(|| format!("Group {} missing items", suit_id))?;

    Ok(items
        .iter()
        .filter_map(|item| item["name"].as_str().map(str::to_string))
        .collect())
}

pub fn assert_group_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let actual = group_ids(json)?;
    if actual != expected {
        anyhow::bail!("Expected groups {:?}, got {:?}", expected, actual);
    }
    Ok(())
}

pub fn assert_item_count(json: &Value, expected: usize) -> Result<()> {
    let groups = json["content"]["groups"]
        .as_array()
        .context("Expected 'content.groups' array in JSON")?;
    let count: usize = groups
        .iter()
        .map(|group| group["items"].as_array().map_or(0, Vec::len))
        .sum();

    if count != expected {
        anyhow::bail!("Expected {} items, got {}", expected, count);
    }
    Ok(())
}
