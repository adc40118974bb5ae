/// Number of cards in a landing-page block when no limit is given
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

/// Leading slice of `items` for a featured block.
///
/// A missing or zero limit falls back to [`DEFAULT_FEATURED_LIMIT`].
pub fn featured<T>(items: &[T], limit: Option<usize>) -> &[T] {
    let limit = match limit {
        Some(0) | None => DEFAULT_FEATURED_LIMIT,
        Some(n) => n,
    };
    &items[..limit.min(items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(featured(&items, None), &[1, 2, 3]);
        assert_eq!(featured(&items, Some(0)), &[1, 2, 3]);
    }

    #[test]
    fn test_limit_larger_than_catalog() {
        let items = ["a", "b"];
        assert_eq!(featured(&items, Some(10)), &["a", "b"]);
        assert!(featured::<u8>(&[], Some(2)).is_empty());
    }
}
