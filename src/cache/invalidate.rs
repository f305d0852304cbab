//! Invalidation Module
//!
//! Maps semantic mutation events onto the cache's key-substring scheme so
//! mutating callers never need to know which endpoints were cached.

// == Topic ==
/// A group of cached endpoints invalidated together by a mutation.
///
/// Each topic expands to a fixed set of plain substrings matched against
/// cache keys (not globs, not regexes). Callers invalidate the relevant
/// topics only after a mutation has been confirmed successful, so a failed
/// write never discards valid cached reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// Lost and found item lists
    Items,
    /// Aggregate statistics
    Stats,
    /// Potential lost/found matches
    Matches,
    /// Pickup logs and pickup history
    Pickups,
}

impl Topic {
    // == Patterns ==
    /// The key substrings cleared for this topic.
    ///
    /// Substrings must stay specific enough not to overlap a future topic's
    /// keys ("items" would also match a hypothetical "lineitems" endpoint).
    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            Topic::Items => &["items", "lost", "found"],
            Topic::Stats => &["stats"],
            Topic::Matches => &["matches", "generate_matches"],
            Topic::Pickups => &["pickup", "pickuplogs"],
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_patterns() {
        assert_eq!(Topic::Items.patterns(), &["items", "lost", "found"]);
    }

    #[test]
    fn test_stats_patterns() {
        assert_eq!(Topic::Stats.patterns(), &["stats"]);
    }

    #[test]
    fn test_matches_patterns() {
        assert_eq!(Topic::Matches.patterns(), &["matches", "generate_matches"]);
    }

    #[test]
    fn test_pickups_patterns() {
        assert_eq!(Topic::Pickups.patterns(), &["pickup", "pickuplogs"]);
    }

    #[test]
    fn test_stats_topic_does_not_cover_item_keys() {
        // Topic isolation: a stats invalidation must not touch item lists
        for pattern in Topic::Stats.patterns() {
            assert!(!"/items/lost_{}".contains(pattern));
            assert!(!"/items/found_{}".contains(pattern));
        }
    }
}
