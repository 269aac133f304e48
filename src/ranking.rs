//! Ranking views: pure read queries over a usage snapshot
//!
//! All three views are total functions over the snapshot: an empty store
//! or a zero limit yields an empty list, and a limit larger than the
//! record count yields the full list with no padding. Nothing here
//! mutates the store.
//!
//! Ties are broken deterministically in every view so that repeated
//! renders over unchanged data produce identical lists.

use crate::config::ScoringConfig;
use crate::scoring::score;
use crate::types::{SuggestionItem, UsageMap};
use chrono::{DateTime, Utc};

/// Most-visited targets: click count descending, ties broken by most
/// recent access, then by target id
pub fn top_by_frequency(records: &UsageMap, limit: usize) -> Vec<SuggestionItem> {
    if limit == 0 {
        return Vec::new();
    }

    let mut entries: Vec<_> = records.iter().collect();
    entries.sort_by(|(a_id, a), (b_id, b)| {
        b.click_count
            .cmp(&a.click_count)
            .then_with(|| b.last_accessed_at.cmp(&a.last_accessed_at))
            .then_with(|| a_id.cmp(b_id))
    });

    entries
        .into_iter()
        .take(limit)
        .map(|(id, record)| SuggestionItem::from_record(id, record))
        .collect()
}

/// Most-recently-visited targets: last access descending, ties broken by
/// target id
pub fn top_by_recency(records: &UsageMap, limit: usize) -> Vec<SuggestionItem> {
    if limit == 0 {
        return Vec::new();
    }

    let mut entries: Vec<_> = records.iter().collect();
    entries.sort_by(|(a_id, a), (b_id, b)| {
        b.last_accessed_at
            .cmp(&a.last_accessed_at)
            .then_with(|| a_id.cmp(b_id))
    });

    entries
        .into_iter()
        .take(limit)
        .map(|(id, record)| SuggestionItem::from_record(id, record))
        .collect()
}

/// Personalized targets: freshly computed score descending, excluding the
/// target the user is currently on; ties broken by target id.
///
/// Scores are recomputed here against the caller's `now` on every call.
/// The per-record cached score is deliberately not consulted: a score
/// cached at write time would never decay between renders until the next
/// click, producing stale rankings.
pub fn top_by_score(
    records: &UsageMap,
    exclude_target_id: &str,
    limit: usize,
    now: DateTime<Utc>,
    scoring: &ScoringConfig,
) -> Vec<SuggestionItem> {
    if limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<_> = records
        .iter()
        .filter(|(id, _)| id.as_str() != exclude_target_id)
        .map(|(id, record)| {
            let s = score(record.click_count, record.last_accessed_at, now, scoring);
            (s, id, record)
        })
        .collect();

    scored.sort_by(|(a_score, a_id, _), (b_score, b_id, _)| {
        b_score.total_cmp(a_score).then_with(|| a_id.cmp(b_id))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(_, id, record)| SuggestionItem::from_record(id, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UsageRecord;
    use chrono::Duration;

    fn record(display_name: &str, clicks: u32, last_accessed_at: DateTime<Utc>) -> UsageRecord {
        UsageRecord {
            display_name: display_name.to_string(),
            click_count: clicks,
            last_accessed_at,
            cached_score: 0.0,
            extra: serde_json::Map::new(),
        }
    }

    fn sample() -> (UsageMap, DateTime<Utc>) {
        let now = Utc::now();
        let mut map = UsageMap::new();
        map.insert("/dashboard".into(), record("Dashboard", 10, now - Duration::days(5)));
        map.insert("/billing".into(), record("Billing", 3, now - Duration::hours(1)));
        map.insert("/reports".into(), record("Reports", 7, now - Duration::days(1)));
        (map, now)
    }

    #[test]
    fn test_empty_store_yields_empty_lists() {
        let map = UsageMap::new();
        let now = Utc::now();
        assert!(top_by_frequency(&map, 5).is_empty());
        assert!(top_by_recency(&map, 5).is_empty());
        assert!(top_by_score(&map, "/x", 5, now, &ScoringConfig::default()).is_empty());
    }

    #[test]
    fn test_zero_limit_yields_empty_lists() {
        let (map, now) = sample();
        assert!(top_by_frequency(&map, 0).is_empty());
        assert!(top_by_recency(&map, 0).is_empty());
        assert!(top_by_score(&map, "/x", 0, now, &ScoringConfig::default()).is_empty());
    }

    #[test]
    fn test_limit_beyond_count_returns_all_without_padding() {
        let (map, _) = sample();
        assert_eq!(top_by_frequency(&map, 100).len(), 3);
        assert_eq!(top_by_recency(&map, 100).len(), 3);
    }

    #[test]
    fn test_frequency_ordering() {
        let (map, _) = sample();
        let items = top_by_frequency(&map, 3);
        let ids: Vec<_> = items.iter().map(|i| i.target_id.as_str()).collect();
        assert_eq!(ids, vec!["/dashboard", "/reports", "/billing"]);
    }

    #[test]
    fn test_frequency_tie_broken_by_recency() {
        let now = Utc::now();
        let mut map = UsageMap::new();
        map.insert("/old".into(), record("Old", 5, now - Duration::days(3)));
        map.insert("/new".into(), record("New", 5, now - Duration::hours(2)));

        let items = top_by_frequency(&map, 2);
        assert_eq!(items[0].target_id.as_str(), "/new");
    }

    #[test]
    fn test_recency_ordering() {
        let (map, _) = sample();
        let items = top_by_recency(&map, 3);
        let ids: Vec<_> = items.iter().map(|i| i.target_id.as_str()).collect();
        assert_eq!(ids, vec!["/billing", "/reports", "/dashboard"]);
    }

    #[test]
    fn test_score_excludes_current_target() {
        let now = Utc::now();
        let mut map = UsageMap::new();
        // Highest possible raw score, yet excluded
        map.insert("/current".into(), record("Current", 500, now));
        map.insert("/other".into(), record("Other", 1, now - Duration::days(2)));

        let items = top_by_score(&map, "/current", 5, now, &ScoringConfig::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].target_id.as_str(), "/other");
    }

    #[test]
    fn test_score_favors_recent_over_stale_heavy_hitter() {
        let now = Utc::now();
        let scoring = ScoringConfig::default();
        let mut map = UsageMap::new();
        // 40 days stale, decay clamped at the 30-day window
        map.insert("/legacy".into(), record("Legacy", 500, now - Duration::days(40)));
        map.insert("/active".into(), record("Active", 12, now - Duration::hours(3)));

        let items = top_by_score(&map, "", 2, now, &scoring);
        assert_eq!(items[0].target_id.as_str(), "/active");
    }

    #[test]
    fn test_score_ties_deterministic_by_target_id() {
        let now = Utc::now();
        let mut map = UsageMap::new();
        map.insert("/b".into(), record("B", 4, now));
        map.insert("/a".into(), record("A", 4, now));

        let items = top_by_score(&map, "", 2, now, &ScoringConfig::default());
        let ids: Vec<_> = items.iter().map(|i| i.target_id.as_str()).collect();
        assert_eq!(ids, vec!["/a", "/b"]);
    }

    #[test]
    fn test_views_do_not_mutate_snapshot() {
        let (map, now) = sample();
        let before = map.clone();
        let _ = top_by_frequency(&map, 2);
        let _ = top_by_recency(&map, 2);
        let _ = top_by_score(&map, "/billing", 2, now, &ScoringConfig::default());
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            serde_json::to_value(&before).unwrap()
        );
    }
}
