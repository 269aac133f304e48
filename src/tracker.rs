//! Interaction tracker: the single write path for navigation events
//!
//! Records one navigation event per call. The in-memory update is
//! synchronous and complete before the call returns, so a read issued
//! immediately afterward observes it; two rapid calls for the same target
//! are equivalent to two sequential single calls (the `&mut` borrow makes
//! a lost update unrepresentable).

use crate::config::ScoringConfig;
use crate::scoring::score;
use crate::store::UsageStore;
use crate::types::{TargetId, UsageRecord};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Record a single navigation event against the store
///
/// Creates the record on a first visit (`click_count = 1`) or increments
/// and re-stamps an existing one; the display name is always overwritten
/// with the latest value. The cached score is recomputed at write time as
/// a display hint; ranking recomputes authoritative scores at read time.
///
/// An empty target id is ignored: this subsystem's output is advisory, so
/// it prioritizes availability over strict validation.
pub fn record_visit(
    store: &mut UsageStore,
    target_id: &str,
    display_name: &str,
    now: DateTime<Utc>,
    scoring: &ScoringConfig,
) {
    if target_id.is_empty() {
        debug!("ignoring navigation event with empty target id");
        return;
    }

    let id = TargetId::new(target_id);
    let mut record = match store.get(&id) {
        Some(existing) => {
            let mut updated = existing.clone();
            updated.visit(display_name, now);
            updated
        }
        None => UsageRecord::first_visit(display_name, now),
    };
    record.cached_score = score(record.click_count, record.last_accessed_at, now, scoring);

    debug!(
        target = %id,
        clicks = record.click_count,
        "recorded navigation event"
    );

    store.upsert(id, record);
    store.persist();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use chrono::Duration;
    use proptest::prelude::*;

    fn fresh_store() -> UsageStore {
        UsageStore::open(Box::new(MemoryBackend::new()))
    }

    #[test]
    fn test_first_visit_creates_record() {
        let mut store = fresh_store();
        let now = Utc::now();

        record_visit(&mut store, "/dashboard", "Dashboard", now, &ScoringConfig::default());

        let record = store.get(&"/dashboard".into()).unwrap();
        assert_eq!(record.click_count, 1);
        assert_eq!(record.last_accessed_at, now);
        assert_eq!(record.display_name, "Dashboard");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_repeat_visit_updates_in_place() {
        let mut store = fresh_store();
        let t0 = Utc::now();
        let t1 = t0 + Duration::minutes(10);
        let scoring = ScoringConfig::default();

        record_visit(&mut store, "/billing", "Billing", t0, &scoring);
        record_visit(&mut store, "/billing", "Billing & Invoices", t1, &scoring);

        // Exactly one record: updated, never duplicated
        assert_eq!(store.len(), 1);
        let record = store.get(&"/billing".into()).unwrap();
        assert_eq!(record.click_count, 2);
        assert_eq!(record.last_accessed_at, t1);
        assert_eq!(record.display_name, "Billing & Invoices");
    }

    #[test]
    fn test_double_click_counts_twice() {
        // Two rapid events with no elapsed time between them
        let mut store = fresh_store();
        let now = Utc::now();
        let scoring = ScoringConfig::default();

        record_visit(&mut store, "/x", "X", now, &scoring);
        record_visit(&mut store, "/x", "X", now, &scoring);

        assert_eq!(store.get(&"/x".into()).unwrap().click_count, 2);
    }

    #[test]
    fn test_empty_target_is_ignored() {
        let mut store = fresh_store();
        record_visit(&mut store, "", "Nowhere", Utc::now(), &ScoringConfig::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_cached_score_is_stamped_at_write() {
        let mut store = fresh_store();
        let now = Utc::now();

        record_visit(&mut store, "/a", "A", now, &ScoringConfig::default());

        let record = store.get(&"/a".into()).unwrap();
        // Fresh record at write time: decay^0 * log10(2) * scale
        assert!((record.cached_score - 2.0_f64.log10() * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_persisted_fields_survive_a_visit() {
        let mut seeded = crate::types::UsageMap::new();
        let mut record = UsageRecord::first_visit("Reports", Utc::now());
        record
            .extra
            .insert("pinned".to_string(), serde_json::Value::Bool(true));
        seeded.insert("/reports".into(), record);

        let mut store = UsageStore::open(Box::new(MemoryBackend::with_records(seeded)));
        record_visit(&mut store, "/reports", "Reports", Utc::now(), &ScoringConfig::default());

        let updated = store.get(&"/reports".into()).unwrap();
        assert_eq!(updated.click_count, 2);
        assert_eq!(updated.extra.get("pinned"), Some(&serde_json::Value::Bool(true)));
    }

    proptest! {
        /// Click count equals the number of record calls for that target,
        /// whatever the interleaving
        #[test]
        fn prop_click_count_conservation(events in prop::collection::vec(0usize..4, 1..60)) {
            let targets = ["/a", "/b", "/c", "/d"];
            let mut store = fresh_store();
            let scoring = ScoringConfig::default();
            let mut now = Utc::now();

            let mut expected = [0u32; 4];
            for &idx in &events {
                record_visit(&mut store, targets[idx], "Target", now, &scoring);
                expected[idx] += 1;
                now += Duration::seconds(1);
            }

            for (idx, target) in targets.iter().enumerate() {
                let actual = store
                    .get(&TargetId::new(*target))
                    .map(|r| r.click_count)
                    .unwrap_or(0);
                prop_assert_eq!(actual, expected[idx]);
            }
        }
    }
}
