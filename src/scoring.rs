//! Recency/frequency scoring for navigation targets
//!
//! The score fuses two signals:
//! - **Recency**: exponential decay in elapsed days since last access,
//!   `decay_base ^ min(elapsed_days, decay_window_days)`. The window cap
//!   stops arbitrarily old records from underflowing toward zero, which
//!   would make their relative ordering unstable.
//! - **Frequency**: `log10(click_count + 1)`. The logarithm compresses the
//!   influence of very high counts so one target clicked hundreds of times
//!   does not permanently dominate every ranking; the `+1` keeps a
//!   first-ever click (`click_count = 1`) away from `log(0)`.
//!
//! The score is a deterministic function of `(click_count,
//! last_accessed_at, now)` and nothing else. Callers on the read path must
//! pass the reader's `now`, not the time of the last write: two
//! evaluations separated by elapsed time yield a non-increasing score for
//! an unchanged record, so decay is visible between renders, not only
//! between writes.

use crate::config::ScoringConfig;
use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Compute the score of a usage record at the given instant
///
/// Pure and stateless. Negative elapsed time (clock skew, a record stamped
/// in the future) clamps to zero elapsed days rather than inflating the
/// recency factor.
pub fn score(
    click_count: u32,
    last_accessed_at: DateTime<Utc>,
    now: DateTime<Utc>,
    config: &ScoringConfig,
) -> f64 {
    let elapsed_days = (now - last_accessed_at).num_milliseconds().max(0) as f64 / MILLIS_PER_DAY;
    let capped_days = elapsed_days.min(config.decay_window_days);

    let recency_factor = config.decay_base.powf(capped_days);
    let frequency_factor = (f64::from(click_count) + 1.0).log10();

    recency_factor * frequency_factor * config.score_scale
}
