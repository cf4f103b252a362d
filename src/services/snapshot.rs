use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::database::models::ActivityMap;

pub const WINDOW_DAYS: i64 = 7;

/// The 7 consecutive calendar dates ending on `today`, ascending.
pub fn window(today: NaiveDate) -> Vec<NaiveDate> {
    (0..WINDOW_DAYS)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect()
}

/// Placeholder activity snapshot: each date in the window gets an
/// independent uniform value in [0, 100].
///
/// The values are random stand-ins, not a metric computed from recorded
/// activity; real aggregation would read `user_activity` instead.
pub fn placeholder(today: NaiveDate, rng: &mut impl Rng) -> ActivityMap {
    window(today)
        .into_iter()
        .map(|date| (date, rng.gen_range(0..=100)))
        .collect()
}
