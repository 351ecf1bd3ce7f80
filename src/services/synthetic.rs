//! Stochastic placeholders for the trend chart and engagement counters.
//!
//! Nothing here is measured. The values only give the front-end something to
//! draw until real analytics are sourced.

use rand::Rng;

use crate::models::{SyntheticMetrics, TrendPoint};

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn trend_series<R: Rng + ?Sized>(rng: &mut R) -> Vec<TrendPoint> {
    WEEKDAYS
        .iter()
        .map(|&day| TrendPoint {
            x: day,
            y: rng.gen_range(40..=100),
        })
        .collect()
}

pub fn engagement_metrics<R: Rng + ?Sized>(rng: &mut R) -> SyntheticMetrics {
    SyntheticMetrics {
        likes: rng.gen_range(0..1000),
        comments: rng.gen_range(0..500),
        shares: rng.gen_range(0..200),
    }
}

pub fn video_views<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..10_000)
}
