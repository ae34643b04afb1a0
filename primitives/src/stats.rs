use serde::{Deserialize, Serialize};

use crate::Day;

/// Aggregated spend statistics over a set of impression/click records.
///
/// `spent_*` sums the cost snapshots of the event records, the counts count
/// the records themselves. `conversion` is a percentage and is computed by
/// [`Stats::finalize`] once all events are folded in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    pub impressions_count: u64,
    pub clicks_count: u64,
    pub conversion: f64,
    pub spent_impressions: f64,
    pub spent_clicks: f64,
    pub spent_total: f64,
}

impl Stats {
    pub fn record_impression(&mut self, cost: f64) {
        self.impressions_count += 1;
        self.spent_impressions += cost;
        self.spent_total += cost;
    }

    pub fn record_click(&mut self, cost: f64) {
        self.clicks_count += 1;
        self.spent_clicks += cost;
        self.spent_total += cost;
    }

    /// Computes the click-through percentage, 0 when nothing was impressed.
    pub fn finalize(mut self) -> Self {
        self.conversion = if self.impressions_count > 0 {
            (self.clicks_count as f64 / self.impressions_count as f64) * 100.0
        } else {
            0.0
        };

        self
    }
}

/// [`Stats`] broken down by the virtual [`Day`] the events were recorded on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyStats {
    pub date: Day,
    #[serde(flatten)]
    pub stats: Stats,
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn folds_events_and_computes_conversion() {
        let mut stats = Stats::default();
        stats.record_impression(0.5);
        stats.record_impression(0.5);
        stats.record_impression(0.5);
        stats.record_impression(0.5);
        stats.record_click(5.0);

        let stats = stats.finalize();

        assert_eq!(4, stats.impressions_count);
        assert_eq!(1, stats.clicks_count);
        assert_eq!(2.0, stats.spent_impressions);
        assert_eq!(5.0, stats.spent_clicks);
        assert_eq!(7.0, stats.spent_total);
        assert_eq!(25.0, stats.conversion);
    }

    #[test]
    fn conversion_is_zero_without_impressions() {
        let mut stats = Stats::default();
        stats.record_click(1.0);

        assert_eq!(0.0, stats.finalize().conversion);
    }

    #[test]
    fn daily_stats_flatten_into_one_object() {
        let daily = DailyStats {
            date: Day::new(3),
            stats: Stats::default().finalize(),
        };

        let json = serde_json::to_value(&daily).expect("Should serialize");
        assert_eq!(3, json["date"]);
        assert_eq!(0, json["impressions_count"]);
    }
}
