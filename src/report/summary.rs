use std::fmt;

use super::format::{bucket_of, currency, signed_percent};
use super::mock_data::MockDataDocument;

#[derive(Debug, Clone, PartialEq)]
pub struct BucketSummary {
    pub bucket: String,
    pub goal_count: usize,
    pub ending_balance: f64,
    pub invested: f64,
    pub returns: f64,
}

impl BucketSummary {
    pub fn growth_percent(&self) -> f64 {
        if self.invested > 0.0 {
            self.returns / self.invested * 100.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for BucketSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {}: {} goals, {} invested, {} returns ({}), {} ending balance",
            self.bucket,
            self.goal_count,
            currency(self.invested),
            currency(self.returns),
            signed_percent(self.growth_percent()),
            currency(self.ending_balance)
        )
    }
}

/// Per-bucket totals in the order buckets first appear in the document.
pub fn summarize_buckets(doc: &MockDataDocument) -> Vec<BucketSummary> {
    let mut buckets: Vec<BucketSummary> = Vec::new();

    for goal in &doc.investible {
        let name = bucket_of(&goal.goal_name);
        let idx = match buckets.iter().position(|b| b.bucket == name) {
            Some(idx) => idx,
            None => {
                buckets.push(BucketSummary {
                    bucket: name.to_string(),
                    goal_count: 0,
                    ending_balance: 0.0,
                    invested: 0.0,
                    returns: 0.0,
                });
                buckets.len() - 1
            }
        };

        let bucket = &mut buckets[idx];
        bucket.goal_count += 1;
        bucket.ending_balance += goal.total_investment_amount.display.amount;
        if let Some(perf) = doc.performance.iter().find(|p| p.goal_id == goal.goal_id) {
            bucket.returns += perf.total_cumulative_return.amount;
        }
        if let Some(series) = doc.performance_time_series.get(&goal.goal_id) {
            bucket.invested += series.cumulative_invested;
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{default_catalog, generate_goals};
    use chrono::NaiveDate;

    #[test]
    fn buckets_keep_catalog_order_and_reconcile() {
        let as_of = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
        let goals = generate_goals(&default_catalog(), 11, as_of);
        let doc = MockDataDocument::from_goals(&goals, as_of);
        let summaries = summarize_buckets(&doc);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].bucket, "House Purchase");
        assert_eq!(summaries[1].bucket, "Retirement");
        for summary in &summaries {
            assert_eq!(summary.goal_count, 4);
            assert!((summary.ending_balance - (summary.invested + summary.returns)).abs() < 1e-6);
        }
    }

    #[test]
    fn display_matches_console_layout() {
        let summary = BucketSummary {
            bucket: "Retirement".to_string(),
            goal_count: 4,
            ending_balance: 66_000.0,
            invested: 60_000.0,
            returns: 6_000.0,
        };
        assert_eq!(
            summary.to_string(),
            concat!(
                "  Retirement: 4 goals, $60,000.00 invested, ",
                "$6,000.00 returns (+10.00%), $66,000.00 ending balance"
            )
        );
    }

    #[test]
    fn growth_is_zero_without_investment() {
        let summary = BucketSummary {
            bucket: "Empty".to_string(),
            goal_count: 0,
            ending_balance: 0.0,
            invested: 0.0,
            returns: 0.0,
        };
        assert_eq!(summary.growth_percent(), 0.0);
    }
}
