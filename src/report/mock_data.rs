use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::core::{DailyPoint, GeneratedGoal};

const SIX_MONTH_SHARE: f64 = 0.5;
const THREE_MONTH_SHARE: f64 = 0.25;
const ONE_MONTH_SHARE: f64 = 0.083;
const IRR_DISCOUNT: f64 = 0.95;
const ACCESS_FEE_RATE: f64 = 0.005;
const TRAILER_FEE_REBATE_RATE: f64 = 0.002;

/// The document the demo page loads as `mock-data.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockDataDocument {
    pub performance: Vec<PerformanceEntry>,
    pub investible: Vec<InvestibleEntry>,
    pub summary: Vec<SummaryEntry>,
    pub performance_time_series: SeriesByGoal,
}

/// Per-goal series keyed by goal id, serialized as a JSON object in catalog order.
#[derive(Debug, Clone, Default)]
pub struct SeriesByGoal(Vec<(String, PerformanceTimeSeries)>);

impl SeriesByGoal {
    fn push(&mut self, goal_id: String, series: PerformanceTimeSeries) {
        match self.0.iter_mut().find(|(id, _)| *id == goal_id) {
            Some((_, existing)) => *existing = series,
            None => self.0.push((goal_id, series)),
        }
    }

    pub fn get(&self, goal_id: &str) -> Option<&PerformanceTimeSeries> {
        self.0.iter().find(|(id, _)| id == goal_id).map(|(_, s)| s)
    }

    pub fn contains_key(&self, goal_id: &str) -> bool {
        self.get(goal_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PerformanceTimeSeries)> {
        self.0.iter().map(|(id, s)| (id.as_str(), s))
    }

    pub fn values(&self) -> impl Iterator<Item = &PerformanceTimeSeries> {
        self.0.iter().map(|(_, s)| s)
    }
}

impl Serialize for SeriesByGoal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(id, s)| (id, s)))
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Amount {
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DisplayAmount {
    pub display: Amount,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllTimeValue {
    pub all_time_value: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEntry {
    pub goal_id: String,
    pub total_cumulative_return: Amount,
    pub simple_rate_of_return_percent: f64,
    pub total_investment_value: Amount,
}

/// `totalInvestmentAmount` carries the ending balance; the demo API names it that way.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestibleEntry {
    pub goal_id: String,
    pub goal_name: String,
    pub investment_goal_type: String,
    pub total_investment_amount: DisplayAmount,
    pub target_amount: f64,
    pub target_allocation: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    pub goal_id: String,
    pub goal_name: String,
    pub investment_goal_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeSeries {
    pub data: Vec<DailyPoint>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwrTable {
    pub all_time_value: f64,
    pub one_year_value: f64,
    pub six_month_value: f64,
    pub three_month_value: f64,
    pub one_month_value: f64,
    pub ytd_value: f64,
    pub three_year_value: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnsTable {
    pub twr: TwrTable,
    pub annualised_irr: AllTimeValue,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GainOrLossTable {
    pub net_investment: AllTimeValue,
    pub access_fee_charged: AllTimeValue,
    pub trailer_fee_rebates: AllTimeValue,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTimeSeries {
    pub time_series: TimeSeries,
    pub returns_table: ReturnsTable,
    pub gain_or_loss_table: GainOrLossTable,
    pub total_cumulative_return_percent: f64,
    pub total_cumulative_return_amount: f64,
    pub contribution_date: Option<NaiveDate>,
    pub annual_return_rate: f64,
    pub cumulative_invested: f64,
}

/// Share of the year elapsed since 1 January of `as_of`'s year.
pub fn year_to_date_fraction(as_of: NaiveDate) -> f64 {
    let start_of_year = NaiveDate::from_ymd_opt(as_of.year(), 1, 1).unwrap_or(as_of);
    (as_of - start_of_year).num_days() as f64 / 365.0
}

fn returns_table(rate: f64, as_of: NaiveDate) -> ReturnsTable {
    ReturnsTable {
        twr: TwrTable {
            all_time_value: rate,
            one_year_value: rate,
            six_month_value: rate * SIX_MONTH_SHARE,
            three_month_value: rate * THREE_MONTH_SHARE,
            one_month_value: rate * ONE_MONTH_SHARE,
            ytd_value: rate * year_to_date_fraction(as_of),
            // Three-year figure mirrors all-time.
            three_year_value: rate,
        },
        annualised_irr: AllTimeValue {
            all_time_value: rate * IRR_DISCOUNT,
        },
    }
}

fn gain_or_loss_table(cumulative_invested: f64) -> GainOrLossTable {
    GainOrLossTable {
        net_investment: AllTimeValue {
            all_time_value: cumulative_invested,
        },
        access_fee_charged: AllTimeValue {
            all_time_value: cumulative_invested * ACCESS_FEE_RATE,
        },
        trailer_fee_rebates: AllTimeValue {
            all_time_value: cumulative_invested * TRAILER_FEE_REBATE_RATE,
        },
    }
}

impl MockDataDocument {
    pub fn from_goals(goals: &[GeneratedGoal], as_of: NaiveDate) -> Self {
        let mut performance = Vec::with_capacity(goals.len());
        let mut investible = Vec::with_capacity(goals.len());
        let mut summary = Vec::with_capacity(goals.len());
        let mut performance_time_series = SeriesByGoal::default();

        for goal in goals {
            let rate = goal.simple_rate_of_return_percent;

            performance.push(PerformanceEntry {
                goal_id: goal.goal_id.clone(),
                total_cumulative_return: Amount {
                    amount: goal.total_cumulative_return,
                },
                simple_rate_of_return_percent: rate,
                total_investment_value: Amount {
                    amount: goal.ending_balance,
                },
            });

            investible.push(InvestibleEntry {
                goal_id: goal.goal_id.clone(),
                goal_name: goal.goal_name.clone(),
                investment_goal_type: goal.goal_type.to_string(),
                total_investment_amount: DisplayAmount {
                    display: Amount {
                        amount: goal.ending_balance,
                    },
                },
                target_amount: goal.target_amount,
                target_allocation: goal.target_allocation,
            });

            summary.push(SummaryEntry {
                goal_id: goal.goal_id.clone(),
                goal_name: goal.goal_name.clone(),
                investment_goal_type: goal.goal_type.to_string(),
            });

            performance_time_series.push(
                goal.goal_id.clone(),
                PerformanceTimeSeries {
                    time_series: TimeSeries {
                        data: goal.time_series.clone(),
                    },
                    returns_table: returns_table(rate, as_of),
                    gain_or_loss_table: gain_or_loss_table(goal.cumulative_invested),
                    total_cumulative_return_percent: rate * 100.0,
                    total_cumulative_return_amount: goal.total_cumulative_return,
                    contribution_date: goal.contribution_date,
                    annual_return_rate: goal.annual_return_rate,
                    cumulative_invested: goal.cumulative_invested,
                },
            );
        }

        Self {
            performance,
            investible,
            summary,
            performance_time_series,
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{default_catalog, generate_goals};
    use serde_json::Value;

    const EPS: f64 = 1e-9;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
    }

    fn sample_document() -> MockDataDocument {
        let goals = generate_goals(&default_catalog(), 42, as_of());
        MockDataDocument::from_goals(&goals, as_of())
    }

    #[test]
    fn sections_have_one_entry_per_goal() {
        let doc = sample_document();
        assert_eq!(doc.performance.len(), 8);
        assert_eq!(doc.investible.len(), 8);
        assert_eq!(doc.summary.len(), 8);
        assert_eq!(doc.performance_time_series.len(), 8);

        for entry in &doc.performance {
            assert!(doc.performance_time_series.contains_key(&entry.goal_id));
        }
    }

    #[test]
    fn json_uses_demo_field_names() {
        let doc = sample_document();
        let json: Value = serde_json::from_str(&doc.to_pretty_json().expect("serializes"))
            .expect("valid json");

        let perf = &json["performance"][0];
        assert_eq!(perf["goalId"], "mock-goal-house-purchase-1");
        assert!(perf["totalCumulativeReturn"]["amount"].is_number());
        assert!(perf["totalInvestmentValue"]["amount"].is_number());

        let inv = &json["investible"][0];
        assert_eq!(inv["investmentGoalType"], "GENERAL_WEALTH_ACCUMULATION");
        assert!(inv["totalInvestmentAmount"]["display"]["amount"].is_number());
        assert_eq!(inv["targetAllocation"], 70);

        let ts = &json["performanceTimeSeries"]["mock-goal-retirement-2"];
        let data = ts["timeSeries"]["data"].as_array().expect("data array");
        assert_eq!(data.len(), 730);
        assert_eq!(data[729]["date"], "2026-10-16");
        assert!(data[0]["cumulativeNetInvestmentAmount"].is_number());
        assert!(ts["returnsTable"]["twr"]["ytdValue"].is_number());
        assert!(ts["returnsTable"]["annualisedIrr"]["allTimeValue"].is_number());
        assert!(ts["gainOrLossTable"]["trailerFeeRebates"]["allTimeValue"].is_number());
        assert!(ts["contributionDate"].is_string());
    }

    #[test]
    fn series_keys_follow_catalog_order() {
        let mut catalog = default_catalog();
        catalog.reverse();
        let goals = generate_goals(&catalog, 42, as_of());
        let doc = MockDataDocument::from_goals(&goals, as_of());

        let ids: Vec<&str> = doc.performance_time_series.iter().map(|(id, _)| id).collect();
        let expected: Vec<&str> = goals.iter().map(|g| g.goal_id.as_str()).collect();
        assert_eq!(ids, expected);
        assert_eq!(ids[0], "mock-goal-retirement-1");

        let json = doc.to_pretty_json().expect("serializes");
        let positions: Vec<usize> = ids
            .iter()
            .map(|id| json.find(&format!("\"{id}\": {{")).expect("series key present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(
            json.find("\"mock-goal-retirement-4\": {")
                < json.find("\"mock-goal-house-purchase-1\": {")
        );
    }

    #[test]
    fn derived_tables_follow_return_and_investment() {
        let doc = sample_document();
        for entry in doc.performance_time_series.values() {
            let twr = entry.returns_table.twr;
            let rate = twr.all_time_value;
            assert!((twr.six_month_value - rate * 0.5).abs() < EPS);
            assert!((twr.one_month_value - rate * 0.083).abs() < EPS);
            assert!((entry.returns_table.annualised_irr.all_time_value - rate * 0.95).abs() < EPS);
            assert!((entry.total_cumulative_return_percent - rate * 100.0).abs() < EPS);

            let fees = entry.gain_or_loss_table;
            let invested = entry.cumulative_invested;
            assert!((fees.access_fee_charged.all_time_value - invested * 0.005).abs() < EPS);
            assert!((fees.trailer_fee_rebates.all_time_value - invested * 0.002).abs() < EPS);
        }
    }

    #[test]
    fn year_to_date_fraction_counts_whole_days() {
        let jan_first = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");
        assert_eq!(year_to_date_fraction(jan_first), 0.0);
        let fraction = year_to_date_fraction(as_of());
        assert!((fraction - 288.0 / 365.0).abs() < EPS);
    }
}
