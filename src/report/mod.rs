mod format;
mod markdown;
mod mock_data;
mod screenshots;
mod summary;

pub use format::{bucket_of, currency, goal_label, signed_percent};
pub use markdown::BucketConfigurationReport;
pub use mock_data::{
    AllTimeValue, Amount, DisplayAmount, GainOrLossTable, InvestibleEntry, MockDataDocument,
    PerformanceEntry, PerformanceTimeSeries, ReturnsTable, SummaryEntry, TimeSeries, TwrTable,
    year_to_date_fraction,
};
pub use screenshots::{
    HOUSE_PURCHASE_SCREENSHOT, RETIREMENT_SCREENSHOT, SUMMARY_SCREENSHOT, ScreenshotGuide,
};
pub use summary::{BucketSummary, summarize_buckets};
