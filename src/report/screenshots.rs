use std::fmt;
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 70;

pub const SUMMARY_SCREENSHOT: &str = "screenshot-summary.png";
pub const HOUSE_PURCHASE_SCREENSHOT: &str = "screenshot-house-purchase-detail.png";
pub const RETIREMENT_SCREENSHOT: &str = "screenshot-retirement-detail.png";

/// Printed walkthrough for capturing the demo screenshots.
#[derive(Debug, Clone)]
pub struct ScreenshotGuide {
    demo_dir: PathBuf,
    assets_dir: PathBuf,
}

impl ScreenshotGuide {
    pub fn new(demo_dir: impl Into<PathBuf>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            demo_dir: demo_dir.into(),
            assets_dir: assets_dir.into(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn demo_page(&self) -> PathBuf {
        self.demo_dir.join("demo-clean.html")
    }

    fn asset(&self, file_name: &str) -> String {
        self.assets_dir.join(file_name).display().to_string()
    }

    fn bucket_detail_steps(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        bucket: &str,
        file_name: &str,
    ) -> fmt::Result {
        writeln!(f, "\n   {label}) {bucket} Detail View:")?;
        writeln!(f, "      - Select '{bucket}' from dropdown")?;
        writeln!(f, "      - Take screenshot of top section (performance graph)")?;
        writeln!(f, "      - Scroll down to show goals table")?;
        writeln!(f, "      - Take another screenshot showing goals table")?;
        writeln!(f, "      - Save as: {}", self.asset(file_name))
    }
}

impl fmt::Display for ScreenshotGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "\n{heavy}")?;
        writeln!(f, "GOAL PORTFOLIO VIEWER - DEMO SCREENSHOT GUIDE")?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "\nDemo page: file://{}", self.demo_page().display())?;
        writeln!(f, "Screenshots will be saved to: {}", self.assets_dir.display())?;

        writeln!(f, "\n{light}")?;
        writeln!(f, "AUTOMATED SCREENSHOT INSTRUCTIONS")?;
        writeln!(f, "{light}")?;
        writeln!(f, "\nFor automated screenshots using Playwright, run:")?;
        writeln!(f, "  bash demo/take-screenshots-automated.sh")?;
        writeln!(f, "\nThis will capture:")?;
        writeln!(f, "  1. Summary view (all buckets)")?;
        writeln!(f, "  2. House Purchase bucket detail view (with scrolling)")?;
        writeln!(f, "  3. Retirement bucket detail view (with scrolling)")?;

        writeln!(f, "\n{light}")?;
        writeln!(f, "MANUAL SCREENSHOT INSTRUCTIONS")?;
        writeln!(f, "{light}")?;
        writeln!(f, "\n1. Start a local web server:")?;
        writeln!(f, "   cd {}", self.demo_dir.display())?;
        writeln!(f, "   python3 -m http.server 8080")?;
        writeln!(f, "\n2. Open in browser:")?;
        writeln!(f, "   http://localhost:8080/demo-clean.html")?;
        writeln!(f, "\n3. Wait for page to load and click '📊 Portfolio Viewer' button")?;
        writeln!(f, "\n4. Take screenshots:")?;
        writeln!(f, "\n   a) Summary View:")?;
        writeln!(f, "      - Take screenshot of default view")?;
        writeln!(f, "      - Save as: {}", self.asset(SUMMARY_SCREENSHOT))?;
        self.bucket_detail_steps(f, "b", "House Purchase", HOUSE_PURCHASE_SCREENSHOT)?;
        self.bucket_detail_steps(f, "c", "Retirement", RETIREMENT_SCREENSHOT)?;

        writeln!(f, "\n{heavy}")?;
        writeln!(f, "\nIMPORTANT: Make sure to scroll and capture the goals table!")?;
        writeln!(f, "The goals table is below the performance graph and contains")?;
        writeln!(f, "individual goal breakdowns with investment amounts and returns.")?;
        writeln!(f, "{heavy}")
    }
}
