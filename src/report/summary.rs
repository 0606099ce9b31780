//! Run summary report generation

use std::time::Duration;

use chrono::Utc;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of a full analysis run
#[derive(Debug, Default)]
pub struct AnalysisSummary {
    pub rows_loaded: usize,
    pub rows_analyzed: usize,
    pub rows_dropped: usize,
    pub encoded_columns: usize,
    pub charts_rendered: usize,
    pub load_time: Duration,
    pub profile_time: Duration,
    pub clean_time: Duration,
    pub charts_time: Duration,
    pub stats_time: Duration,
    pub regression_time: Duration,
}

impl AnalysisSummary {
    pub fn new(rows_loaded: usize) -> Self {
        Self {
            rows_loaded,
            rows_analyzed: rows_loaded,
            ..Default::default()
        }
    }

    pub fn set_clean_results(&mut self, rows_analyzed: usize, encoded_columns: usize) {
        self.rows_dropped = self.rows_loaded.saturating_sub(rows_analyzed);
        self.rows_analyzed = rows_analyzed;
        self.encoded_columns = encoded_columns;
    }

    pub fn total_time(&self) -> Duration {
        self.load_time
            + self.profile_time
            + self.clean_time
            + self.charts_time
            + self.stats_time
            + self.regression_time
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("ANALYSIS SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📥 Rows Loaded"),
            Cell::new(self.rows_loaded),
        ]);

        table.add_row(vec![
            Cell::new("🧹 Rows Dropped (Missing)"),
            Cell::new(self.rows_dropped).fg(if self.rows_dropped == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("✅ Rows Analyzed"),
            Cell::new(self.rows_analyzed)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🏷️  Encoded Columns"),
            Cell::new(self.encoded_columns),
        ]);

        table.add_row(vec![
            Cell::new("📊 Charts Rendered"),
            Cell::new(self.charts_rendered),
        ]);

        table.add_row(vec![
            Cell::new("⏱️  Total Time"),
            Cell::new(format!("{:.2}s", self.total_time().as_secs_f64())).fg(Color::Cyan),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        println!();
        println!(
            "    {}",
            style(format!(
                "Completed at {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ))
            .dim()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_results_update_drop_count() {
        let mut summary = AnalysisSummary::new(374);
        summary.set_clean_results(362, 4);

        assert_eq!(summary.rows_loaded, 374);
        assert_eq!(summary.rows_analyzed, 362);
        assert_eq!(summary.rows_dropped, 12);
        assert_eq!(summary.encoded_columns, 4);
    }

    #[test]
    fn test_total_time_sums_stages() {
        let mut summary = AnalysisSummary::new(10);
        summary.load_time = Duration::from_millis(100);
        summary.stats_time = Duration::from_millis(250);

        assert_eq!(summary.total_time(), Duration::from_millis(350));
    }
}
