//! Statistical test and regression result lines

use console::style;

use crate::pipeline::regression::LinearFit;
use crate::pipeline::stats::{AnovaResult, TTestResult};

/// Print the activity vs sleep quality correlation coefficient.
pub fn print_pearson(r: f64) {
    println!(
        "    {} Pearson Correlation (Exercise vs Sleep Quality): {}",
        style("📈").cyan(),
        style(format!("{:.2}", r)).green().bold()
    );
}

/// Print the gender t-test statistic and p-value.
pub fn print_t_test(result: &TTestResult) {
    println!(
        "    {} T-Test (Sleep Quality by Gender): t-stat = {}, p-value = {}",
        style("⚖️").cyan(),
        style(format!("{:.2}", result.t)).green().bold(),
        style(format!("{:.3}", result.p)).green().bold()
    );
}

/// Print the occupation ANOVA statistic and p-value.
pub fn print_anova(result: &AnovaResult) {
    println!(
        "    {} ANOVA (Sleep Quality by Occupation): F-stat = {}, p-value = {}",
        style("🧪").cyan(),
        style(format!("{:.2}", result.f)).green().bold(),
        style(format!("{:.3}", result.p)).green().bold()
    );
}

/// Print one coefficient line per predictor, then the intercept.
pub fn print_regression(fit: &LinearFit) {
    println!();
    println!(
        "    {} {}",
        style("📐").cyan(),
        style("Regression Coefficients:").white().bold()
    );
    for (name, coefficient) in fit.terms() {
        println!(
            "      {} {}: {}",
            style("•").dim(),
            name,
            style(format!("{:.2}", coefficient)).green()
        );
    }
    println!(
        "      {} Intercept: {}",
        style("•").dim(),
        style(format!("{:.2}", fit.intercept)).green()
    );
}
