//! Dataset profile tables rendered to the terminal

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use polars::prelude::DataFrame;

use crate::pipeline::clean::EncodingMap;
use crate::pipeline::profile::{total_missing, ColumnProfile, DescribeRow};

/// Print the first `rows` rows of the dataset.
pub fn print_head(df: &DataFrame, rows: usize) {
    println!();
    println!(
        "    {} {}",
        style("👀").cyan(),
        style(format!("FIRST {} ROWS", rows)).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    for line in format!("{}", df.head(Some(rows))).lines() {
        println!("    {}", line);
    }
}

/// Print a per-column overview: dtype, non-null count and missing count.
pub fn print_profile(profiles: &[ColumnProfile]) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("COLUMN OVERVIEW").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Dtype").add_attribute(Attribute::Bold),
        Cell::new("Non-Null").add_attribute(Attribute::Bold),
        Cell::new("Missing").add_attribute(Attribute::Bold),
    ]);

    for profile in profiles {
        table.add_row(vec![
            Cell::new(&profile.name),
            Cell::new(&profile.dtype),
            Cell::new(profile.non_null),
            Cell::new(profile.missing).fg(if profile.missing == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Print missing counts for the columns that have any, plus the total.
pub fn print_missing(profiles: &[ColumnProfile]) {
    let total = total_missing(profiles);

    println!();
    println!(
        "    {} {}",
        style("🔍").cyan(),
        style("MISSING VALUES").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    if total == 0 {
        println!("    {}", style("No missing values found").green());
        return;
    }

    for profile in profiles {
        if profile.missing > 0 {
            println!(
                "      {} {}: {}",
                style("•").dim(),
                profile.name,
                style(profile.missing).red()
            );
        }
    }
    println!(
        "      {} Total: {}",
        style("•").dim(),
        style(total).red().bold()
    );
}

/// Print summary statistics for the numeric columns.
pub fn print_describe(rows: &[DescribeRow]) {
    println!();
    println!(
        "    {} {}",
        style("📊").cyan(),
        style("SUMMARY STATISTICS").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
        Cell::new("Mean").add_attribute(Attribute::Bold),
        Cell::new("Std").add_attribute(Attribute::Bold),
        Cell::new("Min").add_attribute(Attribute::Bold),
        Cell::new("25%").add_attribute(Attribute::Bold),
        Cell::new("50%").add_attribute(Attribute::Bold),
        Cell::new("75%").add_attribute(Attribute::Bold),
        Cell::new("Max").add_attribute(Attribute::Bold),
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.column),
            Cell::new(row.count),
            Cell::new(format!("{:.2}", row.mean)),
            Cell::new(format!("{:.2}", row.std)),
            Cell::new(format!("{:.2}", row.min)),
            Cell::new(format!("{:.2}", row.q25)),
            Cell::new(format!("{:.2}", row.median)),
            Cell::new(format!("{:.2}", row.q75)),
            Cell::new(format!("{:.2}", row.max)),
        ]);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Print each encoded column with its label-to-code mapping.
pub fn print_encodings(encodings: &EncodingMap) {
    println!();
    println!(
        "    {} {}",
        style("🏷️").cyan(),
        style("Categorical columns encoded:").white().bold()
    );
    println!();

    for encoding in encodings.iter() {
        let mapping: Vec<String> = encoding
            .labels()
            .iter()
            .enumerate()
            .map(|(code, label)| format!("{} = {}", label, code))
            .collect();
        println!(
            "      {} {}: {}",
            style("•").dim(),
            style(encoding.column()).yellow(),
            style(mapping.join(", ")).dim()
        );
    }
}
