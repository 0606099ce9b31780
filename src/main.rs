//! Hypnos: Sleep Survey Analysis CLI Tool
//!
//! A command-line tool for exploring sleep-health survey data:
//! cleaning and encoding, profiling, chart rendering, statistical
//! tests and OLS regression.

mod charts;
mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use charts::render_all;
use cli::Cli;
use pipeline::{
    anova_one_way, binary_groups, column_profiles, dataset_stats, describe_numeric,
    drop_incomplete, encode_categorical, fit_ols, group_values, load_dataset, pearson_columns,
    t_test_ind, DatasetSchema, CATEGORICAL_COLUMNS, GENDER, OCCUPATION, PHYSICAL_ACTIVITY,
    QUALITY_OF_SLEEP, REGRESSION_PREDICTORS,
};
use report::{
    print_anova, print_describe, print_encodings, print_head, print_missing, print_pearson,
    print_profile, print_regression, print_t_test, AnalysisSummary,
};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    // Print configuration card
    let charts_dir = if cli.no_charts {
        None
    } else {
        Some(cli.charts_dir.as_path())
    };
    print_config(&cli.input, charts_dir, cli.head_rows, cli.infer_schema_length);

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let spinner = create_spinner("Reading CSV file...");
    let schema = DatasetSchema::sleep_survey();
    let df = load_dataset(&cli.input, &schema, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    let stats = dataset_stats(&df);
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", stats.rows);
    println!("      Columns: {}", stats.cols);
    println!("      Estimated memory: {:.2} MB", stats.memory_mb);

    print_head(&df, cli.head_rows);

    let mut summary = AnalysisSummary::new(stats.rows);
    summary.load_time = step_start.elapsed();
    print_step_time(summary.load_time);

    // Step 2: Profile the raw dataset
    print_step_header(2, "Dataset Profile");

    let step_start = Instant::now();
    let profiles = column_profiles(&df);
    print_profile(&profiles);
    print_missing(&profiles);
    summary.profile_time = step_start.elapsed();
    print_step_time(summary.profile_time);

    // Step 3: Drop incomplete rows and encode categorical columns
    print_step_header(3, "Clean & Encode");

    let step_start = Instant::now();
    let mut df = drop_incomplete(&df)?;
    let dropped = stats.rows - df.height();
    if dropped == 0 {
        print_info("No incomplete rows found");
    } else {
        print_count("row(s) with missing values", dropped, None);
        print_success("Dropped incomplete rows");
    }

    // Summary statistics describe the cleaned frame, before labels become codes
    let described = describe_numeric(&df)?;
    print_describe(&described);

    let encodings = encode_categorical(&mut df, &CATEGORICAL_COLUMNS)?;
    print_encodings(&encodings);
    summary.set_clean_results(df.height(), encodings.len());
    summary.clean_time = step_start.elapsed();
    print_step_time(summary.clean_time);

    // Step 4: Render charts
    print_step_header(4, "Visualization");

    let step_start = Instant::now();
    if cli.no_charts {
        print_info("Chart rendering disabled");
    } else {
        let spinner = create_spinner("Rendering charts...");
        let rendered = render_all(&df, &encodings, &cli.charts_dir)?;
        finish_with_success(
            &spinner,
            &format!(
                "Rendered {} charts to {}",
                rendered.len(),
                cli.charts_dir.display()
            ),
        );
        for path in &rendered {
            println!("      {} {}", style("•").dim(), path.display());
        }
        summary.charts_rendered = rendered.len();
    }
    summary.charts_time = step_start.elapsed();
    print_step_time(summary.charts_time);

    // Step 5: Statistical tests
    print_step_header(5, "Statistical Analysis");

    let step_start = Instant::now();
    let spinner = create_spinner("Running statistical tests...");
    let r = pearson_columns(&df, PHYSICAL_ACTIVITY, QUALITY_OF_SLEEP)?;
    let (group_a, group_b) = binary_groups(&df, GENDER, QUALITY_OF_SLEEP)?;
    let t_test = t_test_ind(&group_a, &group_b)?;
    let occupation_groups: Vec<Vec<f64>> = group_values(&df, OCCUPATION, QUALITY_OF_SLEEP)?
        .into_iter()
        .map(|(_, values)| values)
        .collect();
    let anova = anova_one_way(&occupation_groups)?;
    finish_with_success(&spinner, "Statistical tests complete");

    println!();
    print_pearson(r);
    print_t_test(&t_test);
    print_anova(&anova);
    summary.stats_time = step_start.elapsed();
    print_step_time(summary.stats_time);

    // Step 6: Fit the regression model
    print_step_header(6, "Regression");

    let step_start = Instant::now();
    let fit = fit_ols(&df, &REGRESSION_PREDICTORS, QUALITY_OF_SLEEP)?;
    print_regression(&fit);
    summary.regression_time = step_start.elapsed();
    print_step_time(summary.regression_time);

    // Display summary
    summary.display();

    // Final completion message
    print_completion();

    Ok(())
}
