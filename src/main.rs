//! Churnscope: a terminal dashboard for customer churn analysis
//!
//! Loads a churn dataset plus three pre-fitted model artifacts and serves
//! six views: overview, EDA, model performance, feature importance,
//! recommendations, and a live prediction demo.

mod analysis;
mod cli;
mod dashboard;
mod model;
mod report;
mod store;
mod utils;

use anyhow::Result;
use clap::Parser;
use console::style;

use cli::{Cli, Commands};
use dashboard::run_dashboard;
use model::CustomerProfile;
use report::print_summary;
use store::ArtifactStore;
use utils::{print_banner, print_completion, print_config, print_success};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // One-shot prediction from the command line
    if let Some(Commands::Predict {
        tenure,
        monthly_charges,
        contract,
        payment,
        internet,
    }) = &cli.command
    {
        let store = ArtifactStore::load(&cli.artifact_paths(), cli.infer_schema_length)?;
        let profile = CustomerProfile {
            tenure: *tenure,
            monthly_charges: f64::from(*monthly_charges),
            contract: *contract,
            payment_method: *payment,
            internet_service: *internet,
        };
        return run_predict(&store, &profile);
    }

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.data, &cli.preprocessor, &cli.logistic, &cli.forest);

    // All four artifacts load up front; any failure aborts the session.
    let store = ArtifactStore::load(&cli.artifact_paths(), cli.infer_schema_length)?;
    print_success("Dataset and model artifacts loaded");

    if cli.headless {
        print_summary(&store)?;
    } else {
        run_dashboard(&store)?;
    }

    print_completion();

    Ok(())
}

fn run_predict(store: &ArtifactStore, profile: &CustomerProfile) -> Result<()> {
    let outcome = store.predict(profile)?;

    println!();
    println!(
        "    {} {}",
        style("🎯").cyan(),
        style("CHURN PREDICTION").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!(
        "      Tenure: {} months   Monthly charges: ${:.0}",
        style(profile.tenure).yellow(),
        profile.monthly_charges
    );
    println!(
        "      {} · {} · {}",
        profile.contract, profile.payment_method, profile.internet_service
    );
    println!();
    println!(
        "      {} {}",
        style(format!("{:>5.1}%", outcome.logistic * 100.0)).yellow().bold(),
        store.logistic.label
    );
    println!(
        "      {} {}",
        style(format!("{:>5.1}%", outcome.forest * 100.0)).yellow().bold(),
        store.forest.label
    );
    println!();

    Ok(())
}
