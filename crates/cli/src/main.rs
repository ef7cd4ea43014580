//! Minimal cable bundle CLI

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use u_bundle_cli::{effective_scale, parse_radii, read_radii, BundleReport};
use u_bundle_core::{Config, EnclosingMethod};
use u_bundle_packer::{BundleSearch, Solver};

#[derive(Parser)]
#[command(name = "bundle-runner")]
#[command(about = "Finds the smallest round bundle for a set of cables")]
#[command(version)]
struct Cli {
    /// File with cable radii ('#' lines are comments)
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// Radii given inline, e.g. "1.5 2 3" (overrides --input)
    #[arg(short, long)]
    radii: Option<String>,

    /// Scale applied to radii before the search
    #[arg(short, long, default_value = "10")]
    scale: f64,

    /// Use the exact smallest enclosing circle instead of the farthest-pair measure
    #[arg(long)]
    exact: bool,

    /// Worker threads (0 = all cores)
    #[arg(short, long, default_value = "0")]
    threads: usize,

    /// Maximum number of cables (0 = unlimited; the search is n!)
    #[arg(long, default_value = "9")]
    max_radii: usize,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let radii = match &cli.radii {
        Some(text) => parse_radii(text)?,
        None => read_radii(&cli.input)
            .with_context(|| format!("reading {}", cli.input.display()))?,
    };

    let scale = effective_scale(cli.scale);
    let scaled: Vec<f64> = radii.iter().map(|r| r * scale).collect();

    let method = if cli.exact {
        EnclosingMethod::Exact
    } else {
        EnclosingMethod::FarthestPair
    };
    let config = Config::new()
        .with_enclosing(method)
        .with_threads(cli.threads)
        .with_max_radii(cli.max_radii);

    let outcome = BundleSearch::new(config).solve(&scaled)?;
    let report = BundleReport::new(radii, scale, &outcome);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_summary();
    }

    Ok(())
}
