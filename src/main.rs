use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use version_triage::check::check_versions;
use version_triage::config::parse_package_list;
use version_triage::output::{GITHUB_OUTPUT_ENV, write_outputs};
use version_triage::report;
use version_triage::version::npm::NpmRegistry;

#[derive(Parser)]
#[command(name = "version-triage")]
#[command(version, about = "Checks package version mentions in issue text against npm")]
struct Cli {
    /// File holding the text to scan; reads stdin when omitted
    #[arg(long)]
    body_file: Option<PathBuf>,

    /// Newline-separated packages that must carry a version number
    #[arg(long, default_value = "")]
    required_packages: String,

    /// Newline-separated packages checked only when mentioned
    #[arg(long, default_value = "")]
    optional_packages: String,

    /// Registry base URL; defaults to the public npm registry
    #[arg(long)]
    registry: Option<String>,

    /// File to append the found/outdated/missing outputs to;
    /// defaults to $GITHUB_OUTPUT when set
    #[arg(long)]
    output_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let body = match &cli.body_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let required = parse_package_list(&cli.required_packages);
    let optional = parse_package_list(&cli.optional_packages);

    let registry = match &cli.registry {
        Some(base_url) => NpmRegistry::new(base_url),
        None => NpmRegistry::default(),
    };

    let result = check_versions(&registry, &body, &optional, &required).await?;

    info!(
        "check finished: {} found, {} missing, {} outdated",
        result.found.len(),
        result.missing.len(),
        result.outdated.len()
    );

    if let Some(comment) = report::comment_body(&result) {
        println!("{}", comment);
    }

    let output_file = cli
        .output_file
        .or_else(|| std::env::var_os(GITHUB_OUTPUT_ENV).map(PathBuf::from));

    if let Some(path) = output_file {
        write_outputs(
            &path,
            &[
                ("found", report::found_output(&result)),
                ("outdated", report::outdated_output(&result)),
                ("missing", report::missing_output(&result)),
            ],
        )?;
    }

    Ok(())
}
