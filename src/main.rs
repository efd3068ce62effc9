use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use surefire_scope::cli;
use surefire_scope::discovery::ProjectTreeBuilder;
use surefire_scope::logging::{self, Verbosity};
use surefire_scope::output::{OutputFormatter, ProjectReport};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let descriptor = args.descriptor_path();
    let tree = ProjectTreeBuilder::new()
        .build(&descriptor)
        .with_context(|| format!("Failed to load project from {}", descriptor.display()))?;
    let report = ProjectReport::from_tree(&tree).context("Failed to discover tests")?;
    tracing::info!(
        modules = report.total_modules,
        tests = report.total_tests,
        format = args.format.as_str(),
        "discovery complete"
    );

    let rendered = OutputFormatter::format(&report, args.format)?;
    match &args.output_file {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write output to {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
