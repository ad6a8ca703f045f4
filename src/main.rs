//! docsite - validate a documentation site config and hand it to a builder.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use docsite::{ManifestWriter, RawSiteConfig, SiteBuilder, SiteConfig, log};
use std::{
    fs::File,
    io::{self, BufWriter},
    path::Path,
};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        log!("error"; "{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let raw = RawSiteConfig::from_path(&cli.config)
        .with_context(|| format!("failed to load `{}`", cli.config.display()))?;

    match &cli.command {
        Commands::Check { strict } => check(&raw, *strict),
        Commands::Manifest { output } => manifest(&raw, output.as_deref()),
    }
}

/// Resolve and report warnings; nothing is built.
fn check(raw: &RawSiteConfig, strict: bool) -> Result<()> {
    let config = SiteConfig::resolve(raw).context("invalid site configuration")?;
    let warnings = report_warnings(&config);

    if strict && warnings > 0 {
        bail!("{warnings} warning(s) with --strict");
    }

    log!(
        "check";
        "`{}` ok: {} nav item(s), {} sidebar section(s)",
        config.title,
        config.theme_config.nav_items.len(),
        config.theme_config.sidebar_sections.len()
    );
    Ok(())
}

fn manifest(raw: &RawSiteConfig, output: Option<&Path>) -> Result<()> {
    let config = SiteConfig::resolve(raw).context("invalid site configuration")?;
    report_warnings(&config);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create `{}`", path.display()))?;
            ManifestWriter::new(BufWriter::new(file)).build(&config)?;
            log!("manifest"; "written to `{}`", path.display());
        }
        None => ManifestWriter::new(io::stdout().lock()).build(&config)?,
    }
    Ok(())
}

fn report_warnings(config: &SiteConfig) -> usize {
    let warnings = config.lint();
    for warning in &warnings {
        log!("warning"; "{warning}");
    }
    warnings.len()
}
