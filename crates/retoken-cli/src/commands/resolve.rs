//! Implementation of the `retoken resolve` command.

use retoken_core::{application::TokenService, domain::Resolution};

use crate::{
    cli::{ResolveArgs, ResolveFormat},
    commands::sources::{delimiters, token_sources},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ResolveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let delimiters = delimiters(&args.tokens, &config)?;
    let sources = token_sources(&args.tokens, &config)?;
    let resolution = TokenService::new(sources).gather_resolved(&delimiters)?;

    let format = if output.is_json() {
        ResolveFormat::Json
    } else {
        args.format
    };

    match format {
        ResolveFormat::Table => {
            if resolution.tokens().is_empty() && resolution.unresolved().is_empty() {
                output.warning("No tokens were provided.")?;
                return Ok(());
            }
            output.header("Resolved tokens:")?;
            for token in resolution.tokens() {
                output.print(&format!("  {} = {}", token.key, token.value))?;
            }
        }

        ResolveFormat::List => {
            for key in resolution.tokens().keys() {
                output.print(key)?;
            }
        }

        // Bypasses quiet mode so the output stays parseable.
        ResolveFormat::Json => output.json(resolution.tokens())?,
    }

    report_unresolved(&resolution, &output)
}

fn report_unresolved(resolution: &Resolution, output: &OutputManager) -> CliResult<()> {
    if resolution.converged() {
        return Ok(());
    }
    output.warning(&format!(
        "Dropped {} unresolved token(s) after {} passes: {}",
        resolution.unresolved().len(),
        resolution.passes(),
        resolution.unresolved_keys().join(", "),
    ))?;
    Ok(())
}
