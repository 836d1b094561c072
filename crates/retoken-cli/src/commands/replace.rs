//! `retoken replace`: gather tokens and rewrite placeholders in files.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

use retoken_adapters::{LocalFilesystem, expand_file_patterns};
use retoken_core::application::{SubstitutionService, TokenService};
use tracing::{debug, instrument};

use crate::{
    cli::ReplaceArgs,
    commands::sources::{delimiters, parse_file_list, token_sources},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Name of the step output listing rewritten files.
pub const CHANGED_FILES_OUTPUT: &str = "changedFiles";

#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: ReplaceArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let files = parse_file_list(&args.files)?;
    if files.is_empty() {
        return Err(CliError::NoFiles);
    }
    debug!(?files, "Replace below files");

    let delimiters = delimiters(&args.tokens, &config)?;
    let sources = token_sources(&args.tokens, &config)?;
    let tokens = TokenService::new(sources).gather()?;

    let changed = if tokens.is_empty() {
        output.warning("No tokens were provided.")?;
        Vec::new()
    } else {
        let paths = expand_file_patterns(&files)?;
        let service = SubstitutionService::new(Box::new(LocalFilesystem::new()))
            .with_dry_run(args.dry_run);
        service
            .substitute(&paths, &tokens, &delimiters)?
            .into_changed_files()
    };

    let changed: Vec<String> = changed
        .iter()
        .map(|path| path.display().to_string())
        .collect();

    if output.is_json() {
        output.json(&changed)?;
    } else {
        let verb = if args.dry_run {
            "Would replace"
        } else {
            "Replaced"
        };
        for file in &changed {
            output.print(&format!("{verb} tokens in file: {file}."))?;
        }
    }

    if let Some(path) = std::env::var_os("GITHUB_OUTPUT").filter(|p| !p.is_empty()) {
        write_step_output(Path::new(&path), &changed)?;
    }

    Ok(())
}

/// Append `changedFiles=<json array>` to a GitHub Actions output file.
fn write_step_output(path: &Path, changed: &[String]) -> CliResult<()> {
    let json = serde_json::to_string(changed)
        .with_cli_context(|| "Failed to serialise changed files")?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_cli_context(|| format!("Failed to open step output '{}'", path.display()))?;

    writeln!(file, "{CHANGED_FILES_OUTPUT}={json}")
        .with_cli_context(|| format!("Failed to write step output '{}'", path.display()))?;

    debug!(path = %path.display(), "Wrote step output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn step_output_is_appended() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");
        fs::write(&path, "previous=1\n").unwrap();

        write_step_output(&path, &["a.txt".to_string(), "b.txt".to_string()]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "previous=1\nchangedFiles=[\"a.txt\",\"b.txt\"]\n"
        );
    }

    #[test]
    fn empty_change_list() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");

        write_step_output(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "changedFiles=[]\n");
    }
}
