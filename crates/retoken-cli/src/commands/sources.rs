//! Turning `TokenArgs` + config into delimiters and token sources.
//!
//! Shared by `replace` and `resolve`.

use retoken_adapters::{GitHubEnvironmentSource, GitHubRepository, JsonFileSource};
use retoken_core::{application::ports::TokenSource, domain::Delimiters, error::RetokenError};
use tracing::{debug, info};

use crate::{
    cli::TokenArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

/// Flatten list-valued inputs.
///
/// Each raw value is either a single entry or, when it starts with `[`, a
/// JSON array of entries.  Backslashes in an array are doubled before
/// parsing so unescaped Windows paths survive.  Blank entries are dropped.
pub fn parse_file_list(values: &[String]) -> CliResult<Vec<String>> {
    let mut entries = Vec::new();

    for raw in values {
        let trimmed = raw.trim();
        if trimmed.starts_with('[') {
            let escaped = trimmed.replace('\\', "\\\\");
            let parsed: Vec<String> = serde_json::from_str(&escaped)
                .with_cli_context(|| format!("'{trimmed}' is not a JSON array of strings"))?;
            entries.extend(parsed);
        } else {
            entries.push(raw.clone());
        }
    }

    entries.retain(|entry| !entry.trim().is_empty());
    Ok(entries)
}

/// Delimiters from the flags, falling back to `[tokens]` in config.
pub fn delimiters(args: &TokenArgs, config: &AppConfig) -> CliResult<Delimiters> {
    let prefix = args
        .prefix
        .clone()
        .unwrap_or_else(|| config.tokens.prefix.clone());
    let suffix = args
        .suffix
        .clone()
        .unwrap_or_else(|| config.tokens.suffix.clone());

    Delimiters::new(prefix, suffix).map_err(|e| CliError::Core(e.into()))
}

/// Sources in merge order: token files as listed, then the GitHub
/// environment.  Inputs are validated before any source is loaded.
pub fn token_sources(args: &TokenArgs, config: &AppConfig) -> CliResult<Vec<Box<dyn TokenSource>>> {
    let mut files = parse_file_list(&args.token_value_files)?;
    if files.is_empty() {
        files = config.tokens.value_files.clone();
    }

    let environment = args
        .environment
        .as_deref()
        .map(str::trim)
        .filter(|env| !env.is_empty());

    let mut sources: Vec<Box<dyn TokenSource>> = Vec::new();

    if !files.is_empty() {
        info!(count = files.len(), "read tokens from files");
        for file in files {
            sources.push(Box::new(JsonFileSource::new(file)));
        }
    }

    if let Some(environment) = environment {
        let token = args
            .repo_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or(CliError::MissingRepoToken)?;

        let repository = args
            .repository
            .as_deref()
            .or(config.github.repository.as_deref())
            .ok_or_else(|| {
                CliError::invalid_input(
                    "--repository (or GITHUB_REPOSITORY) is required with --environment",
                )
            })?
            .parse::<GitHubRepository>()
            .map_err(RetokenError::from)?;

        let api_url = args.api_url.as_deref().unwrap_or(&config.github.api_url);

        info!(%repository, environment, "read tokens from environment variables");
        debug!(api_url, "GitHub API");
        sources.push(Box::new(GitHubEnvironmentSource::with_api_url(
            api_url,
            repository,
            environment,
            token,
        )?));
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn token_args() -> TokenArgs {
        TokenArgs {
            token_value_files: Vec::new(),
            prefix: None,
            suffix: None,
            environment: None,
            repo_token: None,
            repository: None,
            api_url: None,
        }
    }

    #[test]
    fn single_value_is_one_entry() {
        assert_eq!(parse_file_list(&strings(&["a.txt"])).unwrap(), ["a.txt"]);
    }

    #[test]
    fn json_array_value() {
        let parsed = parse_file_list(&strings(&[r#"["a.txt", "dir/b.txt"]"#])).unwrap();
        assert_eq!(parsed, ["a.txt", "dir/b.txt"]);
    }

    #[test]
    fn json_array_with_windows_paths() {
        let parsed = parse_file_list(&strings(&[r#"["C:\work\app.config"]"#])).unwrap();
        assert_eq!(parsed, [r"C:\work\app.config"]);
    }

    #[test]
    fn repeated_values_are_concatenated() {
        let parsed = parse_file_list(&strings(&["a", r#"["b","c"]"#, "d"])).unwrap();
        assert_eq!(parsed, ["a", "b", "c", "d"]);
    }

    #[test]
    fn blank_values_are_dropped() {
        assert!(parse_file_list(&strings(&["", "  "])).unwrap().is_empty());
        assert!(parse_file_list(&strings(&["[]"])).unwrap().is_empty());
    }

    #[test]
    fn malformed_array_is_invalid_input() {
        let err = parse_file_list(&strings(&["[\"a\""])).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn delimiters_fall_back_to_config() {
        let mut config = AppConfig::default();
        config.tokens.prefix = "${".into();

        let mut args = token_args();
        args.suffix = Some("}$".into());

        let delimiters = delimiters(&args, &config).unwrap();
        assert_eq!(delimiters.prefix(), "${");
        assert_eq!(delimiters.suffix(), "}$");
    }

    #[test]
    fn empty_prefix_is_rejected() {
        let mut args = token_args();
        args.prefix = Some(String::new());
        let err = delimiters(&args, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn environment_without_token_fails() {
        let mut args = token_args();
        args.environment = Some("production".into());
        args.repository = Some("acme/web".into());

        let err = token_sources(&args, &AppConfig::default()).err().unwrap();
        assert!(matches!(err, CliError::MissingRepoToken));
    }

    #[test]
    fn environment_without_repository_fails() {
        let mut args = token_args();
        args.environment = Some("production".into());
        args.repo_token = Some("ghp_x".into());

        let err = token_sources(&args, &AppConfig::default()).err().unwrap();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn sources_in_merge_order() {
        let mut args = token_args();
        args.token_value_files = strings(&[r#"["a.json","b.json"]"#]);
        args.environment = Some("staging".into());
        args.repo_token = Some("ghp_x".into());
        args.repository = Some("acme/web".into());

        let sources = token_sources(&args, &AppConfig::default()).unwrap();
        let names: Vec<String> = sources.iter().map(|s| s.name()).collect();

        assert_eq!(names.len(), 3);
        assert_eq!(names[0], "a.json");
        assert_eq!(names[1], "b.json");
        assert!(names[2].contains("staging"));
    }

    #[test]
    fn config_value_files_used_when_flag_absent() {
        let mut config = AppConfig::default();
        config.tokens.value_files = strings(&["defaults.json"]);

        let sources = token_sources(&token_args(), &config).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name(), "defaults.json");
    }
}
