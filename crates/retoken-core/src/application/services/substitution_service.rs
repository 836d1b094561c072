//! Substitution Service - rewrites placeholders in target files.
//!
//! Workflow for one run:
//! 1. Resolve nested tokens with the run's delimiters
//! 2. Compile the placeholder matcher
//! 3. For each file, in input order: read, replace, write back if changed
//!
//! Files that do not exist or are not UTF-8 text are skipped. Any other I/O
//! failure aborts the run; files already rewritten stay rewritten.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{Delimiters, Placeholders, Resolution, TokenSet, resolve},
    error::RetokenResult,
};

/// Result of a substitution run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionReport {
    changed_files: Vec<PathBuf>,
    resolution: Resolution,
}

impl SubstitutionReport {
    /// Files whose content changed, in the order they were given.
    pub fn changed_files(&self) -> &[PathBuf] {
        &self.changed_files
    }

    pub fn into_changed_files(self) -> Vec<PathBuf> {
        self.changed_files
    }

    /// The token resolution used for this run.
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// False when some tokens hit the resolution cap and were dropped.
    pub fn converged(&self) -> bool {
        self.resolution.converged()
    }
}

/// Rewrites placeholders in files through the [`Filesystem`] port.
pub struct SubstitutionService {
    filesystem: Box<dyn Filesystem>,
    dry_run: bool,
}

impl SubstitutionService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            dry_run: false,
        }
    }

    /// Compute changes without writing anything.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Replace placeholders in `files` and report which ones changed.
    ///
    /// Unknown placeholders are deleted. A path listed twice is processed
    /// once.
    #[instrument(skip_all, fields(files = files.len(), tokens = tokens.len(), dry_run = self.dry_run))]
    pub fn substitute(
        &self,
        files: &[PathBuf],
        tokens: &TokenSet,
        delimiters: &Delimiters,
    ) -> RetokenResult<SubstitutionReport> {
        let resolution = resolve(delimiters, tokens);
        let placeholders = Placeholders::new(delimiters)?;

        let mut seen = HashSet::new();
        let mut changed_files = Vec::new();

        for path in files {
            if !seen.insert(path.as_path()) {
                continue;
            }
            if self.substitute_file(path, &placeholders, resolution.tokens())? {
                changed_files.push(path.clone());
            }
        }

        info!(changed = changed_files.len(), "Substitution finished");
        Ok(SubstitutionReport {
            changed_files,
            resolution,
        })
    }

    /// Returns whether the file's content changed.
    fn substitute_file(
        &self,
        path: &Path,
        placeholders: &Placeholders,
        tokens: &TokenSet,
    ) -> RetokenResult<bool> {
        let Some(original) = self.filesystem.read_to_string(path)? else {
            debug!(path = %path.display(), "File not found, skipping");
            return Ok(false);
        };

        let replaced = placeholders.replace_all(&original, tokens);
        if replaced == original.as_str() {
            debug!(path = %path.display(), "No placeholders replaced");
            return Ok(false);
        }

        if self.dry_run {
            info!(path = %path.display(), "Would replace tokens (dry run)");
        } else {
            self.filesystem.write_file(path, &replaced)?;
            info!(path = %path.display(), "Replaced tokens");
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::domain::Token;
    use crate::error::RetokenError;

    fn tokens(pairs: &[(&str, &str)]) -> TokenSet {
        pairs.iter().map(|(k, v)| Token::new(*k, *v)).collect()
    }

    fn file_with(fs: &mut MockFilesystem, path: &'static str, content: &'static str) {
        fs.expect_read_to_string()
            .withf(move |p| p == Path::new(path))
            .returning(move |_| Ok(Some(content.to_string())));
    }

    #[test]
    fn writes_only_changed_files() {
        let mut fs = MockFilesystem::new();
        file_with(&mut fs, "f1", "no placeholders");
        file_with(&mut fs, "f2", "hello #{token1}#");
        fs.expect_write_file()
            .withf(|p, content| p == Path::new("f2") && content == "hello test")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SubstitutionService::new(Box::new(fs));
        let report = service
            .substitute(
                &[PathBuf::from("f1"), PathBuf::from("f2")],
                &tokens(&[("token1", "test")]),
                &Delimiters::default(),
            )
            .unwrap();

        assert_eq!(report.changed_files(), [PathBuf::from("f2")]);
        assert!(report.converged());
    }

    #[test]
    fn missing_file_is_skipped() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|_| Ok(None));
        fs.expect_write_file().never();

        let service = SubstitutionService::new(Box::new(fs));
        let report = service
            .substitute(
                &[PathBuf::from("gone.txt")],
                &tokens(&[("a", "b")]),
                &Delimiters::default(),
            )
            .unwrap();

        assert!(report.changed_files().is_empty());
    }

    #[test]
    fn read_failure_aborts() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let service = SubstitutionService::new(Box::new(fs));
        let err = service
            .substitute(
                &[PathBuf::from("locked.txt")],
                &TokenSet::new(),
                &Delimiters::default(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            RetokenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn dry_run_never_writes() {
        let mut fs = MockFilesystem::new();
        file_with(&mut fs, "a.txt", "#{x}#");
        fs.expect_write_file().never();

        let service = SubstitutionService::new(Box::new(fs)).with_dry_run(true);
        let report = service
            .substitute(
                &[PathBuf::from("a.txt")],
                &tokens(&[("x", "y")]),
                &Delimiters::default(),
            )
            .unwrap();

        assert_eq!(report.changed_files(), [PathBuf::from("a.txt")]);
    }

    #[test]
    fn duplicate_paths_are_processed_once() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .times(1)
            .returning(|_| Ok(Some("#{x}#".to_string())));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let service = SubstitutionService::new(Box::new(fs));
        let report = service
            .substitute(
                &[PathBuf::from("a.txt"), PathBuf::from("a.txt")],
                &tokens(&[("x", "y")]),
                &Delimiters::default(),
            )
            .unwrap();

        assert_eq!(report.changed_files().len(), 1);
    }

    #[test]
    fn cyclic_tokens_are_scrubbed_and_reported() {
        let mut fs = MockFilesystem::new();
        file_with(&mut fs, "a.txt", "[#{A}#][#{C}#]");
        fs.expect_write_file()
            .withf(|p, content| p == Path::new("a.txt") && content == "[][ok]")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SubstitutionService::new(Box::new(fs));
        let report = service
            .substitute(
                &[PathBuf::from("a.txt")],
                &tokens(&[("A", "#{B}#"), ("B", "#{A}#"), ("C", "ok")]),
                &Delimiters::default(),
            )
            .unwrap();

        assert!(!report.converged());
        assert_eq!(report.resolution().unresolved_keys(), ["A", "B"]);
    }
}
