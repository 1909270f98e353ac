//! Case and batch drivers.
//!
//! A case runs `Acquire -> Extract -> Serialize`; the first failing stage ends
//! it and the error is tagged with the case name and stage. A batch runs every
//! eligible case in name order and stops at the first failure.

use std::fs;

use tracing::{debug, info, warn};

use crate::acquire::acquire;
use crate::case::{TestCase, SOURCE_FILE};
use crate::engine::Engine;
use crate::error::{Error, Result, Stage};
use crate::extract::invoke;
use crate::fetch::Fetcher;
use crate::options::Options;
use crate::serialize::write_fixture;
use crate::url_utils::validate_source_url;

/// Summary of one regenerated test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub name: String,
    /// Whether `source.html` was downloaded during this run.
    pub downloaded: bool,
    pub readerable: bool,
}

/// Summary of a batch run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub cases: Vec<CaseOutcome>,
}

/// Fixture generator wired to an engine and a fetcher.
#[derive(Debug)]
pub struct Harness<E, F> {
    engine: E,
    fetcher: F,
    options: Options,
}

impl<E: Engine, F: Fetcher> Harness<E, F> {
    pub fn new(engine: E, fetcher: F, options: Options) -> Self {
        Self {
            engine,
            fetcher,
            options,
        }
    }

    /// Regenerate the fixture of the test case `name`.
    ///
    /// With `source_url`, the source is downloaded again even if present.
    /// Name and URL are validated before any I/O; those errors are returned
    /// as-is, everything later is wrapped in [`Error::Case`].
    pub fn run_case(&self, name: &str, source_url: Option<&str>) -> Result<CaseOutcome> {
        let case = TestCase::new(&self.options.root, name)?;
        let source_url = source_url
            .filter(|url| !url.is_empty())
            .map(validate_source_url)
            .transpose()?;

        info!(name, "generating test case");

        let source = acquire(&self.fetcher, &case, source_url.as_ref())
            .map_err(|e| e.in_case(name, Stage::Acquire))?;
        let extraction = invoke(&self.engine, &source).map_err(|e| e.in_case(name, Stage::Extract))?;
        write_fixture(&self.engine, &extraction, &case)
            .map_err(|e| e.in_case(name, Stage::Serialize))?;

        Ok(CaseOutcome {
            name: name.to_string(),
            downloaded: source.was_downloaded(),
            readerable: extraction.readerable,
        })
    }

    /// Regenerate every test case under the root that already has a source.
    ///
    /// Non-directories and directories without `source.html` are skipped.
    /// Sources are always reused. The first failing case aborts the batch.
    pub fn run_all(&self) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        for name in self.eligible_cases()? {
            let outcome = self.run_case(&name, None)?;
            report.cases.push(outcome);
        }

        info!(cases = report.cases.len(), "regenerated all test cases");
        Ok(report)
    }

    /// Names of the directories under the root that contain `source.html`,
    /// sorted by name.
    ///
    /// Directories whose name is not UTF-8 or not a usable test name cannot be
    /// addressed as a case; they are skipped with a warning.
    pub fn eligible_cases(&self) -> Result<Vec<String>> {
        let root = &self.options.root;
        let io_error = |source| Error::Io {
            path: root.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(root).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            let path = entry.path();
            if !path.is_dir() {
                debug!(path = %path.display(), "skipping non-directory entry");
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                if path.join(SOURCE_FILE).is_file() {
                    warn!(path = %path.display(), "skipping test case whose name is not UTF-8");
                }
                continue;
            };

            match TestCase::new(root, &name) {
                Ok(case) if case.has_source() => names.push(name),
                Ok(_) => debug!(name = %name, "skipping directory without source"),
                Err(e) => warn!(name = %name, error = %e, "skipping directory with unusable test name"),
            }
        }

        names.sort();
        Ok(names)
    }
}
