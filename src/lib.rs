//! # readability-fixtures
//!
//! Regression fixture generator for readability-style content extraction.
//!
//! Each test case is a directory holding a `source.html` and the expected
//! output an extraction engine produced for it: `expected.html` (the rendered
//! article subtree) and `expected-metadata.json` (title, byline, excerpt,
//! language, site name and the readerable verdict). A separate test suite later
//! diffs the engine's live output against these files.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use readability_fixtures::{Harness, HttpFetcher, Options, SmoothieEngine};
//!
//! let options = Options::default();
//! let fetcher = HttpFetcher::new(options.fetch_timeout)?;
//! let harness = Harness::new(SmoothieEngine::new(), fetcher, options);
//!
//! // Reuse test-pages/wikipedia/source.html if present, else fail.
//! harness.run_case("wikipedia", None)?;
//!
//! // Force a fresh download before regenerating.
//! harness.run_case("example", Some("https://example.com/"))?;
//!
//! // Regenerate every case that has a source document.
//! harness.run_all()?;
//! # Ok::<(), readability_fixtures::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Acquire**: reuse `source.html`, or download it when a URL is given or the
//!   file is missing ([`acquire`]).
//! - **Extract**: parse the source and run the [`Engine`] against the fixed base
//!   URL `http://fakehost/test/page.html` ([`extract`]).
//! - **Serialize**: write the fixture pair, each file synced and renamed into
//!   place ([`serialize`]).
//!
//! The engine and the network are injected, so the harness can be driven by a
//! deterministic fake engine in tests.

mod error;
mod options;
mod result;

/// Source Acquirer: reuse or download `source.html`.
pub mod acquire;

/// Test case naming and on-disk layout.
pub mod case;

/// Case and batch drivers.
pub mod driver;

/// Character decoding of source bytes.
pub mod encoding;

/// Extraction engine capabilities and the `dom_smoothie` engine.
pub mod engine;

/// Extraction Invoker.
pub mod extract;

/// HTTP download of source documents.
pub mod fetch;

/// Subscriber setup for the binaries.
pub mod logging;

/// Fixture Serializer.
pub mod serialize;

/// Source URL validation and the fixture base URL.
pub mod url_utils;

// Public API - re-exports
pub use case::TestCase;
pub use driver::{BatchReport, CaseOutcome, Harness};
pub use engine::{Article, Engine};
#[cfg(feature = "readability")]
pub use engine::SmoothieEngine;
pub use error::{Error, Result, Stage};
pub use extract::Extraction;
pub use fetch::{FetchedPage, Fetcher, HttpFetcher};
pub use options::{Options, DEFAULT_FETCH_TIMEOUT, DEFAULT_ROOT};
pub use result::FixtureMetadata;
