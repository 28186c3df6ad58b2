//! # Trust Report
//!
//! Turns a JSON test run into a markdown document that groups assertions by the behaviour
//! they vouch for (their outermost `describe` title).

use crate::services::utils::read_json;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fxhash::FxHashMap;
use serde::Deserialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const TITLE_SEPARATOR: &str = " › ";
const UNGROUPED: &str = "Ungrouped";
const PASSED: &str = "passed";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestRun {
    test_results: Vec<TestFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestFile {
    assertion_results: Vec<Assertion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Assertion {
    #[serde(default)]
    ancestor_titles: Vec<String>,
    title: String,
    status: String,
}

/// One reported test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimTest {
    /// Ancestor titles and the test title joined with ` › `.
    pub title: String,
    pub passed: bool,
}

/// Tests sharing the same top-level title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub name: String,
    pub tests: Vec<ClaimTest>,
}

impl Claim {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.tests.iter().filter(|t| t.passed).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.tests.len()
    }
}

/// Grouped results of a test run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustSummary {
    /// Claims in the order their first test appeared.
    pub claims: Vec<Claim>,
    pub passed: usize,
    pub total: usize,
}

impl TrustSummary {
    /// Parses the JSON emitted by the extension's test runner.
    ///
    /// # Errors
    /// Returns an error if `json` does not have the `testResults[].assertionResults[]` shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let run: TestRun = serde_json::from_str(json).context("Unexpected test results shape")?;
        Ok(Self::from_run(run))
    }

    fn from_run(run: TestRun) -> Self {
        let mut summary = Self::default();
        let mut index: FxHashMap<String, usize> = FxHashMap::default();

        for assertion in run.test_results.into_iter().flat_map(|file| file.assertion_results) {
            let group = assertion.ancestor_titles.first().map_or(UNGROUPED, String::as_str);
            let slot = match index.get(group) {
                Some(&slot) => slot,
                None => {
                    let slot = summary.claims.len();
                    index.insert(group.to_owned(), slot);
                    summary.claims.push(Claim { name: group.to_owned(), tests: Vec::new() });
                    slot
                },
            };

            let passed = assertion.status == PASSED;
            let mut path = assertion.ancestor_titles;
            path.push(assertion.title);

            summary.total += 1;
            summary.passed += usize::from(passed);
            let title = path.join(TITLE_SEPARATOR);
            summary.claims[slot].tests.push(ClaimTest { title, passed });
        }

        summary
    }

    /// Assertions whose status is anything but `passed`.
    #[must_use]
    pub const fn failing(&self) -> usize {
        self.total - self.passed
    }

    /// Renders the markdown document.
    #[must_use]
    pub fn render(&self, generated_at: DateTime<Utc>) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "# Raft Trust Report\n");
        let _ = writeln!(out, "_Generated: {}_\n", generated_at.format("%Y-%m-%d %H:%M:%S UTC"));

        let _ = writeln!(out, "## Summary\n");
        let _ = writeln!(out, "| Claim | Passed | Total | Status |");
        let _ = writeln!(out, "|---|---|---|---|");
        for claim in &self.claims {
            let status = if claim.passed() == claim.total() { "✅" } else { "❌" };
            let _ = writeln!(
                out,
                "| {} | {} | {} | {status} |",
                escape_cell(&claim.name),
                claim.passed(),
                claim.total()
            );
        }
        let overall = match self.failing() {
            0 => "✅ ALL PASSING".to_owned(),
            n => format!("❌ {n} FAILING"),
        };
        let _ = writeln!(
            out,
            "| **Overall** | **{}** | **{}** | **{overall}** |\n",
            self.passed, self.total
        );

        let _ = writeln!(out, "## Claims");
        for claim in &self.claims {
            let _ = writeln!(out, "\n### {}\n", claim.name);
            for test in &claim.tests {
                let mark = if test.passed { "✅" } else { "❌" };
                let _ = writeln!(out, "- {mark} {}", test.title);
            }
        }

        out
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// `cargo xtask trust-report`
///
/// The report is written even when tests failed; the caller decides the exit status.
///
/// # Errors
/// Returns an error, without writing anything, if `input` cannot be read or parsed, and if
/// the report cannot be written.
pub fn generate_report(input: &Path, output: &Path) -> Result<TrustSummary> {
    let run: TestRun = read_json(input)?;
    let summary = TrustSummary::from_run(run);

    fs::write(output, summary.render(Utc::now()))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("📝 Wrote {} ({}/{} passing)", output.display(), summary.passed, summary.total);
    Ok(summary)
}
