// SlotGrid - core/session.rs
//
// Session facade over the full pipeline: parse every source document,
// merge, and precompute the catalog option sets, behind one immutable
// value.  This is everything a consumer needs before its first widget or
// output line exists.
// Core layer: raw documents arrive as strings, never as paths.

use crate::core::catalog;
use crate::core::filter::{filter_schedule, Selection};
use crate::core::merge::merge_schedules;
use crate::core::model::{Category, Schedule};
use crate::core::parser::{parse_document, ParseWarning};
use crate::core::profile::WeekProfile;
use crate::util::error::{MergeError, Result};
use std::collections::HashMap;

// =============================================================================
// Build reporting
// =============================================================================

/// Per-source parse diagnostics, kept so a consumer can surface them.
#[derive(Debug, Clone)]
pub struct SourceReport {
    /// Zero-based index of the source document in the build input.
    pub document: usize,

    /// Lines examined in that document.
    pub lines_processed: u64,

    /// Warnings the tokenizer collected for it.
    pub warnings: Vec<ParseWarning>,
}

/// Summary statistics for a completed session build.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    /// Source documents parsed and merged.
    pub documents: usize,

    /// Entries in the combined grid.
    pub total_entries: usize,

    /// Entries by category.
    pub entries_by_category: HashMap<Category, usize>,

    /// Warnings across all documents.
    pub total_warnings: usize,
}

// =============================================================================
// Session
// =============================================================================

/// A fully built timetable session: the combined schedule plus the
/// precomputed option sets consumers offer as filter choices.
///
/// Immutable once built.  Filtering never modifies the session; every
/// `filter` call derives a fresh display grid from the same combined
/// schedule, so selections can be reapplied in any order.
#[derive(Debug, Clone)]
pub struct Session {
    profile: WeekProfile,
    schedule: Schedule,
    core_tutorials: Vec<String>,
    elective_courses: Vec<String>,
    seminar_courses: Vec<String>,
    sources: Vec<SourceReport>,
    summary: BuildSummary,
}

impl Session {
    /// Build a session from raw source documents.
    ///
    /// Parses each document with `profile`, merges the results in input
    /// order, and precomputes the global catalogs.  Fails only when
    /// `documents` is empty, before any parsing happens; everything else
    /// is best-effort and lands in the per-source warning reports.
    pub fn build(documents: &[&str], profile: WeekProfile) -> Result<Session> {
        if documents.is_empty() {
            return Err(MergeError::NoSources.into());
        }

        let mut schedules = Vec::with_capacity(documents.len());
        let mut sources = Vec::with_capacity(documents.len());
        for (index, content) in documents.iter().enumerate() {
            let report = parse_document(content, &profile);
            sources.push(SourceReport {
                document: index,
                lines_processed: report.lines_processed,
                warnings: report.warnings,
            });
            schedules.push(report.schedule);
        }

        let schedule = merge_schedules(&schedules)?;

        let core_tutorials = catalog::core_tutorial_numbers(&schedule);
        let elective_courses = catalog::elective_base_names(&schedule);
        let seminar_courses = catalog::seminar_base_names(&schedule);

        let mut entries_by_category = HashMap::new();
        for entry in schedule.iter_entries() {
            *entries_by_category.entry(entry.category).or_insert(0) += 1;
        }
        let summary = BuildSummary {
            documents: documents.len(),
            total_entries: schedule.entry_count(),
            entries_by_category,
            total_warnings: sources.iter().map(|s| s.warnings.len()).sum(),
        };

        tracing::info!(
            documents = summary.documents,
            entries = summary.total_entries,
            warnings = summary.total_warnings,
            "Timetable session built"
        );
        if summary.total_warnings > 0 {
            tracing::warn!(
                count = summary.total_warnings,
                "Some lines were skipped during parsing"
            );
        }

        Ok(Session {
            profile,
            schedule,
            core_tutorials,
            elective_courses,
            seminar_courses,
            sources,
            summary,
        })
    }

    /// The combined schedule across all source documents.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// The profile the session was built with.
    pub fn profile(&self) -> &WeekProfile {
        &self.profile
    }

    /// Core tutorial and lab numbers, the options for the core filter.
    pub fn core_tutorials(&self) -> &[String] {
        &self.core_tutorials
    }

    /// Elective base-names, the options for the elective picks.
    pub fn elective_courses(&self) -> &[String] {
        &self.elective_courses
    }

    /// Seminar base-names, the options for the seminar choice.
    pub fn seminar_courses(&self) -> &[String] {
        &self.seminar_courses
    }

    /// Group numbers offered for one elective, recomputed on demand.
    /// This is the dependent-option query a consumer runs when its
    /// elective choice changes.
    pub fn elective_tutorials(&self, base_name: &str) -> Vec<String> {
        catalog::elective_tutorial_numbers(&self.schedule, base_name)
    }

    /// Apply a selection, deriving the display grid.
    pub fn filter(&self, selection: &Selection) -> Schedule<String> {
        filter_schedule(&self.schedule, selection)
    }

    /// Per-source parse diagnostics, in build input order.
    pub fn source_reports(&self) -> &[SourceReport] {
        &self.sources
    }

    /// Build statistics.
    pub fn summary(&self) -> &BuildSummary {
        &self.summary
    }
}
