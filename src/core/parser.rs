// SlotGrid - core/parser.rs
//
// Line tokenizer turning one raw timetable document into a Schedule.
// Core layer: accepts string content, never touches the filesystem.
//
// The raw format is line-oriented: a day heading opens a section, runs of
// asterisks advance the slot cursor, the free marker holds an empty slot
// open, and everything else with enough tokens is a session record.
// Parsing is best-effort by contract; lines that fit no rule are skipped
// and recorded as warnings, never raised as errors.

use crate::core::model::{Day, Schedule, SessionEntry};
use crate::core::profile::WeekProfile;
use crate::util::constants;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

// =============================================================================
// Parse report
// =============================================================================

/// Result of parsing a single raw document.
#[derive(Debug)]
pub struct ParseReport {
    /// The populated grid.  Always carries the profile's full day-by-slot
    /// shape, however little of the document parsed.
    pub schedule: Schedule,

    /// Skipped-line warnings in document order (capped at
    /// MAX_PARSE_WARNINGS).
    pub warnings: Vec<ParseWarning>,

    /// Total lines examined, blank lines included.
    pub lines_processed: u64,
}

/// A line the tokenizer skipped and why.  Collected for diagnostics;
/// a malformed line never aborts the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// Looked like a session record but had too few tokens.
    MalformedEntry { line_number: u64, token_count: usize },

    /// Session record outside any active day section: before the first
    /// day heading, or under a heading the profile does not activate.
    OrphanContent { line_number: u64 },

    /// Recognised day heading outside the profile's active week.  The
    /// whole section is skipped until the next active heading.
    InactiveDay { line_number: u64, day: Day },

    /// Session record past the day's last allocated slot.
    SlotOverflow { line_number: u64, day: Day },
}

impl ParseWarning {
    /// Line the warning refers to (1-based).
    pub fn line_number(&self) -> u64 {
        match self {
            Self::MalformedEntry { line_number, .. }
            | Self::OrphanContent { line_number }
            | Self::InactiveDay { line_number, .. }
            | Self::SlotOverflow { line_number, .. } => *line_number,
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEntry {
                line_number,
                token_count,
            } => write!(
                f,
                "Line {line_number}: session record needs at least {} fields, found {token_count}",
                constants::ENTRY_MIN_TOKENS
            ),
            Self::OrphanContent { line_number } => {
                write!(f, "Line {line_number}: session record outside any active day section")
            }
            Self::InactiveDay { line_number, day } => {
                write!(f, "Line {line_number}: day '{day}' is not in the active week; section skipped")
            }
            Self::SlotOverflow { line_number, day } => {
                write!(f, "Line {line_number}: session record past the last slot of {day}")
            }
        }
    }
}

// =============================================================================
// Tokenizer
// =============================================================================

/// Day-section state while scanning a document.
#[derive(Debug, Clone, Copy)]
enum DayCursor {
    /// No day heading seen yet.
    None,
    /// Session records attach to this day at the current slot.
    Active(Day),
    /// Under a heading outside the active week; records are dropped and
    /// slot delimiters are inert until the next active heading.
    Suspended,
}

/// Parse one raw timetable document into a `Schedule`.
///
/// Scans line by line with a day cursor and a zero-based slot cursor:
/// - A day heading activates that day and resets the slot cursor, even
///   when the same day repeats.
/// - A slot delimiter (a full line of asterisks) advances the slot
///   cursor under an active day.
/// - The profile's free marker and blank lines are skipped silently.
/// - Anything else splits on whitespace into course code, group,
///   location, and the remaining tokens rejoined as the course name.
///
/// # Arguments
/// * `content` - Raw document text (the caller owns all I/O)
/// * `profile` - Grammar: active week, slot count, markers
pub fn parse_document(content: &str, profile: &WeekProfile) -> ParseReport {
    let mut schedule = Schedule::with_shape(&profile.days, profile.slots_per_day);
    let mut warnings: Vec<ParseWarning> = Vec::new();
    let mut lines_processed: u64 = 0;

    let mut cursor = DayCursor::None;
    let mut slot: usize = 0;

    for (line_idx, raw_line) in content.lines().enumerate() {
        lines_processed += 1;
        let line_number = (line_idx as u64) + 1;
        let line = raw_line.trim();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        // Day heading: activates (or suspends) a section and resets the
        // slot cursor either way.
        if let Some(day) = Day::from_name(line) {
            if profile.days.contains(&day) {
                cursor = DayCursor::Active(day);
            } else {
                push_warning(&mut warnings, ParseWarning::InactiveDay { line_number, day });
                cursor = DayCursor::Suspended;
            }
            slot = 0;
            continue;
        }

        // Slot delimiter: only an active section has a cursor to advance.
        if slot_delimiter_regex().is_match(line) {
            if matches!(cursor, DayCursor::Active(_)) {
                slot += 1;
            }
            continue;
        }

        // Free-slot placeholder (exact match after trimming).
        if line == profile.free_marker {
            continue;
        }

        // Session record.
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < constants::ENTRY_MIN_TOKENS {
            push_warning(
                &mut warnings,
                ParseWarning::MalformedEntry {
                    line_number,
                    token_count: tokens.len(),
                },
            );
            continue;
        }

        let day = match cursor {
            DayCursor::Active(day) => day,
            DayCursor::None | DayCursor::Suspended => {
                push_warning(&mut warnings, ParseWarning::OrphanContent { line_number });
                continue;
            }
        };

        if slot >= profile.slots_per_day {
            push_warning(&mut warnings, ParseWarning::SlotOverflow { line_number, day });
            continue;
        }

        let entry = SessionEntry {
            category: profile.classify(tokens[0]),
            course_code: tokens[0].to_string(),
            group: tokens[1].to_string(),
            location: tokens[2].to_string(),
            course_name: tokens[3..].join(" "),
        };
        schedule.push(day, slot, entry);
    }

    tracing::debug!(
        entries = schedule.entry_count(),
        warnings = warnings.len(),
        lines = lines_processed,
        "Document parsed"
    );

    ParseReport {
        schedule,
        warnings,
        lines_processed,
    }
}

/// Append a warning unless the per-document cap is reached.
fn push_warning(warnings: &mut Vec<ParseWarning>, warning: ParseWarning) {
    if warnings.len() < constants::MAX_PARSE_WARNINGS {
        warnings.push(warning);
    }
}

/// A slot delimiter is a line consisting solely of a run of asterisks.
fn slot_delimiter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\*{2,}$").expect("slot delimiter pattern is valid"))
}
