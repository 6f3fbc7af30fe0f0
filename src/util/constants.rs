// SlotGrid - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// The raw-text grammar is declared once here and consumed everywhere.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SlotGrid";

/// Current crate version, read from Cargo.toml at build time.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Timetable grammar defaults
// =============================================================================

/// Slot positions allocated per day by the default week profile.
pub const DEFAULT_SLOTS_PER_DAY: usize = 5;

/// Hard upper bound on slots per day (prevents configuration mistakes).
pub const MAX_SLOTS_PER_DAY: usize = 12;

/// Minimum whitespace-separated tokens for a line to count as a session
/// record: course code, group, location, and at least one course-name word.
pub const ENTRY_MIN_TOKENS: usize = 4;

/// Exact line content marking an empty slot in the raw text.
pub const DEFAULT_FREE_MARKER: &str = "Free";

/// Leading-token substring flagging an elective session.
pub const DEFAULT_ELECTIVE_MARKER: &str = "-EL";

/// Leading-token substring flagging a seminar session.
pub const DEFAULT_SEMINAR_MARKER: &str = "-Seminar";

// =============================================================================
// Session-kind tags
// =============================================================================
// The trailing word of a course name doubles as the session-kind tag.
// Matching is exact and case-sensitive, mirroring the raw format.

/// Trailing course-name word tagging a lecture session.
pub const LECTURE_TAG: &str = "Lecture";

/// Trailing course-name word tagging a tutorial session.
pub const TUTORIAL_TAG: &str = "Tut";

/// Trailing course-name word tagging a lab session.
pub const LAB_TAG: &str = "Lab";

/// Lowercased lecture keyword for the filter's elective lecture bypass,
/// which matches anywhere in the course name, case-insensitively.
pub const LECTURE_KEYWORD: &str = "lecture";

// =============================================================================
// Group grammar
// =============================================================================
// A group token is a role letter followed by an identifier, e.g. "T009".

/// Role letter opening a tutorial group token.
pub const TUTORIAL_ROLE: char = 'T';

/// Role letter opening a lab (practical) group token.
pub const LAB_ROLE: char = 'P';

/// Role letter opening a lecture-section group token.
pub const LECTURE_SECTION_ROLE: char = 'L';

// =============================================================================
// Parsing limits
// =============================================================================

/// Maximum warnings collected per document before suppression.  A
/// pathological input cannot balloon the parse report without bound.
pub const MAX_PARSE_WARNINGS: usize = 1_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
