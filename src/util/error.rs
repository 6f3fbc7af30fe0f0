// SlotGrid - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Only configuration-level failures live here: per-line anomalies in raw
// timetable text are parse warnings, reported in the tokenizer's
// ParseReport, and never abort a parse.

use std::fmt;

/// Top-level error type for all SlotGrid operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum SlotGridError {
    /// Week profile parsing or validation failed.
    Profile(ProfileError),

    /// Schedule merging failed.
    Merge(MergeError),
}

impl fmt::Display for SlotGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile(e) => write!(f, "Profile error: {e}"),
            Self::Merge(e) => write!(f, "Merge error: {e}"),
        }
    }
}

impl std::error::Error for SlotGridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Profile(e) => Some(e),
            Self::Merge(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Profile errors
// ---------------------------------------------------------------------------

/// Errors related to week profile parsing and validation.
#[derive(Debug)]
pub enum ProfileError {
    /// TOML content could not be parsed.
    TomlParse { source: toml::de::Error },

    /// The profile declares no days at all.
    EmptyDays,

    /// A day name is not one of the seven known day headings.
    UnknownDay { name: String },

    /// The same day appears more than once in the day list.
    DuplicateDay { name: String },

    /// slots_per_day is zero or exceeds the hard upper bound.
    SlotsOutOfRange { value: usize, max: usize },

    /// A marker string is empty, which would match every line.
    EmptyMarker { field: &'static str },

    /// One category marker contains the other, making classification
    /// of a leading token ambiguous.
    MarkerClash { elective: String, seminar: String },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { source } => {
                write!(f, "Failed to parse profile TOML: {source}")
            }
            Self::EmptyDays => {
                write!(f, "Profile declares no days; at least one is required")
            }
            Self::UnknownDay { name } => {
                write!(f, "Unknown day name '{name}' in profile day list")
            }
            Self::DuplicateDay { name } => {
                write!(f, "Day '{name}' appears more than once in profile day list")
            }
            Self::SlotsOutOfRange { value, max } => {
                write!(f, "slots_per_day = {value} is out of range (1..={max})")
            }
            Self::EmptyMarker { field } => {
                write!(f, "Profile marker '{field}' must not be empty")
            }
            Self::MarkerClash { elective, seminar } => write!(
                f,
                "Category markers '{elective}' and '{seminar}' overlap; \
                 one must not contain the other"
            ),
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source } => Some(source),
            _ => None,
        }
    }
}

impl From<ProfileError> for SlotGridError {
    fn from(e: ProfileError) -> Self {
        Self::Profile(e)
    }
}

// ---------------------------------------------------------------------------
// Merge errors
// ---------------------------------------------------------------------------

/// Errors related to schedule merging.
#[derive(Debug)]
pub enum MergeError {
    /// No source schedules were supplied.  A combined timetable cannot
    /// exist without at least one raw document behind it.
    NoSources,
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSources => {
                write!(f, "No source schedules supplied; at least one is required")
            }
        }
    }
}

impl std::error::Error for MergeError {}

impl From<MergeError> for SlotGridError {
    fn from(e: MergeError) -> Self {
        Self::Merge(e)
    }
}

/// Convenience type alias for SlotGrid results.
pub type Result<T> = std::result::Result<T, SlotGridError>;
