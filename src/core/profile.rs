// SlotGrid - core/profile.rs
//
// Week profile parsing, validation, and classification.
// Core layer: accepts TOML strings, never touches the filesystem.
// Callers read profile files themselves and feed the content here.
//
// The profile is the one place the raw-text grammar is configured: which
// day headings open a section, how many slots each day allocates, and
// which markers drive free-slot skipping and category classification.
// Every other component receives a compiled profile instead of repeating
// those decisions.

use crate::core::model::{Category, Day};
use crate::util::constants;
use crate::util::error::ProfileError;
use serde::Deserialize;

// =============================================================================
// Runtime profile
// =============================================================================

/// Validated runtime description of the raw-text grammar.
///
/// The default profile matches the source institution's format: a six-day
/// teaching week with Friday free, five slots per day, "Free" placeholder
/// lines, and `-EL` / `-Seminar` markers on the course code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekProfile {
    /// Day headings recognised as section starts, in display order.
    pub days: Vec<Day>,

    /// Slot positions allocated per day.
    pub slots_per_day: usize,

    /// Exact line content marking an empty slot.
    pub free_marker: String,

    /// Course-code substring flagging an elective entry.
    pub elective_marker: String,

    /// Course-code substring flagging a seminar entry.
    pub seminar_marker: String,
}

impl Default for WeekProfile {
    fn default() -> Self {
        Self {
            days: Day::TEACHING_WEEK.to_vec(),
            slots_per_day: constants::DEFAULT_SLOTS_PER_DAY,
            free_marker: constants::DEFAULT_FREE_MARKER.to_string(),
            elective_marker: constants::DEFAULT_ELECTIVE_MARKER.to_string(),
            seminar_marker: constants::DEFAULT_SEMINAR_MARKER.to_string(),
        }
    }
}

impl WeekProfile {
    /// Profile covering all seven days.  For inputs that genuinely
    /// schedule sessions on Friday; the default profile treats a Friday
    /// section as inactive and skips it with a warning.
    pub fn seven_day() -> Self {
        Self {
            days: Day::all().to_vec(),
            ..Self::default()
        }
    }

    /// Compile a profile straight from TOML content.
    pub fn from_toml(toml_content: &str) -> Result<WeekProfile, ProfileError> {
        validate_and_compile(parse_profile_toml(toml_content)?)
    }

    /// Classifies a session record by its course code (the raw line's
    /// leading token).  The elective marker is checked first, so a code
    /// somehow carrying both markers classifies as elective.
    pub fn classify(&self, course_code: &str) -> Category {
        if course_code.contains(&self.elective_marker) {
            Category::Elective
        } else if course_code.contains(&self.seminar_marker) {
            Category::Seminar
        } else {
            Category::Core
        }
    }
}

// =============================================================================
// TOML deserialization structures (raw input)
// =============================================================================

/// Raw TOML profile definition as deserialized from profile content.
/// This is validated and compiled into a `WeekProfile` for runtime use.
///
/// Both sections and every field are optional; omissions fall back to the
/// defaults, so empty content compiles to `WeekProfile::default()`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileDefinition {
    pub week: WeekDef,
    pub markers: MarkerDef,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WeekDef {
    pub days: Vec<String>,
    pub slots_per_day: usize,
}

impl Default for WeekDef {
    fn default() -> Self {
        Self {
            days: Day::TEACHING_WEEK
                .iter()
                .map(|day| day.label().to_string())
                .collect(),
            slots_per_day: constants::DEFAULT_SLOTS_PER_DAY,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkerDef {
    pub free: String,
    pub elective: String,
    pub seminar: String,
}

impl Default for MarkerDef {
    fn default() -> Self {
        Self {
            free: constants::DEFAULT_FREE_MARKER.to_string(),
            elective: constants::DEFAULT_ELECTIVE_MARKER.to_string(),
            seminar: constants::DEFAULT_SEMINAR_MARKER.to_string(),
        }
    }
}

// =============================================================================
// Profile validation and compilation
// =============================================================================

/// Parse a TOML string into a `ProfileDefinition`.
pub fn parse_profile_toml(toml_content: &str) -> Result<ProfileDefinition, ProfileError> {
    toml::from_str(toml_content).map_err(|e| ProfileError::TomlParse { source: e })
}

/// Validate a `ProfileDefinition` and compile it into a runtime `WeekProfile`.
///
/// Validates:
/// - The day list is non-empty, every name is a known heading, no repeats
/// - slots_per_day is within 1..=MAX_SLOTS_PER_DAY
/// - Markers are non-empty and the category markers do not contain each
///   other (which would make classification order-dependent)
pub fn validate_and_compile(def: ProfileDefinition) -> Result<WeekProfile, ProfileError> {
    if def.week.days.is_empty() {
        return Err(ProfileError::EmptyDays);
    }

    let mut days = Vec::with_capacity(def.week.days.len());
    for name in &def.week.days {
        let day = Day::from_name(name).ok_or_else(|| ProfileError::UnknownDay {
            name: name.clone(),
        })?;
        if days.contains(&day) {
            return Err(ProfileError::DuplicateDay { name: name.clone() });
        }
        days.push(day);
    }

    if def.week.slots_per_day == 0 || def.week.slots_per_day > constants::MAX_SLOTS_PER_DAY {
        return Err(ProfileError::SlotsOutOfRange {
            value: def.week.slots_per_day,
            max: constants::MAX_SLOTS_PER_DAY,
        });
    }

    let markers = [
        ("markers.free", &def.markers.free),
        ("markers.elective", &def.markers.elective),
        ("markers.seminar", &def.markers.seminar),
    ];
    for (field, value) in markers {
        if value.is_empty() {
            return Err(ProfileError::EmptyMarker { field });
        }
    }

    // Containment either way covers the equal-markers case too.
    if def.markers.elective.contains(&def.markers.seminar)
        || def.markers.seminar.contains(&def.markers.elective)
    {
        return Err(ProfileError::MarkerClash {
            elective: def.markers.elective,
            seminar: def.markers.seminar,
        });
    }

    Ok(WeekProfile {
        days,
        slots_per_day: def.week.slots_per_day,
        free_marker: def.markers.free,
        elective_marker: def.markers.elective,
        seminar_marker: def.markers.seminar,
    })
}
