// SlotGrid - core/filter.rs
//
// Multi-criterion filter engine reducing a combined schedule to the
// sessions a student's selection keeps visible.
// Core layer: pure logic, no I/O or UI dependencies.
//
// Unlike a conjunctive filter, criteria here do not AND-combine across
// the whole grid: each entry is judged exactly once, by the rules of its
// own category.

use crate::core::model::{Category, Schedule, SessionEntry, SessionKind};
use crate::util::constants;

// =============================================================================
// Selection state
// =============================================================================

/// Tutorial or lab group choice attached to an elective pick.
///
/// An unset choice and an explicit "all groups" choice behave
/// identically, so a single variant models both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TutorialChoice {
    /// Every group of the picked course is visible.
    #[default]
    All,
    /// Only the group with this extracted number is visible.  Lecture
    /// rows bypass the restriction; see `filter_schedule`.
    Number(String),
}

/// One picked elective: a catalog base-name plus a group choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectivePick {
    /// Base-name as produced by the elective catalog.
    pub base_name: String,

    /// Group restriction within the picked course.
    pub tutorial: TutorialChoice,
}

impl ElectivePick {
    /// Pick an elective with every group visible.
    pub fn new(base_name: &str) -> Self {
        Self {
            base_name: base_name.to_string(),
            tutorial: TutorialChoice::All,
        }
    }

    /// Restrict the pick to one tutorial or lab group number.
    pub fn with_tutorial(mut self, number: &str) -> Self {
        self.tutorial = TutorialChoice::Number(number.to_string());
        self
    }
}

/// Complete selection state for one filter application.
///
/// The default selection shows every core session and hides every
/// elective and seminar: core is opt-out, electives and seminars are
/// opt-in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Core tutorial or lab restriction, matched as a substring of the
    /// group token ("009" matches both "T009" and "P009").  None shows
    /// all core sessions.
    pub core_tutorial: Option<String>,

    /// First elective pick.  Both pick fields are equivalent; an
    /// elective entry is visible when either matches it.
    pub elective_1: Option<ElectivePick>,

    /// Second elective pick.
    pub elective_2: Option<ElectivePick>,

    /// Seminar base-name, matched exactly.  None hides all seminars.
    pub seminar: Option<String>,
}

impl Selection {
    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.core_tutorial.is_none()
            && self.elective_1.is_none()
            && self.elective_2.is_none()
            && self.seminar.is_none()
    }
}

// =============================================================================
// Filter application
// =============================================================================

/// Apply `selection` to `schedule`, producing a same-shaped grid of
/// display strings (group, course name, location), cell order preserved.
///
/// Category rules:
/// - Core lectures are always visible.  Other core sessions are visible
///   unless a core tutorial restriction is set and misses their group
///   token.
/// - Elective sessions are visible when either pick names their
///   base-name, subject to the pick's group choice.  Lecture rows bypass
///   the group choice, so picking one tutorial still shows the course's
///   lecture.
/// - Seminar sessions are visible only on an exact base-name match.
///
/// A selection referencing values absent from the catalogs matches
/// nothing; it is never an error.
pub fn filter_schedule(schedule: &Schedule, selection: &Selection) -> Schedule<String> {
    let mut filtered = Schedule::with_shape(schedule.week(), schedule.slots_per_day());
    for (day, slot, entries) in schedule.iter_slots() {
        for entry in entries {
            if matches_selection(entry, selection) {
                filtered.push(day, slot, entry.display_text());
            }
        }
    }

    tracing::debug!(
        kept = filtered.entry_count(),
        total = schedule.entry_count(),
        "Filter applied"
    );
    filtered
}

/// Judge one entry by the branch its category selects.
fn matches_selection(entry: &SessionEntry, selection: &Selection) -> bool {
    match entry.category {
        Category::Core => {
            if entry.kind() == SessionKind::Lecture {
                return true;
            }
            match &selection.core_tutorial {
                Some(filter) => entry.group.contains(filter.as_str()),
                None => true,
            }
        }
        Category::Elective => {
            matches_elective(entry, selection.elective_1.as_ref())
                || matches_elective(entry, selection.elective_2.as_ref())
        }
        Category::Seminar => match &selection.seminar {
            Some(name) => entry.base_name() == *name,
            None => false,
        },
    }
}

/// Judge one elective entry against one pick.
fn matches_elective(entry: &SessionEntry, pick: Option<&ElectivePick>) -> bool {
    let pick = match pick {
        Some(pick) => pick,
        None => return false,
    };
    if entry.base_name() != pick.base_name {
        return false;
    }
    match &pick.tutorial {
        TutorialChoice::All => true,
        TutorialChoice::Number(number) => {
            entry.group_number() == Some(number.as_str()) || is_lecture_row(entry)
        }
    }
}

/// Lecture detection for the elective group bypass.  Deliberately looser
/// than `SessionEntry::kind()`: any case-insensitive occurrence of the
/// lecture keyword anywhere in the course name counts.
fn is_lecture_row(entry: &SessionEntry) -> bool {
    entry
        .course_name
        .to_lowercase()
        .contains(constants::LECTURE_KEYWORD)
}
