// SlotGrid - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary between the engine and its
// consumers: the day/slot grid, the session entry, and the small
// taxonomies (category, session kind, group role) derived from raw text.

use crate::util::constants;
use serde::{Deserialize, Serialize};

// =============================================================================
// Day
// =============================================================================

/// Day of the week, declared in timetable order (the academic week starts
/// on Saturday).
///
/// All seven days exist so a profile can opt into a seven-day week; the
/// default teaching week covers Saturday through Thursday and leaves
/// Friday free. See `WeekProfile` in core::profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// The default six-day teaching week, in display order.
    pub const TEACHING_WEEK: [Day; 6] = [
        Day::Saturday,
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
    ];

    /// Returns all seven days in week order.
    pub fn all() -> &'static [Day] {
        &[
            Day::Saturday,
            Day::Sunday,
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
            Day::Thursday,
            Day::Friday,
        ]
    }

    /// Human-readable label, identical to the raw-input day heading.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Parses a day heading. Matching is exact and case-sensitive,
    /// mirroring the raw format's headings.
    pub fn from_name(name: &str) -> Option<Day> {
        Day::all().iter().copied().find(|day| day.label() == name)
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Display label for a zero-based slot index ("Slot 1" for index 0).
pub fn slot_label(slot: usize) -> String {
    format!("Slot {}", slot + 1)
}

// =============================================================================
// Category
// =============================================================================

/// Session track, assigned at parse time from the course code's marker.
///
/// The three categories are exhaustive and mutually exclusive: every
/// entry is exactly one, and the filter engine judges each entry by the
/// rules of its own category alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Mandatory curriculum session (no marker on the course code).
    Core,
    /// Elective session (course code carries the elective marker).
    Elective,
    /// Seminar session (course code carries the seminar marker).
    Seminar,
}

impl Category {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Category] {
        &[Category::Core, Category::Elective, Category::Seminar]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Core => "Core",
            Category::Elective => "Elective",
            Category::Seminar => "Seminar",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Session kind
// =============================================================================

/// Kind of meeting, read from the trailing word of the course name.
///
/// The raw format has no dedicated kind field; "CSEN 1002 Lab" is a lab
/// purely because its name ends in the lab tag. Unrecognised trailing
/// words map to `Other` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    Lecture,
    Tutorial,
    Lab,
    Other,
}

impl SessionKind {
    /// Maps a trailing course-name word to a kind (exact, case-sensitive).
    pub fn from_tag(tag: &str) -> SessionKind {
        match tag {
            constants::LECTURE_TAG => SessionKind::Lecture,
            constants::TUTORIAL_TAG => SessionKind::Tutorial,
            constants::LAB_TAG => SessionKind::Lab,
            _ => SessionKind::Other,
        }
    }
}

// =============================================================================
// Group role
// =============================================================================

/// Role of a group token, read from its leading letter ("T009" is a
/// tutorial group, "P008" a lab group, "L001" a lecture section).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupRole {
    Tutorial,
    Lab,
    LectureSection,
}

impl GroupRole {
    /// Maps a leading group-token letter to a role.
    pub fn from_char(c: char) -> Option<GroupRole> {
        match c {
            constants::TUTORIAL_ROLE => Some(GroupRole::Tutorial),
            constants::LAB_ROLE => Some(GroupRole::Lab),
            constants::LECTURE_SECTION_ROLE => Some(GroupRole::LectureSection),
            _ => None,
        }
    }
}

// =============================================================================
// Session entry (normalised output of parsing)
// =============================================================================

/// A single scheduled meeting, parsed from one raw session record line.
///
/// This is the core data unit that flows through merging, catalog
/// extraction, and filtering. Field order mirrors the raw line:
/// `<course code> <group> <location> <course name...>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionEntry {
    /// Leading token of the raw line, category marker included
    /// (e.g. "10MET", "10MET-EL", "10MET-Seminar").
    pub course_code: String,

    /// Group token distinguishing parallel sessions (e.g. "T009", "L001").
    pub group: String,

    /// Free-text room or building code (e.g. "C7.217").
    pub location: String,

    /// Course title; the trailing word doubles as the session-kind tag
    /// (e.g. "CSEN 1002 Lab").
    pub course_name: String,

    /// Category assigned by the classifier at parse time.
    pub category: Category,
}

impl SessionEntry {
    /// Session kind from the course name's trailing word.
    pub fn kind(&self) -> SessionKind {
        match self.course_name.split_whitespace().last() {
            Some(tag) => SessionKind::from_tag(tag),
            None => SessionKind::Other,
        }
    }

    /// Role of the group token, if its leading letter is a known role.
    pub fn group_role(&self) -> Option<GroupRole> {
        self.group.chars().next().and_then(GroupRole::from_char)
    }

    /// Group number with the role letter stripped ("T009" yields "009").
    ///
    /// Defined only for tutorial and lab groups. Lecture sections and
    /// unrecognised tokens have no number for catalog or selection
    /// purposes.
    pub fn group_number(&self) -> Option<&str> {
        match self.group_role() {
            Some(GroupRole::Tutorial) | Some(GroupRole::Lab) => self.group.get(1..),
            _ => None,
        }
    }

    /// Course name with the trailing session-kind tag removed. This is
    /// the catalog and selection key for electives and seminars, shared
    /// by all of a course's parallel sessions ("CSEN 1002 Lecture" and
    /// "CSEN 1002 Lab" both yield "CSEN 1002").
    pub fn base_name(&self) -> String {
        let tokens: Vec<&str> = self.course_name.split_whitespace().collect();
        match tokens.split_last() {
            Some((_, rest)) => rest.join(" "),
            None => String::new(),
        }
    }

    /// Display rendering used by the filtered grid: group, course name,
    /// then location, space-separated.
    pub fn display_text(&self) -> String {
        format!("{} {} {}", self.group, self.course_name, self.location)
    }
}

// =============================================================================
// Schedule grid
// =============================================================================

/// The (day, slot) timetable grid, generic over the cell payload so the
/// parsed grid (`Schedule<SessionEntry>`) and the filtered display grid
/// (`Schedule<String>`) share one shape-preserving type.
///
/// Shape invariant: every day in `week` holds exactly `slots_per_day`
/// slot cells from the moment the grid is built, even while all of them
/// are empty. Entries within a cell keep raw-line append order, which is
/// display order and nothing more.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule<T = SessionEntry> {
    week: Vec<Day>,
    slots_per_day: usize,
    /// cells[day][slot], indices following `week` order.
    cells: Vec<Vec<Vec<T>>>,
}

impl<T> Schedule<T> {
    /// Creates an empty grid covering `week` with `slots_per_day` cells
    /// per day.
    pub(crate) fn with_shape(week: &[Day], slots_per_day: usize) -> Self {
        let cells = week
            .iter()
            .map(|_| (0..slots_per_day).map(|_| Vec::new()).collect())
            .collect();
        Self {
            week: week.to_vec(),
            slots_per_day,
            cells,
        }
    }

    /// Ordered days covered by this grid.
    pub fn week(&self) -> &[Day] {
        &self.week
    }

    /// Number of slot positions allocated per day.
    pub fn slots_per_day(&self) -> usize {
        self.slots_per_day
    }

    /// Entries in one (day, slot) cell. Empty when the day is outside
    /// this grid's week or the slot index is out of range; cell lookups
    /// never fail.
    pub fn entries(&self, day: Day, slot: usize) -> &[T] {
        match self.day_index(day) {
            Some(d) => self.cells[d].get(slot).map(Vec::as_slice).unwrap_or(&[]),
            None => &[],
        }
    }

    /// Iterates all cells in week order, then slot order.
    pub fn iter_slots(&self) -> impl Iterator<Item = (Day, usize, &[T])> + '_ {
        self.week.iter().zip(&self.cells).flat_map(|(day, row)| {
            row.iter()
                .enumerate()
                .map(move |(slot, cell)| (*day, slot, cell.as_slice()))
        })
    }

    /// Iterates every entry in week, slot, then append order.
    pub fn iter_entries(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter().flatten().flatten()
    }

    /// Total number of entries across all cells.
    pub fn entry_count(&self) -> usize {
        self.cells.iter().flatten().map(Vec::len).sum()
    }

    /// True when no cell holds any entry.
    pub fn is_empty(&self) -> bool {
        self.iter_entries().next().is_none()
    }

    /// Appends `value` to the (day, slot) cell. Returns false when the
    /// target is outside the grid's shape; callers decide how to report
    /// that.
    pub(crate) fn push(&mut self, day: Day, slot: usize, value: T) -> bool {
        match self.day_index(day) {
            Some(d) if slot < self.slots_per_day => {
                self.cells[d][slot].push(value);
                true
            }
            _ => false,
        }
    }

    fn day_index(&self, day: Day) -> Option<usize> {
        self.week.iter().position(|d| *d == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(course_code: &str, group: &str, name: &str, category: Category) -> SessionEntry {
        SessionEntry {
            course_code: course_code.to_string(),
            group: group.to_string(),
            location: "C1.101".to_string(),
            course_name: name.to_string(),
            category,
        }
    }

    #[test]
    fn day_from_name_is_exact_and_case_sensitive() {
        assert_eq!(Day::from_name("Monday"), Some(Day::Monday));
        assert_eq!(Day::from_name("monday"), None);
        assert_eq!(Day::from_name("Mon"), None);
        assert_eq!(Day::from_name(""), None);
    }

    #[test]
    fn teaching_week_excludes_friday() {
        assert_eq!(Day::TEACHING_WEEK.len(), 6);
        assert!(!Day::TEACHING_WEEK.contains(&Day::Friday));
        assert_eq!(Day::all().len(), 7);
    }

    #[test]
    fn slot_labels_are_one_based() {
        assert_eq!(slot_label(0), "Slot 1");
        assert_eq!(slot_label(4), "Slot 5");
    }

    #[test]
    fn kind_reads_trailing_tag_case_sensitively() {
        let lab = make_entry("10MET", "P008", "CSEN 1002 Lab", Category::Core);
        assert_eq!(lab.kind(), SessionKind::Lab);

        let tut = make_entry("10MET", "T009", "NETW 1009 Tut", Category::Elective);
        assert_eq!(tut.kind(), SessionKind::Tutorial);

        let lecture = make_entry("10MET", "L001", "DMET 1001 Lecture", Category::Core);
        assert_eq!(lecture.kind(), SessionKind::Lecture);

        // Lowercase "lecture" is not the tag; kind detection is exact.
        let odd = make_entry("10MET", "L001", "DMET 1001 lecture", Category::Core);
        assert_eq!(odd.kind(), SessionKind::Other);
    }

    #[test]
    fn group_number_only_for_tutorial_and_lab_roles() {
        let tut = make_entry("10MET", "T009", "NETW 1009 Tut", Category::Core);
        assert_eq!(tut.group_number(), Some("009"));

        let lab = make_entry("10MET", "P012", "CSEN 1002 Lab", Category::Core);
        assert_eq!(lab.group_number(), Some("012"));

        let lecture = make_entry("10MET", "L1", "DMET 1001 Lecture", Category::Core);
        assert_eq!(lecture.group_number(), None);

        let unknown = make_entry("10MET", "X7", "DMET 1001 Tut", Category::Core);
        assert_eq!(unknown.group_number(), None);
    }

    #[test]
    fn base_name_strips_only_the_trailing_word() {
        let entry = make_entry("10MET-EL", "T001", "CSEN 1076 IoT Tut", Category::Elective);
        assert_eq!(entry.base_name(), "CSEN 1076 IoT");

        let single = make_entry("10MET", "T001", "Thesis", Category::Core);
        assert_eq!(single.base_name(), "");
    }

    #[test]
    fn display_text_reorders_fields() {
        let entry = make_entry("10MET", "T009", "NETW 1009 Tut", Category::Elective);
        assert_eq!(entry.display_text(), "T009 NETW 1009 Tut C1.101");
    }

    #[test]
    fn schedule_shape_is_full_from_construction() {
        let grid: Schedule<SessionEntry> = Schedule::with_shape(&Day::TEACHING_WEEK, 5);
        assert_eq!(grid.week().len(), 6);
        assert_eq!(grid.slots_per_day(), 5);
        assert!(grid.is_empty());
        assert_eq!(grid.entry_count(), 0);
        assert_eq!(grid.iter_slots().count(), 30);
        assert!(grid.entries(Day::Monday, 4).is_empty());
    }

    #[test]
    fn out_of_shape_lookups_and_pushes_are_rejected_quietly() {
        let mut grid: Schedule<String> = Schedule::with_shape(&Day::TEACHING_WEEK, 5);
        assert!(grid.push(Day::Monday, 0, "kept".to_string()));
        assert!(!grid.push(Day::Friday, 0, "dropped".to_string()));
        assert!(!grid.push(Day::Monday, 5, "dropped".to_string()));

        assert_eq!(grid.entry_count(), 1);
        assert!(grid.entries(Day::Friday, 0).is_empty());
        assert!(grid.entries(Day::Monday, 99).is_empty());
    }

    #[test]
    fn entries_keep_append_order_within_a_cell() {
        let mut grid: Schedule<String> = Schedule::with_shape(&Day::TEACHING_WEEK, 5);
        grid.push(Day::Saturday, 0, "first".to_string());
        grid.push(Day::Saturday, 0, "second".to_string());
        assert_eq!(grid.entries(Day::Saturday, 0), ["first", "second"]);
    }
}
