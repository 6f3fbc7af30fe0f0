// SlotGrid - core/catalog.rs
//
// Derived, read-only catalog views over a combined schedule: the value
// sets a consumer offers as filter options.  Pure and idempotent; cheap
// enough to recompute whenever the schedule changes.

use crate::core::model::{Category, Schedule, SessionKind};
use std::collections::BTreeSet;

/// Sorted unique tutorial and lab group numbers across core sessions.
///
/// Lecture-tagged sessions never contribute (a lecture is shared by all
/// groups), and neither do group tokens without a tutorial or lab role.
pub fn core_tutorial_numbers(schedule: &Schedule) -> Vec<String> {
    let mut numbers = BTreeSet::new();
    for entry in schedule.iter_entries() {
        if entry.category == Category::Core && entry.kind() != SessionKind::Lecture {
            if let Some(number) = entry.group_number() {
                numbers.insert(number.to_string());
            }
        }
    }
    numbers.into_iter().collect()
}

/// Sorted unique elective course base-names (session-kind tag stripped).
pub fn elective_base_names(schedule: &Schedule) -> Vec<String> {
    base_names(schedule, Category::Elective)
}

/// Sorted unique seminar course base-names (session-kind tag stripped).
pub fn seminar_base_names(schedule: &Schedule) -> Vec<String> {
    base_names(schedule, Category::Seminar)
}

/// Sorted unique tutorial and lab group numbers offered for one elective,
/// keyed by catalog base-name.  The cascading query behind a dependent
/// option list: an unknown base-name yields an empty list, not an error.
pub fn elective_tutorial_numbers(schedule: &Schedule, base_name: &str) -> Vec<String> {
    let mut numbers = BTreeSet::new();
    for entry in schedule.iter_entries() {
        if entry.category == Category::Elective && entry.base_name() == base_name {
            if let Some(number) = entry.group_number() {
                numbers.insert(number.to_string());
            }
        }
    }
    numbers.into_iter().collect()
}

fn base_names(schedule: &Schedule, category: Category) -> Vec<String> {
    let mut names = BTreeSet::new();
    for entry in schedule.iter_entries() {
        if entry.category == category {
            names.insert(entry.base_name());
        }
    }
    names.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_document;
    use crate::core::profile::WeekProfile;

    // One compact document exercising all three categories, parallel
    // groups, lectures, and a lab.
    const DOCUMENT: &str = "\
Saturday
10MET T010 C1.101 DMET 1001 Tut
10MET T005 C1.102 DMET 1001 Tut
**********
10MET P010 D4.102 CSEN 1002 Lab
**********
10MET L001 H10 DMET 1001 Lecture
**********
10MET-EL T002 C2.201 NETW 1009 Tut
10MET-EL T001 C2.202 NETW 1009 Tut
**********
10MET-EL L001 H14 NETW 1009 Lecture
Sunday
10MET-EL T001 C2.203 DMET 1042 Tut
**********
10MET-Seminar L001 C2.204 CSEN 1088 Seminar
**********
10MET-Seminar L001 C2.205 BINF 1001 Seminar
";

    fn schedule() -> Schedule {
        parse_document(DOCUMENT, &WeekProfile::default()).schedule
    }

    #[test]
    fn test_core_tutorial_numbers_sorted_unique() {
        // T010 and P010 collapse to one "010"; the lecture contributes
        // nothing.
        assert_eq!(core_tutorial_numbers(&schedule()), ["005", "010"]);
    }

    #[test]
    fn test_elective_base_names_sorted_unique() {
        assert_eq!(
            elective_base_names(&schedule()),
            ["DMET 1042", "NETW 1009"]
        );
    }

    #[test]
    fn test_seminar_base_names_sorted_unique() {
        assert_eq!(
            seminar_base_names(&schedule()),
            ["BINF 1001", "CSEN 1088"]
        );
    }

    #[test]
    fn test_elective_tutorials_keyed_by_base_name() {
        let schedule = schedule();
        // Sorted, and the elective's lecture section contributes nothing.
        assert_eq!(
            elective_tutorial_numbers(&schedule, "NETW 1009"),
            ["001", "002"]
        );
        assert_eq!(
            elective_tutorial_numbers(&schedule, "DMET 1042"),
            ["001"]
        );
    }

    #[test]
    fn test_unknown_base_name_yields_empty_list() {
        let schedule = schedule();
        assert!(elective_tutorial_numbers(&schedule, "CSEN 9999").is_empty());
        assert!(elective_tutorial_numbers(&schedule, "").is_empty());
    }

    #[test]
    fn test_catalogs_of_empty_schedule_are_empty() {
        let empty = parse_document("", &WeekProfile::default()).schedule;
        assert!(core_tutorial_numbers(&empty).is_empty());
        assert!(elective_base_names(&empty).is_empty());
        assert!(seminar_base_names(&empty).is_empty());
    }

    #[test]
    fn test_catalogs_are_idempotent() {
        let schedule = schedule();
        assert_eq!(
            core_tutorial_numbers(&schedule),
            core_tutorial_numbers(&schedule)
        );
        assert_eq!(elective_base_names(&schedule), elective_base_names(&schedule));
        assert_eq!(
            elective_tutorial_numbers(&schedule, "NETW 1009"),
            elective_tutorial_numbers(&schedule, "NETW 1009")
        );
    }
}
