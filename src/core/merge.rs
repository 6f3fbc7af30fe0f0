// SlotGrid - core/merge.rs
//
// Combines per-source schedules into one grid.
// Core layer: pure computation, no I/O.

use crate::core::model::{Day, Schedule};
use crate::util::error::MergeError;

/// Merge source schedules into one combined grid.
///
/// For every (day, slot) the combined cell is the concatenation of each
/// source's cell, in source order and then raw-line order.  Nothing is
/// deduplicated: two sources listing the same session produce two
/// entries.
///
/// Sources of differing shapes are unioned: the result covers every day
/// any source covers, in canonical week order, with the largest
/// slots-per-day among the sources.
///
/// The only failure is an empty source slice, rejected up front so a
/// misconfigured caller hears about it immediately instead of receiving
/// a grid with no shape.
pub fn merge_schedules<T: Clone>(sources: &[Schedule<T>]) -> Result<Schedule<T>, MergeError> {
    if sources.is_empty() {
        return Err(MergeError::NoSources);
    }

    let week: Vec<Day> = Day::all()
        .iter()
        .copied()
        .filter(|day| sources.iter().any(|s| s.week().contains(day)))
        .collect();
    let slots_per_day = sources
        .iter()
        .map(Schedule::slots_per_day)
        .max()
        .unwrap_or(0);

    let mut combined = Schedule::with_shape(&week, slots_per_day);
    for source in sources {
        for (day, slot, entries) in source.iter_slots() {
            for entry in entries {
                combined.push(day, slot, entry.clone());
            }
        }
    }

    tracing::debug!(
        sources = sources.len(),
        entries = combined.entry_count(),
        "Schedules merged"
    );
    Ok(combined)
}
