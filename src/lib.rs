// SlotGrid - lib.rs
//
// Library entry point.  SlotGrid parses semi-structured weekly timetable
// text into a day-by-slot grid, merges the grids of several source
// documents, and answers the catalog and filter queries a presentation
// layer builds its option lists and display views from.
//
// The engine performs no I/O: raw documents and profile content arrive
// as strings, and rendering belongs entirely to the consumer.

pub mod core;
pub mod util;
