// SlotGrid - core/mod.rs
//
// Core timetable engine layer.
// Dependencies: standard library plus pure-computation crates.
// Must NOT perform I/O; raw documents and profile content arrive as
// strings from the consumer.

pub mod catalog;
pub mod filter;
pub mod merge;
pub mod model;
pub mod parser;
pub mod profile;
pub mod session;
