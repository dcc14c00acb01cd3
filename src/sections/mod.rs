//! Password evaluation sections
//!
//! Each section scores one group of rubric criteria.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

/// Points a section awards. Every criterion inside a section contributes
/// at most one point.
pub type SectionScore = u8;
