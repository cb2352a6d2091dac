//! Reusable view components.

pub mod radial;
