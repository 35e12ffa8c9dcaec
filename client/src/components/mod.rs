//! Reusable UI component modules.

pub mod nav;
