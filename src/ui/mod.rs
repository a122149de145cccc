//! Terminal output for the cfgmigrate binary

pub mod diff;
pub mod json;
pub mod terminal;
pub mod theme;
pub mod views;
