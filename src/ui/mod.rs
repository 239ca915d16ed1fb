//! Terminal presentation for the arbor CLI

pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
pub mod widgets;
