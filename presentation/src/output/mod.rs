//! Output formatting for consultation results

pub mod console;
