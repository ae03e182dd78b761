//! teleroute CLI library.
//!
//! Rendering, terminal styling, and interactive prompting used by the
//! `teleroute` binary.

pub mod output;
pub mod prompt;
pub mod terminal;
