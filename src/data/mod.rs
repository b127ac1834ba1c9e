//! Static data tables
//!
//! Command-name sets shared by normalization and matching.

pub mod symbols;

pub use symbols::{is_known_command, KNOWN_COMMAND_NAMES, UPPER_GREEK_CMDS};
