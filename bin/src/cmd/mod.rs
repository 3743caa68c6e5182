//! CLI subcommand modules.
//!
//! This module contains the implementations for all justo CLI subcommands.

pub(crate) mod record;
pub(crate) mod search;
pub(crate) mod value;
