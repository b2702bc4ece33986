//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Commands share a [`CommandContext`] holding the
//! fully resolved configuration, from which they build the API client and
//! the favorites and compare stores.

pub mod compare;
pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod display;
pub mod favorites;
pub mod forms;
pub mod newsletter;
pub mod properties;

pub use context::CommandContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
