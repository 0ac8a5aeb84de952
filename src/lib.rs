//! portico - personal project launcher
//!
//! portico keeps a small list of projects (an alias mapped to one or more
//! directories plus a preferred terminal and editor) and opens them fast:
//! a terminal window already cd'd into the project, optionally running a
//! configured command, or the editor with every project root loaded.
//!
//! The interesting part is the terminal integration: there is no uniform
//! way to open a macOS terminal at a directory, so each known terminal
//! application gets its own launch strategy (see [`terminal`]).

pub mod apps;
pub mod config;
pub mod domain;
pub mod editor;
pub mod git;
pub mod store;
pub mod terminal;

pub use domain::*;
