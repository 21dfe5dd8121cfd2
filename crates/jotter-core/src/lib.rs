//! Core library for jotter, a directory-backed plain-text note manager.
//!
//! The primary entry point is [`NoteStore`], a collection of notes stored
//! one file per note inside a single directory. Names are validated as
//! [`NoteName`] before they ever touch the filesystem, and all behavior is
//! driven by an explicit [`Config`] rather than process-wide state, so a
//! store can be pointed at any directory, including a temporary one in
//! tests.
//!
//! This crate performs no prompting and writes nothing to stdout; rendering
//! and interaction belong to the CLI crate.

pub mod config;
pub mod name;
pub mod store;

pub use config::{Config, ConfigError, ConfigResult, EditorConfig, StoreConfig};
pub use name::{NameError, NameResult, NoteName};
pub use store::{NoteStore, StoreError, StoreResult};
