//! # Pal Architecture
//!
//! Pal is a personal assistant for contacts and tagged notes. Like any good
//! CLI tool, it is a library that happens to have a command prompt on top:
//! the prompt is one client of the API, and nothing below the API knows it
//! exists.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Process flags, prompt loop, colored output               │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's AddressBook and NoteBook              │
//! │  - Dispatches to commands, saves on request                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business operations, returns CmdResult                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: model/, book.rs, notebook.rs                         │
//! │  - Validated field types, Record, Note                      │
//! │  - AddressBook (name-keyed), NoteBook (ordered)             │
//! └─────────────────────────────────────────────────────────────┘
//!
//!   store/: DataStore trait, FileStore (JSON), InMemoryStore
//! ```
//!
//! ## Session Model
//!
//! Everything is single-threaded and in memory. The store is read once when
//! [`api::PalApi::open`] runs and written once by [`api::PalApi::save`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`model`]: Field types, [`model::Record`], [`model::Note`], [`model::Entry`]
//! - [`book`]: The [`book::AddressBook`]
//! - [`notebook`]: The [`notebook::NoteBook`]
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod notebook;
pub mod store;
