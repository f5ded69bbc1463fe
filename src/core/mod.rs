//! # Core Application Logic
//!
//! This module contains VideoStream's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (read-only)  │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Video records, categories and home-feed sections
//! - [`search`]: Substring search over titles and descriptions
//! - [`watch_state`]: Per-video liked/saved flags for the session
//! - [`saved`]: The saved-videos list
//! - [`navigation`]: Active tab and the detail-screen stack
//! - [`profile`]: Profile card and settings toggles
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod profile;
pub mod saved;
pub mod search;
pub mod state;
pub mod watch_state;
