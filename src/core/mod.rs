//! # Core Application Logic
//!
//! The essay panel's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (form, phase)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │ generation │
//!     │  Adapter   │                          │  (tokio)   │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all panel state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`request`]: Word count / citation style selectors and the request snapshot
//! - [`template`]: The fixed essay template
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod request;
pub mod state;
pub mod template;
