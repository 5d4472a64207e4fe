//! # Flightres Architecture
//!
//! Flightres manages flight reservations kept in a local table pair
//! (reservations and destinations). The library carries all behavior; the
//! `flightres` binary is one terminal client on top of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, drives screens from the terminal       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Screens (screens/)                                         │
//! │  - Create / List / Edit state machines                      │
//! │  - Form validation, notifications through a Frontend trait  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + Commands (commands/*.rs)                    │
//! │  - Projection of records into display rows                  │
//! │  - Mutations, with refresh pushed to a DisplaySurface       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing below the CLI writes to stdout/stderr or exits the process.
//! Screens talk to the user only through [`screens::Frontend`], so the same
//! screens run under the terminal client and under scripted tests.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and the [`api::DisplaySurface`] refresh contract
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core record types (`Reservation`, `Destination`, `Gender`)
//! - [`projection`]: Display rows and the reservation tree
//! - [`screens`]: Presentation state machines and validation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod projection;
pub mod screens;
pub mod store;
