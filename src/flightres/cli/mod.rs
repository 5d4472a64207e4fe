//! # CLI Behavior
//!
//! This is **one possible UI client** for flightres, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the
//! `flightres` library.
//!
//! ## Naked Execution (`flightres`)
//!
//! Running `flightres` with no arguments opens the interactive screens
//! (same as `flightres ui`): the reservation form first, the reservation list
//! from there, and the edit form from the list. Screens read one command per
//! line; `help` lists them.
//!
//! ## One-shot Commands
//!
//! `reserve` and `edit` run the same validation as the interactive form and
//! fail with the validation message (exit code 1) when it rejects the input.
//! Both, like the interactive screens, seed the destination table from
//! `config.json` when it is still empty.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and format output
//! - `render`: Output formatting (tree, forms, popups, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates
//! - `terminal`: The line-oriented [`flightres::screens::Frontend`]

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;
mod terminal;

pub use commands::run;
