//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as stand-alone
//! files next to this module and included here as string constants.
//!
//! Layout math (column widths, padding) happens in Rust, where it can be
//! Unicode-aware. Templates only choose styles and arrange lines, and each
//! line break they produce is written out explicitly.
//!
//! `list` includes `tree`, so both read the reservation rows from the same
//! `tree` value.

pub const TREE_TEMPLATE: &str = include_str!("templates/tree.tmp");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const FORM_TEMPLATE: &str = include_str!("templates/form.tmp");
pub const POPUP_TEMPLATE: &str = include_str!("templates/popup.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
