//! # Screens (presentation logic)
//!
//! The three screens of the application as UI-agnostic state machines:
//!
//! - [`create::CreateScreen`]: the primary form, always starting empty
//! - [`list::ListScreen`]: the browsable reservation tree, opened modally
//!   from the create screen
//! - [`edit::EditScreen`]: the form pre-populated from a list row, opened
//!   modally from the list screen
//!
//! Each screen owns one blocking event loop. Events come from a
//! [`Frontend`], which is also where notifications go; the terminal client
//! implements it in the binary and tests implement it with a script. A child
//! screen runs to completion inside its parent's loop, then control returns
//! to the parent.
//!
//! Create and edit compose the same [`form::FormFields`] and run the same
//! [`validation::validate`] predicate before submitting.

use crate::config::TemporalRules;
use crate::error::Result;
use crate::model::ReservationId;
use crate::projection::TreeData;
use chrono::NaiveDateTime;
use form::{FormFields, FormInput};

pub mod create;
pub mod edit;
pub mod form;
pub mod list;
pub mod validation;

pub type Clock = fn() -> NaiveDateTime;

#[derive(Debug, Clone, Copy)]
pub struct ScreenSettings {
    pub rules: TemporalRules,
    pub clock: Clock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Input(FormInput),
    Submit,
    OpenList,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Select(usize),
    Delete,
    Edit,
    Exit,
}

/// What a form screen currently shows.
pub struct FormView<'a> {
    pub title: &'a str,
    pub id: Option<ReservationId>,
    pub fields: &'a FormFields,
    pub actions: &'a [&'a str],
}

/// What the list screen currently shows.
pub struct ListView<'a> {
    pub title: &'a str,
    pub columns: &'a [&'static str],
    pub tree: &'a TreeData,
    pub selected: Option<usize>,
    pub actions_enabled: bool,
}

/// Source of user events and sink of notifications for the screens.
pub trait Frontend {
    fn next_form_event(&mut self, view: &FormView<'_>) -> Result<FormEvent>;

    fn next_list_event(&mut self, view: &ListView<'_>) -> Result<ListEvent>;

    /// Shows a modal notification (the popup of a windowed UI).
    fn notify(&mut self, title: &str, message: &str);
}

pub(crate) fn apply_input<F: Frontend>(fields: &mut FormFields, input: FormInput, ui: &mut F) {
    let label = match &input {
        FormInput::Destination(label) => Some(label.clone()),
        _ => None,
    };
    if !fields.apply(input) {
        ui.notify(
            "Error",
            &format!("Unknown destination: {}", label.unwrap_or_default()),
        );
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod testing {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug, Clone)]
    pub enum Scripted {
        Form(FormEvent),
        List(ListEvent),
    }

    /// A frontend that replays a fixed script and records what it was shown.
    /// Once the script runs out every screen receives `Exit`.
    #[derive(Default)]
    pub struct ScriptedFrontend {
        script: VecDeque<Scripted>,
        pub notifications: Vec<(String, String)>,
        pub form_titles: Vec<String>,
        pub list_sizes: Vec<usize>,
    }

    impl ScriptedFrontend {
        pub fn new(script: Vec<Scripted>) -> Self {
            Self {
                script: script.into(),
                ..Self::default()
            }
        }

        pub fn titles(&self) -> Vec<&str> {
            self.notifications.iter().map(|(t, _)| t.as_str()).collect()
        }
    }

    impl Frontend for ScriptedFrontend {
        fn next_form_event(&mut self, view: &FormView<'_>) -> Result<FormEvent> {
            self.form_titles.push(view.title.to_string());
            match self.script.pop_front() {
                Some(Scripted::Form(event)) => Ok(event),
                Some(Scripted::List(event)) => {
                    panic!("script gave list event {:?} to a form screen", event)
                }
                None => Ok(FormEvent::Exit),
            }
        }

        fn next_list_event(&mut self, view: &ListView<'_>) -> Result<ListEvent> {
            self.list_sizes.push(view.tree.len());
            match self.script.pop_front() {
                Some(Scripted::List(event)) => Ok(event),
                Some(Scripted::Form(event)) => {
                    panic!("script gave form event {:?} to the list screen", event)
                }
                None => Ok(ListEvent::Exit),
            }
        }

        fn notify(&mut self, title: &str, message: &str) {
            self.notifications
                .push((title.to_string(), message.to_string()));
        }
    }
}
