//! Line-oriented terminal frontend for the interactive screens.
//!
//! Each screen is redrawn before reading the next command. Closing the input
//! (Ctrl-D, end of a pipe) exits whichever screen is open.

use super::render::{render_form, render_list_view, render_popup, use_color};
use console::Term;
use flightres::error::Result;
use flightres::model::Gender;
use flightres::screens::form::FormInput;
use flightres::screens::{FormEvent, FormView, Frontend, ListEvent, ListView};
use std::io::{BufRead, StdinLock, Write};
use tracing::warn;

pub const FORM_HELP: &str = "\
Commands:
  name <text>            set the passenger name
  passport <text>        set the passport number
  gender male|female     select the gender
  departure <date time>  set departure (YYYY-MM-DD HH:MM:SS)
  arrival <date time>    set arrival (YYYY-MM-DD HH:MM:SS)
  dest <city>            select a destination (no city clears it)
  reserve | save         submit the form
  list                   see reservations
  exit                   close this screen";

pub const LIST_HELP: &str = "\
Commands:
  select <n> | <n>       select row n
  delete                 delete the selected reservation
  edit                   edit the selected reservation
  exit                   close this screen";

const PROMPT: &str = "> ";

/// Outcome of parsing one typed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<E> {
    Event(E),
    Help,
    Empty,
    Invalid(String),
}

pub fn parse_form_command(line: &str) -> Parsed<FormEvent> {
    let (command, rest) = split_command(line);
    let input = |i: FormInput| Parsed::Event(FormEvent::Input(i));
    match command.as_str() {
        "" => Parsed::Empty,
        "name" => input(FormInput::Name(rest.to_string())),
        "passport" => input(FormInput::PassportNumber(rest.to_string())),
        "gender" => match rest.parse::<Gender>() {
            Ok(gender) => input(FormInput::Gender(gender)),
            Err(e) => Parsed::Invalid(e),
        },
        "departure" => input(FormInput::Departure(rest.to_string())),
        "arrival" => input(FormInput::Arrival(rest.to_string())),
        "dest" | "destination" if rest.is_empty() => input(FormInput::ClearDestination),
        "dest" | "destination" => input(FormInput::Destination(rest.to_string())),
        "reserve" | "save" => Parsed::Event(FormEvent::Submit),
        "list" => Parsed::Event(FormEvent::OpenList),
        "exit" | "quit" => Parsed::Event(FormEvent::Exit),
        "help" | "?" => Parsed::Help,
        other => Parsed::Invalid(format!("Unknown command: {} (type help)", other)),
    }
}

pub fn parse_list_command(line: &str) -> Parsed<ListEvent> {
    let (command, rest) = split_command(line);
    let select = |n: &str| match n.parse::<usize>() {
        Ok(number) => Parsed::Event(ListEvent::Select(number)),
        Err(_) => Parsed::Invalid(format!("Not a row number: {}", n)),
    };
    match command.as_str() {
        "" => Parsed::Empty,
        "select" => select(rest),
        "delete" | "rm" => Parsed::Event(ListEvent::Delete),
        "edit" => Parsed::Event(ListEvent::Edit),
        "exit" | "quit" | "back" => Parsed::Event(ListEvent::Exit),
        "help" | "?" => Parsed::Help,
        n if n.chars().all(|c| c.is_ascii_digit()) => select(n),
        other => Parsed::Invalid(format!("Unknown command: {} (type help)", other)),
    }
}

fn split_command(line: &str) -> (String, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command.to_lowercase(), rest.trim()),
        None => (line.to_lowercase(), ""),
    }
}

pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl TerminalFrontend<StdinLock<'static>, Term> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), Term::stdout(), use_color())
    }
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one trimmed line; `None` once the input is closed.
    fn read_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_event<E>(
        &mut self,
        closed: E,
        help: &str,
        parse: fn(&str) -> Parsed<E>,
    ) -> Result<E> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(closed);
            };
            match parse(&line) {
                Parsed::Event(event) => return Ok(event),
                Parsed::Help => writeln!(self.output, "{}", help)?,
                Parsed::Invalid(message) => writeln!(self.output, "{}", message)?,
                Parsed::Empty => {}
            }
        }
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn next_form_event(&mut self, view: &FormView<'_>) -> Result<FormEvent> {
        let screen = render_form(view, self.color);
        write!(self.output, "\n{}", screen)?;
        self.read_event(FormEvent::Exit, FORM_HELP, parse_form_command)
    }

    fn next_list_event(&mut self, view: &ListView<'_>) -> Result<ListEvent> {
        let screen = render_list_view(view, self.color);
        write!(self.output, "\n{}", screen)?;
        self.read_event(ListEvent::Exit, LIST_HELP, parse_list_command)
    }

    fn notify(&mut self, title: &str, message: &str) {
        let popup = render_popup(title, message, self.color);
        if let Err(e) = write!(self.output, "\n{}", popup) {
            warn!(error = %e, "could not show notification");
        }
    }
}
