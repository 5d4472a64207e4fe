//! # Rendering Module
//!
//! Styled terminal output for the CLI and the interactive screens.
//! Templates come from [`super::templates`] and are rendered with minijinja;
//! the `style` filter maps a style name onto [`FLIGHTRES_THEME`].
//!
//! ## Design Philosophy
//!
//! Layout calculations (column widths, padding) stay in Rust because they
//! need Unicode-aware measuring. Templates handle presentation:
//! - Style selection from names computed here (selected row, disabled action)
//! - Line arrangement and empty-state messages
//!
//! Colors are auto-detected from stdout; every `*_with_color` variant takes
//! an explicit switch so tests can render plain text.

use super::styles::{names, FLIGHTRES_THEME};
use super::templates::{
    FORM_TEMPLATE, LIST_TEMPLATE, POPUP_TEMPLATE, TEXT_LIST_TEMPLATE, TREE_TEMPLATE,
};
use colored::Colorize;
use console::Term;
use flightres::api::{CmdMessage, MessageLevel};
use flightres::projection::TreeData;
use flightres::screens::{FormView, ListView};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const COLUMN_GAP: &str = "  ";
pub const SELECTED_MARKER: &str = ">";
const EMPTY_TREE_MESSAGE: &str = "No reservations found.";

const FIELD_LABELS: [&str; 6] = [
    "Name",
    "Passport Number",
    "Gender",
    "Departure Date",
    "Arrival Date",
    "Destination",
];
const ID_LABEL: &str = "Reservation Id";
const DESTINATIONS_LABEL: &str = "Choices";

/// One pre-formatted line of the reservation tree.
#[derive(Serialize)]
struct TreeLine {
    line: String,
    style: &'static str,
}

#[derive(Serialize)]
struct TreeTemplateData {
    header: String,
    rows: Vec<TreeLine>,
    empty: bool,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct TreeOnly {
    tree: TreeTemplateData,
}

#[derive(Serialize)]
struct ActionData {
    label: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ListData {
    title: String,
    tree: TreeTemplateData,
    actions: Vec<ActionData>,
}

#[derive(Serialize)]
struct FieldLine {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct FormData {
    title: String,
    id: Option<u64>,
    id_label: String,
    fields: Vec<FieldLine>,
    destinations_label: String,
    destinations: String,
    actions: Vec<String>,
}

#[derive(Serialize)]
struct PopupData {
    title: String,
    title_style: &'static str,
    message: String,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

/// Whether stdout can show colors.
pub fn use_color() -> bool {
    Term::stdout().features().colors_supported()
}

fn environment(use_color: bool) -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match FLIGHTRES_THEME.get(name.as_str()) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            _ => text,
        }
    });
    env.add_template("tree", TREE_TEMPLATE)?;
    env.add_template("list", LIST_TEMPLATE)?;
    env.add_template("form", FORM_TEMPLATE)?;
    env.add_template("popup", POPUP_TEMPLATE)?;
    env.add_template("text_list", TEXT_LIST_TEMPLATE)?;
    Ok(env)
}

fn render<T: Serialize>(name: &str, data: &T, use_color: bool) -> Result<String, minijinja::Error> {
    let env = environment(use_color)?;
    let template = env.get_template(name)?;
    template.render(data)
}

/// Renders the reservation tree (without selection) for `flightres list`.
pub fn render_tree(columns: &[&str], tree: &TreeData) -> String {
    render_tree_with_color(columns, tree, use_color())
}

pub fn render_tree_with_color(columns: &[&str], tree: &TreeData, use_color: bool) -> String {
    let data = TreeOnly {
        tree: tree_data(columns, tree, None),
    };
    render("tree", &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the list screen: title, tree with the selected row marked, and
/// the available commands.
pub fn render_list_view(view: &ListView<'_>, use_color: bool) -> String {
    let action = |label: &str, enabled: bool| ActionData {
        label: label.to_string(),
        style: if enabled {
            names::ACTION
        } else {
            names::DISABLED
        },
    };
    let data = ListData {
        title: view.title.to_string(),
        tree: tree_data(view.columns, view.tree, view.selected),
        actions: vec![
            action("select <n>", !view.tree.is_empty()),
            action("delete", view.actions_enabled),
            action("edit", view.actions_enabled),
            action("exit", true),
        ],
    };
    render("list", &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders a form screen with every input and the actions it offers.
pub fn render_form(view: &FormView<'_>, use_color: bool) -> String {
    let values = view.fields.values();
    let label_width = FIELD_LABELS
        .iter()
        .chain([ID_LABEL, DESTINATIONS_LABEL].iter())
        .map(|l| l.width())
        .max()
        .unwrap_or(0);
    let pad = |label: &str| pad_to_width(label, label_width);

    let field_values = [
        values.name.clone(),
        values.passport_number.clone(),
        values.gender.map(|g| g.to_string()).unwrap_or_default(),
        values.departure.clone(),
        values.arrival.clone(),
        values.destination.clone().unwrap_or_default(),
    ];

    let data = FormData {
        title: view.title.to_string(),
        id: view.id,
        id_label: pad(ID_LABEL),
        fields: FIELD_LABELS
            .iter()
            .zip(field_values)
            .map(|(label, value)| FieldLine {
                label: pad(label),
                value,
            })
            .collect(),
        destinations_label: pad(DESTINATIONS_LABEL),
        destinations: view.fields.destinations().join(", "),
        actions: view
            .actions
            .iter()
            .map(|a| match action_command(a) {
                Some(cmd) => format!("{} ({})", a, cmd),
                None => a.to_string(),
            })
            .collect(),
    };
    render("form", &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// The command typed in the terminal to trigger a screen action.
pub fn action_command(action: &str) -> Option<&'static str> {
    match action {
        "Reserve Ticket" => Some("reserve"),
        "Save Reservation" => Some("save"),
        "See Reservations" => Some("list"),
        "Exit" => Some("exit"),
        _ => None,
    }
}

/// Renders a notification: its title, then the message as given.
pub fn render_popup(title: &str, message: &str, use_color: bool) -> String {
    let data = PopupData {
        title: title.to_string(),
        title_style: if title == "Error" {
            names::POPUP_ERROR
        } else {
            names::POPUP_OK
        },
        message: message.to_string(),
    };
    render("popup", &data, use_color).unwrap_or_else(|_| format!("{}\n{}\n", title, message))
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_with_color(lines, empty_message, use_color())
}

pub fn render_text_list_with_color(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };
    render("text_list", &data, use_color).unwrap_or_else(|_| format!("{}\n", empty_message))
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn tree_data(columns: &[&str], tree: &TreeData, selected: Option<usize>) -> TreeTemplateData {
    let cells: Vec<Vec<String>> = tree.rows().iter().map(|r| r.row.values()).collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.width()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    // "> 12. " is marker, space, number, dot, space
    let number_width = tree.len().to_string().len();
    let prefix_width = SELECTED_MARKER.width() + number_width + 3;

    let header_cells: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let header = format!(
        "{}{}",
        " ".repeat(prefix_width),
        join_padded(&header_cells, &widths)
    );

    let rows = tree
        .rows()
        .iter()
        .zip(&cells)
        .map(|(row, cells)| {
            let is_selected = selected == Some(row.number);
            let marker = if is_selected {
                SELECTED_MARKER.to_string()
            } else {
                " ".repeat(SELECTED_MARKER.width())
            };
            TreeLine {
                line: format!(
                    "{} {:>width$}. {}",
                    marker,
                    row.number,
                    join_padded(cells, &widths),
                    width = number_width
                ),
                style: if is_selected {
                    names::SELECTED
                } else {
                    names::ROW
                },
            }
        })
        .collect();

    TreeTemplateData {
        header,
        rows,
        empty: tree.is_empty(),
        empty_message: EMPTY_TREE_MESSAGE,
    }
}

/// Joins cells with [`COLUMN_GAP`], padding all but the last to its
/// column width.
fn join_padded(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        if i + 1 < cells.len() {
            line.push_str(&pad_to_width(cell, widths.get(i).copied().unwrap_or(0)));
        } else {
            line.push_str(cell);
        }
    }
    line
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightres::model::{parse_datetime, Gender, Reservation};
    use flightres::projection::project;
    use flightres::screens::form::{FormFields, FormInput};

    fn reservation(id: u64, name: &str, destination: &str) -> Reservation {
        Reservation {
            id,
            name: name.to_string(),
            gender: Gender::Female,
            passport_number: "X1".to_string(),
            destination: destination.to_string(),
            departure: parse_datetime("2022-10-20 21:07:54").unwrap(),
            arrival: parse_datetime("2022-10-21 21:07:57").unwrap(),
        }
    }

    fn sample_tree() -> TreeData {
        project(vec![
            reservation(2, "Zoë Ünal", "Tokyo"),
            reservation(1, "Al", "Paris"),
        ])
    }

    const COLUMNS: [&str; 3] = ["Id", "Name", "Gender"];

    #[test]
    fn empty_tree_shows_message() {
        let output = render_tree_with_color(&COLUMNS, &TreeData::default(), false);
        assert_eq!(output, "No reservations found.\n");
    }

    #[test]
    fn tree_rows_are_numbered_newest_first() {
        let output = render_tree_with_color(&COLUMNS, &sample_tree(), false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("  1. 2"));
        assert!(lines[1].contains("Zoë Ünal"));
        assert!(lines[2].starts_with("  2. 1"));
    }

    #[test]
    fn columns_align_by_display_width() {
        let output = render_tree_with_color(&COLUMNS, &sample_tree(), false);
        let lines: Vec<&str> = output.lines().collect();
        let gender_col = |line: &str| {
            let idx = line.find("Female").unwrap();
            line[..idx].width()
        };
        assert_eq!(gender_col(lines[1]), gender_col(lines[2]));
        assert_eq!(
            lines[0].find("Gender").map(|i| lines[0][..i].width()),
            Some(gender_col(lines[1]))
        );
    }

    #[test]
    fn list_view_marks_selection_and_actions() {
        let tree = sample_tree();
        let view = ListView {
            title: "Reservations",
            columns: &COLUMNS,
            tree: &tree,
            selected: Some(2),
            actions_enabled: true,
        };
        let output = render_list_view(&view, false);
        assert!(output.starts_with("Reservations\n"));
        assert!(output.contains("> 2. 1"));
        assert!(output.ends_with("select <n>  delete  edit  exit\n"));
    }

    #[test]
    fn form_shows_values_and_placeholders() {
        let mut fields = FormFields::build(vec!["Paris".into(), "Tokyo".into()]);
        fields.apply(FormInput::Name("Robert Warren".into()));
        fields.apply(FormInput::Destination("tokyo".into()));
        let actions = ["Reserve Ticket", "See Reservations", "Exit"];
        let view = FormView {
            title: "Flight Reservations System",
            id: None,
            fields: &fields,
            actions: &actions,
        };
        let output = render_form(&view, false);
        assert!(output.starts_with("Flight Reservations System\n"));
        assert!(!output.contains(ID_LABEL));
        assert!(output.contains("Robert Warren"));
        assert!(output.contains(&format!("{}  -", pad_to_width("Gender", 15))));
        assert!(output.contains("Paris, Tokyo"));
        assert!(output.contains("Reserve Ticket (reserve)  See Reservations (list)  Exit (exit)"));
    }

    #[test]
    fn edit_form_shows_id() {
        let fields = FormFields::build(vec![]);
        let actions = ["Save Reservation", "Exit"];
        let view = FormView {
            title: "Edit Reservation",
            id: Some(7),
            fields: &fields,
            actions: &actions,
        };
        let output = render_form(&view, false);
        assert!(output.contains(&format!("{}  7", pad_to_width(ID_LABEL, 15))));
        assert!(output.contains("Save Reservation (save)"));
    }

    #[test]
    fn popup_keeps_message_verbatim() {
        let output = render_popup("Error", "line one\nline two", false);
        assert_eq!(output, "Error\nline one\nline two\n");
    }

    #[test]
    fn text_list_falls_back_to_empty_message() {
        assert_eq!(render_text_list_with_color(&[], "Nothing.", false), "Nothing.\n");
        assert_eq!(
            render_text_list_with_color(&["a".into(), "b".into()], "Nothing.", false),
            "a\nb\n"
        );
    }
}
