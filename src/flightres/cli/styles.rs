use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Styles picked in Rust and handed to templates as data. Templates name
/// the remaining ones (`title`, `header`, `label`, `dim`) directly.
pub mod names {
    pub const ROW: &str = "row";
    pub const SELECTED: &str = "selected";
    pub const ACTION: &str = "action";
    pub const DISABLED: &str = "disabled";
    pub const POPUP_ERROR: &str = "popup_error";
    pub const POPUP_OK: &str = "popup_ok";
}

pub static FLIGHTRES_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        ("title", Style::new().bold().cyan()),
        ("header", Style::new().bold().underlined()),
        ("label", Style::new().bold()),
        ("dim", Style::new().color256(246).italic()),
        (names::ROW, Style::new()),
        (names::SELECTED, Style::new().reverse()),
        (names::ACTION, Style::new().green()),
        (names::DISABLED, Style::new().color256(242)),
        (names::POPUP_ERROR, Style::new().bold().red()),
        (names::POPUP_OK, Style::new().bold().green()),
    ])
});
