//! `.prettierrc` generation

use super::{to_json, PRETTIER_FILE};
use crate::error::ScaffoldResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrettierConfig {
    semi: bool,
    trailing_comma: &'static str,
    single_quote: bool,
    print_width: u16,
    use_tabs: bool,
    tab_width: u8,
    bracket_spacing: bool,
    bracket_same_line: bool,
}

/// Generate `.prettierrc`; the same for every archetype
pub fn prettier_config() -> ScaffoldResult<String> {
    let config = PrettierConfig {
        semi: true,
        trailing_comma: "none",
        single_quote: false,
        print_width: 80,
        use_tabs: false,
        tab_width: 2,
        bracket_spacing: true,
        bracket_same_line: false,
    };
    to_json(PRETTIER_FILE, &config)
}
