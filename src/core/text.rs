use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CaseMode {
    #[default]
    Upper,
    Lower,
}

/// Case-transform a display name. `None` falls back to uppercase.
pub fn render(text: &str, mode: Option<CaseMode>) -> String {
    match mode.unwrap_or_default() {
        CaseMode::Upper => text.to_uppercase(),
        CaseMode::Lower => text.to_lowercase(),
    }
}
