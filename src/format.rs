//! Output formatting for the renderer-facing configuration object.
//!
//! The renderer accepts its configuration either as a global JavaScript
//! variable (`var respecConfig = {...};` inside a `<script class="remove">`
//! element) or as plain JSON. Struct fields serialize in declaration order
//! and maps are sorted, so output is deterministic.

use crate::config::SpecConfig;
use anyhow::Result;

/// Output format for the emitted configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain JSON object.
    #[default]
    Json,
    /// JavaScript global variable declaration, as the renderer reads it.
    Script,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "script" | "js" => Some(OutputFormat::Script),
            _ => None,
        }
    }
}

/// Serialize the configuration as pretty-printed JSON.
pub fn to_json_pretty(config: &SpecConfig) -> Result<String> {
    let mut out = serde_json::to_string_pretty(config)?;
    out.push('\n');
    Ok(out)
}

/// Serialize the configuration as the global the renderer reads.
pub fn to_script(config: &SpecConfig) -> Result<String> {
    let json = serde_json::to_string_pretty(config)?;
    Ok(format!("var respecConfig = {};\n", json))
}

/// Wrap the script form in a `<script>` element ready to paste into the
/// document head. The `remove` class tells the renderer to strip the
/// element from the published output.
pub fn to_script_tag(config: &SpecConfig) -> Result<String> {
    let script = to_script(config)?;
    Ok(format!(
        "<script class=\"remove\">\n{}</script>\n",
        script
    ))
}

/// Emit the configuration in the requested format.
pub fn emit(config: &SpecConfig, format: OutputFormat, tag: bool) -> Result<String> {
    match (format, tag) {
        (OutputFormat::Json, _) => to_json_pretty(config),
        (OutputFormat::Script, false) => to_script(config),
        (OutputFormat::Script, true) => to_script_tag(config),
    }
}
