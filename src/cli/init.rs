//! Init subcommand for the respec-config CLI
//!
//! Writes a commented starter configuration file for a new specification
//! document.

use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the init subcommand
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Directory to create the configuration file in
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Path of the file this invocation would create.
    pub fn target_path(&self) -> PathBuf {
        self.dir.join("respec.yaml")
    }
}

/// Starter configuration content.
pub fn starter_config() -> &'static str {
    r#"# Configuration consumed by the specification renderer.
# Only specStatus and shortName are required; everything else is optional
# and falls back to the renderer's defaults when absent.
specStatus: unofficial
shortName: my-spec
editors:
  - name: Your Name
    company: Your Organization
# group: webrtc
# wgPublicList: public-webrtc
# github: https://github.com/example/my-spec
# edDraftURI: https://example.github.io/my-spec/
# xref: [html, dom, webidl]
# lint:
#   no-unused-vars: true
"#
}

/// Check whether a configuration file already exists in a directory.
pub fn existing_config(dir: &Path) -> Option<PathBuf> {
    crate::config::CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", crate::config::CONFIG_STEM, ext)))
        .find(|path| path.exists())
}
