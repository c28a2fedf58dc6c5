//! Unified configuration system.
//!
//! Produces one immutable [`SpecConfig`] by merging up to four tiers
//! field-by-field:
//! 1. **User** - `~/.respec/respec.{yaml,yml,json}` (shared defaults)
//! 2. **Project** - `respec.{yaml,yml,json}` in the document directory
//! 3. **Profile** - `respec.<name>.{yaml,yml,json}` overlay, via `--profile`
//! 4. **Environment** - publish-time overrides
//!
//! ## Merge Strategy
//! Objects merge field-by-field; arrays and scalars are replaced by the
//! higher tier. Tier files may be partial; only the merged document must
//! carry `specStatus` and `shortName`.
//!
//! ## Environment Variables
//! - `RESPEC_CONFIG_PATH` - Explicit config file (bypasses tiers)
//! - `RESPEC_SPEC_STATUS` - Maturity tag override
//! - `RESPEC_SHORT_NAME` - Short name override
//! - `RESPEC_PUBLISH_DATE` - Publication date override (ISO 8601)
//! - `RESPEC_USER_DIR` - User config dir (default: `~/.respec`)
//! - `RESPEC_PROJECT_DIR` - Project config dir (default: `.`)

mod loader;
mod merge;
mod types;

pub use loader::{CONFIG_EXTENSIONS, CONFIG_STEM, ConfigLoader, ConfigPaths, ConfigTier};
pub use merge::{deep_merge, deep_merge_all};
pub use types::*;
