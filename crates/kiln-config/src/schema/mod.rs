//! Configuration schema types for Kiln.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod font;
mod logging;
mod renderer;
mod window;

pub use font::*;
pub use logging::*;
pub use renderer::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Kiln.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KilnConfig {
    pub window: WindowConfig,
    pub renderer: RendererConfig,
    pub font: FontConfig,
    pub logging: LoggingConfig,
}
