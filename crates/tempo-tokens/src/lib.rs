//! Design tokens for the Tempo app.
//!
//! The tables (`colors`, `typography`, `spacing`, `layout`, `opacity`,
//! `animation`) are plain constants. `DesignTokens` resolves them for one
//! platform, applies config overrides, and feeds the exporters.

pub mod animation;
pub mod colors;
pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod opacity;
pub mod platform;
pub mod snapshot;
pub mod spacing;
pub mod typography;

pub use config::TokenConfig;
pub use error::TokenError;
pub use export::ExportFormat;
pub use platform::Platform;
pub use snapshot::DesignTokens;
