//! Build-time helpers for the frontend: the custom icon manifest and the
//! resolved bundler settings.

pub mod bundler;
pub mod collate;
pub mod config;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod paths;
pub mod scan;

pub use bundler::{BundlerConfig, BundlerEnv};
pub use collate::IconCollator;
pub use config::{GeneratorConfig, Layout};
pub use error::{ManifestError, ManifestResult};
pub use generator::{generate, Outcome};
pub use manifest::{FlatManifest, GroupedManifest};
