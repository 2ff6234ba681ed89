//! Bundler Settings
//!
//! Resolves the dev-server and build options handed to the frontend bundler.
//! The values depend on three variables the Tauri CLI exports while running
//! `tauri dev` / `tauri build`. They are printed as JSON and not interpreted
//! any further here.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

pub const DEV_SERVER_PORT: u16 = 5173;
pub const HMR_PORT: u16 = 1423;
pub const API_PREFIX: &str = "/api";
pub const API_ORIGIN: &str = "http://localhost:3000";
pub const ENV_PREFIXES: [&str; 2] = ["VITE_", "TAURI_ENV_"];
pub const HTML_ENTRIES: [&str; 2] = ["index.html", "login.html"];
pub const WATCH_IGNORED: &str = "**/src-tauri/**";

pub const DEV_HOST_VAR: &str = "TAURI_DEV_HOST";
pub const PLATFORM_VAR: &str = "TAURI_ENV_PLATFORM";
pub const DEBUG_VAR: &str = "TAURI_ENV_DEBUG";

/// Inputs read from the environment. Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundlerEnv {
    pub dev_host: Option<String>,
    pub platform: Option<String>,
    pub debug: bool,
}

impl BundlerEnv {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Self {
            dev_host: read(DEV_HOST_VAR),
            platform: read(PLATFORM_VAR),
            debug: read(DEBUG_VAR).is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuildTarget {
    #[serde(rename = "chrome105")]
    Chrome105,
    #[serde(rename = "safari13")]
    Safari13,
}

/// `"esbuild"` or `false`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Minify {
    Esbuild,
    Off,
}

impl Serialize for Minify {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Esbuild => serializer.serialize_str("esbuild"),
            Self::Off => serializer.serialize_bool(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    pub clear_screen: bool,
    pub server: ServerOptions,
    pub env_prefix: Vec<String>,
    pub build: BuildOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOptions {
    pub port: u16,
    pub strict_port: bool,
    #[serde(serialize_with = "host_or_false")]
    pub host: Option<String>,
    pub proxy: BTreeMap<String, ProxyRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmr: Option<HmrOptions>,
    pub watch: WatchOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    pub target: String,
    pub change_origin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HmrOptions {
    pub protocol: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchOptions {
    pub ignored: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    pub target: BuildTarget,
    pub minify: Minify,
    pub sourcemap: bool,
    pub rollup_options: RollupOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollupOptions {
    pub input: Vec<String>,
}

fn host_or_false<S: Serializer>(host: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match host {
        Some(host) => serializer.serialize_str(host),
        None => serializer.serialize_bool(false),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl BundlerConfig {
    pub fn resolve(env: &BundlerEnv) -> Self {
        let mut proxy = BTreeMap::new();
        proxy.insert(
            API_PREFIX.to_string(),
            ProxyRule {
                target: API_ORIGIN.to_string(),
                change_origin: true,
            },
        );

        let hmr = env.dev_host.as_ref().map(|host| HmrOptions {
            protocol: "ws".to_string(),
            host: host.clone(),
            port: HMR_PORT,
        });

        let target = if env.platform.as_deref() == Some("windows") {
            BuildTarget::Chrome105
        } else {
            BuildTarget::Safari13
        };

        Self {
            clear_screen: false,
            server: ServerOptions {
                port: DEV_SERVER_PORT,
                strict_port: true,
                host: env.dev_host.clone(),
                proxy,
                hmr,
                watch: WatchOptions {
                    ignored: vec![WATCH_IGNORED.to_string()],
                },
            },
            env_prefix: strings(&ENV_PREFIXES),
            build: BuildOptions {
                target,
                minify: if env.debug { Minify::Off } else { Minify::Esbuild },
                sourcemap: env.debug,
                rollup_options: RollupOptions {
                    input: strings(&HTML_ENTRIES),
                },
            },
        }
    }

    /// Whether an environment variable is visible to application code
    pub fn exposes(&self, name: &str) -> bool {
        self.env_prefix.iter().any(|prefix| name.starts_with(prefix.as_str()))
    }
}
