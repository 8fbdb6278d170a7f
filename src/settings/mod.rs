//! Settings — the user's stack description, loaded from a TOML file
//!
//! Holds everything the generator needs: the stack root directory, ownership
//! ids, the ordered list of app selections, and the optional VPN and
//! reverse-proxy sections. Selections are ordered; the generated manifest
//! preserves that order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/wolfcompose/config.toml";

/// VPN routing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VpnMode {
    /// Route downloaders, indexers, request managers, media managers, and media servers
    Full,
    /// Route downloaders only
    Mini,
    #[default]
    None,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VpnSettings {
    #[serde(default)]
    pub mode: VpnMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseProxySettings {
    #[serde(default)]
    pub enabled: bool,
    /// Hostnames become `<app id>.<domain>`. May itself be a `${...}` marker.
    pub domain: String,
    #[serde(default = "default_entrypoint")]
    pub entrypoint: String,
    #[serde(default)]
    pub middlewares: Vec<String>,
}

fn default_entrypoint() -> String {
    "websecure".to_string()
}

/// One user decision to enable and configure a catalogue app
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSelection {
    pub id: String,
    #[serde(default)]
    pub enabled: bool,
    /// Published (host-side) port override; the container port stays at the
    /// catalogue default
    pub port: Option<u16>,
    /// Overrides catalogue env key-for-key; never removes keys
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    /// Appended after the catalogue volume template
    #[serde(default)]
    pub volumes: Vec<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Surfaced for the UI but not yet merged with catalogue devices/caps
    #[serde(default)]
    pub devices: Vec<String>,
    #[serde(default)]
    pub cap_add: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Stack root on disk; emitted into the manifest as `${ROOT_DIR}`
    pub root_dir: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_id")]
    pub puid: u32,
    #[serde(default = "default_id")]
    pub pgid: u32,
    /// Kept as text so the leading zero survives into the env store
    #[serde(default = "default_umask")]
    pub umask: String,
    #[serde(default = "default_compose_file")]
    pub compose_file: String,
    #[serde(default = "default_env_file")]
    pub env_file: String,
    #[serde(default)]
    pub apps: Vec<AppSelection>,
    pub vpn: Option<VpnSettings>,
    pub reverse_proxy: Option<ReverseProxySettings>,
}

fn default_timezone() -> String {
    "Etc/UTC".to_string()
}

fn default_id() -> u32 {
    1000
}

fn default_umask() -> String {
    "002".to_string()
}

fn default_compose_file() -> String {
    "docker-compose.yml".to_string()
}

fn default_env_file() -> String {
    ".env".to_string()
}

impl GlobalSettings {
    /// Load and parse a settings file
    pub fn load(path: &str) -> Result<GlobalSettings, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read settings file {}: {}", path, e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse settings file {}: {}", path, e))
    }

    pub fn enabled_apps(&self) -> impl Iterator<Item = &AppSelection> {
        self.apps.iter().filter(|a| a.enabled)
    }

    /// Whether the given app id is among the enabled selections
    pub fn is_enabled(&self, id: &str) -> bool {
        self.apps.iter().any(|a| a.enabled && a.id == id)
    }

    pub fn vpn_mode(&self) -> VpnMode {
        self.vpn.as_ref().map(|v| v.mode).unwrap_or(VpnMode::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_settings_file() {
        let raw = r#"
            root_dir = "/srv/stack"
            timezone = "Europe/London"
            puid = 1001
            pgid = 1001

            [vpn]
            mode = "mini"

            [reverse_proxy]
            enabled = true
            domain = "home.example.com"
            middlewares = ["auth", "compress"]

            [[apps]]
            id = "sonarr"
            enabled = true
            port = 9090

            [apps.env]
            TZ = "America/New_York"

            [[apps]]
            id = "qbittorrent"
            enabled = false
        "#;
        let settings: GlobalSettings = toml::from_str(raw).unwrap();
        assert_eq!(settings.root_dir, "/srv/stack");
        assert_eq!(settings.umask, "002");
        assert_eq!(settings.vpn_mode(), VpnMode::Mini);
        assert_eq!(settings.apps.len(), 2);
        assert_eq!(settings.apps[0].port, Some(9090));
        assert_eq!(settings.apps[0].env.get("TZ").unwrap(), "America/New_York");
        assert!(settings.is_enabled("sonarr"));
        assert!(!settings.is_enabled("qbittorrent"));
        let proxy = settings.reverse_proxy.unwrap();
        assert_eq!(proxy.entrypoint, "websecure");
        assert_eq!(proxy.middlewares, vec!["auth", "compress"]);
    }

    #[test]
    fn vpn_mode_defaults_to_none() {
        let settings: GlobalSettings = toml::from_str(r#"root_dir = "/srv/stack""#).unwrap();
        assert_eq!(settings.vpn_mode(), VpnMode::None);
        assert_eq!(settings.compose_file, "docker-compose.yml");
    }
}
