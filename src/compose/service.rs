//! Service builder — turns one enabled selection into a compose service
//!
//! Port, environment, and volume policy live here. Values that depend on the
//! machine (root dir, timezone, ownership ids) are emitted as `${...}`
//! substitution markers, not literals, so a generated manifest works on any
//! machine sharing the same env store.

use crate::registry::{AppCategory, AppDefinition};
use crate::settings::{AppSelection, GlobalSettings};
use super::proxy;

/// Root directory marker injected into volume templates
pub const ROOT_DIR_MARKER: &str = "${ROOT_DIR}";

/// The one app that runs with host networking: no published ports, no proxy
/// labels, never routed through the VPN
pub const HOST_NETWORK_APP: &str = "plex";

/// The reverse-proxy app itself never gets routing labels
pub const PROXY_APP: &str = "traefik";

/// Apps whose registry puid/pgid are 0 (official images) but which still
/// honor PUID/PGID/UMASK at runtime
const ID_ENV_APPS: &[&str] = &["navidrome", "audiobookshelf"];

/// One service block of the generated manifest
#[derive(Debug, Clone)]
pub struct ComposeService {
    /// Also the container name; unique across the manifest
    pub name: String,
    /// Carried for the VPN router's eligibility check; not serialized
    pub category: AppCategory,
    pub image: String,
    /// Insertion-ordered; overlays replace in place
    pub environment: Vec<(String, String)>,
    pub volumes: Vec<String>,
    /// `published:container` pairs; quoted by the serializer
    pub ports: Vec<String>,
    pub restart: String,
    pub depends_on: Vec<String>,
    pub network_mode: Option<String>,
    pub labels: Vec<String>,
    pub devices: Vec<String>,
    pub cap_add: Vec<String>,
}

/// Build the service for one enabled, registry-resolved selection
pub fn build(app: &AppDefinition, selection: &AppSelection, settings: &GlobalSettings) -> ComposeService {
    // The published port follows the user; the container port never moves off
    // the catalogue default. Two different apps can then share a host port
    // space without touching container internals.
    let published = selection.port.unwrap_or(app.default_port);

    let mut environment = vec![("TZ".to_string(), "${TIMEZONE}".to_string())];
    if app.puid > 0 || app.pgid > 0 || ID_ENV_APPS.contains(&app.id) {
        environment.push(("PUID".to_string(), "${PUID}".to_string()));
        environment.push(("PGID".to_string(), "${PGID}".to_string()));
        environment.push(("UMASK".to_string(), "${UMASK}".to_string()));
    }
    for (key, value) in app.env {
        set_env(&mut environment, key, value);
    }
    for (key, value) in &selection.env {
        set_env(&mut environment, key, value);
    }

    let mut volumes = (app.volumes)(ROOT_DIR_MARKER);
    volumes.extend(selection.volumes.iter().cloned());

    let host_network = app.id == HOST_NETWORK_APP;
    let ports = if host_network {
        Vec::new()
    } else {
        vec![format!("{}:{}", published, app.default_port)]
    };
    let network_mode = if host_network { Some("host".to_string()) } else { None };

    // Only dependencies the user actually enabled survive; a dangling
    // depends_on entry would stop `docker compose up` cold.
    let depends_on: Vec<String> = app.depends_on.iter()
        .filter(|dep| settings.is_enabled(dep))
        .map(|dep| dep.to_string())
        .collect();

    let mut labels = selection.labels.clone();
    if let Some(proxy_settings) = &settings.reverse_proxy {
        if proxy_settings.enabled && app.id != PROXY_APP && !host_network {
            labels.extend(proxy::labels(app.id, app.default_port, proxy_settings));
        }
    }

    ComposeService {
        name: app.id.to_string(),
        category: app.category,
        image: app.image.to_string(),
        environment,
        volumes,
        ports,
        restart: "unless-stopped".to_string(),
        depends_on,
        network_mode,
        labels,
        devices: app.devices.iter().map(|d| d.to_string()).collect(),
        cap_add: app.cap_add.iter().map(|c| c.to_string()).collect(),
    }
}

/// Overwrite `key` in place if present, append otherwise. Never removes keys.
fn set_env(environment: &mut Vec<(String, String)>, key: &str, value: &str) {
    match environment.iter_mut().find(|(k, _)| k == key) {
        Some(entry) => entry.1 = value.to_string(),
        None => environment.push((key.to_string(), value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::find_app;
    use crate::settings::{ReverseProxySettings, AppSelection};

    fn selection(id: &str) -> AppSelection {
        AppSelection { id: id.to_string(), enabled: true, ..Default::default() }
    }

    fn settings_with(apps: Vec<AppSelection>) -> GlobalSettings {
        GlobalSettings {
            root_dir: "/srv/stack".to_string(),
            timezone: "Etc/UTC".to_string(),
            puid: 1000,
            pgid: 1000,
            umask: "002".to_string(),
            compose_file: "docker-compose.yml".to_string(),
            env_file: ".env".to_string(),
            apps,
            vpn: None,
            reverse_proxy: None,
        }
    }

    #[test]
    fn port_override_moves_only_the_published_side() {
        let app = find_app("sonarr").unwrap();
        let mut sel = selection("sonarr");
        sel.port = Some(9090);
        let settings = settings_with(vec![sel.clone()]);

        let service = build(&app, &sel, &settings);
        assert_eq!(service.ports, vec!["9090:8989"]);
    }

    #[test]
    fn environment_layers_in_order_with_selection_winning() {
        let app = find_app("qbittorrent").unwrap();
        let mut sel = selection("qbittorrent");
        sel.env.insert("WEBUI_PORT".to_string(), "9000".to_string());
        sel.env.insert("EXTRA".to_string(), "1".to_string());
        let settings = settings_with(vec![sel.clone()]);

        let service = build(&app, &sel, &settings);
        assert_eq!(service.environment[0], ("TZ".to_string(), "${TIMEZONE}".to_string()));
        assert_eq!(service.environment[1].0, "PUID");
        // Selection override replaced the catalogue value in place
        let webui = service.environment.iter().find(|(k, _)| k == "WEBUI_PORT").unwrap();
        assert_eq!(webui.1, "9000");
        assert_eq!(service.environment.last().unwrap().0, "EXTRA");
    }

    #[test]
    fn official_image_allowlist_still_gets_identity_env() {
        let app = find_app("navidrome").unwrap();
        assert_eq!(app.puid, 0);
        let sel = selection("navidrome");
        let settings = settings_with(vec![sel.clone()]);

        let service = build(&app, &sel, &settings);
        assert!(service.environment.iter().any(|(k, v)| k == "PUID" && v == "${PUID}"));
    }

    #[test]
    fn official_image_without_allowlist_gets_no_identity_env() {
        let app = find_app("homarr").unwrap();
        let sel = selection("homarr");
        let settings = settings_with(vec![sel.clone()]);

        let service = build(&app, &sel, &settings);
        assert!(!service.environment.iter().any(|(k, _)| k == "PUID"));
    }

    #[test]
    fn volumes_use_the_root_marker_and_append_custom_ones() {
        let app = find_app("sonarr").unwrap();
        let mut sel = selection("sonarr");
        sel.volumes.push("/mnt/extra:/extra".to_string());
        let settings = settings_with(vec![sel.clone()]);

        let service = build(&app, &sel, &settings);
        assert_eq!(service.volumes[0], "${ROOT_DIR}/config/sonarr:/config");
        assert_eq!(service.volumes.last().unwrap(), "/mnt/extra:/extra");
    }

    #[test]
    fn host_networking_app_gets_no_ports_even_with_override() {
        let app = find_app("plex").unwrap();
        let mut sel = selection("plex");
        sel.port = Some(12345);
        let settings = settings_with(vec![sel.clone()]);

        let service = build(&app, &sel, &settings);
        assert!(service.ports.is_empty());
        assert_eq!(service.network_mode.as_deref(), Some("host"));
    }

    #[test]
    fn disabled_dependencies_are_pruned() {
        let app = find_app("sonarr").unwrap();
        let sel = selection("sonarr");
        // prowlarr enabled, qbittorrent absent entirely
        let settings = settings_with(vec![sel.clone(), selection("prowlarr")]);

        let service = build(&app, &sel, &settings);
        assert_eq!(service.depends_on, vec!["prowlarr"]);
    }

    #[test]
    fn proxy_labels_follow_user_labels() {
        let app = find_app("sonarr").unwrap();
        let mut sel = selection("sonarr");
        sel.labels.push("wolf.managed=true".to_string());
        let mut settings = settings_with(vec![sel.clone()]);
        settings.reverse_proxy = Some(ReverseProxySettings {
            enabled: true,
            domain: "home.example.com".to_string(),
            entrypoint: "websecure".to_string(),
            middlewares: Vec::new(),
        });

        let service = build(&app, &sel, &settings);
        assert_eq!(service.labels[0], "wolf.managed=true");
        assert_eq!(service.labels[1], "traefik.enable=true");
    }

    #[test]
    fn proxy_and_host_network_apps_get_no_proxy_labels() {
        let proxy_settings = ReverseProxySettings {
            enabled: true,
            domain: "home.example.com".to_string(),
            entrypoint: "websecure".to_string(),
            middlewares: Vec::new(),
        };
        for id in [PROXY_APP, HOST_NETWORK_APP] {
            let app = find_app(id).unwrap();
            let sel = selection(id);
            let mut settings = settings_with(vec![sel.clone()]);
            settings.reverse_proxy = Some(proxy_settings.clone());
            let service = build(&app, &sel, &settings);
            assert!(service.labels.is_empty(), "{} should not be labelled", id);
        }
    }

    #[test]
    fn devices_and_caps_come_from_the_catalogue_only() {
        let app = find_app("gluetun").unwrap();
        let mut sel = selection("gluetun");
        sel.devices.push("/dev/fuse:/dev/fuse".to_string());
        sel.cap_add.push("SYS_ADMIN".to_string());
        let settings = settings_with(vec![sel.clone()]);

        let service = build(&app, &sel, &settings);
        assert_eq!(service.devices, vec!["/dev/net/tun:/dev/net/tun"]);
        assert_eq!(service.cap_add, vec!["NET_ADMIN"]);
    }
}
