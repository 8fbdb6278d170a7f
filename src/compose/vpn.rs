//! VPN router — migrates selected services' traffic onto the gateway
//!
//! Runs after all services are built. Eligible services lose their published
//! ports to the gateway (gluetun) and join its network namespace via
//! `network_mode: service:<gateway>`. Idempotent: a second pass finds the
//! eligible services already drained of ports and changes nothing.

use crate::registry::AppCategory;
use crate::settings::{GlobalSettings, VpnMode};
use super::service::ComposeService;
use tracing::{info, warn};

/// Route eligible services through the VPN gateway, in place.
/// No-op when the mode is `none` or no gateway service was built.
pub fn route(services: &mut [ComposeService], settings: &GlobalSettings) {
    let mode = settings.vpn_mode();
    if mode == VpnMode::None {
        return;
    }
    let Some(gateway_idx) = services.iter().position(|s| s.category == AppCategory::Vpn) else {
        warn!("🔒 VPN mode requested but no gateway service is enabled; skipping routing");
        return;
    };
    let gateway_name = services[gateway_idx].name.clone();

    let mut migrated: Vec<String> = Vec::new();
    let mut routed = 0usize;
    for service in services.iter_mut() {
        if service.category == AppCategory::Vpn || !eligible(service.category, mode) {
            continue;
        }
        // The host-networked service has no namespace to re-attach
        if service.network_mode.as_deref() == Some("host") {
            continue;
        }
        migrated.append(&mut service.ports);
        service.network_mode = Some(format!("service:{}", gateway_name));
        routed += 1;
    }

    // Union onto the gateway; two migrated services may publish the same pair
    let gateway = &mut services[gateway_idx];
    for port in migrated {
        if !gateway.ports.contains(&port) {
            gateway.ports.push(port);
        }
    }

    info!("🔒 VPN: routed {} service(s) through {}", routed, gateway_name);
}

fn eligible(category: AppCategory, mode: VpnMode) -> bool {
    match mode {
        VpnMode::None => false,
        VpnMode::Mini => category == AppCategory::Downloader,
        VpnMode::Full => matches!(
            category,
            AppCategory::Downloader
                | AppCategory::Indexer
                | AppCategory::RequestManager
                | AppCategory::MediaServer
                | AppCategory::MediaManager
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::service::build;
    use crate::registry::find_app;
    use crate::settings::{AppSelection, VpnSettings};

    fn stack(mode: VpnMode, ids: &[&str]) -> (Vec<ComposeService>, GlobalSettings) {
        let apps: Vec<AppSelection> = ids.iter()
            .map(|id| AppSelection { id: id.to_string(), enabled: true, ..Default::default() })
            .collect();
        let settings = GlobalSettings {
            root_dir: "/srv/stack".to_string(),
            timezone: "Etc/UTC".to_string(),
            puid: 1000,
            pgid: 1000,
            umask: "002".to_string(),
            compose_file: "docker-compose.yml".to_string(),
            env_file: ".env".to_string(),
            apps: apps.clone(),
            vpn: Some(VpnSettings { mode }),
            reverse_proxy: None,
        };
        let services = apps.iter()
            .map(|sel| build(&find_app(&sel.id).unwrap(), sel, &settings))
            .collect();
        (services, settings)
    }

    fn by_name<'a>(services: &'a [ComposeService], name: &str) -> &'a ComposeService {
        services.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn mini_mode_routes_downloaders_only() {
        let (mut services, settings) = stack(VpnMode::Mini, &["gluetun", "qbittorrent", "sonarr"]);
        route(&mut services, &settings);

        let qbit = by_name(&services, "qbittorrent");
        assert!(qbit.ports.is_empty());
        assert_eq!(qbit.network_mode.as_deref(), Some("service:gluetun"));

        let sonarr = by_name(&services, "sonarr");
        assert_eq!(sonarr.ports, vec!["8989:8989"]);
        assert!(sonarr.network_mode.is_none());

        let gateway = by_name(&services, "gluetun");
        assert!(gateway.ports.contains(&"8080:8080".to_string()));
    }

    #[test]
    fn full_mode_routes_managers_too_and_dedups_gateway_ports() {
        // sabnzbd and qbittorrent both publish 8080:8080, so the gateway
        // union must collapse them to one mapping.
        let (mut services, settings) =
            stack(VpnMode::Full, &["gluetun", "qbittorrent", "sabnzbd", "sonarr"]);
        route(&mut services, &settings);

        for name in ["qbittorrent", "sabnzbd", "sonarr"] {
            let service = by_name(&services, name);
            assert!(service.ports.is_empty(), "{} should have migrated its ports", name);
            assert_eq!(service.network_mode.as_deref(), Some("service:gluetun"));
        }

        let gateway = by_name(&services, "gluetun");
        let eighty_eighties = gateway.ports.iter().filter(|p| *p == "8080:8080").count();
        assert_eq!(eighty_eighties, 1, "colliding ports must be published once");
        assert!(gateway.ports.contains(&"8989:8989".to_string()));
    }

    #[test]
    fn host_networked_service_is_never_attached() {
        let (mut services, settings) = stack(VpnMode::Full, &["gluetun", "plex"]);
        route(&mut services, &settings);

        let plex = by_name(&services, "plex");
        assert_eq!(plex.network_mode.as_deref(), Some("host"));
        assert!(plex.ports.is_empty());
    }

    #[test]
    fn no_gateway_means_no_op() {
        let (mut services, settings) = stack(VpnMode::Full, &["qbittorrent"]);
        route(&mut services, &settings);

        let qbit = by_name(&services, "qbittorrent");
        assert_eq!(qbit.ports, vec!["8080:8080"]);
        assert!(qbit.network_mode.is_none());
    }

    #[test]
    fn mode_none_is_a_no_op_even_with_a_gateway() {
        let (mut services, settings) = stack(VpnMode::None, &["gluetun", "qbittorrent"]);
        route(&mut services, &settings);
        assert!(by_name(&services, "qbittorrent").network_mode.is_none());
    }

    #[test]
    fn routing_twice_changes_nothing() {
        let (mut services, settings) = stack(VpnMode::Full, &["gluetun", "qbittorrent", "sonarr"]);
        route(&mut services, &settings);
        let snapshot: Vec<(String, Vec<String>, Option<String>)> = services.iter()
            .map(|s| (s.name.clone(), s.ports.clone(), s.network_mode.clone()))
            .collect();

        route(&mut services, &settings);
        let again: Vec<(String, Vec<String>, Option<String>)> = services.iter()
            .map(|s| (s.name.clone(), s.ports.clone(), s.network_mode.clone()))
            .collect();
        assert_eq!(snapshot, again);
    }
}
