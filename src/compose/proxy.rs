//! Reverse-proxy label synthesis — Traefik routing labels per service

use crate::settings::ReverseProxySettings;

/// Build the Traefik labels for one service, in fixed order. `container_port`
/// is the catalogue default port: the proxy talks to the container's internal
/// listener, which a published-port override does not move. Kept as observed
/// behavior even though it can look inconsistent next to a port override.
pub fn labels(app_id: &str, container_port: u16, proxy: &ReverseProxySettings) -> Vec<String> {
    let mut labels = vec![
        "traefik.enable=true".to_string(),
        format!("traefik.http.routers.{}.service={}", app_id, app_id),
        // The domain is taken verbatim; it may itself be a ${...} marker
        format!("traefik.http.routers.{}.rule=Host(`{}.{}`)", app_id, app_id, proxy.domain),
        format!("traefik.http.routers.{}.entrypoints={}", app_id, proxy.entrypoint),
    ];
    if !proxy.middlewares.is_empty() {
        labels.push(format!(
            "traefik.http.routers.{}.middlewares={}",
            app_id,
            proxy.middlewares.join(",")
        ));
    }
    labels.push(format!("traefik.http.services.{}.loadbalancer.server.scheme=http", app_id));
    labels.push(format!("traefik.http.services.{}.loadbalancer.server.port={}", app_id, container_port));
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proxy_settings(middlewares: &[&str]) -> ReverseProxySettings {
        ReverseProxySettings {
            enabled: true,
            domain: "home.example.com".to_string(),
            entrypoint: "websecure".to_string(),
            middlewares: middlewares.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn labels_come_out_in_fixed_order() {
        let labels = labels("sonarr", 8989, &proxy_settings(&["auth", "compress"]));
        assert_eq!(labels, vec![
            "traefik.enable=true",
            "traefik.http.routers.sonarr.service=sonarr",
            "traefik.http.routers.sonarr.rule=Host(`sonarr.home.example.com`)",
            "traefik.http.routers.sonarr.entrypoints=websecure",
            "traefik.http.routers.sonarr.middlewares=auth,compress",
            "traefik.http.services.sonarr.loadbalancer.server.scheme=http",
            "traefik.http.services.sonarr.loadbalancer.server.port=8989",
        ]);
    }

    #[test]
    fn middleware_label_is_omitted_when_none_configured() {
        let labels = labels("sonarr", 8989, &proxy_settings(&[]));
        assert!(!labels.iter().any(|l| l.contains("middlewares")));
        assert_eq!(labels.len(), 6);
    }

    #[test]
    fn load_balancer_port_ignores_published_overrides() {
        // The caller always passes the catalogue default, so two services
        // with different published ports get identical loadbalancer labels.
        let labels = labels("sonarr", 8989, &proxy_settings(&[]));
        assert!(labels.contains(&"traefik.http.services.sonarr.loadbalancer.server.port=8989".to_string()));
    }

    #[test]
    fn marker_domains_pass_through_verbatim() {
        let mut settings = proxy_settings(&[]);
        settings.domain = "${DOMAIN}".to_string();
        let labels = labels("sonarr", 8989, &settings);
        assert!(labels.contains(&"traefik.http.routers.sonarr.rule=Host(`sonarr.${DOMAIN}`)".to_string()));
    }
}
