//! App Registry — the built-in catalogue of supported self-hosted applications
//!
//! Every app WolfCompose can deploy is described here: image, default web port,
//! ownership ids, bind-mount layout, static environment, and dependencies.
//! The catalogue is defined once at startup and never mutated; the generator
//! treats it as a read-only lookup table.

use serde::{Deserialize, Serialize};

/// Coarse grouping of catalogue entries. The VPN router keys its eligibility
/// rules off this, and the `apps` subcommand filters on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppCategory {
    MediaManager,
    Indexer,
    Downloader,
    MediaServer,
    RequestManager,
    Dashboard,
    Utility,
    Vpn,
    Monitoring,
    Infrastructure,
}

impl AppCategory {
    pub fn name(&self) -> &'static str {
        match self {
            AppCategory::MediaManager => "media-manager",
            AppCategory::Indexer => "indexer",
            AppCategory::Downloader => "downloader",
            AppCategory::MediaServer => "media-server",
            AppCategory::RequestManager => "request-manager",
            AppCategory::Dashboard => "dashboard",
            AppCategory::Utility => "utility",
            AppCategory::Vpn => "vpn",
            AppCategory::Monitoring => "monitoring",
            AppCategory::Infrastructure => "infrastructure",
        }
    }
}

/// Architecture compatibility note attached to a registry entry
#[derive(Debug, Clone, Copy)]
pub struct ArchRule {
    /// `std::env::consts::ARCH` values the upstream image no longer supports
    pub deprecated: &'static [&'static str],
    /// Architectures the upstream image is published for; empty means all
    pub supported: &'static [&'static str],
    pub warning: &'static str,
}

impl ArchRule {
    /// Whether this entry should warn on the given architecture
    pub fn flags(&self, arch: &str) -> bool {
        self.deprecated.contains(&arch)
            || (!self.supported.is_empty() && !self.supported.contains(&arch))
    }
}

/// One catalogue entry. `volumes` is a template: it receives the root
/// directory (usually the `${ROOT_DIR}` substitution marker, so generated
/// manifests stay portable) and returns the bind mounts in order.
#[derive(Clone, Serialize)]
pub struct AppDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: AppCategory,
    pub description: &'static str,
    pub image: &'static str,
    pub default_port: u16,
    pub puid: u32,
    pub pgid: u32,
    #[serde(skip)]
    pub volumes: fn(&str) -> Vec<String>,
    pub env: &'static [(&'static str, &'static str)],
    /// Must name other catalogue ids; dangling ids are a registry bug
    pub depends_on: &'static [&'static str],
    pub devices: &'static [&'static str],
    pub cap_add: &'static [&'static str],
    #[serde(skip)]
    pub arch: Option<ArchRule>,
}

// ─── Lookup ───

/// Get a single catalogue entry by id
pub fn find_app(id: &str) -> Option<AppDefinition> {
    catalogue().into_iter().find(|a| a.id == id)
}

/// List catalogue entries, optionally filtered by query and/or category
pub fn list_apps(query: Option<&str>, category: Option<&str>) -> Vec<AppDefinition> {
    catalogue().into_iter().filter(|app| {
        let q_match = query.map_or(true, |q| {
            let q = q.to_lowercase();
            app.name.to_lowercase().contains(&q) ||
            app.description.to_lowercase().contains(&q) ||
            app.id.contains(&q)
        });
        let c_match = category.map_or(true, |c| {
            c.eq_ignore_ascii_case("all") || app.category.name().eq_ignore_ascii_case(c)
        });
        q_match && c_match
    }).collect()
}

// ─── Built-in Catalogue ───

pub fn catalogue() -> Vec<AppDefinition> {
    vec![
        // ── Media managers ──
        AppDefinition {
            id: "sonarr",
            name: "Sonarr",
            category: AppCategory::MediaManager,
            description: "TV series collection manager",
            image: "lscr.io/linuxserver/sonarr:latest",
            default_port: 8989,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/sonarr:/config", root),
                format!("{}/media:/media", root),
                format!("{}/downloads:/downloads", root),
            ],
            env: &[],
            depends_on: &["prowlarr", "qbittorrent"],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "radarr",
            name: "Radarr",
            category: AppCategory::MediaManager,
            description: "Movie collection manager",
            image: "lscr.io/linuxserver/radarr:latest",
            default_port: 7878,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/radarr:/config", root),
                format!("{}/media:/media", root),
                format!("{}/downloads:/downloads", root),
            ],
            env: &[],
            depends_on: &["prowlarr", "qbittorrent"],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "lidarr",
            name: "Lidarr",
            category: AppCategory::MediaManager,
            description: "Music collection manager",
            image: "lscr.io/linuxserver/lidarr:latest",
            default_port: 8686,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/lidarr:/config", root),
                format!("{}/media:/media", root),
                format!("{}/downloads:/downloads", root),
            ],
            env: &[],
            depends_on: &["prowlarr", "qbittorrent"],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "readarr",
            name: "Readarr",
            category: AppCategory::MediaManager,
            description: "Book and audiobook collection manager",
            image: "lscr.io/linuxserver/readarr:develop",
            default_port: 8787,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/readarr:/config", root),
                format!("{}/media:/media", root),
                format!("{}/downloads:/downloads", root),
            ],
            env: &[],
            depends_on: &["prowlarr", "qbittorrent"],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "bazarr",
            name: "Bazarr",
            category: AppCategory::MediaManager,
            description: "Subtitle manager for Sonarr and Radarr",
            image: "lscr.io/linuxserver/bazarr:latest",
            default_port: 6767,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/bazarr:/config", root),
                format!("{}/media:/media", root),
            ],
            env: &[],
            depends_on: &["sonarr", "radarr"],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "mylar3",
            name: "Mylar3",
            category: AppCategory::MediaManager,
            description: "Comic book collection manager",
            image: "lscr.io/linuxserver/mylar3:latest",
            default_port: 8090,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/mylar3:/config", root),
                format!("{}/media/comics:/comics", root),
                format!("{}/downloads:/downloads", root),
            ],
            env: &[],
            depends_on: &["prowlarr"],
            devices: &[],
            cap_add: &[],
            arch: None,
        },

        // ── Indexers ──
        AppDefinition {
            id: "prowlarr",
            name: "Prowlarr",
            category: AppCategory::Indexer,
            description: "Indexer manager for the *arr suite",
            image: "lscr.io/linuxserver/prowlarr:latest",
            default_port: 9696,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![format!("{}/config/prowlarr:/config", root)],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "jackett",
            name: "Jackett",
            category: AppCategory::Indexer,
            description: "Torrent tracker proxy",
            image: "lscr.io/linuxserver/jackett:latest",
            default_port: 9117,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![format!("{}/config/jackett:/config", root)],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "nzbhydra2",
            name: "NZBHydra2",
            category: AppCategory::Indexer,
            description: "Meta search for newznab indexers",
            image: "lscr.io/linuxserver/nzbhydra2:latest",
            default_port: 5076,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![format!("{}/config/nzbhydra2:/config", root)],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: Some(ArchRule {
                deprecated: &["arm"],
                supported: &["x86_64", "aarch64"],
                warning: "NZBHydra2 no longer ships 32-bit ARM images; use a 64-bit OS",
            }),
        },
        AppDefinition {
            id: "flaresolverr",
            name: "FlareSolverr",
            category: AppCategory::Indexer,
            description: "Cloudflare challenge solver used by indexers",
            image: "ghcr.io/flaresolverr/flaresolverr:latest",
            default_port: 8191,
            puid: 0,
            pgid: 0,
            volumes: |_| Vec::new(),
            env: &[("LOG_LEVEL", "info")],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },

        // ── Downloaders ──
        AppDefinition {
            id: "qbittorrent",
            name: "qBittorrent",
            category: AppCategory::Downloader,
            description: "BitTorrent client with web UI",
            image: "lscr.io/linuxserver/qbittorrent:latest",
            default_port: 8080,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/qbittorrent:/config", root),
                format!("{}/downloads:/downloads", root),
            ],
            env: &[("WEBUI_PORT", "8080")],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "transmission",
            name: "Transmission",
            category: AppCategory::Downloader,
            description: "Lightweight BitTorrent client",
            image: "lscr.io/linuxserver/transmission:latest",
            default_port: 9091,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/transmission:/config", root),
                format!("{}/downloads:/downloads", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "deluge",
            name: "Deluge",
            category: AppCategory::Downloader,
            description: "BitTorrent client with plugin system",
            image: "lscr.io/linuxserver/deluge:latest",
            default_port: 8112,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/deluge:/config", root),
                format!("{}/downloads:/downloads", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "sabnzbd",
            name: "SABnzbd",
            category: AppCategory::Downloader,
            description: "Usenet downloader",
            image: "lscr.io/linuxserver/sabnzbd:latest",
            default_port: 8080,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/sabnzbd:/config", root),
                format!("{}/downloads:/downloads", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "nzbget",
            name: "NZBGet",
            category: AppCategory::Downloader,
            description: "Efficient Usenet downloader",
            image: "lscr.io/linuxserver/nzbget:latest",
            default_port: 6789,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/nzbget:/config", root),
                format!("{}/downloads:/downloads", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },

        // ── Media servers ──
        AppDefinition {
            id: "jellyfin",
            name: "Jellyfin",
            category: AppCategory::MediaServer,
            description: "Free software media server",
            image: "lscr.io/linuxserver/jellyfin:latest",
            default_port: 8096,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/jellyfin:/config", root),
                format!("{}/media:/media", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "plex",
            name: "Plex",
            category: AppCategory::MediaServer,
            description: "Media server with first-party client apps (host networking)",
            image: "lscr.io/linuxserver/plex:latest",
            default_port: 32400,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/plex:/config", root),
                format!("{}/media:/media", root),
            ],
            env: &[("VERSION", "docker")],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: Some(ArchRule {
                deprecated: &["arm"],
                supported: &["x86_64", "aarch64"],
                warning: "Plex dropped 32-bit ARM builds; use a 64-bit OS or Jellyfin",
            }),
        },
        AppDefinition {
            id: "emby",
            name: "Emby",
            category: AppCategory::MediaServer,
            description: "Media server with premium client features",
            image: "lscr.io/linuxserver/emby:latest",
            default_port: 8096,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/emby:/config", root),
                format!("{}/media:/media", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "navidrome",
            name: "Navidrome",
            category: AppCategory::MediaServer,
            description: "Subsonic-compatible music streamer",
            image: "deluan/navidrome:latest",
            default_port: 4533,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![
                format!("{}/config/navidrome:/data", root),
                format!("{}/media/music:/music:ro", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "audiobookshelf",
            name: "Audiobookshelf",
            category: AppCategory::MediaServer,
            description: "Audiobook and podcast server",
            image: "ghcr.io/advplyr/audiobookshelf:latest",
            default_port: 80,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![
                format!("{}/config/audiobookshelf:/config", root),
                format!("{}/config/audiobookshelf/metadata:/metadata", root),
                format!("{}/media/audiobooks:/audiobooks", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "kavita",
            name: "Kavita",
            category: AppCategory::MediaServer,
            description: "Comic, manga, and book reader",
            image: "lscr.io/linuxserver/kavita:latest",
            default_port: 5000,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/kavita:/config", root),
                format!("{}/media:/media", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "calibre-web",
            name: "Calibre-Web",
            category: AppCategory::MediaServer,
            description: "Web UI for a Calibre ebook library",
            image: "lscr.io/linuxserver/calibre-web:latest",
            default_port: 8083,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/calibre-web:/config", root),
                format!("{}/media/books:/books", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },

        // ── Request managers ──
        AppDefinition {
            id: "jellyseerr",
            name: "Jellyseerr",
            category: AppCategory::RequestManager,
            description: "Media request management for Jellyfin",
            image: "fallenbagel/jellyseerr:latest",
            default_port: 5055,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![format!("{}/config/jellyseerr:/app/config", root)],
            env: &[],
            depends_on: &["jellyfin"],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "overseerr",
            name: "Overseerr",
            category: AppCategory::RequestManager,
            description: "Media request management for Plex",
            image: "lscr.io/linuxserver/overseerr:latest",
            default_port: 5055,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![format!("{}/config/overseerr:/config", root)],
            env: &[],
            depends_on: &["plex"],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "ombi",
            name: "Ombi",
            category: AppCategory::RequestManager,
            description: "Media request management for Plex, Emby, and Jellyfin",
            image: "lscr.io/linuxserver/ombi:latest",
            default_port: 3579,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![format!("{}/config/ombi:/config", root)],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },

        // ── Dashboards ──
        AppDefinition {
            id: "homarr",
            name: "Homarr",
            category: AppCategory::Dashboard,
            description: "Customizable home server dashboard",
            image: "ghcr.io/homarr-labs/homarr:latest",
            default_port: 7575,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![format!("{}/config/homarr:/appdata", root)],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "heimdall",
            name: "Heimdall",
            category: AppCategory::Dashboard,
            description: "Application launcher dashboard",
            image: "lscr.io/linuxserver/heimdall:latest",
            default_port: 80,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![format!("{}/config/heimdall:/config", root)],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "homepage",
            name: "Homepage",
            category: AppCategory::Dashboard,
            description: "Static-feeling dashboard with service widgets",
            image: "ghcr.io/gethomepage/homepage:latest",
            default_port: 3000,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![format!("{}/config/homepage:/app/config", root)],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "dashy",
            name: "Dashy",
            category: AppCategory::Dashboard,
            description: "Feature-rich dashboard with status checks",
            image: "lissy93/dashy:latest",
            default_port: 8080,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![format!("{}/config/dashy:/app/user-data", root)],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },

        // ── Utilities ──
        AppDefinition {
            id: "unpackerr",
            name: "Unpackerr",
            category: AppCategory::Utility,
            description: "Extracts completed downloads for the *arr suite",
            image: "golift/unpackerr:latest",
            default_port: 5656,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![format!("{}/downloads:/downloads", root)],
            env: &[],
            depends_on: &["qbittorrent"],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "tdarr",
            name: "Tdarr",
            category: AppCategory::Utility,
            description: "Distributed media transcoding",
            image: "ghcr.io/haveagitgat/tdarr:latest",
            default_port: 8265,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/tdarr/server:/app/server", root),
                format!("{}/config/tdarr/configs:/app/configs", root),
                format!("{}/media:/media", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: Some(ArchRule {
                deprecated: &["arm"],
                supported: &["x86_64", "aarch64"],
                warning: "Tdarr has no 32-bit ARM images; transcode nodes need a 64-bit OS",
            }),
        },
        AppDefinition {
            id: "duplicati",
            name: "Duplicati",
            category: AppCategory::Utility,
            description: "Encrypted incremental backups",
            image: "lscr.io/linuxserver/duplicati:latest",
            default_port: 8200,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![
                format!("{}/config/duplicati:/config", root),
                format!("{}:/source:ro", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "filebrowser",
            name: "File Browser",
            category: AppCategory::Utility,
            description: "Web file manager over the stack root",
            image: "filebrowser/filebrowser:latest",
            default_port: 80,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![
                format!("{}/config/filebrowser:/config", root),
                format!("{}:/srv", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },

        // ── VPN ──
        AppDefinition {
            id: "gluetun",
            name: "Gluetun",
            category: AppCategory::Vpn,
            description: "VPN client gateway other services route through",
            image: "qmcgaw/gluetun:latest",
            default_port: 8000,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![format!("{}/config/gluetun:/gluetun", root)],
            env: &[
                ("VPN_SERVICE_PROVIDER", "${VPN_SERVICE_PROVIDER}"),
                ("VPN_TYPE", "${VPN_TYPE}"),
                ("WIREGUARD_PRIVATE_KEY", "${WIREGUARD_PRIVATE_KEY}"),
            ],
            depends_on: &[],
            devices: &["/dev/net/tun:/dev/net/tun"],
            cap_add: &["NET_ADMIN"],
            arch: None,
        },

        // ── Monitoring ──
        AppDefinition {
            id: "grafana",
            name: "Grafana",
            category: AppCategory::Monitoring,
            description: "Metrics dashboards and alerting",
            image: "grafana/grafana-oss:latest",
            default_port: 3000,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![format!("{}/config/grafana:/var/lib/grafana", root)],
            env: &[],
            depends_on: &["prometheus"],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "prometheus",
            name: "Prometheus",
            category: AppCategory::Monitoring,
            description: "Time-series metrics collection",
            image: "prom/prometheus:latest",
            default_port: 9090,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![
                format!("{}/config/prometheus:/etc/prometheus", root),
                format!("{}/config/prometheus/data:/prometheus", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "tautulli",
            name: "Tautulli",
            category: AppCategory::Monitoring,
            description: "Plex usage statistics",
            image: "lscr.io/linuxserver/tautulli:latest",
            default_port: 8181,
            puid: 1000,
            pgid: 1000,
            volumes: |root| vec![format!("{}/config/tautulli:/config", root)],
            env: &[],
            depends_on: &["plex"],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "uptime-kuma",
            name: "Uptime Kuma",
            category: AppCategory::Monitoring,
            description: "Self-hosted uptime monitoring",
            image: "louislam/uptime-kuma:1",
            default_port: 3001,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![format!("{}/config/uptime-kuma:/app/data", root)],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "netdata",
            name: "Netdata",
            category: AppCategory::Monitoring,
            description: "Real-time host and container metrics",
            image: "netdata/netdata:latest",
            default_port: 19999,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![
                format!("{}/config/netdata:/etc/netdata", root),
                "/proc:/host/proc:ro".to_string(),
                "/sys:/host/sys:ro".to_string(),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &["SYS_PTRACE"],
            arch: None,
        },

        // ── Infrastructure ──
        AppDefinition {
            id: "traefik",
            name: "Traefik",
            category: AppCategory::Infrastructure,
            description: "Reverse proxy with label-based routing",
            image: "traefik:v3.3",
            default_port: 8080,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![
                format!("{}/config/traefik:/etc/traefik", root),
                "/var/run/docker.sock:/var/run/docker.sock:ro".to_string(),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "portainer",
            name: "Portainer",
            category: AppCategory::Infrastructure,
            description: "Container management UI",
            image: "portainer/portainer-ce:latest",
            default_port: 9000,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![
                format!("{}/config/portainer:/data", root),
                "/var/run/docker.sock:/var/run/docker.sock".to_string(),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "watchtower",
            name: "Watchtower",
            category: AppCategory::Infrastructure,
            description: "Automatic container image updates",
            image: "containrrr/watchtower:latest",
            default_port: 8080,
            puid: 0,
            pgid: 0,
            volumes: |_| vec!["/var/run/docker.sock:/var/run/docker.sock".to_string()],
            env: &[("WATCHTOWER_CLEANUP", "true")],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
        AppDefinition {
            id: "adguardhome",
            name: "AdGuard Home",
            category: AppCategory::Infrastructure,
            description: "Network-wide DNS ad blocking",
            image: "adguard/adguardhome:latest",
            default_port: 3000,
            puid: 0,
            pgid: 0,
            volumes: |root| vec![
                format!("{}/config/adguardhome/work:/opt/adguardhome/work", root),
                format!("{}/config/adguardhome/conf:/opt/adguardhome/conf", root),
            ],
            env: &[],
            depends_on: &[],
            devices: &[],
            cap_add: &[],
            arch: None,
        },
    ]
}
