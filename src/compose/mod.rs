//! Compose generation — the pipeline from settings to manifest text
//!
//! `generate` is a pure function over a settings snapshot: resolve enabled
//! selections against the registry, build one service each, run the VPN
//! router and label passes, serialize. `persist` is the one side-effecting
//! wrapper: it writes the manifest and mirrors the global ids into the env
//! store. Nothing here retries; a failed write surfaces to the caller as-is.

pub mod proxy;
pub mod service;
pub mod vpn;
pub mod yaml;

use crate::registry;
use crate::settings::GlobalSettings;
use service::ComposeService;
use tracing::{info, warn};

/// Per-selection result of the build pass. Skips are named outcomes, not
/// errors, so callers and tests can assert on them directly.
#[derive(Debug)]
pub enum BuildOutcome {
    Built(ComposeService),
    /// The selection id is not in the registry; nothing was produced
    SkippedUnknownApp(String),
    /// A service with this id was already built; container names must be unique
    SkippedDuplicate(String),
}

/// Run the build pass over every enabled selection, in selection order
pub fn build_services(settings: &GlobalSettings) -> Vec<BuildOutcome> {
    let mut outcomes: Vec<BuildOutcome> = Vec::new();
    for selection in settings.enabled_apps() {
        let Some(app) = registry::find_app(&selection.id) else {
            warn!("🐳 Compose: unknown app '{}' in settings; skipping", selection.id);
            outcomes.push(BuildOutcome::SkippedUnknownApp(selection.id.clone()));
            continue;
        };
        let duplicate = outcomes.iter().any(|o| {
            matches!(o, BuildOutcome::Built(s) if s.name == selection.id)
        });
        if duplicate {
            warn!("🐳 Compose: app '{}' selected twice; keeping the first", selection.id);
            outcomes.push(BuildOutcome::SkippedDuplicate(selection.id.clone()));
            continue;
        }
        if let Some(rule) = app.arch {
            if rule.flags(std::env::consts::ARCH) {
                warn!("⚠️ {}: {}", app.id, rule.warning);
            }
        }
        outcomes.push(BuildOutcome::Built(service::build(&app, selection, settings)));
    }
    outcomes
}

/// Generate the manifest text for a settings snapshot
pub fn generate(settings: &GlobalSettings) -> String {
    let mut services: Vec<ComposeService> = build_services(settings)
        .into_iter()
        .filter_map(|outcome| match outcome {
            BuildOutcome::Built(service) => Some(service),
            _ => None,
        })
        .collect();
    vpn::route(&mut services, settings);
    info!("🐳 Compose: generated {} service(s)", services.len());
    yaml::serialize(&services)
}

/// Generate, write the manifest, and mirror the global ids into the env
/// store. Returns the manifest path written.
pub fn persist(settings: &GlobalSettings) -> Result<String, String> {
    let manifest = generate(settings);
    crate::envfile::write_atomic(&settings.compose_file, &manifest)?;
    crate::envfile::update(&settings.env_file, &[
        ("ROOT_DIR", settings.root_dir.clone()),
        ("TIMEZONE", settings.timezone.clone()),
        ("PUID", settings.puid.to_string()),
        ("PGID", settings.pgid.to_string()),
        ("UMASK", settings.umask.clone()),
    ])?;
    info!("🐳 Compose: wrote {}", settings.compose_file);
    Ok(settings.compose_file.clone())
}
