//! Manifest serializer — renders built services to compose YAML
//!
//! Hand-rolled on purpose: the quoting rules are part of the contract.
//! Values carrying a `${...}` substitution marker must stay unquoted so
//! docker compose resolves them; port mappings must always be quoted because
//! YAML would otherwise read `8080:8080` as something other than a string.
//! Empty lists and absent fields are omitted to keep manifests diff-friendly.

use super::service::ComposeService;

const HEADER: &str = "\
# Generated by WolfCompose — do not edit by hand.
# Re-running the generator fully overwrites this file.

services:
";

/// Render the full manifest, one block per service in insertion order
pub fn serialize(services: &[ComposeService]) -> String {
    let mut out = String::from(HEADER);
    for (i, service) in services.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_service(&mut out, service);
    }
    out
}

fn write_service(out: &mut String, service: &ComposeService) {
    out.push_str(&format!("  {}:\n", service.name));
    out.push_str(&format!("    image: {}\n", scalar(&service.image)));
    out.push_str(&format!("    container_name: {}\n", service.name));
    if let Some(mode) = &service.network_mode {
        out.push_str(&format!("    network_mode: {}\n", scalar(mode)));
    }
    if !service.environment.is_empty() {
        out.push_str("    environment:\n");
        for (key, value) in &service.environment {
            out.push_str(&format!("      {}: {}\n", key, scalar(value)));
        }
    }
    if !service.volumes.is_empty() {
        out.push_str("    volumes:\n");
        for volume in &service.volumes {
            out.push_str(&format!("      - {}\n", scalar(volume)));
        }
    }
    if !service.ports.is_empty() {
        out.push_str("    ports:\n");
        for port in &service.ports {
            out.push_str(&format!("      - \"{}\"\n", port));
        }
    }
    if !service.devices.is_empty() {
        out.push_str("    devices:\n");
        for device in &service.devices {
            out.push_str(&format!("      - {}\n", scalar(device)));
        }
    }
    if !service.cap_add.is_empty() {
        out.push_str("    cap_add:\n");
        for cap in &service.cap_add {
            out.push_str(&format!("      - {}\n", cap));
        }
    }
    if !service.labels.is_empty() {
        out.push_str("    labels:\n");
        for label in &service.labels {
            out.push_str(&format!("      - {}\n", scalar(label)));
        }
    }
    if !service.depends_on.is_empty() {
        out.push_str("    depends_on:\n");
        for dep in &service.depends_on {
            out.push_str(&format!("      - {}\n", dep));
        }
    }
    out.push_str(&format!("    restart: {}\n", service.restart));
}

/// Quote a scalar only when YAML would otherwise misread it. Substitution
/// markers are never quoted so compose interpolation sees them.
fn scalar(value: &str) -> String {
    if value.contains("${") {
        return value.to_string();
    }
    let misreadable = value.is_empty()
        || value.parse::<f64>().is_ok()
        || value.starts_with(' ')
        || value.ends_with(' ')
        || value.chars().any(|c| ":#{}[]&*!|>'\"%@".contains(c))
        || matches!(value, "true" | "false" | "yes" | "no" | "null" | "~" | "on" | "off");
    if misreadable {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}
