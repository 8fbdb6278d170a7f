// Written by Paul Clevett
// (C)Copyright Wolf Software Systems Ltd
// https://wolf.uk.com

//! WolfCompose — Docker Compose stack generator for self-hosted home servers
//!
//! Turns a declarative settings file (which catalogue apps you want, VPN
//! mode, reverse-proxy options) into a docker-compose manifest:
//! - Builds one service per enabled app from the built-in catalogue
//! - Optionally routes selected services through a VPN gateway (gluetun)
//! - Optionally synthesizes Traefik reverse-proxy labels
//! - Mirrors ROOT_DIR/TIMEZONE/PUID/PGID/UMASK into the compose env store

mod compose;
mod envfile;
mod registry;
mod settings;

use clap::{Parser, Subcommand};
use settings::GlobalSettings;
use tracing::error;

/// WolfCompose — stack generator for self-hosted home servers
#[derive(Parser)]
#[command(name = "wolfcompose", version, about = "Generate docker-compose stacks from a settings file")]
struct Cli {
    /// Path to the settings file
    #[arg(short, long, default_value = settings::DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the generated manifest to stdout without writing anything
    Generate,
    /// Write the manifest and update the env store
    Write,
    /// List the app catalogue
    Apps {
        /// Filter by category (media-manager, downloader, vpn, ...)
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by a free-text search over name and description
        #[arg(short, long)]
        query: Option<String>,
        /// Emit the catalogue as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wolfcompose=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Generate => {
            let settings = GlobalSettings::load(&cli.config)?;
            print!("{}", compose::generate(&settings));
            Ok(())
        }
        Command::Write => {
            let settings = GlobalSettings::load(&cli.config)?;
            let path = compose::persist(&settings)?;
            println!("Wrote {}", path);
            Ok(())
        }
        Command::Apps { category, query, json } => {
            let apps = registry::list_apps(query.as_deref(), category.as_deref());
            if json {
                let out = serde_json::to_string_pretty(&apps)
                    .map_err(|e| format!("Failed to serialize catalogue: {}", e))?;
                println!("{}", out);
            } else {
                for app in apps {
                    println!(
                        "{:<16} {:<16} {:>6}  {}",
                        app.id,
                        app.category.name(),
                        app.default_port,
                        app.description
                    );
                }
            }
            Ok(())
        }
    }
}
