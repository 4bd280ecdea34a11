use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use brevan_config::{ConfigLoad, ConfigLoader};
use brevan_model::{Locale, gallery_manifest};
use brevan_site::{Dictionary, NavLabel};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "brevan", about = "La Maison Brevan site tooling")]
struct Cli {
    /// TOML configuration file (defaults to $BREVAN_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Env file with BREVAN_* overrides (defaults to ./.env when present)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved configuration
    Config {
        #[arg(long, value_enum, default_value = "toml")]
        format: Format,
    },
    /// Print the gallery manifest as JSON
    Gallery {
        #[arg(long)]
        compact: bool,
    },
    /// Look up a translation key
    Translate {
        key: String,
        /// Locale code; defaults to the configured default locale
        #[arg(long)]
        locale: Option<Locale>,
    },
    /// Show how a navigation label is split into animated letters
    Nav {
        text: String,
        #[arg(long)]
        html: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Toml,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Config { format } => {
            let load = load_config(cli.config, cli.env_file)?;
            for key in &load.metadata.env_overrides {
                debug!(key, "overridden from environment");
            }
            let rendered = match format {
                Format::Toml => toml::to_string_pretty(&load.config)
                    .context("serializing config as TOML")?,
                Format::Json => serde_json::to_string_pretty(&load.config)
                    .context("serializing config as JSON")?,
            };
            println!("{rendered}");
        }
        Command::Gallery { compact } => {
            let manifest = gallery_manifest();
            let rendered = if compact {
                serde_json::to_string(&manifest)?
            } else {
                serde_json::to_string_pretty(&manifest)?
            };
            println!("{rendered}");
        }
        Command::Translate { key, locale } => {
            let locale = match locale {
                Some(locale) => locale,
                None => {
                    load_config(cli.config, cli.env_file)?
                        .config
                        .site
                        .default_locale
                }
            };
            let dictionary =
                Dictionary::embedded().context("loading translation dictionary")?;
            match dictionary.lookup(locale.code(), &key) {
                Some(text) => println!("{text}"),
                None => bail!("no {locale} translation for `{key}`"),
            }
        }
        Command::Nav { text, html } => {
            let label = NavLabel::new(&text);
            if html {
                println!("{}", label.to_html());
            } else {
                for piece in label.pieces() {
                    match piece.css_delay() {
                        Some(delay) => println!("{:?}\t{delay}", piece.char()),
                        None => println!("{:?}", piece.char()),
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_config(config: Option<PathBuf>, env_file: Option<PathBuf>) -> Result<ConfigLoad> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config {
        loader = loader.with_config_path(path);
    }
    let env_file = env_file.or_else(|| {
        let default = Path::new(".env");
        default.exists().then(|| default.to_path_buf())
    });
    if let Some(path) = env_file {
        loader = loader.with_env_file(path);
    }
    loader.load().context("loading configuration")
}
