use blockdoc_config::{Config, DEFAULT_HEADER_OFFSET};
use blockdoc_engine::io;
use dioxus::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::App;

/// Where the documents come from and how the viewer scrolls to headings.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    documents_path: PathBuf,
    header_offset: f64,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("blockdoc starting up!");

    let settings = match resolve_settings() {
        Ok(settings) => settings,
        Err(message) => {
            eprintln!("Error: {message}");
            let program_name = env::args()
                .next()
                .unwrap_or_else(|| "blockdoc-dioxus".to_string());
            eprintln!("Usage: {program_name} [documents-folder-path]");
            eprintln!("Or create a config file at {}", Config::config_path().display());
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_documents_dir(&settings.documents_path) {
        eprintln!(
            "Error: Documents path '{}' is invalid: {e}",
            settings.documents_path.display()
        );
        process::exit(1);
    }

    log::info!(
        "Serving documents from {} (header offset {}px)",
        settings.documents_path.display(),
        settings.header_offset
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(settings)
        .launch(app_root);
}

/// Documents path from the first CLI argument, falling back to the config file.
fn resolve_settings() -> Result<Settings, String> {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        2 => {
            log::info!("Using documents path from CLI argument: {}", args[1]);
            let header_offset = match Config::load() {
                Ok(Some(config)) => config.header_offset,
                Ok(None) => DEFAULT_HEADER_OFFSET,
                Err(e) => {
                    log::warn!("Ignoring unreadable config file: {e}");
                    DEFAULT_HEADER_OFFSET
                }
            };
            Ok(Settings {
                documents_path: PathBuf::from(&args[1]),
                header_offset,
            })
        }
        1 => match Config::load() {
            Ok(Some(config)) => {
                log::info!(
                    "Loaded documents path from config: {}",
                    config.documents_path.display()
                );
                Ok(Settings {
                    documents_path: config.documents_path,
                    header_offset: config.header_offset,
                })
            }
            Ok(None) => Err("No documents path provided and no config file found".to_string()),
            Err(e) => Err(format!("Failed to load config file: {e}")),
        },
        _ => Err("Too many arguments".to_string()),
    }
}

fn app_root() -> Element {
    let settings = use_context::<Settings>();

    rsx! {
        App {
            documents_path: settings.documents_path,
            header_offset: settings.header_offset,
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("blockdoc")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
