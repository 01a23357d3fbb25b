use dioxus::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use posterboard_config::Config;
use ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("posterboard starting up");

    let export_dir = resolve_export_dir();
    log::info!("exporting posters to {}", export_dir.display());

    if let Err(e) = std::fs::create_dir_all(&export_dir) {
        eprintln!(
            "Error: cannot create export directory '{}': {e}",
            export_dir.display()
        );
        process::exit(1);
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

/// Export directory: CLI argument, then config file, then the current
/// directory.
fn resolve_export_dir() -> PathBuf {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => match Config::load() {
            Ok(Some(config)) => {
                log::info!(
                    "loaded export directory from config: {}",
                    config.export_dir.display()
                );
                config.export_dir
            }
            Ok(None) => {
                log::info!("no config file found, exporting to the current directory");
                Config::default().export_dir
            }
            Err(e) => {
                eprintln!("Error: failed to load config file: {e}");
                eprintln!("Fix or remove {}", Config::config_path().display());
                process::exit(1);
            }
        },
        2 => PathBuf::from(&args[1]),
        _ => {
            let program_name = env::args()
                .next()
                .unwrap_or_else(|| "posterboard".to_string());
            eprintln!("Usage: {program_name} [export-dir]");
            process::exit(1);
        }
    }
}

fn app_root() -> Element {
    // launch takes a plain fn, so the export dir is re-derived here with the
    // same precedence as in main
    let export_dir = resolve_export_dir();

    rsx! {
        App { export_dir: export_dir }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("posterboard")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
