mod arguments;
mod cli;
mod discovery;
mod environment;
mod error;
mod hwrc_config;
mod launcher;
mod launcher_ui;
mod process_utils;
mod steam;
mod variant;

use crate::cli::Cli;
use crate::discovery::process_env;
use crate::error::{LauncherError, Result};
use crate::hwrc_config::STEAM_PROCESS_NAME;
use crate::launcher::{Launcher, SystemImage};
use crate::launcher_ui::LauncherUi;
use crate::process_utils::{SystemProcesses, require_running};
use crate::steam::Installation;
use env_logger::Env;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_env();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let mut stdout = io::stdout();
    let status = if cli.help {
        usage_status(&mut stdout)
    } else {
        exit_status(run(&cli), &mut stdout)
    };
    ExitCode::from(status)
}

/// Help was asked for: print usage and exit non-zero.
fn usage_status<W: Write>(out: &mut W) -> u8 {
    if let Err(err) = cli::write_help(out) {
        log::error!("unable to print help: {err}");
    }
    1
}

/// Every error is fatal. An unknown game also gets the usage text.
fn exit_status<W: Write>(result: Result<()>, out: &mut W) -> u8 {
    match result {
        Ok(()) => 0,
        Err(LauncherError::UnknownVariant(game)) => {
            log::error!("unknown game '{game}'");
            usage_status(out)
        }
        Err(err) => {
            log::error!("{err}");
            1
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Steam must be found and running before anything is launched.
    let installation = Installation::discover(&cli.installation_config(), process_env)?;
    require_running(&SystemProcesses, STEAM_PROCESS_NAME)?;
    log::debug!("Using Steam at {}", installation.client_path().display());

    let launcher = Launcher::new(installation, SystemImage);
    let options = cli.launch_options();

    match &cli.game {
        Some(game) if cli.dry_run => {
            let plan = launcher.plan(game.parse()?, &options)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(())
        }
        Some(game) => Err(launcher.run_named(game, &options)),
        None => run_ui(launcher, options),
    }
}

fn run_ui(launcher: Launcher<SystemImage>, options: variant::LaunchOptions) -> Result<()> {
    log::info!("Launching GUI...");
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 320.0])
            .with_maximize_button(false)
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "HWRM Launcher",
        native_options,
        Box::new(|_cc| Ok(Box::new(LauncherUi::new(launcher, options)))),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn status_and_output(result: Result<()>) -> (u8, String) {
        let mut out = Vec::new();
        let status = exit_status(result, &mut out);
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn unknown_game_prints_usage_and_fails() {
        let (status, out) = status_and_output(Err(LauncherError::UnknownVariant("hw3".into())));
        assert_eq!(status, 1);
        assert!(out.contains("GAME:"));
        for variant in variant::Variant::ALL {
            assert!(out.contains(variant.id()));
        }
    }

    #[test]
    fn fatal_errors_fail_without_usage() {
        let errors = [
            LauncherError::NotFound {
                what: "Steam",
                candidates: vec![PathBuf::from("/nowhere")],
            },
            LauncherError::SteamNotRunning,
            LauncherError::Exec {
                binary: PathBuf::from("/opt/wine"),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
        ];
        for err in errors {
            let (status, out) = status_and_output(Err(err));
            assert_eq!(status, 1);
            assert!(out.is_empty());
        }
    }

    #[test]
    fn success_exits_zero_quietly() {
        assert_eq!(status_and_output(Ok(())), (0, String::new()));
    }

    #[test]
    fn help_request_prints_usage_and_fails() {
        let mut out = Vec::new();
        assert_eq!(usage_status(&mut out), 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("hwrc-proton-launcher [OPTIONS] [GAME]"));
        assert!(text.contains("Steam must be running"));
    }
}
