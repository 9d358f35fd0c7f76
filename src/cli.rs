use crate::hwrc_config::{APPLICATION_NAME, DEFAULT_PROTON_VERSION};
use crate::steam::InstallationConfig;
use crate::variant::{LaunchOptions, Variant};
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

/// Options that consume the next argument as their value.
const VALUE_FLAGS: [&str; 5] = ["-m", "-s", "-p", "--steam", "--proton"];

#[derive(Parser, Debug)]
#[command(
    name = APPLICATION_NAME,
    override_usage = "hwrc-proton-launcher [OPTIONS] [GAME]",
    about = "Launcher for the Steam version of Homeworld Remastered Collection.",
    long_about = None,
    disable_help_flag = true,
    after_help = after_help()
)]
pub struct Cli {
    /// Windowed mode
    #[arg(short = 'w')]
    pub windowed: bool,

    /// Load mod at the given path (see below for details)
    #[arg(
        short = 'm',
        value_name = "modPath",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub mod_path: String,

    /// Display verbose output, for debugging purposes
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Display this help
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Steam install to use before the default locations
    #[arg(short = 's', long = "steam", value_name = "PATH", allow_hyphen_values = true)]
    pub steam_path: Option<PathBuf>,

    /// Proton version installed under steamapps/common
    #[arg(
        short = 'p',
        long = "proton",
        value_name = "VERSION",
        default_value = DEFAULT_PROTON_VERSION,
        allow_hyphen_values = true
    )]
    pub proton_version: String,

    /// Print the launch plan as JSON instead of starting the game
    #[arg(short = 'n', long = "dry-run", requires = "game")]
    pub dry_run: bool,

    /// Game to start; the window opens when omitted
    #[arg(value_name = "GAME")]
    pub game: Option<String>,
}

impl Cli {
    /// Parses the process arguments, accepting the single-dash `-help` too.
    pub fn parse_env() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions::new(self.windowed, self.mod_path.clone())
    }

    pub fn installation_config(&self) -> InstallationConfig {
        InstallationConfig {
            steam_path: self.steam_path.clone(),
            proton_version: self.proton_version.clone(),
        }
    }
}

/// Rewrites `-help` into `--help`; clap would otherwise read it as `-h -e -l -p`.
///
/// Only flag positions are touched: option values and anything after `--`
/// pass through unchanged.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut value_next = false;
    let mut positional_only = false;

    for arg in args {
        if value_next || positional_only {
            value_next = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            positional_only = true;
        } else if arg == "-help" {
            out.push(OsString::from("--help"));
            continue;
        }
        value_next = VALUE_FLAGS.iter().any(|flag| arg == *flag);
        out.push(arg);
    }
    out
}

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    let help = Cli::command().render_help();
    writeln!(out, "{help}")
}

fn after_help() -> String {
    let games: String = Variant::ALL
        .iter()
        .map(|v| format!("\t{:<10} {}\n", v.id(), v.title()))
        .collect();

    format!(
        "This is a launcher application for the Steam version of Homeworld Remastered \
Collection. It can be used as a replacement for Gearbox's launcher which has Linux \
compatibility issues.

WARNING: Steam must be running already before running this tool.

GAME:

{games}
Loading a mod:

The option '-m' requires a path to the mod file. The path can be an absolute path, or a \
relative path to the game DATAWORKSHOPMODS folder. The following folders should be available:
- <STEAM PATH>/steamapps/common/Homeworld/HomeworldRM/DATAWORKSHOPMODS
- <STEAM PATH>/steamapps/common/Homeworld/Homeworld2Classic/DATAWORKSHOPMODS

For example, to load the Homeworld Remastered 2.3 Players Patch using a relative path \
(provided the mod file and any parent folder are in the DATAWORKSHOPMODS folder):

\t{APPLICATION_NAME} hw1rem -m 1190476337/2.3PlayersPatch.big"
    )
}
