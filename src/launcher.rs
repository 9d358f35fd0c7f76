use crate::arguments::game_arguments;
use crate::discovery::process_env;
use crate::environment::steam_environment;
use crate::error::{LauncherError, Result};
use crate::hwrc_config::STEAM_STUB;
use crate::steam::Installation;
use crate::variant::{LaunchOptions, Variant};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::env;
use std::ffi::OsString;
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::Command;

/// Everything needed to replace this process with the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub working_dir: PathBuf,
    pub binary: PathBuf,
    /// Full argument vector, `argv[0]` included.
    pub argv: Vec<String>,
    /// Kept as raw OS strings so nothing inherited is lost; JSON output is lossy.
    #[serde(serialize_with = "serialize_env_lossy")]
    pub env: BTreeMap<OsString, OsString>,
}

fn serialize_env_lossy<S>(
    env: &BTreeMap<OsString, OsString>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(
        env.iter()
            .map(|(key, value)| (key.to_string_lossy(), value.to_string_lossy())),
    )
}

/// Replaces the running process. Only returns when that failed.
pub trait ProcessImage {
    fn replace(&self, plan: &LaunchPlan) -> LauncherError;
}

/// Real `execve` through std's `CommandExt::exec`.
pub struct SystemImage;

impl ProcessImage for SystemImage {
    fn replace(&self, plan: &LaunchPlan) -> LauncherError {
        if let Err(source) = env::set_current_dir(&plan.working_dir) {
            return LauncherError::ChangeDirectory {
                path: plan.working_dir.clone(),
                source,
            };
        }

        let mut command = Command::new(&plan.binary);
        if let Some((arg0, rest)) = plan.argv.split_first() {
            command.arg0(arg0).args(rest);
        }
        command.env_clear().envs(&plan.env);

        let source = command.exec();
        LauncherError::Exec {
            binary: plan.binary.clone(),
            source,
        }
    }
}

/// Composes discovery, argument assembly and environment building, then hands
/// the result to a [`ProcessImage`].
pub struct Launcher<X: ProcessImage> {
    installation: Installation,
    image: X,
}

impl<X: ProcessImage> Launcher<X> {
    pub fn new(installation: Installation, image: X) -> Self {
        Self {
            installation,
            image,
        }
    }

    pub fn installation(&self) -> &Installation {
        &self.installation
    }

    pub fn plan(&self, variant: Variant, options: &LaunchOptions) -> Result<LaunchPlan> {
        self.plan_with(variant, options, process_env, env::vars_os())
    }

    fn plan_with<F, I>(
        &self,
        variant: Variant,
        options: &LaunchOptions,
        lookup: F,
        inherited: I,
    ) -> Result<LaunchPlan>
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let game = game_arguments(variant, options, self.installation.game_root(), lookup)?;
        let binary = self.installation.wine_binary();

        let mut argv = Vec::with_capacity(game.args.len() + 2);
        argv.push(binary.to_string_lossy().into_owned());
        argv.push(STEAM_STUB.to_string());
        argv.extend(game.args);

        let env = steam_environment(
            self.installation.client_path(),
            self.installation.proton_path(),
            inherited,
        );

        Ok(LaunchPlan {
            working_dir: game.working_dir,
            binary,
            argv,
            env,
        })
    }

    /// Runs the game. Never returns on success; a failed replacement is final.
    pub fn run(&self, variant: Variant, options: &LaunchOptions) -> LauncherError {
        match self.plan(variant, options) {
            Ok(plan) => self.exec(&plan),
            Err(err) => err,
        }
    }

    /// Same as [`Launcher::run`] for a variant id typed by the user.
    pub fn run_named(&self, game: &str, options: &LaunchOptions) -> LauncherError {
        match game.parse::<Variant>() {
            Ok(variant) => self.run(variant, options),
            Err(err) => err,
        }
    }

    pub fn exec(&self, plan: &LaunchPlan) -> LauncherError {
        log::debug!(
            "Running binary={} args={:?} cwd={}",
            plan.binary.display(),
            plan.argv,
            plan.working_dir.display()
        );
        self.image.replace(plan)
    }
}
