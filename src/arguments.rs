use crate::discovery::find_first_existing;
use crate::error::Result;
use crate::hwrc_config::{DEFAULT_REMASTERED_PATHS, GAME_ROOT_VAR, WORKSHOP_MOD_FLAG};
use crate::variant::{ExeLocation, LaunchOptions, Variant};
use std::path::{Path, PathBuf};

/// Working directory plus `[game exe, flags...]` for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameArguments {
    pub working_dir: PathBuf,
    pub args: Vec<String>,
}

/// Determines the exact arguments the game needs to start under Steam.
///
/// The Remastered directory is searched for only when the variant needs it.
pub fn game_arguments<F>(
    variant: Variant,
    options: &LaunchOptions,
    game_root: &Path,
    lookup: F,
) -> Result<GameArguments>
where
    F: Fn(&str) -> Option<String>,
{
    let spec = variant.spec();
    let game_exe = match spec.exe {
        ExeLocation::GameRoot(relative) => game_root.join(relative),
        ExeLocation::Remastered(exe) => remastered_dir(game_root, lookup)?.join(exe),
    };

    let mut args = Vec::with_capacity(spec.base_args.len() + 3);
    args.push(game_exe.to_string_lossy().into_owned());
    args.extend(spec.base_args.iter().map(|a| a.to_string()));
    if options.windowed {
        args.push(spec.windowed_flag.to_string());
    }
    if let Some(mod_path) = &options.mod_path {
        args.push(format!("{WORKSHOP_MOD_FLAG} {mod_path}"));
    }

    let working_dir = game_exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| game_root.to_path_buf());
    Ok(GameArguments { working_dir, args })
}

fn remastered_dir<F>(game_root: &Path, lookup: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let root = game_root.to_string_lossy().into_owned();
    find_first_existing("HomeworldRM", DEFAULT_REMASTERED_PATHS, |name: &str| {
        if name == GAME_ROOT_VAR {
            Some(root.clone())
        } else {
            lookup(name)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LauncherError;
    use std::fs;
    use tempfile::TempDir;

    fn game_root_with_rm() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("HomeworldRM/Bin/Release")).unwrap();
        dir
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn expected_exe(variant: Variant) -> &'static str {
        match variant {
            Variant::Hw1Classic => "Homeworld.exe",
            Variant::Hw2Classic => "Homeworld2.exe",
            Variant::Hw1Remastered | Variant::Hw2Remastered | Variant::Multiplayer => {
                "HomeworldRM.exe"
            }
        }
    }

    #[test]
    fn every_variant_starts_with_its_executable_then_base_flags() {
        let root = game_root_with_rm();
        for variant in Variant::ALL {
            let out =
                game_arguments(variant, &LaunchOptions::default(), root.path(), no_env).unwrap();
            assert!(out.args[0].ends_with(expected_exe(variant)), "{variant}");
            assert_eq!(&out.args[1..], variant.spec().base_args, "{variant}");
            assert_eq!(Path::new(&out.args[0]).parent().unwrap(), out.working_dir);
        }
    }

    #[test]
    fn remastered_flags_are_reproduced_exactly() {
        let root = game_root_with_rm();
        let out = game_arguments(
            Variant::Hw2Remastered,
            &LaunchOptions::default(),
            root.path(),
            no_env,
        )
        .unwrap();
        assert_eq!(
            out.args[1..],
            [
                "-dlccampaign HW2Campaign.big",
                "-campaign Ascension",
                "-moviepath DataHW2Campaign",
            ]
        );
        assert_eq!(out.working_dir, root.path().join("HomeworldRM/Bin/Release"));
    }

    #[test]
    fn windowed_appends_one_variant_specific_flag() {
        let root = game_root_with_rm();
        for variant in Variant::ALL {
            let plain =
                game_arguments(variant, &LaunchOptions::default(), root.path(), no_env).unwrap();
            let windowed = game_arguments(
                variant,
                &LaunchOptions::new(true, ""),
                root.path(),
                no_env,
            )
            .unwrap();
            assert_eq!(windowed.args.len(), plain.args.len() + 1);
            assert_eq!(windowed.args.last().unwrap(), variant.spec().windowed_flag);
        }

        let hw1 = game_arguments(
            Variant::Hw1Classic,
            &LaunchOptions::new(true, ""),
            root.path(),
            no_env,
        )
        .unwrap();
        assert_eq!(hw1.args[1..], ["/noglddraw", "/window"]);
    }

    #[test]
    fn mod_path_is_passed_verbatim() {
        let root = game_root_with_rm();
        let options = LaunchOptions::new(true, "1190476337/2.3 Players Patch.big");
        let out = game_arguments(Variant::Hw1Remastered, &options, root.path(), no_env).unwrap();
        assert_eq!(out.args.len(), 1 + 3 + 2);
        assert_eq!(
            out.args.last().unwrap(),
            "-workshopmod 1190476337/2.3 Players Patch.big"
        );
    }

    #[test]
    fn classic_variants_do_not_need_remastered_install() {
        let root = tempfile::tempdir().unwrap();
        let out = game_arguments(
            Variant::Hw2Classic,
            &LaunchOptions::default(),
            root.path(),
            no_env,
        )
        .unwrap();
        assert_eq!(
            out.working_dir,
            root.path().join("Homeworld2Classic/Bin/Release")
        );
        assert_eq!(out.args.len(), 1);
    }

    #[test]
    fn missing_remastered_install_is_not_found() {
        let root = tempfile::tempdir().unwrap();
        let err = game_arguments(
            Variant::Multiplayer,
            &LaunchOptions::default(),
            root.path(),
            no_env,
        )
        .unwrap_err();
        assert!(matches!(err, LauncherError::NotFound { what: "HomeworldRM", .. }));
    }
}
