use crate::hwrc_config::{
    APP_ID, HOST_LIBRARY_PATHS, STEAM_RUNTIME_LIBRARY_PATHS, WINE_DLL_OVERRIDES,
};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// `root` followed by `/rest`, without going through UTF-8.
fn under(root: &Path, rest: &str) -> OsString {
    let mut out = root.as_os_str().to_os_string();
    out.push("/");
    out.push(rest);
    out
}

fn join_search_path<I>(parts: I) -> OsString
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = OsString::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push(":");
        }
        out.push(part);
    }
    out
}

/// The environment Steam sets when it launches the game through Steam Play.
///
/// Inherited variables are kept byte for byte unless one of the fixed keys
/// replaces them. The values come from the run script Proton dumps with
/// `PROTON_DUMP_DEBUG_COMMANDS=1 %command%` as launch options (see
/// `/tmp/proton_<user>/run`). Re-check them when Steam or Proton is updated.
pub fn steam_environment<I>(
    steam: &Path,
    proton: &Path,
    inherited: I,
) -> BTreeMap<OsString, OsString>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut env: BTreeMap<OsString, OsString> = inherited.into_iter().collect();

    let mut search_path = vec![
        under(proton, "dist/bin"),
        under(steam, "ubuntu12_32/steam-runtime/amd64/bin"),
        under(steam, "ubuntu12_32/steam-runtime/amd64/usr/bin/"),
    ];
    // an empty entry would put the working directory on the search path
    if let Some(path) = env.get(OsStr::new("PATH")).filter(|p| !p.is_empty()) {
        search_path.push(path.clone());
    }

    let mut library_path = vec![
        under(proton, "dist/lib64"),
        under(proton, "dist/lib"),
        under(steam, "ubuntu12_32/steam-runtime/pinned_libs_32"),
        under(steam, "ubuntu12_32/steam-runtime/pinned_libs_64"),
    ];
    library_path.extend(HOST_LIBRARY_PATHS.iter().map(OsString::from));
    library_path.extend(STEAM_RUNTIME_LIBRARY_PATHS.iter().map(|p| under(steam, p)));

    let overrides = [
        ("PATH", join_search_path(search_path)),
        ("TERM", OsString::from("xterm")),
        ("WINEDEBUG", OsString::from("-all")),
        (
            "WINEDLLPATH",
            join_search_path([under(proton, "dist/lib64/wine"), under(proton, "dist/lib/wine")]),
        ),
        ("LD_LIBRARY_PATH", join_search_path(library_path)),
        (
            "WINEPREFIX",
            under(steam, &format!("steamapps/compatdata/{APP_ID}/pfx/")),
        ),
        ("WINEESYNC", OsString::from("1")),
        ("SteamGameId", OsString::from(APP_ID.to_string())),
        ("SteamAppId", OsString::from(APP_ID.to_string())),
        ("WINEDLLOVERRIDES", OsString::from(WINE_DLL_OVERRIDES)),
        ("STEAM_COMPAT_CLIENT_INSTALL_PATH", steam.as_os_str().to_os_string()),
    ];
    for (key, value) in overrides {
        env.insert(OsString::from(key), value);
    }
    env
}
