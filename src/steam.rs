use crate::discovery::find_first_existing;
use crate::error::Result;
use crate::hwrc_config::{DEFAULT_PROTON_VERSION, DEFAULT_STEAM_PATHS};
use std::path::{Path, PathBuf};

/// Where to look for Steam and which Proton to use.
#[derive(Debug, Clone)]
pub struct InstallationConfig {
    /// Checked before the default locations when set.
    pub steam_path: Option<PathBuf>,
    pub proton_version: String,
}

impl Default for InstallationConfig {
    fn default() -> Self {
        Self {
            steam_path: None,
            proton_version: DEFAULT_PROTON_VERSION.to_string(),
        }
    }
}

impl InstallationConfig {
    fn steam_candidates(&self) -> Vec<String> {
        self.steam_path
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .chain(DEFAULT_STEAM_PATHS.iter().map(|p| p.to_string()))
            .collect()
    }
}

/// Resolved Steam, Proton and Homeworld roots. Fixed once discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    client_path: PathBuf,
    proton_path: PathBuf,
    game_root: PathBuf,
}

impl Installation {
    pub fn discover<F>(config: &InstallationConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_path = find_first_existing("Steam", config.steam_candidates(), lookup)?;
        let installation = Self::from_client(client_path, &config.proton_version);
        if !installation.proton_path.is_dir() {
            log::warn!(
                "Proton {} not found at {}",
                config.proton_version,
                installation.proton_path.display()
            );
        }
        Ok(installation)
    }

    pub fn from_client(client_path: PathBuf, proton_version: &str) -> Self {
        let common = client_path.join("steamapps").join("common");
        Self {
            proton_path: common.join(format!("Proton {proton_version}")),
            game_root: common.join("Homeworld"),
            client_path,
        }
    }

    pub fn client_path(&self) -> &Path {
        &self.client_path
    }

    pub fn proton_path(&self) -> &Path {
        &self.proton_path
    }

    pub fn game_root(&self) -> &Path {
        &self.game_root
    }

    /// The wine binary shipped with Proton.
    pub fn wine_binary(&self) -> PathBuf {
        self.proton_path.join("dist").join("bin").join("wine")
    }
}
