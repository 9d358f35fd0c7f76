use crate::error::LauncherError;
use std::fmt;
use std::str::FromStr;

/// Where a variant's executable lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExeLocation {
    /// Relative to the Homeworld game root.
    GameRoot(&'static str),
    /// Inside the discovered Remastered binary directory.
    Remastered(&'static str),
}

/// Fixed launch contract for one variant.
#[derive(Debug)]
pub struct VariantSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub exe: ExeLocation,
    pub base_args: &'static [&'static str],
    pub windowed_flag: &'static str,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Variant {
    Hw1Classic,
    Hw2Classic,
    Hw1Remastered,
    Hw2Remastered,
    Multiplayer,
}

const HW1_CLASSIC: VariantSpec = VariantSpec {
    id: "hw1cla",
    title: "Homeworld 1 Classic",
    exe: ExeLocation::GameRoot("Homeworld1Classic/exe/Homeworld.exe"),
    base_args: &["/noglddraw"],
    windowed_flag: "/window",
};

const HW2_CLASSIC: VariantSpec = VariantSpec {
    id: "hw2cla",
    title: "Homeworld 2 Classic",
    exe: ExeLocation::GameRoot("Homeworld2Classic/Bin/Release/Homeworld2.exe"),
    base_args: &[],
    windowed_flag: "-windowed",
};

const HW1_REMASTERED: VariantSpec = VariantSpec {
    id: "hw1rem",
    title: "Homeworld 1 Remastered",
    exe: ExeLocation::Remastered("HomeworldRM.exe"),
    base_args: &[
        "-dlccampaign HW1Campaign.big",
        "-campaign HomeworldClassic",
        "-moviepath DataHW1Campaign",
    ],
    windowed_flag: "-windowed",
};

const HW2_REMASTERED: VariantSpec = VariantSpec {
    id: "hw2rem",
    title: "Homeworld 2 Remastered",
    exe: ExeLocation::Remastered("HomeworldRM.exe"),
    base_args: &[
        "-dlccampaign HW2Campaign.big",
        "-campaign Ascension",
        "-moviepath DataHW2Campaign",
    ],
    windowed_flag: "-windowed",
};

const MULTIPLAYER: VariantSpec = VariantSpec {
    id: "hwmp",
    title: "Homeworld Remastered Multiplayer",
    exe: ExeLocation::Remastered("HomeworldRM.exe"),
    base_args: &[],
    windowed_flag: "-windowed",
};

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Hw1Classic,
        Variant::Hw2Classic,
        Variant::Hw1Remastered,
        Variant::Hw2Remastered,
        Variant::Multiplayer,
    ];

    pub fn spec(self) -> &'static VariantSpec {
        match self {
            Variant::Hw1Classic => &HW1_CLASSIC,
            Variant::Hw2Classic => &HW2_CLASSIC,
            Variant::Hw1Remastered => &HW1_REMASTERED,
            Variant::Hw2Remastered => &HW2_REMASTERED,
            Variant::Multiplayer => &MULTIPLAYER,
        }
    }

    pub fn id(self) -> &'static str {
        self.spec().id
    }

    pub fn title(self) -> &'static str {
        self.spec().title
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Variant {
    type Err = LauncherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.id() == s)
            .ok_or_else(|| LauncherError::UnknownVariant(s.to_string()))
    }
}

/// User choices for a single launch. Built fresh per launch request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub windowed: bool,
    pub mod_path: Option<String>,
}

impl LaunchOptions {
    /// An empty mod path means "no mod".
    pub fn new(windowed: bool, mod_path: impl Into<String>) -> Self {
        let mod_path = mod_path.into();
        Self {
            windowed,
            mod_path: (!mod_path.is_empty()).then_some(mod_path),
        }
    }
}
