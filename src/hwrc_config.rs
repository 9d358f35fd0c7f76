/// Name of the binary end users see.
pub const APPLICATION_NAME: &str = "hwrc-proton-launcher";

/// Steam app id of Homeworld Remastered Collection.
pub const APP_ID: u32 = 244160;

/// Most stable reported Proton version for Homeworld.
pub const DEFAULT_PROTON_VERSION: &str = "4.11";

/// Executable name of the Steam client as it appears in the process table.
pub const STEAM_PROCESS_NAME: &str = "steam";

pub const DEFAULT_STEAM_PATHS: [&str; 2] = ["$HOME/.local/share/Steam", "$HOME/.steam/steam"];

/// Locations of the Remastered binaries. `$HWRC_GAME_ROOT` is filled in with the
/// resolved game root before expansion, so a local install always wins.
pub const DEFAULT_REMASTERED_PATHS: [&str; 3] = [
    "$HWRC_GAME_ROOT/HomeworldRM/Bin/Release",
    "$HOME/.local/share/Steam/steamapps/common/Homeworld/HomeworldRM/Bin/Release",
    "$HOME/.steam/steam/steamapps/common/Homeworld/HomeworldRM/Bin/Release",
];

pub const GAME_ROOT_VAR: &str = "HWRC_GAME_ROOT";

/// Wine is always started through Steam's stub so the game sees the client.
pub const STEAM_STUB: &str = "steam.exe";

pub const WORKSHOP_MOD_FLAG: &str = "-workshopmod";

pub const WINE_DLL_OVERRIDES: &str =
    "steam.exe=b;mfplay=n;d3d11=n;d3d10=n;d3d10core=n;d3d10_1=n;dxgi=n";

pub const HOST_LIBRARY_PATHS: [&str; 8] = [
    "/usr/lib/x86_64-linux-gnu/libfakeroot",
    "/lib/i386-linux-gnu",
    "/usr/local/lib",
    "/lib/x86_64-linux-gnu",
    "/lib",
    "/lib/i386-linux-gnu/sse2",
    "/lib/i386-linux-gnu/i686",
    "/lib/i386-linux-gnu/i686/sse2",
];

/// Steam runtime library directories, relative to the Steam root.
pub const STEAM_RUNTIME_LIBRARY_PATHS: [&str; 8] = [
    "ubuntu12_32/steam-runtime/i386/lib/i386-linux-gnu",
    "ubuntu12_32/steam-runtime/i386/lib",
    "ubuntu12_32/steam-runtime/i386/usr/lib/i386-linux-gnu",
    "ubuntu12_32/steam-runtime/i386/usr/lib",
    "ubuntu12_32/steam-runtime/amd64/lib/x86_64-linux-gnu",
    "ubuntu12_32/steam-runtime/amd64/lib",
    "ubuntu12_32/steam-runtime/amd64/usr/lib/x86_64-linux-gnu",
    "ubuntu12_32/steam-runtime/amd64/usr/lib",
];
