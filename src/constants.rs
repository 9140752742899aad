//! Editor Constants
//!
//! Fixed names, file locations and validation bounds shared across modules.

/// Project directory qualifiers (`ProjectDirs::from`)
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "pokeagent";
pub const APP_NAME: &str = "agent-config";

/// File names inside the config/data directories
pub const SETTINGS_FILE: &str = "editor.toml";
pub const DOCUMENT_FILE: &str = "config.json";
pub const LOG_FILE_PREFIX: &str = "agent-config.log";

/// Root presentation attribute carrying the theme name
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Channel used when a document does not name one
pub const DEFAULT_CHANNEL: &str = "deemonrider";

/// Every ball name a capture tier may reference
pub const POKE_BALLS: &[&str] = &[
    "poke_ball",
    "great_ball",
    "ultra_ball",
    "master_ball",
    "premier_ball",
    "timer_ball",
    "quick_ball",
    "level_ball",
    "lure_ball",
    "moon_ball",
    "friend_ball",
    "love_ball",
    "fast_ball",
    "heavy_ball",
    "feather_ball",
    "heal_ball",
    "net_ball",
    "dive_ball",
    "nest_ball",
    "repeat_ball",
    "dusk_ball",
    "luxury_ball",
    "phantom_ball",
    "night_ball",
    "frozen_ball",
    "cipher_ball",
    "magnet_ball",
    "fantasy_ball",
    "geo_ball",
    "types_ball",
    "stats_ball",
    "timers_ball",
];

/// Balls the agent scores that the factory tiers never list
pub const EVENT_BALLS: &[&str] = &[
    "cherish_ball",
    "great_cherish_ball",
    "ultra_cherish_ball",
    "buddy_ball",
    "stone_ball",
    "clone_ball",
];

/// Capture tiers in display order
pub const CATCH_TIERS: &[&str] = &[
    "S", "uncapt_S", "A", "uncapt_A", "B", "uncapt_B", "C", "uncapt_C", "M", "uncapt_M",
];

/// Shop price floors: (ball, buy_one minimum, buy_ten minimum). Only these
/// balls can be bought.
pub const SHOP_PRICE_FLOORS: &[(&str, u32, u32)] = &[
    ("poke_ball", 300, 3000),
    ("great_ball", 600, 6000),
    ("ultra_ball", 1000, 10000),
];
