//! Factory Defaults
//!
//! The document a fresh install starts from.

use std::collections::BTreeMap;

use super::config::{
    CatchConfig, ConfigDocument, DiscordConfig, GeneralConfig, ShopConfig, ShopEntry,
    StatsBallsConfig,
};
use crate::constants::{POKE_BALLS, SHOP_PRICE_FLOORS};

const A_BALLS: &[&str] = &[
    "ultra_ball",
    "great_ball",
    "timer_ball",
    "quick_ball",
    "level_ball",
    "lure_ball",
    "moon_ball",
    "friend_ball",
    "love_ball",
    "fast_ball",
    "heavy_ball",
    "net_ball",
    "dive_ball",
    "nest_ball",
    "repeat_ball",
    "dusk_ball",
    "luxury_ball",
    "premier_ball",
];

const B_BALLS: &[&str] = &[
    "great_ball",
    "timer_ball",
    "quick_ball",
    "net_ball",
    "dive_ball",
    "dusk_ball",
    "nest_ball",
    "repeat_ball",
];

const C_BALLS: &[&str] = &["poke_ball", "great_ball", "premier_ball"];

const UNCAPT_C_BALLS: &[&str] = &[
    "poke_ball",
    "great_ball",
    "premier_ball",
    "timer_ball",
    "quick_ball",
];

fn owned(balls: &[&str]) -> Vec<String> {
    balls.iter().map(|b| b.to_string()).collect()
}

fn without(balls: &[&str], excluded: &str) -> Vec<String> {
    balls
        .iter()
        .filter(|b| **b != excluded)
        .map(|b| b.to_string())
        .collect()
}

fn default_tiers() -> BTreeMap<String, Vec<String>> {
    // Repeat balls only work on species already caught
    let mut uncapt_b = without(B_BALLS, "repeat_ball");
    uncapt_b.push("ultra_ball".to_string());

    let mission = without(POKE_BALLS, "master_ball");
    let uncapt_mission: Vec<String> = mission
        .iter()
        .filter(|b| *b != "repeat_ball")
        .cloned()
        .collect();

    BTreeMap::from([
        ("S".to_string(), owned(POKE_BALLS)),
        ("uncapt_S".to_string(), without(POKE_BALLS, "repeat_ball")),
        ("A".to_string(), owned(A_BALLS)),
        ("uncapt_A".to_string(), without(A_BALLS, "repeat_ball")),
        ("B".to_string(), owned(B_BALLS)),
        ("uncapt_B".to_string(), uncapt_b),
        ("C".to_string(), owned(C_BALLS)),
        ("uncapt_C".to_string(), owned(UNCAPT_C_BALLS)),
        ("M".to_string(), mission),
        ("uncapt_M".to_string(), uncapt_mission),
    ])
}

/// Fully populated default document
pub fn factory_document() -> ConfigDocument {
    let shop = SHOP_PRICE_FLOORS
        .iter()
        .map(|(ball, one, ten)| {
            (
                ball.to_string(),
                ShopEntry {
                    buy_on_missing: Some(true),
                    buy_one: Some(i64::from(*one)),
                    buy_ten: Some(i64::from(*ten)),
                    ..ShopEntry::default()
                },
            )
        })
        .collect();

    ConfigDocument {
        general: GeneralConfig::default(),
        shop: ShopConfig { balls: shop },
        catch: CatchConfig {
            treat_uncapt_as_capt: Some(false),
            tiers: default_tiers(),
        },
        stats_balls: StatsBallsConfig {
            heavy_ball: Some(200),
            feather_ball: Some(50),
            heal_ball: Some(100),
            fast_ball: Some(150),
            ..StatsBallsConfig::default()
        },
        discord: DiscordConfig {
            enabled: Some(false),
            webhook_url: Some(String::new()),
            ping_user: Some(false),
            ..DiscordConfig::default()
        },
        ..ConfigDocument::default()
    }
}
