//! Validation Rules
//!
//! Pure predicates over single field values, plus a whole-document pass that
//! collects every failing field. Validation never rejects an edit; it only
//! reports.

use std::fmt;

use crate::constants::{EVENT_BALLS, POKE_BALLS, SHOP_PRICE_FLOORS};
use crate::domain::{CatchConfig, ConfigDocument, SectionKey, ShopConfig, StatsBallsConfig};

/// Channel identifiers are `[A-Za-z0-9]*`, empty allowed.
pub fn is_valid_channel(candidate: &str) -> bool {
    candidate.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Whether a ball name may appear in a capture tier
pub fn is_known_ball(name: &str) -> bool {
    POKE_BALLS
        .iter()
        .chain(EVENT_BALLS)
        .any(|ball| *ball == name)
}

/// Whether the shop sells this ball
pub fn is_shop_ball(name: &str) -> bool {
    SHOP_PRICE_FLOORS.iter().any(|(ball, _, _)| *ball == name)
}

/// Inclusive integer bounds for a numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntBounds {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl IntBounds {
    pub const fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn check(&self, value: i64) -> Option<IssueKind> {
        match (self.min, self.max) {
            (Some(min), _) if value < min => Some(IssueKind::BelowMinimum { min }),
            (_, Some(max)) if value > max => Some(IssueKind::AboveMaximum { max }),
            _ => None,
        }
    }

    pub fn accepts(&self, value: i64) -> bool {
        self.check(value).is_none()
    }
}

/// Stat thresholds editable in the stats-display section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    HeavyBall,
    FeatherBall,
    HealBall,
    FastBall,
}

impl StatField {
    pub const ALL: [StatField; 4] = [
        StatField::HeavyBall,
        StatField::FeatherBall,
        StatField::HealBall,
        StatField::FastBall,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StatField::HeavyBall => "heavy_ball",
            StatField::FeatherBall => "feather_ball",
            StatField::HealBall => "heal_ball",
            StatField::FastBall => "fast_ball",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn bounds(&self) -> IntBounds {
        match self {
            StatField::FeatherBall => IntBounds::between(0, 100),
            StatField::HeavyBall | StatField::HealBall | StatField::FastBall => {
                IntBounds::at_least(100)
            }
        }
    }

    pub fn get(&self, stats: &StatsBallsConfig) -> Option<i64> {
        match self {
            StatField::HeavyBall => stats.heavy_ball,
            StatField::FeatherBall => stats.feather_ball,
            StatField::HealBall => stats.heal_ball,
            StatField::FastBall => stats.fast_ball,
        }
    }

    pub fn slot_mut<'a>(&self, stats: &'a mut StatsBallsConfig) -> &'a mut Option<i64> {
        match self {
            StatField::HeavyBall => &mut stats.heavy_ball,
            StatField::FeatherBall => &mut stats.feather_ball,
            StatField::HealBall => &mut stats.heal_ball,
            StatField::FastBall => &mut stats.fast_ball,
        }
    }
}

/// Which shop price a bound applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceField {
    BuyOne,
    BuyTen,
}

impl PriceField {
    pub fn name(&self) -> &'static str {
        match self {
            PriceField::BuyOne => "buy_one",
            PriceField::BuyTen => "buy_ten",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "buy_one" => Some(PriceField::BuyOne),
            "buy_ten" => Some(PriceField::BuyTen),
            _ => None,
        }
    }
}

/// Price bounds for a ball; balls without a floor only reject negatives
pub fn price_bounds(ball: &str, field: PriceField) -> IntBounds {
    SHOP_PRICE_FLOORS
        .iter()
        .find(|(name, _, _)| *name == ball)
        .map(|(_, one, ten)| match field {
            PriceField::BuyOne => IntBounds::at_least(i64::from(*one)),
            PriceField::BuyTen => IntBounds::at_least(i64::from(*ten)),
        })
        .unwrap_or(IntBounds::at_least(0))
}

/// Why a field failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    InvalidChannel,
    BelowMinimum { min: i64 },
    AboveMaximum { max: i64 },
    UnknownBall { ball: String },
}

/// A failing field, addressed by section and dotted path inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub section: SectionKey,
    pub field: String,
    pub kind: IssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: ", self.section, self.field)?;
        match &self.kind {
            IssueKind::InvalidChannel => f.write_str("only letters and digits are allowed"),
            IssueKind::BelowMinimum { min } => write!(f, "must be at least {min}"),
            IssueKind::AboveMaximum { max } => write!(f, "must be at most {max}"),
            IssueKind::UnknownBall { ball } => write!(f, "unknown ball `{ball}`"),
        }
    }
}

fn issue(section: SectionKey, field: impl Into<String>, kind: IssueKind) -> FieldIssue {
    FieldIssue {
        section,
        field: field.into(),
        kind,
    }
}

pub fn validate_shop(shop: &ShopConfig) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    for (ball, entry) in &shop.balls {
        if !is_shop_ball(ball) {
            issues.push(issue(
                SectionKey::Shop,
                ball.clone(),
                IssueKind::UnknownBall { ball: ball.clone() },
            ));
            continue;
        }
        for (field, value) in [
            (PriceField::BuyOne, entry.buy_one),
            (PriceField::BuyTen, entry.buy_ten),
        ] {
            let Some(value) = value else { continue };
            if let Some(kind) = price_bounds(ball, field).check(value) {
                issues.push(issue(
                    SectionKey::Shop,
                    format!("{ball}.{}", field.name()),
                    kind,
                ));
            }
        }
    }
    issues
}

pub fn validate_catch(catch: &CatchConfig) -> Vec<FieldIssue> {
    catch
        .tiers
        .iter()
        .flat_map(|(tier, balls)| {
            balls
                .iter()
                .filter(|ball| !is_known_ball(ball))
                .map(move |ball| {
                    issue(
                        SectionKey::Catch,
                        tier.clone(),
                        IssueKind::UnknownBall { ball: ball.clone() },
                    )
                })
        })
        .collect()
}

pub fn validate_stats(stats: &StatsBallsConfig) -> Vec<FieldIssue> {
    StatField::ALL
        .into_iter()
        .filter_map(|field| {
            let value = field.get(stats)?;
            let kind = field.bounds().check(value)?;
            Some(issue(SectionKey::StatsBalls, field.name(), kind))
        })
        .collect()
}

/// Every failing field of the document, in section order
pub fn validate_document(doc: &ConfigDocument) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    if !is_valid_channel(&doc.general.channel) {
        issues.push(issue(
            SectionKey::General,
            "channel",
            IssueKind::InvalidChannel,
        ));
    }
    issues.extend(validate_shop(&doc.shop));
    issues.extend(validate_catch(&doc.catch));
    issues.extend(validate_stats(&doc.stats_balls));
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ShopEntry, factory_document};

    #[test]
    fn channel_rule_accepts_empty_and_alphanumeric() {
        assert!(is_valid_channel(""));
        assert!(is_valid_channel("abc123"));
        assert!(is_valid_channel("MixedCase9"));
    }

    #[test]
    fn channel_rule_rejects_anything_else() {
        for bad in ["abc!", "with space", "under_score", "dash-ed", "ção", "tab\t", "é"] {
            assert!(!is_valid_channel(bad), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn factory_document_is_valid() {
        assert!(validate_document(&factory_document()).is_empty());
    }

    #[test]
    fn stat_bounds() {
        assert!(StatField::FeatherBall.bounds().accepts(0));
        assert!(StatField::FeatherBall.bounds().accepts(100));
        assert_eq!(
            StatField::FeatherBall.bounds().check(101),
            Some(IssueKind::AboveMaximum { max: 100 })
        );
        assert_eq!(
            StatField::HeavyBall.bounds().check(99),
            Some(IssueKind::BelowMinimum { min: 100 })
        );
    }

    #[test]
    fn shop_floor_applies_per_ball() {
        let mut shop = ShopConfig::default();
        shop.balls.insert(
            "ultra_ball".to_string(),
            ShopEntry {
                buy_one: Some(999),
                ..ShopEntry::default()
            },
        );
        shop.balls.insert(
            "great_ball".to_string(),
            ShopEntry {
                buy_one: Some(600),
                buy_ten: Some(-5),
                ..ShopEntry::default()
            },
        );

        let issues = validate_shop(&shop);
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["great_ball.buy_ten", "ultra_ball.buy_one"]);
    }

    #[test]
    fn shop_rejects_balls_it_does_not_sell() {
        let mut shop = ShopConfig::default();
        shop.balls.insert(
            "master_ball".to_string(),
            ShopEntry {
                buy_one: Some(1),
                ..ShopEntry::default()
            },
        );

        let issues = validate_shop(&shop);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "shop.master_ball: unknown ball `master_ball`");
        assert!(is_shop_ball("poke_ball"));
        assert!(!is_shop_ball("premier_ball"));
    }

    #[test]
    fn event_balls_are_valid_tier_entries() {
        let mut doc = factory_document();
        doc.catch.tiers.insert(
            "S".to_string(),
            ["cherish_ball", "buddy_ball", "ultra_ball", "stone_ball", "clone_ball"]
                .map(String::from)
                .to_vec(),
        );
        doc.catch.tiers.insert(
            "A".to_string(),
            vec!["great_cherish_ball".to_string(), "ultra_cherish_ball".to_string()],
        );
        assert!(validate_document(&doc).is_empty());
    }

    #[test]
    fn unknown_tier_ball_is_reported() {
        let mut doc = factory_document();
        doc.catch
            .tiers
            .insert("C".to_string(), vec!["poke_ball".to_string(), "rock".to_string()]);
        doc.general.channel = "bad channel".to_string();

        let issues = validate_document(&doc);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].kind, IssueKind::InvalidChannel);
        assert_eq!(
            issues[1].to_string(),
            "catch.C: unknown ball `rock`"
        );
    }
}
