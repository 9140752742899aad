//! Shop Editor
//!
//! Per-ball purchase rules. Price fields carry their own validity flags.

use std::collections::BTreeSet;

use super::SectionEditor;
use crate::domain::{ShopConfig, ShopEntry};
use crate::validation::{PriceField, is_shop_ball, price_bounds};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopEdit {
    BuyOnMissing { ball: String, value: bool },
    ToggleBuyOnMissing { ball: String },
    Price { ball: String, field: PriceField, value: i64 },
}

#[derive(Debug, Clone, Default)]
pub struct ShopEditor {
    /// `(ball, field)` pairs whose last entered value is out of bounds
    invalid: BTreeSet<(String, &'static str)>,
    /// Entries for balls the shop does not sell
    unknown: BTreeSet<String>,
}

impl ShopEditor {
    pub fn new(current: &ShopConfig) -> Self {
        let mut editor = Self::default();
        editor.revalidate(current);
        editor
    }

    pub fn price_valid(&self, ball: &str, field: PriceField) -> bool {
        !self.invalid.contains(&(ball.to_string(), field.name()))
    }

    pub fn ball_valid(&self, ball: &str) -> bool {
        !self.unknown.contains(ball)
    }

    pub fn all_valid(&self) -> bool {
        self.invalid.is_empty() && self.unknown.is_empty()
    }

    /// Recompute every flag from a section value
    pub fn revalidate(&mut self, current: &ShopConfig) {
        self.invalid.clear();
        self.unknown.clear();
        for (ball, entry) in &current.balls {
            self.track_ball(ball);
            for (field, value) in [
                (PriceField::BuyOne, entry.buy_one),
                (PriceField::BuyTen, entry.buy_ten),
            ] {
                if let Some(value) = value {
                    self.track(ball, field, value);
                }
            }
        }
    }

    fn track_ball(&mut self, ball: &str) {
        if !is_shop_ball(ball) {
            self.unknown.insert(ball.to_string());
        }
    }

    fn track(&mut self, ball: &str, field: PriceField, value: i64) {
        let key = (ball.to_string(), field.name());
        if price_bounds(ball, field).accepts(value) {
            self.invalid.remove(&key);
        } else {
            self.invalid.insert(key);
        }
    }
}

impl SectionEditor for ShopEditor {
    type Section = ShopConfig;
    type Edit = ShopEdit;

    fn apply(&mut self, current: &ShopConfig, edit: ShopEdit) -> ShopConfig {
        let mut next = current.clone();
        let ball = match &edit {
            ShopEdit::BuyOnMissing { ball, .. }
            | ShopEdit::ToggleBuyOnMissing { ball }
            | ShopEdit::Price { ball, .. } => ball.clone(),
        };
        self.track_ball(&ball);
        match edit {
            ShopEdit::BuyOnMissing { ball, value } => {
                next.balls.entry(ball).or_default().buy_on_missing = Some(value);
            }
            ShopEdit::ToggleBuyOnMissing { ball } => {
                let enabled = current
                    .entry(&ball)
                    .is_some_and(ShopEntry::buy_on_missing);
                next.balls.entry(ball).or_default().buy_on_missing = Some(!enabled);
            }
            ShopEdit::Price { ball, field, value } => {
                self.track(&ball, field, value);
                let entry = next.balls.entry(ball).or_default();
                match field {
                    PriceField::BuyOne => entry.buy_one = Some(value),
                    PriceField::BuyTen => entry.buy_ten = Some(value),
                }
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory_document;

    #[test]
    fn price_edit_keeps_other_fields_and_balls() {
        let current = factory_document().shop;
        let mut editor = ShopEditor::new(&current);

        let next = editor.apply(
            &current,
            ShopEdit::Price {
                ball: "great_ball".to_string(),
                field: PriceField::BuyTen,
                value: 7000,
            },
        );

        let great = next.entry("great_ball").expect("great_ball");
        assert_eq!(great.buy_ten, Some(7000));
        assert_eq!(great.buy_one, Some(600));
        assert_eq!(great.buy_on_missing, Some(true));
        assert_eq!(next.entry("poke_ball"), current.entry("poke_ball"));
        assert!(editor.all_valid());
    }

    #[test]
    fn price_below_floor_is_stored_and_flagged() {
        let current = factory_document().shop;
        let mut editor = ShopEditor::new(&current);

        let next = editor.apply(
            &current,
            ShopEdit::Price {
                ball: "ultra_ball".to_string(),
                field: PriceField::BuyOne,
                value: 10,
            },
        );

        assert_eq!(next.entry("ultra_ball").and_then(|e| e.buy_one), Some(10));
        assert!(!editor.price_valid("ultra_ball", PriceField::BuyOne));
        assert!(editor.price_valid("ultra_ball", PriceField::BuyTen));

        let fixed = editor.apply(
            &next,
            ShopEdit::Price {
                ball: "ultra_ball".to_string(),
                field: PriceField::BuyOne,
                value: 1000,
            },
        );
        assert_eq!(fixed.entry("ultra_ball").and_then(|e| e.buy_one), Some(1000));
        assert!(editor.all_valid());
    }

    #[test]
    fn unsold_ball_is_stored_and_flagged() {
        let current = factory_document().shop;
        let mut editor = ShopEditor::new(&current);

        let next = editor.apply(
            &current,
            ShopEdit::Price {
                ball: "master_ball".to_string(),
                field: PriceField::BuyOne,
                value: 1,
            },
        );

        assert_eq!(next.entry("master_ball").and_then(|e| e.buy_one), Some(1));
        assert!(!editor.ball_valid("master_ball"));
        assert!(editor.ball_valid("great_ball"));
        assert!(!editor.all_valid());

        let mut removed = next.clone();
        removed.balls.remove("master_ball");
        editor.revalidate(&removed);
        assert!(editor.all_valid());
    }

    #[test]
    fn toggle_on_missing_entry_creates_it() {
        let mut editor = ShopEditor::default();
        let next = editor.apply(
            &ShopConfig::default(),
            ShopEdit::ToggleBuyOnMissing {
                ball: "poke_ball".to_string(),
            },
        );
        let entry = next.entry("poke_ball").expect("created");
        assert_eq!(entry.buy_on_missing, Some(true));
        assert_eq!(entry.buy_one, None);
    }
}
