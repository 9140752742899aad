//! Capture Editor
//!
//! Tier ball lists and the treat-uncaptured-as-captured switch. Tier lists
//! are ordered by preference.

use std::collections::BTreeSet;

use super::SectionEditor;
use crate::domain::CatchConfig;
use crate::validation::is_known_ball;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatchEdit {
    TreatUncaptAsCapt(bool),
    ToggleTreatUncaptAsCapt,
    /// Append a ball to a tier unless already listed
    AddBall { tier: String, ball: String },
    RemoveBall { tier: String, ball: String },
    /// Move the ball at `from` to position `to`
    MoveBall { tier: String, from: usize, to: usize },
    SetTier { tier: String, balls: Vec<String> },
}

#[derive(Debug, Clone, Default)]
pub struct CatchEditor {
    /// Tiers currently listing an unknown ball
    invalid_tiers: BTreeSet<String>,
}

impl CatchEditor {
    pub fn new(current: &CatchConfig) -> Self {
        Self {
            invalid_tiers: current
                .tiers
                .iter()
                .filter(|(_, balls)| !balls.iter().all(|b| is_known_ball(b)))
                .map(|(tier, _)| tier.clone())
                .collect(),
        }
    }

    pub fn tier_valid(&self, tier: &str) -> bool {
        !self.invalid_tiers.contains(tier)
    }

    fn track(&mut self, tier: &str, balls: &[String]) {
        if balls.iter().all(|b| is_known_ball(b)) {
            self.invalid_tiers.remove(tier);
        } else {
            self.invalid_tiers.insert(tier.to_string());
        }
    }
}

impl SectionEditor for CatchEditor {
    type Section = CatchConfig;
    type Edit = CatchEdit;

    fn apply(&mut self, current: &CatchConfig, edit: CatchEdit) -> CatchConfig {
        let mut next = current.clone();
        let touched = match edit {
            CatchEdit::TreatUncaptAsCapt(value) => {
                next.treat_uncapt_as_capt = Some(value);
                None
            }
            CatchEdit::ToggleTreatUncaptAsCapt => {
                next.treat_uncapt_as_capt = Some(!current.treat_uncapt_as_capt());
                None
            }
            CatchEdit::AddBall { tier, ball } => {
                let balls = next.tiers.entry(tier.clone()).or_default();
                if !balls.contains(&ball) {
                    balls.push(ball);
                }
                Some(tier)
            }
            CatchEdit::RemoveBall { tier, ball } => {
                if let Some(balls) = next.tiers.get_mut(&tier) {
                    balls.retain(|b| *b != ball);
                }
                Some(tier)
            }
            CatchEdit::MoveBall { tier, from, to } => {
                if let Some(balls) = next.tiers.get_mut(&tier)
                    && from < balls.len()
                {
                    let ball = balls.remove(from);
                    balls.insert(to.min(balls.len()), ball);
                }
                Some(tier)
            }
            CatchEdit::SetTier { tier, balls } => {
                next.tiers.insert(tier.clone(), balls);
                Some(tier)
            }
        };

        if let Some(tier) = touched {
            let balls = next.tier(&tier).to_vec();
            self.track(&tier, &balls);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory_document;

    fn tier(balls: &[&str]) -> Vec<String> {
        balls.iter().map(|b| b.to_string()).collect()
    }

    #[test]
    fn add_ball_appends_once() {
        let current = factory_document().catch;
        let mut editor = CatchEditor::new(&current);

        let once = editor.apply(
            &current,
            CatchEdit::AddBall {
                tier: "C".to_string(),
                ball: "ultra_ball".to_string(),
            },
        );
        let twice = editor.apply(
            &once,
            CatchEdit::AddBall {
                tier: "C".to_string(),
                ball: "ultra_ball".to_string(),
            },
        );

        assert_eq!(
            twice.tier("C"),
            tier(&["poke_ball", "great_ball", "premier_ball", "ultra_ball"])
        );
        assert_eq!(twice.tier("S"), current.tier("S"));
    }

    #[test]
    fn move_ball_reorders_preference() {
        let mut current = CatchConfig::default();
        current
            .tiers
            .insert("B".to_string(), tier(&["great_ball", "net_ball", "dusk_ball"]));
        let mut editor = CatchEditor::new(&current);

        let next = editor.apply(
            &current,
            CatchEdit::MoveBall {
                tier: "B".to_string(),
                from: 2,
                to: 0,
            },
        );
        assert_eq!(next.tier("B"), tier(&["dusk_ball", "great_ball", "net_ball"]));

        let unchanged = editor.apply(
            &next,
            CatchEdit::MoveBall {
                tier: "B".to_string(),
                from: 9,
                to: 0,
            },
        );
        assert_eq!(unchanged, next);

        let missing_tier = editor.apply(
            &next,
            CatchEdit::MoveBall {
                tier: "S".to_string(),
                from: 0,
                to: 1,
            },
        );
        assert_eq!(missing_tier, next);
    }

    #[test]
    fn unknown_ball_flags_tier_until_removed() {
        let current = factory_document().catch;
        let mut editor = CatchEditor::new(&current);

        let next = editor.apply(
            &current,
            CatchEdit::AddBall {
                tier: "A".to_string(),
                ball: "rock".to_string(),
            },
        );
        assert!(!editor.tier_valid("A"));
        assert!(editor.tier_valid("B"));

        let fixed = editor.apply(
            &next,
            CatchEdit::RemoveBall {
                tier: "A".to_string(),
                ball: "rock".to_string(),
            },
        );
        assert!(editor.tier_valid("A"));
        assert_eq!(fixed, current);
    }

    #[test]
    fn toggle_flag_reads_absent_as_false() {
        let mut editor = CatchEditor::default();
        let next = editor.apply(&CatchConfig::default(), CatchEdit::ToggleTreatUncaptAsCapt);
        assert_eq!(next.treat_uncapt_as_capt, Some(true));
        assert!(next.tiers.is_empty());
    }
}
