//! Stats Editor
//!
//! Thresholds for stat-scored balls.

use std::collections::HashSet;

use super::SectionEditor;
use crate::domain::StatsBallsConfig;
use crate::validation::StatField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsEdit {
    Set(StatField, i64),
    /// Drop the field so the agent falls back to its own default
    Clear(StatField),
}

#[derive(Debug, Clone, Default)]
pub struct StatsEditor {
    invalid: HashSet<StatField>,
}

impl StatsEditor {
    pub fn new(current: &StatsBallsConfig) -> Self {
        Self {
            invalid: StatField::ALL
                .into_iter()
                .filter(|field| {
                    field
                        .get(current)
                        .is_some_and(|value| !field.bounds().accepts(value))
                })
                .collect(),
        }
    }

    pub fn field_valid(&self, field: StatField) -> bool {
        !self.invalid.contains(&field)
    }
}

impl SectionEditor for StatsEditor {
    type Section = StatsBallsConfig;
    type Edit = StatsEdit;

    fn apply(&mut self, current: &StatsBallsConfig, edit: StatsEdit) -> StatsBallsConfig {
        let mut next = current.clone();
        match edit {
            StatsEdit::Set(field, value) => {
                if field.bounds().accepts(value) {
                    self.invalid.remove(&field);
                } else {
                    self.invalid.insert(field);
                }
                *field.slot_mut(&mut next) = Some(value);
            }
            StatsEdit::Clear(field) => {
                self.invalid.remove(&field);
                *field.slot_mut(&mut next) = None;
            }
        }
        next
    }
}
