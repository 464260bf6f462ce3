//! The flat snapshot record a creature is persisted as.
//!
//! `CreatureSnapshot` mirrors the on-disk JSON field-for-field:
//!
//! ```json
//! {
//!   "name": "Zorp",
//!   "health": 80,
//!   "happiness": 50,
//!   "hunger": 50,
//!   "mutation_level": 0,
//!   "stage": "baby",
//!   "final_form": null,
//!   "diary": []
//! }
//! ```
//!
//! Export is lossless; reconstruction validates defensively and refuses
//! records that violate the creature invariants instead of clamping them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Creature, Diary, FinalForm, Stage, Stat, Stats};

/// A record that cannot be reconstructed into a creature.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("creature name must be non-empty")]
    EmptyName,

    #[error("stat `{field}` is {value}, outside [0, 100]")]
    StatOutOfRange { field: &'static str, value: u8 },

    #[error("final form is set but stage is `{stage}`")]
    FormWithoutEvolution { stage: Stage },

    #[error("stage is `evolved` but no final form is set")]
    MissingFinalForm,
}

/// Serialized form of a creature, matching the save-file format exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureSnapshot {
    pub name: String,
    pub health: u8,
    pub happiness: u8,
    pub hunger: u8,
    pub mutation_level: u32,
    pub stage: Stage,
    #[serde(default)]
    pub final_form: Option<FinalForm>,
    #[serde(default)]
    pub diary: Vec<String>,
}

impl CreatureSnapshot {
    /// Capture a creature's full observable state.
    #[must_use]
    pub fn capture(creature: &Creature) -> Self {
        let stats = creature.stats();
        Self {
            name: creature.name().to_string(),
            health: stats.health.get(),
            happiness: stats.happiness.get(),
            hunger: stats.hunger.get(),
            mutation_level: creature.mutation_level(),
            stage: creature.stage(),
            final_form: creature.final_form(),
            diary: creature.diary().iter().cloned().collect(),
        }
    }

    /// Reconstruct a creature whose state exactly matches this record.
    ///
    /// ## Errors
    ///
    /// Returns `SnapshotError` when the record violates a creature invariant:
    /// empty name, a stat above 100, or a stage/final-form mismatch.
    pub fn restore(self) -> Result<Creature, SnapshotError> {
        if self.name.trim().is_empty() {
            return Err(SnapshotError::EmptyName);
        }

        for (field, value) in [
            ("health", self.health),
            ("happiness", self.happiness),
            ("hunger", self.hunger),
        ] {
            if value > Stat::MAX {
                return Err(SnapshotError::StatOutOfRange { field, value });
            }
        }

        match (self.stage, self.final_form) {
            (Stage::Evolved, None) => return Err(SnapshotError::MissingFinalForm),
            (stage, Some(_)) if stage != Stage::Evolved => {
                return Err(SnapshotError::FormWithoutEvolution { stage });
            }
            _ => {}
        }

        let stats = Stats {
            health: Stat::new(self.health),
            happiness: Stat::new(self.happiness),
            hunger: Stat::new(self.hunger),
        };

        Ok(Creature::from_parts(
            self.name,
            stats,
            self.mutation_level,
            self.stage,
            self.final_form,
            Diary::from_entries(self.diary),
        ))
    }
}
