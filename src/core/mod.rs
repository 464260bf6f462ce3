//! Creature state engine: stats, stages, diary, RNG, and the creature itself.
//!
//! This module owns every attribute of the pet and all of its transition
//! rules. Persistence and presentation live elsewhere and only see snapshots
//! and status projections.

pub mod creature;
pub mod diary;
pub mod rng;
pub mod stage;
pub mod stats;

pub use creature::{
    Creature, EvolutionEvent, LightOutcome, SoundOutcome, Status, FINAL_MUTATION_THRESHOLD,
    LIGHT_MUTATION_CHANCE, SOUND_MUTATION_CHANCE, TEEN_MUTATION_THRESHOLD,
};
pub use diary::Diary;
pub use rng::LabRng;
pub use stage::{FinalForm, Stage};
pub use stats::{Stat, Stats};
