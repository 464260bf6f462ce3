//! # xenolab
//!
//! A single-player virtual-pet simulator: one creature with clamped stats
//! evolves through discrete life stages driven by randomized interactions and
//! a deterministic day-advance tick, persisted as flat JSON save files.
//!
//! ## Design Principles
//!
//! 1. **Illegal states unrepresentable**: stats are [0, 100] by type, life
//!    stage and final form are closed enums, and the stage/final-form
//!    pairing is checked on every reconstruction.
//!
//! 2. **Injected randomness**: every probabilistic operation takes a
//!    [`LabRng`], so tests drive exact outcomes from fixed seeds.
//!
//! 3. **No error paths in the engine**: all stat arithmetic saturates and
//!    every probabilistic branch is exhaustive. Errors exist only at the
//!    persistence boundary ([`StoreError`], [`SnapshotError`]).
//!
//! ## Modules
//!
//! - `core`: creature, stats, stages, diary, RNG
//! - `persist`: snapshot record and the file-backed save store

pub mod core;
pub mod persist;

pub use crate::core::{
    Creature, Diary, EvolutionEvent, FinalForm, LabRng, LightOutcome, SoundOutcome, Stage, Stat,
    Stats, Status,
};

pub use crate::persist::{CreatureSnapshot, SaveStore, SnapshotError, StoreError};
