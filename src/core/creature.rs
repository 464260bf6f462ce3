//! The creature state engine.
//!
//! `Creature` owns every attribute of the pet and is mutated only through the
//! operations below. Each operation applies its deterministic stat changes,
//! optionally rolls for a mutation on the injected RNG, appends a diary
//! entry, and returns a typed outcome for the caller to display.
//!
//! ## Invariants
//!
//! - All three stats stay in [0, 100] after every operation (see `Stat`).
//! - `final_form` is `Some` if and only if the stage is `Evolved`, and never
//!   changes once set.
//! - The stage only moves Baby → Teen → Evolved.
//! - `mutation_level` never decreases.

use super::diary::Diary;
use super::rng::LabRng;
use super::stage::{FinalForm, Stage};
use super::stats::Stats;

/// Chance that light exposure triggers a mutation.
pub const LIGHT_MUTATION_CHANCE: f64 = 0.4;

/// Chance that sound play triggers a mutation.
pub const SOUND_MUTATION_CHANCE: f64 = 0.2;

/// Mutation level at which a baby evolves into a teen.
pub const TEEN_MUTATION_THRESHOLD: u32 = 3;

/// Mutation level at which a teen evolves into its final form.
pub const FINAL_MUTATION_THRESHOLD: u32 = 6;

/// Outcome of a light exposure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightOutcome {
    /// The creature mutated; carries the new mutation level.
    Mutated { level: u32 },
    /// Nothing happened.
    NoEffect,
}

/// Outcome of playing sound.
///
/// Happiness rises either way; `mutated` reports the probabilistic branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundOutcome {
    pub mutated: bool,
}

/// Evolution step taken during a day advance, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvolutionEvent {
    /// Baby → Teen.
    Teen,
    /// Teen → Evolved, with the assigned final form.
    FinalForm(FinalForm),
}

/// Read-only projection of a creature's current attributes for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub name: String,
    pub stage: Stage,
    pub final_form: Option<FinalForm>,
    pub health: u8,
    pub happiness: u8,
    pub hunger: u8,
    pub mutation_level: u32,
}

/// A virtual pet: name, stats, life stage, and diary.
///
/// Fields are private; all mutation goes through the operations so the
/// invariants above hold at every observable point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Creature {
    name: String,
    stats: Stats,
    mutation_level: u32,
    stage: Stage,
    final_form: Option<FinalForm>,
    diary: Diary,
}

impl Creature {
    /// Create a fresh baby creature.
    ///
    /// ## Panics
    ///
    /// Panics if `name` is empty or whitespace-only.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.trim().is_empty(), "Creature name must be non-empty");

        Self {
            name,
            stats: Stats::initial(),
            mutation_level: 0,
            stage: Stage::Baby,
            final_form: None,
            diary: Diary::new(),
        }
    }

    /// Rebuild a creature from already-validated parts.
    ///
    /// Callers (the snapshot layer) are responsible for checking the
    /// stage/final-form invariant before calling.
    pub(crate) fn from_parts(
        name: String,
        stats: Stats,
        mutation_level: u32,
        stage: Stage,
        final_form: Option<FinalForm>,
        diary: Diary,
    ) -> Self {
        debug_assert_eq!(final_form.is_some(), stage == Stage::Evolved);

        Self {
            name,
            stats,
            mutation_level,
            stage,
            final_form,
            diary,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    #[must_use]
    pub fn mutation_level(&self) -> u32 {
        self.mutation_level
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn final_form(&self) -> Option<FinalForm> {
        self.final_form
    }

    #[must_use]
    pub fn diary(&self) -> &Diary {
        &self.diary
    }

    /// Read-only projection of the current attributes.
    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            name: self.name.clone(),
            stage: self.stage,
            final_form: self.final_form,
            health: self.stats.health.get(),
            happiness: self.stats.happiness.get(),
            hunger: self.stats.hunger.get(),
            mutation_level: self.mutation_level,
        }
    }

    // === Interactions ===

    /// Feed the creature: hunger −20, health +10, happiness +5.
    ///
    /// Always succeeds and logs a fixed-format diary entry.
    pub fn feed(&mut self) {
        self.stats.hunger.lose(20);
        self.stats.health.gain(10);
        self.stats.happiness.gain(5);

        let message = format!("{} was fed. +10 Health, -20 Hunger", self.name);
        self.log_event(&message);
    }

    /// Expose the creature to light: 40% chance of a mutation.
    ///
    /// No stat changes besides the mutation level.
    pub fn expose_to_light(&mut self, rng: &mut LabRng) -> LightOutcome {
        if rng.gen_bool(LIGHT_MUTATION_CHANCE) {
            self.mutation_level += 1;
            let message = format!(
                "{} mutated! Mutation level is now {}",
                self.name, self.mutation_level
            );
            self.log_event(&message);
            LightOutcome::Mutated {
                level: self.mutation_level,
            }
        } else {
            let message = format!("{} was exposed to light but nothing happened.", self.name);
            self.log_event(&message);
            LightOutcome::NoEffect
        }
    }

    /// Play sound to the creature: happiness +10, 20% chance of a mutation.
    ///
    /// Both branches write the same diary line, matching the historical save
    /// format; the returned outcome distinguishes them.
    pub fn play_sound(&mut self, rng: &mut LabRng) -> SoundOutcome {
        self.stats.happiness.gain(10);

        let mutated = rng.gen_bool(SOUND_MUTATION_CHANCE);
        if mutated {
            self.mutation_level += 1;
        }

        let message = format!("{} mutated from sound!", self.name);
        self.log_event(&message);

        SoundOutcome { mutated }
    }

    /// Advance one day: hunger rises, happiness decays, health decays by
    /// `floor(hunger / 20)`, evolved passives apply, then at most one
    /// evolution step is taken.
    pub fn advance_day(&mut self, rng: &mut LabRng) -> Option<EvolutionEvent> {
        self.stats.hunger.gain(10);
        self.stats.happiness.lose(5);

        // Decay reads the hunger value after this day's increment.
        let decay = self.stats.hunger.get() / 20;
        self.stats.health.lose(decay);

        if self.stage == Stage::Evolved {
            match self.final_form {
                Some(FinalForm::PsiBrain) => self.stats.happiness.gain(5),
                Some(FinalForm::BioBeast) => self.stats.health.gain(10),
                Some(FinalForm::VoidGhost) => {
                    self.stats.hunger.lose(5);
                    self.stats.happiness.gain(3);
                }
                None => {}
            }
        }

        // At most one evolution step per day; a baby past both thresholds
        // still stops at teen.
        if self.stage == Stage::Baby && self.mutation_level >= TEEN_MUTATION_THRESHOLD {
            self.stage = Stage::Teen;
            let message = format!("{} evolved into a TEEN form!", self.name);
            self.log_event(&message);
            Some(EvolutionEvent::Teen)
        } else if self.stage == Stage::Teen && self.mutation_level >= FINAL_MUTATION_THRESHOLD {
            self.stage = Stage::Evolved;
            let form = FinalForm::draw(rng);
            self.final_form = Some(form);
            let message = format!("{} mutated into FINAL FORM: {}!", self.name, form);
            self.log_event(&message);
            Some(EvolutionEvent::FinalForm(form))
        } else {
            None
        }
    }

    /// Append a timestamped entry to the diary.
    ///
    /// Returns the formatted entry.
    pub fn log_event(&mut self, message: &str) -> String {
        self.diary.record(message)
    }
}
