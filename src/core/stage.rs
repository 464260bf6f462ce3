//! Life stages and final forms.
//!
//! A creature moves Baby → Teen → Evolved, never backward. On the Teen →
//! Evolved transition it is assigned one of three final forms, chosen
//! uniformly at random and immutable from then on. Both enums carry the
//! exact text encodings used by the snapshot format.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rng::LabRng;

/// Coarse life-phase of a creature.
///
/// Gates which passive effects and evolution checks apply. Serialized as
/// lowercase text ("baby", "teen", "evolved") in snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Baby,
    Teen,
    Evolved,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Baby => "baby",
            Stage::Teen => "teen",
            Stage::Evolved => "evolved",
        };
        f.write_str(s)
    }
}

/// The specific evolved variant, assigned once at the Teen → Evolved
/// transition.
///
/// Serialized under its exact variant name ("PsiBrain", "BioBeast",
/// "VoidGhost") in snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalForm {
    PsiBrain,
    BioBeast,
    VoidGhost,
}

impl FinalForm {
    /// Draw a final form uniformly at random.
    #[must_use]
    pub fn draw(rng: &mut LabRng) -> Self {
        match rng.gen_range_usize(0..3) {
            0 => FinalForm::PsiBrain,
            1 => FinalForm::BioBeast,
            _ => FinalForm::VoidGhost,
        }
    }
}

impl fmt::Display for FinalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FinalForm::PsiBrain => "PsiBrain",
            FinalForm::BioBeast => "BioBeast",
            FinalForm::VoidGhost => "VoidGhost",
        };
        f.write_str(s)
    }
}
