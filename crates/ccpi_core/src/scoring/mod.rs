//! Pillar scoring, weighted composite and crash amplifiers.

pub mod amplifier;
pub mod composite;
pub mod ladder;
pub mod pillars;

pub use amplifier::{
    AMPLIFIER_CAP, AmplifierSet, CrashAmplifier, detect_crash_amplifiers, final_index,
};
pub use composite::{PillarWeights, WEIGHT_SUM_EPSILON, base_index};
pub use ladder::{Cmp, Condition, Ladder, Tier};
pub use pillars::{
    ALL_PILLARS, Contribution, PILLAR_MAX, Pillar, PillarEntry, PillarScore, YieldCurvePolicy,
    pillar_contributions, pillar_entries, pillar_entry, score_pillar,
};
