//! Threshold staircases.
//!
//! A [`Ladder`] is an ordered list of tiers, most severe first. The first
//! tier whose condition matches wins; otherwise the ladder's `otherwise`
//! points apply. Two-sided indicators (e.g. put/call: both complacency and
//! fear are warnings) simply list tiers for both directions.

/// Comparison applied to a reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cmp {
    Lt,
    Le,
    Gt,
    Ge,
    /// Flag reading is set (non-zero).
    IsSet,
}

/// A single threshold test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condition {
    pub cmp: Cmp,
    pub threshold: f64,
}

impl Condition {
    pub const fn lt(threshold: f64) -> Self {
        Self {
            cmp: Cmp::Lt,
            threshold,
        }
    }

    pub const fn le(threshold: f64) -> Self {
        Self {
            cmp: Cmp::Le,
            threshold,
        }
    }

    pub const fn gt(threshold: f64) -> Self {
        Self {
            cmp: Cmp::Gt,
            threshold,
        }
    }

    pub const fn ge(threshold: f64) -> Self {
        Self {
            cmp: Cmp::Ge,
            threshold,
        }
    }

    pub const fn is_set() -> Self {
        Self {
            cmp: Cmp::IsSet,
            threshold: 0.0,
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        match self.cmp {
            Cmp::Lt => value < self.threshold,
            Cmp::Le => value <= self.threshold,
            Cmp::Gt => value > self.threshold,
            Cmp::Ge => value >= self.threshold,
            Cmp::IsSet => value != 0.0,
        }
    }
}

/// One step of a staircase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub when: Condition,
    pub points: u32,
}

impl Tier {
    pub const fn new(when: Condition, points: u32) -> Self {
        Self { when, points }
    }
}

/// Ordered staircase, most severe tier first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ladder {
    pub tiers: &'static [Tier],
    pub otherwise: u32,
}

impl Ladder {
    pub const fn new(tiers: &'static [Tier], otherwise: u32) -> Self {
        Self { tiers, otherwise }
    }

    /// Points for `value`: first matching tier, else `otherwise`.
    pub fn points(&self, value: f64) -> u32 {
        self.tiers
            .iter()
            .find(|tier| tier.when.matches(value))
            .map_or(self.otherwise, |tier| tier.points)
    }

    /// Largest award on this staircase; this is the indicator's weight
    /// within its pillar.
    pub fn max_points(&self) -> u32 {
        self.tiers
            .iter()
            .map(|tier| tier.points)
            .fold(self.otherwise, u32::max)
    }

    /// Check table shape: at least one tier, finite thresholds, and
    /// one-sided runs ordered from most to least severe.
    pub fn check(&self) -> Result<(), &'static str> {
        if self.tiers.is_empty() {
            return Err("ladder has no tiers");
        }
        for tier in self.tiers {
            if !tier.when.threshold.is_finite() {
                return Err("non-finite threshold");
            }
            if tier.points == 0 {
                return Err("tier awards zero points");
            }
        }
        for pair in self.tiers.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.when.cmp != b.when.cmp {
                continue;
            }
            let ordered = match a.when.cmp {
                Cmp::Lt | Cmp::Le => a.when.threshold < b.when.threshold,
                Cmp::Gt | Cmp::Ge => a.when.threshold > b.when.threshold,
                Cmp::IsSet => false,
            };
            if !ordered || a.points < b.points {
                return Err("tiers not ordered most severe first");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RETURN_1D: Ladder = Ladder::new(
        &[
            Tier::new(Condition::le(-6.0), 8),
            Tier::new(Condition::le(-3.0), 6),
            Tier::new(Condition::le(-1.5), 4),
            Tier::new(Condition::le(-1.0), 2),
        ],
        0,
    );

    #[test]
    fn first_matching_tier_wins() {
        assert_eq!(RETURN_1D.points(-6.0), 8);
        assert_eq!(RETURN_1D.points(-5.99), 6);
        assert_eq!(RETURN_1D.points(-1.0), 2);
        assert_eq!(RETURN_1D.points(-0.99), 0);
        assert_eq!(RETURN_1D.max_points(), 8);
        assert!(RETURN_1D.check().is_ok());
    }

    #[test]
    fn misordered_ladder_is_rejected() {
        const BAD: Ladder = Ladder::new(
            &[
                Tier::new(Condition::gt(20.0), 4),
                Tier::new(Condition::gt(35.0), 9),
            ],
            0,
        );
        assert!(BAD.check().is_err());
    }
}
