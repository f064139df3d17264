//! Risk regime bands.
//!
//! Lower bound inclusive, upper bound exclusive, except the top band which
//! also includes 100.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regime {
    pub level: u8,
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    /// Inclusive lower bound of the band.
    pub floor: u32,
}

pub const REGIMES: [Regime; 5] = [
    Regime {
        level: 1,
        name: "Low Risk",
        color: "green",
        description: "Conditions are calm; few warning signals are active.",
        floor: 0,
    },
    Regime {
        level: 2,
        name: "Normal",
        color: "blue",
        description: "Typical market conditions with isolated warnings.",
        floor: 20,
    },
    Regime {
        level: 3,
        name: "Elevated Risk",
        color: "yellow",
        description: "Several pillars show stress; correction risk is rising.",
        floor: 40,
    },
    Regime {
        level: 4,
        name: "High Alert",
        color: "orange",
        description: "Broad deterioration; a meaningful correction is likely.",
        floor: 60,
    },
    Regime {
        level: 5,
        name: "Crash Watch",
        color: "red",
        description: "Acute stress across pillars; crash conditions are present.",
        floor: 80,
    },
];

/// Band for `final_index`. Values above 100 land in the top band.
pub fn classify_regime(final_index: u32) -> Regime {
    REGIMES
        .iter()
        .rev()
        .find(|r| final_index >= r.floor)
        .copied()
        .unwrap_or(REGIMES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_contiguous() {
        for pair in REGIMES.windows(2) {
            assert!(pair[0].floor < pair[1].floor);
            assert_eq!(pair[0].level + 1, pair[1].level);
        }
        assert_eq!(REGIMES[0].floor, 0);
    }

    #[test]
    fn every_index_maps_to_one_band() {
        for idx in 0..=100 {
            let regime = classify_regime(idx);
            assert!(idx >= regime.floor);
        }
        assert_eq!(classify_regime(100).level, 5);
    }
}
