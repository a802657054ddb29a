//! Skill ranks derived from guess counts
//!
//! Seven fixed tiers, checked from the tightest bound upward. Works for a
//! single round's guess count and for a lifetime average alike.

use serde::{Serialize, Serializer};

/// A named rank bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankTier {
    Hacker,
    Legend,
    Master,
    Pro,
    Skilled,
    Beginner,
    Noob,
}

impl RankTier {
    /// All tiers, best first
    pub const ALL: [RankTier; 7] = [
        RankTier::Hacker,
        RankTier::Legend,
        RankTier::Master,
        RankTier::Pro,
        RankTier::Skilled,
        RankTier::Beginner,
        RankTier::Noob,
    ];

    /// Classify a guess count (may be fractional, e.g. an average)
    ///
    /// Total: anything above the last bound, and NaN, lands in `Noob`.
    pub fn classify(guesses: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|tier| tier.max_guesses().is_some_and(|max| guesses <= max as f64))
            .unwrap_or(RankTier::Noob)
    }

    /// Classify a whole-round guess count
    pub fn from_guesses(guesses: u32) -> Self {
        Self::classify(guesses as f64)
    }

    /// Inclusive upper bound on guesses for this tier (`None` = unbounded)
    pub fn max_guesses(&self) -> Option<u32> {
        match self {
            RankTier::Hacker => Some(5),
            RankTier::Legend => Some(8),
            RankTier::Master => Some(11),
            RankTier::Pro => Some(14),
            RankTier::Skilled => Some(17),
            RankTier::Beginner => Some(20),
            RankTier::Noob => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RankTier::Hacker => "HACKER",
            RankTier::Legend => "LEGEND",
            RankTier::Master => "MASTER",
            RankTier::Pro => "PRO",
            RankTier::Skilled => "SKILLED",
            RankTier::Beginner => "BEGINNER",
            RankTier::Noob => "NOOB",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RankTier::Hacker => "Totally Unfair",
            RankTier::Legend => "Elite Brain",
            RankTier::Master => "Mind Reader",
            RankTier::Pro => "Tactical Player",
            RankTier::Skilled => "Getting Better",
            RankTier::Beginner => "Learning Mode",
            RankTier::Noob => "Try Again",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RankTier::Hacker => "😈",
            RankTier::Legend => "👑",
            RankTier::Master => "🧠",
            RankTier::Pro => "🎯",
            RankTier::Skilled => "⚡",
            RankTier::Beginner => "🐣",
            RankTier::Noob => "☠️",
        }
    }
}

impl std::fmt::Display for RankTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.icon(), self.name(), self.title())
    }
}

/// Serialized as the `{name, title, icon}` triple the scoreboard renders
impl Serialize for RankTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("RankTier", 3)?;
        s.serialize_field("name", self.name())?;
        s.serialize_field("title", self.title())?;
        s.serialize_field("icon", self.icon())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_edges() {
        assert_eq!(RankTier::from_guesses(1), RankTier::Hacker);
        assert_eq!(RankTier::from_guesses(5), RankTier::Hacker);
        assert_eq!(RankTier::from_guesses(6), RankTier::Legend);
        assert_eq!(RankTier::from_guesses(8), RankTier::Legend);
        assert_eq!(RankTier::from_guesses(9), RankTier::Master);
        assert_eq!(RankTier::from_guesses(11), RankTier::Master);
        assert_eq!(RankTier::from_guesses(14), RankTier::Pro);
        assert_eq!(RankTier::from_guesses(17), RankTier::Skilled);
        assert_eq!(RankTier::from_guesses(20), RankTier::Beginner);
        assert_eq!(RankTier::from_guesses(21), RankTier::Noob);
        assert_eq!(RankTier::from_guesses(u32::MAX), RankTier::Noob);
    }

    #[test]
    fn test_fractional_average() {
        assert_eq!(RankTier::classify(5.0), RankTier::Hacker);
        assert_eq!(RankTier::classify(5.1), RankTier::Legend);
        assert_eq!(RankTier::classify(20.0), RankTier::Beginner);
        assert_eq!(RankTier::classify(20.5), RankTier::Noob);
        assert_eq!(RankTier::classify(0.0), RankTier::Hacker);
        assert_eq!(RankTier::classify(f64::NAN), RankTier::Noob);
    }

    #[test]
    fn test_tier_labels() {
        let tier = RankTier::from_guesses(12);
        assert_eq!(tier.name(), "PRO");
        assert_eq!(tier.title(), "Tactical Player");
        assert_eq!(tier.icon(), "🎯");
        assert_eq!(tier.to_string(), "🎯 PRO (Tactical Player)");
    }

    #[test]
    fn test_serializes_as_triple() {
        let json = serde_json::to_value(RankTier::Noob).unwrap();
        assert_eq!(json["name"], "NOOB");
        assert_eq!(json["title"], "Try Again");
        assert_eq!(json["icon"], "☠️");
    }

    #[test]
    fn test_bounds_ascend() {
        let bounds: Vec<u32> = RankTier::ALL.iter().filter_map(|t| t.max_guesses()).collect();
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(RankTier::ALL.last().and_then(|t| t.max_guesses()), None);
    }
}
