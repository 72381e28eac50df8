//! Performance tiers derived from accuracy.

use std::fmt;

use quizline_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

/// A named performance bracket.
///
/// Variants are ordered from lowest to highest bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    /// Below 40%.
    Encourage,
    /// 40% and up.
    Learning,
    /// 60% and up.
    Good,
    /// 70% and up.
    Great,
    /// 80% and up.
    Excellent,
    /// 90% and up.
    Master,
    /// 100%.
    Perfect,
}

/// Threshold table, highest first. The first row whose threshold the
/// accuracy meets or exceeds wins.
const TIER_THRESHOLDS: [(u32, PerformanceTier); 7] = [
    (100, PerformanceTier::Perfect),
    (90, PerformanceTier::Master),
    (80, PerformanceTier::Excellent),
    (70, PerformanceTier::Great),
    (60, PerformanceTier::Good),
    (40, PerformanceTier::Learning),
    (0, PerformanceTier::Encourage),
];

/// Accuracy from which the results screen celebrates.
const CELEBRATION_THRESHOLD: u32 = 70;

const PERFECT_MESSAGES: &[&str] = &[
    "🎯 Absolutely PERFECT! You're a true genius! 🧠✨",
    "🚀 Flawless victory! Nothing can stop you now! 🏆",
    "⭐ Perfect score achieved! You're unstoppable! 🌟",
];

const MASTER_MESSAGES: &[&str] = &[
    "🔥 Outstanding performance! You're on fire! 🎊",
    "⚡ Incredible! Your knowledge is impressive! 🧠",
    "🎯 Exceptional work! You're a quiz champion! 🏆",
];

const EXCELLENT_MESSAGES: &[&str] = &[
    "🌟 Excellent job! Your hard work is paying off! 📈",
    "💪 Impressive! You really know your stuff! 🎓",
    "🎊 Great performance! Keep up the momentum! 🚀",
];

const GREAT_MESSAGES: &[&str] = &[
    "👏 Good work! You're on the right track! 🛤️",
    "📚 Nice job! Your knowledge is growing! 🌱",
    "🎯 Well done! Practice makes perfect! ⭐",
];

const GOOD_MESSAGES: &[&str] = &[
    "💪 Decent effort! There's room to grow! 🌱",
    "📖 Not bad! Keep studying and improving! 📈",
    "🎯 Good attempt! Practice more to excel! 🏃‍♂️",
];

const LEARNING_MESSAGES: &[&str] = &[
    "🔍 Keep exploring and learning! Knowledge awaits! 🗝️",
    "💡 Every expert was once a beginner! Keep going! 🚶‍♂️",
    "📚 Don't give up! Each attempt makes you stronger! 💪",
];

const ENCOURAGE_MESSAGES: &[&str] = &[
    "🌟 Every journey starts with a single step! 👣",
    "💪 Challenge accepted! Time to level up! 🎮",
    "🚀 Ready for round two? You've got this! 🎯",
];

/// Maps an accuracy percentage to its tier.
#[must_use]
pub fn performance_tier(accuracy: u32) -> PerformanceTier {
    PerformanceTier::from_accuracy(accuracy)
}

impl PerformanceTier {
    /// Maps an accuracy percentage to its tier.
    #[must_use]
    pub fn from_accuracy(accuracy: u32) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(threshold, _)| accuracy >= *threshold)
            .map_or(Self::Encourage, |(_, tier)| *tier)
    }

    /// Lowest accuracy that lands in this tier.
    #[must_use]
    pub fn threshold(self) -> u32 {
        TIER_THRESHOLDS
            .iter()
            .find(|(_, tier)| *tier == self)
            .map_or(0, |(threshold, _)| *threshold)
    }

    /// Stable lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Master => "master",
            Self::Excellent => "excellent",
            Self::Great => "great",
            Self::Good => "good",
            Self::Learning => "learning",
            Self::Encourage => "encourage",
        }
    }

    /// Badge title shown on the results screen.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect Score!",
            Self::Master => "Quiz Master!",
            Self::Excellent => "Excellent!",
            Self::Great => "Great Job!",
            Self::Good => "Good Effort!",
            Self::Learning => "Keep Learning!",
            Self::Encourage => "Try Again!",
        }
    }

    /// Badge icon shown next to the title.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Perfect => "🏆",
            Self::Master => "🥇",
            Self::Excellent => "🥈",
            Self::Great => "🥉",
            Self::Good => "🎖️",
            Self::Learning => "📚",
            Self::Encourage => "💪",
        }
    }

    /// The fixed, non-empty set of candidate messages for this tier.
    #[must_use]
    pub fn messages(self) -> &'static [&'static str] {
        match self {
            Self::Perfect => PERFECT_MESSAGES,
            Self::Master => MASTER_MESSAGES,
            Self::Excellent => EXCELLENT_MESSAGES,
            Self::Great => GREAT_MESSAGES,
            Self::Good => GOOD_MESSAGES,
            Self::Learning => LEARNING_MESSAGES,
            Self::Encourage => ENCOURAGE_MESSAGES,
        }
    }

    /// Picks one of [`messages`](Self::messages) using `rng`.
    pub fn message(self, rng: &mut dyn DeterministicRng) -> &'static str {
        let messages = self.messages();
        let index = rng.next_index(messages.len() - 1).min(messages.len() - 1);
        messages[index]
    }

    /// Whether the results deserve a celebration effect.
    #[must_use]
    pub fn celebrates(self) -> bool {
        self.threshold() >= CELEBRATION_THRESHOLD
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizline_core::rng::SeededRng;
    use quizline_test_support::{MockRng, SequenceRng};

    const ALL_TIERS: [PerformanceTier; 7] = [
        PerformanceTier::Encourage,
        PerformanceTier::Learning,
        PerformanceTier::Good,
        PerformanceTier::Great,
        PerformanceTier::Excellent,
        PerformanceTier::Master,
        PerformanceTier::Perfect,
    ];

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(performance_tier(100), PerformanceTier::Perfect);
        assert_eq!(performance_tier(90), PerformanceTier::Master);
        assert_eq!(performance_tier(80), PerformanceTier::Excellent);
        assert_eq!(performance_tier(70), PerformanceTier::Great);
        assert_eq!(performance_tier(60), PerformanceTier::Good);
        assert_eq!(performance_tier(40), PerformanceTier::Learning);
        assert_eq!(performance_tier(0), PerformanceTier::Encourage);
    }

    #[test]
    fn test_values_just_below_thresholds_fall_to_lower_tier() {
        assert_eq!(performance_tier(99), PerformanceTier::Master);
        assert_eq!(performance_tier(89), PerformanceTier::Excellent);
        assert_eq!(performance_tier(79), PerformanceTier::Great);
        assert_eq!(performance_tier(69), PerformanceTier::Good);
        assert_eq!(performance_tier(59), PerformanceTier::Learning);
        assert_eq!(performance_tier(39), PerformanceTier::Encourage);
    }

    #[test]
    fn test_accuracy_above_hundred_is_perfect() {
        assert_eq!(performance_tier(150), PerformanceTier::Perfect);
    }

    #[test]
    fn test_threshold_round_trips_through_from_accuracy() {
        for tier in ALL_TIERS {
            assert_eq!(PerformanceTier::from_accuracy(tier.threshold()), tier);
        }
    }

    #[test]
    fn test_every_tier_has_messages() {
        for tier in ALL_TIERS {
            assert!(!tier.messages().is_empty(), "{tier} has no messages");
        }
    }

    #[test]
    fn test_message_is_member_of_tier_set() {
        let mut rng = SeededRng::from_seed(3);

        for tier in ALL_TIERS {
            for _ in 0..20 {
                let message = tier.message(&mut rng);
                assert!(tier.messages().contains(&message));
            }
        }
    }

    #[test]
    fn test_message_uses_injected_rng() {
        let mut rng = SequenceRng::new(vec![2]);

        assert_eq!(
            PerformanceTier::Good.message(&mut rng),
            "🎯 Good attempt! Practice more to excel! 🏃‍♂️"
        );
        assert_eq!(
            PerformanceTier::Perfect.message(&mut MockRng),
            "🎯 Absolutely PERFECT! You're a true genius! 🧠✨"
        );
    }

    #[test]
    fn test_celebration_starts_at_great() {
        assert!(!PerformanceTier::Good.celebrates());
        assert!(PerformanceTier::Great.celebrates());
        assert!(PerformanceTier::Perfect.celebrates());
    }

    #[test]
    fn test_badges() {
        assert_eq!(PerformanceTier::Perfect.title(), "Perfect Score!");
        assert_eq!(PerformanceTier::Perfect.icon(), "🏆");
        assert_eq!(PerformanceTier::Encourage.title(), "Try Again!");
        assert_eq!(PerformanceTier::Good.to_string(), "good");
    }

    #[test]
    fn test_serializes_as_snake_case_name() {
        let json = serde_json::to_string(&PerformanceTier::Excellent).unwrap();

        assert_eq!(json, "\"excellent\"");
    }
}
