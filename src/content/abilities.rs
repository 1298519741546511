//! Ability registry: the bonus each friend grants when their quest succeeds.
//!
//! Activation is a scoring/flavor hook only. The effect bundle is built fresh
//! on every call and carries no mechanical weight beyond being announced.

use serde::Serialize;

/// One of the eight friend abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AbilityKind {
    BiologicalResilience,
    StatisticalInsight,
    MasterOfDisguise,
    JokestersWit,
    EarthyWisdom,
    ImaginativeCreativity,
    MechanicalMastery,
    MinMaxMastery,
}

/// Value carried by a named bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum BonusValue {
    Int(i32),
    Float(f64),
    Flag(bool),
}

/// A named bonus inside an effect bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bonus {
    pub name: &'static str,
    pub value: BonusValue,
}

/// Produced by [`AbilityKind::activate`] and consumed immediately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilityEffect {
    pub bonuses: Vec<Bonus>,
    pub description: &'static str,
}

impl AbilityEffect {
    pub fn get(&self, name: &str) -> Option<BonusValue> {
        self.bonuses.iter().find(|b| b.name == name).map(|b| b.value)
    }
}

fn int(name: &'static str, value: i32) -> Bonus {
    Bonus {
        name,
        value: BonusValue::Int(value),
    }
}

fn float(name: &'static str, value: f64) -> Bonus {
    Bonus {
        name,
        value: BonusValue::Float(value),
    }
}

impl AbilityKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BiologicalResilience => "Biological Resilience",
            Self::StatisticalInsight => "Statistical Insight",
            Self::MasterOfDisguise => "Master of Disguise",
            Self::JokestersWit => "Jokester's Wit",
            Self::EarthyWisdom => "Earthy Wisdom",
            Self::ImaginativeCreativity => "Imaginative Creativity",
            Self::MechanicalMastery => "Mechanical Mastery",
            Self::MinMaxMastery => "Min-Max Mastery",
        }
    }

    /// Icon prefix used in log lines.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::BiologicalResilience => "\u{1F9EC}",
            Self::StatisticalInsight => "\u{1F4CA}",
            Self::MasterOfDisguise => "\u{1F3AD}",
            Self::JokestersWit => "\u{1F602}",
            Self::EarthyWisdom => "\u{1F30D}",
            Self::ImaginativeCreativity => "\u{1F3A8}",
            Self::MechanicalMastery => "\u{1F527}",
            Self::MinMaxMastery => "\u{26A1}",
        }
    }

    /// What the ability does, in the words of whoever wields it.
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::BiologicalResilience => "Enhanced recovery and disease resistance!",
            Self::StatisticalInsight => "Data patterns revealed!",
            Self::MasterOfDisguise => "Identity completely transformed!",
            Self::JokestersWit => "Confusing enemies with ghastly humor!",
            Self::EarthyWisdom => "Grounded solutions and practical insights!",
            Self::ImaginativeCreativity => "Innovative solutions emerging!",
            Self::MechanicalMastery => "Precision bonus unlocked!",
            Self::MinMaxMastery => "Optimal strategies calculated!",
        }
    }

    /// Announcement line, e.g. "Phrits activates Biological Resilience! ...".
    pub fn announcement(&self, wielder: &str) -> String {
        format!(
            "{} {} activates {}! {}",
            self.icon(),
            wielder,
            self.name(),
            self.tagline()
        )
    }

    /// Build a fresh effect bundle for this ability.
    pub fn activate(&self) -> AbilityEffect {
        match self {
            Self::BiologicalResilience => AbilityEffect {
                bonuses: vec![int("health_bonus", 25), float("recovery_rate", 2.0)],
                description: "Biological Resilience grants superior healing and immunity!",
            },
            Self::StatisticalInsight => AbilityEffect {
                bonuses: vec![int("precision_bonus", 30), float("critical_chance", 0.25)],
                description:
                    "Statistical Insight provides predictive analysis and enhanced accuracy!",
            },
            Self::MasterOfDisguise => AbilityEffect {
                bonuses: vec![int("stealth_bonus", 40), int("deception_skill", 28)],
                description:
                    "Master of Disguise provides perfect camouflage and infiltration abilities!",
            },
            Self::JokestersWit => AbilityEffect {
                bonuses: vec![int("confusion_bonus", 20), int("morale_boost", 15)],
                description: "Jokester's Wit demoralizes enemies while boosting team spirit!",
            },
            Self::EarthyWisdom => AbilityEffect {
                bonuses: vec![int("wisdom_bonus", 18), float("resource_efficiency", 1.5)],
                description:
                    "Earthy Wisdom provides practical solutions and efficient resource management!",
            },
            Self::ImaginativeCreativity => AbilityEffect {
                bonuses: vec![int("innovation_bonus", 22), float("adaptability", 1.8)],
                description:
                    "Imaginative Creativity unlocks unique approaches and flexible problem-solving!",
            },
            Self::MechanicalMastery => AbilityEffect {
                bonuses: vec![int("precision_bonus", 15)],
                description: "Mechanical skills boost your precision!",
            },
            Self::MinMaxMastery => AbilityEffect {
                bonuses: vec![int("efficiency_bonus", 35), float("optimization_rate", 2.2)],
                description: "Min-Max Mastery maximizes output while minimizing resource waste!",
            },
        }
    }
}
