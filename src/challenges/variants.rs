//! Flavor variants per friend, selected by scanning the objective text for
//! keywords.

use crate::challenges::MinigameKind::{
    self, Collection, DirectionalSequence, MemoryPairs, OrderedConnect, PatternMatch,
    ProximityCare, ToolMatch, WordCompletion,
};
use crate::character::FriendId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub name: &'static str,
    pub instruction: &'static str,
    pub kind: MinigameKind,
}

/// Keywords checked in order; the first hit wins.
struct KeywordRule {
    keywords: &'static [&'static str],
    variant: Variant,
}

struct VariantTable {
    rules: &'static [KeywordRule],
    fallback: Variant,
}

const fn rule(keywords: &'static [&'static str], name: &'static str, instruction: &'static str, kind: MinigameKind) -> KeywordRule {
    KeywordRule {
        keywords,
        variant: Variant {
            name,
            instruction,
            kind,
        },
    }
}

const fn fallback(name: &'static str, instruction: &'static str) -> Variant {
    Variant {
        name,
        instruction,
        kind: MinigameKind::ButtonMash,
    }
}

static PHRITS: VariantTable = VariantTable {
    rules: &[
        rule(&["plant", "specimen"], "Specimen Collection", "Collect rare specimens! Click each plant you spot.", Collection),
        rule(&["forest", "explore"], "Forest Exploration", "Navigate the forest! Click the trail markers.", Collection),
        rule(&["microorganism", "analyze"], "Microscope Analysis", "Focus the microscope! Click every organism in view.", Collection),
    ],
    fallback: fallback("Fitness Challenge", "Complete the fitness challenge! Rapid SPACE presses!"),
};

static MIKA: VariantTable = VariantTable {
    rules: &[
        rule(&["statistic", "analyze"], "Stats Analysis", "Analyze the data patterns! Type the digits back in order.", PatternMatch),
        rule(&["tournament", "win"], "Tournament Strategy", "Make strategic decisions! Repeat the play call with 1-4.", PatternMatch),
        rule(&["coach"], "Team Coaching", "Guide your team! Enter the formation with 1-4.", PatternMatch),
    ],
    fallback: fallback("Trivia Challenge", "Answer sports trivia! Quick SPACE presses for correct answers!"),
};

static JORDY: VariantTable = VariantTable {
    rules: &[
        rule(&["disguise", "art"], "Disguise Mastery", "Perfect your disguise! Match the costume pieces.", MemoryPairs),
        rule(&["mystery", "solve"], "Mystery Solving", "Gather clues! Pair up matching evidence.", MemoryPairs),
        rule(&["relationship"], "Relationship Counseling", "Help resolve conflicts! Find the matching pairs.", MemoryPairs),
    ],
    fallback: fallback("Car Show Organization", "Organize the perfect car show! Precise SPACE timing!"),
};

static CASPER: VariantTable = VariantTable {
    rules: &[
        rule(&["joke", "funny"], "Joke Telling", "Time your punchlines! Type the missing word and press ENTER.", WordCompletion),
        rule(&["pun", "wordplay"], "Pun Battle", "Create puns! Fill in the blank and press ENTER.", WordCompletion),
        rule(&["riddle", "puzzle"], "Riddle Creation", "Craft clever riddles! Type the answer and press ENTER.", WordCompletion),
    ],
    fallback: fallback("Confusion Tactics", "Confuse with wit! Random SPACE patterns!"),
};

static ROEL: VariantTable = VariantTable {
    rules: &[
        rule(&["cow", "care"], "Cow Care", "Take care of the cows! Keep the pointer near each one.", ProximityCare),
        rule(&["harvest", "cultivate"], "Crop Harvesting", "Harvest the crops! Hover over each field until it is ready.", ProximityCare),
        rule(&["wisdom", "farming"], "Farming Wisdom", "Share farming knowledge! Stay close to each listener.", ProximityCare),
    ],
    fallback: fallback("Barnyard Party", "Host the perfect gathering! Well-timed SPACE presses!"),
};

static ALEX: VariantTable = VariantTable {
    rules: &[
        rule(&["invention", "create"], "Invention Workshop", "Build amazing inventions! Connect the parts in order.", OrderedConnect),
        rule(&["story", "craft"], "Story Crafting", "Craft hilarious stories! Link the plot points in order.", OrderedConnect),
        rule(&["ai", "knowledge"], "AI Exploration", "Explore AI concepts! Wire the nodes in order.", OrderedConnect),
    ],
    fallback: fallback("Creative Workshop", "Lead creative workshops! Inspiring SPACE presses!"),
};

static RICK: VariantTable = VariantTable {
    rules: &[
        rule(&["fix", "broken"], "Machinery Repair", "Fix the machinery! Pick a tool, then click the part it fits.", ToolMatch),
        rule(&["technical", "solution"], "Technical Problem Solving", "Solve technical challenges! Match each fault with its tool.", ToolMatch),
        rule(&["firework", "safely"], "Fireworks Safety", "Handle fireworks safely! Use the right tool on each launcher.", ToolMatch),
    ],
    fallback: fallback("Mechanical Workshop", "Teach mechanical skills! Educational SPACE presses!"),
};

static SUEN: VariantTable = VariantTable {
    rules: &[
        rule(&["virtual", "realm"], "Virtual Mastery", "Master virtual realms! Watch the arrows, then repeat them.", DirectionalSequence),
        rule(&["hacking", "challenge"], "Hacking Challenge", "Hack the system! Replay the arrow sequence.", DirectionalSequence),
        rule(&["score", "high"], "High Score Chase", "Achieve high scores! Memorize the combo, then enter it.", DirectionalSequence),
    ],
    fallback: fallback("LAN Party Hosting", "Host epic game nights! Coordinated SPACE presses!"),
};

fn table(friend: FriendId) -> &'static VariantTable {
    match friend {
        FriendId::Phrits => &PHRITS,
        FriendId::Mika => &MIKA,
        FriendId::Jordy => &JORDY,
        FriendId::Casper => &CASPER,
        FriendId::Roel => &ROEL,
        FriendId::Alex => &ALEX,
        FriendId::Rick => &RICK,
        FriendId::Suen => &SUEN,
    }
}

/// Pick the variant for `friend` whose keywords appear in `objective`.
/// Matching is substring based on the lower-cased text.
pub fn select_variant(friend: FriendId, objective: &str) -> &'static Variant {
    let text = objective.to_lowercase();
    let table = table(friend);
    table
        .rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| text.contains(k)))
        .map(|rule| &rule.variant)
        .unwrap_or(&table.fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog;

    #[test]
    fn test_first_matching_rule_wins() {
        // "analyze" belongs to Microscope Analysis, but "plant" comes first.
        let v = select_variant(FriendId::Phrits, "Analyze a plant specimen");
        assert_eq!(v.name, "Specimen Collection");
        assert_eq!(v.kind, MinigameKind::Collection);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let v = select_variant(FriendId::Rick, "FIX the tractor");
        assert_eq!(v.name, "Machinery Repair");
    }

    #[test]
    fn test_no_match_uses_button_mash_fallback() {
        let v = select_variant(FriendId::Mika, "Go for a run");
        assert_eq!(v.name, "Trivia Challenge");
        assert_eq!(v.kind, MinigameKind::ButtonMash);
    }

    #[test]
    fn test_substring_match() {
        // "ai" hides inside plenty of words; the scan is a plain substring test.
        let v = select_variant(FriendId::Alex, "Paint a mural");
        assert_eq!(v.name, "AI Exploration");
    }

    #[test]
    fn test_keyword_variants_use_friend_archetype() {
        for friend in FriendId::ALL {
            for rule in table(friend).rules {
                assert_eq!(rule.variant.kind, MinigameKind::for_friend(friend));
            }
            assert_eq!(table(friend).fallback.kind, MinigameKind::ButtonMash);
        }
    }

    #[test]
    fn test_every_catalog_objective_selects_a_variant() {
        for friend in FriendId::ALL {
            for objective in catalog(friend).all() {
                let v = select_variant(friend, objective.text);
                assert!(!v.instruction.is_empty());
            }
        }
    }
}
