//! Static objective catalog: what each friend may ask the player for.

use crate::character::FriendId;
use rand::Rng;
use serde::Serialize;

/// A single quest line offered by a friend.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Objective {
    pub text: &'static str,
}

/// A titled, ordered list of objectives belonging to one friend.
#[derive(Debug)]
pub struct ObjectiveList {
    pub title: &'static str,
    pub objectives: &'static [Objective],
}

impl ObjectiveList {
    /// Every objective in catalog order.
    pub fn all(&self) -> &'static [Objective] {
        self.objectives
    }

    /// Uniformly random objective from this list.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> &'static Objective {
        let objectives = self.objectives;
        &objectives[rng.gen_range(0..objectives.len())]
    }
}

const fn obj(text: &'static str) -> Objective {
    Objective { text }
}

static PHRITS: ObjectiveList = ObjectiveList {
    title: "Phrits' Objectives",
    objectives: &[
        obj("Collect Rare Plant Specimens"),
        obj("Explore the Forest"),
        obj("Analyze Microorganisms"),
        obj("Complete Fitness Challenges"),
        obj("Solve Biological Puzzles"),
        obj("Help Other Friends"),
    ],
};

static MIKA: ObjectiveList = ObjectiveList {
    title: "Mika (Barfika)'s Objectives",
    objectives: &[
        obj("Analyze Game Statistics"),
        obj("Win a Sports Tournament"),
        obj("Coach a Team"),
        obj("Analyze Opponents"),
        obj("Sports Record Breaker"),
        obj("Trivia Master"),
        obj("Collect Sports Memorabilia"),
    ],
};

static JORDY: ObjectiveList = ObjectiveList {
    title: "Jordy (Snordy)'s Fun and Quirky Objectives",
    objectives: &[
        obj("Solve Psychological Puzzles with a Twist"),
        obj("Help Friends with Over-the-Top Relationship Challenges"),
        obj("Master the Art of Disguise with Hilarious Outcomes"),
        obj("Organize a Car Show with Funky Cars"),
        obj("Navigate a Secret Date with Comical Mishaps"),
        obj("Confuse Enemies with Wacky Disguises"),
        obj("Solve Mysteries in Style, Complete with Dramatic Reveals"),
    ],
};

static CASPER: ObjectiveList = ObjectiveList {
    title: "Casper's Objectives (Prepare for Punny Quests!)",
    objectives: &[
        obj("Tell the Funniest Jokes in the Afterlife"),
        obj("Confuse Enemies with Wordplay and Witticisms"),
        obj("Help Friends with Language Puzzles, Ghostly or Otherwise"),
        obj("Play Pun-tastic Pranks on Everyone"),
        obj("Host a Jokester's Challenge"),
        obj("Organize a Language Treasure Hunt"),
        obj("Riddle Rendezvous: Create and Solve Clever Riddles"),
        obj("Linguistic Shenanigans: Have Multilingual Conversations"),
    ],
};

static ROEL: ObjectiveList = ObjectiveList {
    title: "Roel (DJ Roomboter)'s Farming Objectives",
    objectives: &[
        obj("Tend to the Cows with Care"),
        obj("Cultivate a Bountiful Harvest"),
        obj("Share Farming Wisdom with Friends"),
        obj("Solve Farm-Related Challenges"),
        obj("Host a Barnyard Get-Together"),
        obj("Explore Farming Adventures"),
    ],
};

static ALEX: ObjectiveList = ObjectiveList {
    title: "Alex's Smart and Creative Objectives",
    objectives: &[
        obj("Create Whimsical Inventions with Technical Genius"),
        obj("Craft Hilarious Stories and Entertain Friends"),
        obj("Solve Technical Challenges with Innovation"),
        obj("Host a Creative Workshop for Friends"),
        obj("Explore the Limits of AI Knowledge"),
        obj("Use Smart Strategies to Outwit Adversaries"),
        obj("Share Technical Insights and Knowledge"),
    ],
};

static RICK: ObjectiveList = ObjectiveList {
    title: "Rick (Pringers)'s Technical Objectives",
    objectives: &[
        obj("Fix Broken Machinery with Precision"),
        obj("Create Technical Marvels and Inventions"),
        obj("Provide Technical Insights and Solutions"),
        obj("Solve Complex Technical Challenges"),
        obj("Host a Workshop on Mechanical Mastery"),
        obj("Repair and Upgrade Friendships with Care"),
        obj("Safely Handle Fireworks for New Year's"),
    ],
};

static SUEN: ObjectiveList = ObjectiveList {
    title: "Suen (Suenpai)'s Gaming and Hacking Objectives",
    objectives: &[
        obj("Master Virtual Realms and Conquer Games"),
        obj("Optimize Strategies with Min-Max Techniques"),
        obj("Solve Hacking Challenges with Expertise"),
        obj("Achieve High Scores and Records in Games"),
        obj("Host Game Nights and LAN Parties"),
        obj("Outsmart Virtual and Real Adversaries"),
        obj("Hack into the Digital Frontier"),
    ],
};

/// Objective list for a friend.
pub fn catalog(friend: FriendId) -> &'static ObjectiveList {
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_every_friend_has_objectives() {
        for friend in FriendId::ALL {
            let list = catalog(friend);
            assert!(!list.all().is_empty(), "{:?} has no objectives", friend);
            assert!(!list.title.is_empty());
        }
    }

    #[test]
    fn test_pick_random_returns_catalog_entry() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let list = catalog(FriendId::Roel);
        for _ in 0..50 {
            let picked = list.pick_random(&mut rng);
            assert!(list.all().iter().any(|o| std::ptr::eq(o, picked)));
        }
    }

    #[test]
    fn test_pick_random_reaches_every_entry() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let list = catalog(FriendId::Phrits);
        let mut seen = vec![false; list.all().len()];
        for _ in 0..500 {
            let picked = list.pick_random(&mut rng);
            let idx = list
                .all()
                .iter()
                .position(|o| std::ptr::eq(o, picked))
                .unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(catalog(FriendId::Phrits).all().len(), 6);
        assert_eq!(catalog(FriendId::Casper).all().len(), 8);
        assert_eq!(catalog(FriendId::Suen).all().len(), 7);
    }
}
