//! Mini-game scenarios exercised through the public session API.

use friend_quest::challenges::connect::Part;
use friend_quest::challenges::repair::{MachinePart, Tool};
use friend_quest::challenges::{
    select_variant, ActiveMinigame, ConnectGame, MemoryGame, MinigameKind, MinigameResult,
    MinigameSession, PatternGame, RepairGame, WordGame,
};
use friend_quest::challenges::word::PHRASES;
use friend_quest::character::FriendId;
use friend_quest::content::Objective;
use friend_quest::input::Intent;
use friend_quest::utils::geometry::Position;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn session(friend: FriendId, objective: &str, game: ActiveMinigame) -> MinigameSession {
    MinigameSession::with_game(friend, select_variant(friend, objective), game)
}

#[test]
fn test_pattern_round_scores_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut s = session(
        FriendId::Mika,
        "Analyze Game Statistics",
        ActiveMinigame::Pattern(PatternGame::with_sequence(vec![2, 4, 1, 3, 2, 1])),
    );
    for digit in [2, 4, 1, 3, 2, 1] {
        s.apply_input(&Intent::Digit(digit), &mut rng);
    }
    assert_eq!((s.progress, s.target), (1, 5));
    assert_eq!(s.evaluate(), None);
}

#[test]
fn test_connect_out_of_order_resets() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let parts = vec![
        Part { id: 1, position: Position::new(300, 300), connected: false },
        Part { id: 2, position: Position::new(500, 300), connected: false },
        Part { id: 3, position: Position::new(700, 300), connected: false },
    ];
    let mut s = session(
        FriendId::Alex,
        "Build an Invention",
        ActiveMinigame::Connect(ConnectGame::with_layout(parts, vec![3, 1, 2])),
    );

    s.apply_input(&Intent::PointerClick(Position::new(700, 300)), &mut rng);
    assert_eq!(s.progress, 1);
    s.apply_input(&Intent::PointerClick(Position::new(500, 300)), &mut rng);
    assert_eq!(s.progress, 0);

    let ActiveMinigame::Connect(game) = &s.game else {
        panic!("expected connect game");
    };
    assert!(game.parts.iter().all(|p| !p.connected));
}

#[test]
fn test_memory_mismatch_flips_back_after_delay() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let symbols = (0..8).flat_map(|s| [s, s]).collect();
    let mut s = session(
        FriendId::Jordy,
        "Solve a Mystery",
        ActiveMinigame::Memory(MemoryGame::with_symbols(symbols)),
    );
    let centre = |i: usize| {
        let r = friend_quest::challenges::memory::card_rect(i);
        Position::new(r.x + r.width / 2, r.y + r.height / 2)
    };

    // Cards 1 and 2 hold different symbols.
    s.apply_input(&Intent::PointerClick(centre(1)), &mut rng);
    s.apply_input(&Intent::PointerClick(centre(2)), &mut rng);
    assert_eq!(s.progress, 0);

    for _ in 0..50 {
        s.tick(16, &mut rng);
    }
    let ActiveMinigame::Memory(game) = &s.game else {
        panic!("expected memory game");
    };
    assert!(game.mismatch.is_none());

    s.apply_input(&Intent::PointerClick(centre(0)), &mut rng);
    s.apply_input(&Intent::PointerClick(centre(1)), &mut rng);
    assert_eq!(s.progress, 1);
}

#[test]
fn test_word_answers_are_case_insensitive() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let phrases = PHRASES.iter().collect();
    let mut s = session(
        FriendId::Casper,
        "Tell a Joke",
        ActiveMinigame::Word(WordGame::with_phrases(phrases)),
    );
    for c in "BaNaNa".chars() {
        s.apply_input(&Intent::Letter(c), &mut rng);
    }
    s.apply_input(&Intent::Confirm, &mut rng);
    assert_eq!(s.progress, 1);
}

#[test]
fn test_repair_run_to_success() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let parts = vec![
        MachinePart { name: "Gearbox", position: Position::new(250, 300), required: Tool::Hammer, fixed: false },
        MachinePart { name: "Boiler", position: Position::new(750, 300), required: Tool::Pliers, fixed: false },
        MachinePart { name: "Conveyor", position: Position::new(500, 300), required: Tool::Wrench, fixed: false },
    ];
    let game = RepairGame::with_parts(parts);
    let tool_pos = |tool: Tool| game.tools.iter().find(|s| s.tool == tool).map(|s| s.position);
    let (hammer, pliers, wrench) = (
        tool_pos(Tool::Hammer).expect("hammer"),
        tool_pos(Tool::Pliers).expect("pliers"),
        tool_pos(Tool::Wrench).expect("wrench"),
    );
    let mut s = session(FriendId::Rick, "Fix the Broken Machine", ActiveMinigame::Repair(game));
    assert_eq!(s.kind(), MinigameKind::ToolMatch);

    for (tool, part) in [(hammer, (250, 300)), (pliers, (750, 300)), (wrench, (500, 300))] {
        s.apply_input(&Intent::PointerClick(tool), &mut rng);
        s.apply_input(&Intent::PointerClick(Position::new(part.0, part.1)), &mut rng);
    }

    assert_eq!(s.progress, 3);
    assert_eq!(s.evaluate(), None);
    s.elapsed_ms = s.duration_ms;
    assert_eq!(s.evaluate(), Some(MinigameResult::Success));
}

#[test]
fn test_start_routes_objective_to_variant() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let objective = Objective { text: "Take Care of the Cows" };
    let s = MinigameSession::start(FriendId::Roel, &objective, &mut rng);
    assert_eq!(s.variant.name, "Cow Care");
    assert_eq!(s.kind(), MinigameKind::ProximityCare);

    let objective = Objective { text: "Throw a Party" };
    let s = MinigameSession::start(FriendId::Roel, &objective, &mut rng);
    assert_eq!(s.variant.name, "Barnyard Party");
    assert_eq!(s.kind(), MinigameKind::ButtonMash);
    assert_eq!((s.target, s.duration_ms), (100, 5_000));
}
