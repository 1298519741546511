// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 FPS
pub const TICKS_PER_SECOND: u64 = 1000 / TICK_INTERVAL_MS;

// Playfield
pub const FIELD_WIDTH: i32 = 1200;
pub const FIELD_HEIGHT: i32 = 800;
pub const CHARACTER_WIDTH: i32 = 64;
pub const CHARACTER_HEIGHT: i32 = 128;
pub const PLAYER_SPEED: i32 = 5;
/// Player start, the centre of the field.
pub const PLAYER_START_X: i32 = FIELD_WIDTH / 2;
pub const PLAYER_START_Y: i32 = FIELD_HEIGHT / 2;
/// Friends never spawn closer than this to the field edge.
pub const SPAWN_MARGIN: i32 = 50;
/// Friends never spawn within this distance of the player start on both axes.
pub const SPAWN_CLEARANCE: i32 = 100;

// Energy
pub const MAX_ENERGY: f64 = 100.0;
pub const ENERGY_REGEN_PER_TICK: f64 = 0.1;
pub const QUEST_ENERGY_COST: f64 = 20.0;
pub const EARLY_FAILURE_ENERGY_PENALTY: f64 = 10.0;

// Friend happiness
pub const STARTING_HAPPINESS: u8 = 50;
pub const MAX_HAPPINESS: u8 = 100;

// Mini-game resolution
/// A mini-game succeeds when progress reaches this percentage of its target.
pub const SUCCESS_THRESHOLD_PERCENT: i32 = 70;
pub const SUCCESS_SCORE: u32 = 100;
pub const SUCCESS_FRIENDSHIP: u32 = 10;
pub const SUCCESS_HAPPINESS: i32 = 20;
pub const PARTIAL_SCORE: u32 = 25;
pub const PARTIAL_HAPPINESS: i32 = 5;
pub const FAILURE_HAPPINESS_PENALTY: i32 = 5;

// Message log
pub const MAX_MESSAGE_LOG: usize = 8;
