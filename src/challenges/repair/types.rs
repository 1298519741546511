//! Machinery repair data structures.

use crate::challenges::ARENA;
use crate::utils::geometry::Position;
use rand::Rng;
use serde::Serialize;

pub const PART_COUNT: usize = 4;
/// Click radius around tools and parts.
pub const HIT_RADIUS: f64 = 45.0;

const PART_NAMES: [&str; PART_COUNT] = ["Gearbox", "Control Panel", "Boiler", "Conveyor"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tool {
    Wrench,
    Screwdriver,
    Hammer,
    Pliers,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Wrench, Tool::Screwdriver, Tool::Hammer, Tool::Pliers];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Wrench => "Wrench",
            Self::Screwdriver => "Screwdriver",
            Self::Hammer => "Hammer",
            Self::Pliers => "Pliers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolSlot {
    pub tool: Tool,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachinePart {
    pub name: &'static str,
    pub position: Position,
    pub required: Tool,
    pub fixed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepairGame {
    pub tools: Vec<ToolSlot>,
    pub parts: Vec<MachinePart>,
    /// Latched tool, cleared after any attempt on a part.
    pub selected: Option<Tool>,
}

/// Evenly spaced x coordinates for `count` items across the arena.
fn spread(count: usize) -> impl Iterator<Item = i32> {
    let step = ARENA.width / count as i32;
    (0..count as i32).map(move |i| ARENA.x + step / 2 + i * step)
}

impl RepairGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let parts = PART_NAMES
            .iter()
            .zip(spread(PART_COUNT))
            .map(|(&name, x)| MachinePart {
                name,
                position: Position::new(x, ARENA.y + ARENA.height / 4),
                required: Tool::ALL[rng.gen_range(0..Tool::ALL.len())],
                fixed: false,
            })
            .collect();
        Self::with_parts(parts)
    }

    pub fn with_parts(parts: Vec<MachinePart>) -> Self {
        let tools = Tool::ALL
            .iter()
            .zip(spread(Tool::ALL.len()))
            .map(|(&tool, x)| ToolSlot {
                tool,
                position: Position::new(x, ARENA.bottom() - ARENA.height / 5),
            })
            .collect();
        Self {
            tools,
            parts,
            selected: None,
        }
    }

    pub fn fixed_count(&self) -> usize {
        self.parts.iter().filter(|p| p.fixed).count()
    }
}
