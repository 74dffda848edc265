//! Wire-format lookup tables and bit positions.
//!
//! Each table lists `(bits, value)` pairs in the order the legacy format
//! defines them. The orderings are part of the format and do not follow the
//! model enums: chests start at 2, torches skip 0, door bottoms start at East.
//! Lookups are total in both directions; anything missing from a table
//! resolves through its fallback.

use mcblock_model::block::{Cobblestone, Dirt, Sand, Sponge, StoneBricks};
use mcblock_model::properties::{
    Axis, Color, Direction, Direction3, Finish, Level, Mineral, RailDirection, WoodSpecies,
};

use crate::registry::{ACACIA_DOOR, BIRCH_DOOR, DARK_OAK_DOOR, JUNGLE_DOOR, OAK_DOOR, SPRUCE_DOOR};

// ── Bit positions ───────────────────────────────────────────────────────

pub const NIBBLE: u8 = 0xF;
pub const LOW_2: u8 = 0x3;
pub const LOW_3: u8 = 0x7;

pub const LIQUID_LEVEL: u8 = 0x7;
pub const LIQUID_FALLING: u8 = 0x8;

pub const DOOR_TOP: u8 = 0x8;
pub const DOOR_HINGE_RIGHT: u8 = 0x1;
pub const DOOR_POWERED: u8 = 0x2;
pub const DOOR_OPEN: u8 = 0x4;
pub const DOOR_FACING: u8 = 0x3;

pub const BED_HEAD: u8 = 0x8;
pub const BED_OCCUPIED: u8 = 0x4;
pub const BED_FACING_BITS: u8 = 0x3;

pub const FENCE_GATE_OPEN: u8 = 0x4;
pub const FENCE_GATE_FACING_BITS: u8 = 0x3;

pub const DISPENSER_ACTIVATED: u8 = 0x8;
pub const DISPENSER_FACING_BITS: u8 = 0x7;

pub const RAIL_ACTIVE: u8 = 0x8;
pub const RAIL_SHAPE: u8 = 0x7;

pub const SAPLING_READY: u8 = 0x8;
pub const SPECIES_BITS: u8 = 0x7;

pub const LOG_SPECIES: u8 = 0x3;
pub const LOG2_SPECIES: u8 = 0x1;
pub const LOG_AXIS: u8 = 0xC;
/// Species at or past this index live under the second log id.
pub const LOG2_SPECIES_BASE: u8 = 4;

/// `bit` if `set`, else nothing.
pub const fn flag(set: bool, bit: u8) -> u8 {
    if set { bit } else { 0 }
}

pub const fn has(data: u8, bit: u8) -> bool {
    data & bit != 0
}

// ── Table ───────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Table<T: 'static> {
    pub name: &'static str,
    entries: &'static [(u8, T)],
    fallback: T,
}

impl<T: 'static> Table<T> {
    pub const fn new(name: &'static str, entries: &'static [(u8, T)], fallback: T) -> Self {
        Self {
            name,
            entries,
            fallback,
        }
    }

    pub const fn entries(&self) -> &'static [(u8, T)] {
        self.entries
    }
}

impl<T: Copy + PartialEq + 'static> Table<T> {
    /// Bits for `value`, or the fallback's bits if the table has no row.
    pub fn bits(&self, value: T) -> u8 {
        self.find_bits(value)
            .or_else(|| self.find_bits(self.fallback))
            .unwrap_or(0)
    }

    /// Value stored under `bits`, or the fallback.
    pub fn value(&self, bits: u8) -> T {
        self.entries
            .iter()
            .find(|(b, _)| *b == bits)
            .map(|(_, value)| *value)
            .unwrap_or(self.fallback)
    }

    pub fn contains(&self, value: T) -> bool {
        self.find_bits(value).is_some()
    }

    fn find_bits(&self, value: T) -> Option<u8> {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(bits, _)| *bits)
    }
}

// ── Orientation ─────────────────────────────────────────────────────────

const SOUTH_WEST_NORTH_EAST: &[(u8, Direction)] = &[
    (0, Direction::South),
    (1, Direction::West),
    (2, Direction::North),
    (3, Direction::East),
];

pub const BED_FACING: Table<Direction> =
    Table::new("bed facing", SOUTH_WEST_NORTH_EAST, Direction::South);

pub const FENCE_GATE_FACING: Table<Direction> =
    Table::new("fence gate facing", SOUTH_WEST_NORTH_EAST, Direction::South);

pub const DOOR_BOTTOM_FACING: Table<Direction> = Table::new(
    "door bottom facing",
    &[
        (0, Direction::East),
        (1, Direction::South),
        (2, Direction::West),
        (3, Direction::North),
    ],
    Direction::East,
);

pub const CHEST_FACING: Table<Direction> = Table::new(
    "chest facing",
    &[
        (2, Direction::North),
        (3, Direction::South),
        (4, Direction::West),
        (5, Direction::East),
    ],
    Direction::North,
);

pub const DISPENSER_FACING: Table<Direction3> = Table::new(
    "dispenser facing",
    &[
        (0, Direction3::Down),
        (1, Direction3::Up),
        (2, Direction3::North),
        (3, Direction3::South),
        (4, Direction3::West),
        (5, Direction3::East),
    ],
    Direction3::Down,
);

pub const TORCH_FACING: Table<Direction3> = Table::new(
    "torch facing",
    &[
        (1, Direction3::East),
        (2, Direction3::West),
        (3, Direction3::South),
        (4, Direction3::North),
        (5, Direction3::Up),
    ],
    Direction3::Up,
);

const RAIL_SHAPES: &[(u8, RailDirection)] = &[
    (0, RailDirection::NorthSouth),
    (1, RailDirection::EastWest),
    (2, RailDirection::AscendingEast),
    (3, RailDirection::AscendingWest),
    (4, RailDirection::AscendingNorth),
    (5, RailDirection::AscendingSouth),
    (6, RailDirection::TurningSouthEast),
    (7, RailDirection::TurningSouthWest),
    (8, RailDirection::TurningNorthWest),
    (9, RailDirection::TurningNorthEast),
];

pub const RAIL_DIRECTION: Table<RailDirection> =
    Table::new("rail direction", RAIL_SHAPES, RailDirection::NorthSouth);

/// Straight and ascending shapes only.
pub const ACTIVATABLE_RAIL_DIRECTION: Table<RailDirection> = Table::new(
    "activatable rail direction",
    RAIL_SHAPES.split_at(6).0,
    RailDirection::NorthSouth,
);

pub const AXIS: Table<Axis> = Table::new(
    "log axis",
    &[
        (0x0, Axis::UpDown),
        (0x4, Axis::EastWest),
        (0x8, Axis::NorthSouth),
        (0xC, Axis::Bark),
    ],
    Axis::UpDown,
);

// ── Species ─────────────────────────────────────────────────────────────

pub const WOOD_SPECIES: Table<WoodSpecies> = Table::new(
    "wood species",
    &[
        (0, WoodSpecies::Oak),
        (1, WoodSpecies::Spruce),
        (2, WoodSpecies::Birch),
        (3, WoodSpecies::Jungle),
        (4, WoodSpecies::Acacia),
        (5, WoodSpecies::DarkOak),
    ],
    WoodSpecies::Oak,
);

/// Keyed by type id rather than data bits.
pub const DOOR_SPECIES: Table<WoodSpecies> = Table::new(
    "door species",
    &[
        (OAK_DOOR, WoodSpecies::Oak),
        (SPRUCE_DOOR, WoodSpecies::Spruce),
        (BIRCH_DOOR, WoodSpecies::Birch),
        (JUNGLE_DOOR, WoodSpecies::Jungle),
        (ACACIA_DOOR, WoodSpecies::Acacia),
        (DARK_OAK_DOOR, WoodSpecies::DarkOak),
    ],
    WoodSpecies::Oak,
);

// ── Materials ───────────────────────────────────────────────────────────

pub const MINERAL: Table<Mineral> = Table::new(
    "mineral",
    &[
        (0, Mineral::Stone),
        (1, Mineral::Granite),
        (2, Mineral::SmoothGranite),
        (3, Mineral::Diorite),
        (4, Mineral::SmoothDiorite),
        (5, Mineral::Andesite),
        (6, Mineral::SmoothAndesite),
    ],
    Mineral::Stone,
);

pub const COLOR: Table<Color> = Table::new(
    "color",
    &[
        (0, Color::White),
        (1, Color::Orange),
        (2, Color::Magenta),
        (3, Color::LightBlue),
        (4, Color::Yellow),
        (5, Color::Lime),
        (6, Color::Pink),
        (7, Color::Gray),
        (8, Color::LightGray),
        (9, Color::Cyan),
        (10, Color::Purple),
        (11, Color::Blue),
        (12, Color::Brown),
        (13, Color::Green),
        (14, Color::Red),
        (15, Color::Black),
    ],
    Color::White,
);

pub const LEVEL: Table<Level> = Table::new(
    "liquid level",
    &[
        (0, Level::Source),
        (1, Level::Highest),
        (2, Level::Higher),
        (3, Level::High),
        (4, Level::Mid),
        (5, Level::Low),
        (6, Level::Lower),
        (7, Level::Lowest),
    ],
    Level::Source,
);

pub const FINISH: Table<Finish> = Table::new(
    "finish",
    &[
        (0, Finish::Plain),
        (1, Finish::Chiseled),
        (2, Finish::Smooth),
    ],
    Finish::Plain,
);

pub const DIRT: Table<Dirt> = Table::new(
    "dirt",
    &[(0, Dirt::Plain), (1, Dirt::Coarse), (2, Dirt::Podzol)],
    Dirt::Plain,
);

pub const COBBLESTONE: Table<Cobblestone> = Table::new(
    "cobblestone",
    &[(0, Cobblestone::Plain), (1, Cobblestone::Mossy)],
    Cobblestone::Plain,
);

pub const SAND: Table<Sand> = Table::new("sand", &[(0, Sand::Plain), (1, Sand::Red)], Sand::Plain);

pub const SPONGE: Table<Sponge> = Table::new(
    "sponge",
    &[(0, Sponge::Dry), (1, Sponge::Wet)],
    Sponge::Dry,
);

pub const STONE_BRICKS: Table<StoneBricks> = Table::new(
    "stone bricks",
    &[
        (0, StoneBricks::Plain),
        (1, StoneBricks::Mossy),
        (2, StoneBricks::Cracked),
        (3, StoneBricks::Chiseled),
    ],
    StoneBricks::Plain,
);
