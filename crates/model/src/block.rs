//! Block values.
//!
//! `Block` is a closed sum type: one case per variant, each carrying only the
//! state meaningful to it. Values are `Copy` and never mutated after
//! construction. Fields with a bounded range are private and go through a
//! validating constructor.

use serde::Serialize;

use crate::error::{BlockError, check_range};
use crate::properties::{
    Axis, Color, Direction, Direction3, Finish, Level, Mineral, RailDirection, WoodSpecies,
};

macro_rules! simple_blocks {
    ($($name:ident),* $(,)?) => {
        /// Blocks with a single appearance and nothing to pack.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum SimpleBlock {
            $($name),*
        }

        impl SimpleBlock {
            pub const ALL: &'static [SimpleBlock] = &[$(SimpleBlock::$name),*];
        }
    };
}

simple_blocks! {
    Air,
    Grass,
    Bedrock,
    Gravel,
    GoldOre,
    IronOre,
    CoalOre,
    Glass,
    LapisOre,
    LapisBlock,
    NoteBlock,
    Cobweb,
    GoldBlock,
    IronBlock,
    Bricks,
    Tnt,
    Bookshelf,
    Obsidian,
    DiamondOre,
    DiamondBlock,
    CraftingTable,
    RedstoneOre,
    Ice,
    Clay,
    Jukebox,
    Netherrack,
    SoulSand,
    Glowstone,
    Melon,
    Mycelium,
    NetherBricks,
    EndStone,
    DragonEgg,
    RedstoneLamp,
    EmeraldOre,
    EmeraldBlock,
    RedstoneBlock,
    QuartzOre,
    Slime,
    Barrier,
    SeaLantern,
    HardenedClay,
    CoalBlock,
    PackedIce,
}

// ── Material variants ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Dirt {
    #[default]
    Plain,
    Coarse,
    Podzol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Cobblestone {
    #[default]
    Plain,
    Mossy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Sand {
    #[default]
    Plain,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Sponge {
    #[default]
    Dry,
    Wet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum StoneBricks {
    #[default]
    Plain,
    Mossy,
    Cracked,
    Chiseled,
}

// ── Stateful variants ───────────────────────────────────────────────────

/// Water or lava.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Liquid {
    pub level: Level,
    pub flowing: bool,
    pub falling: bool,
}

impl Liquid {
    pub const fn new(level: Level, flowing: bool, falling: bool) -> Self {
        Self {
            level,
            flowing,
            falling,
        }
    }
}

/// A log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Wood {
    pub species: WoodSpecies,
    pub axis: Axis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Sapling {
    pub species: WoodSpecies,
    pub ready_to_grow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BedPart {
    Head,
    #[default]
    Foot,
}

/// One half of a bed. `facing` is the direction the head points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Bed {
    pub part: BedPart,
    pub facing: Direction,
    pub occupied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Chest {
    pub facing: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Dispenser {
    pub facing: Direction3,
    pub activated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct FenceGate {
    pub facing: Direction,
    pub open: bool,
}

/// A torch, either standing (`Up`) or attached to a wall it points away from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Torch {
    facing: Direction3,
}

impl Torch {
    pub const STANDING: Torch = Torch {
        facing: Direction3::Up,
    };

    pub fn new(facing: Direction3) -> Result<Self, BlockError> {
        match facing {
            Direction3::Down => Err(BlockError::DownwardTorch),
            facing => Ok(Self { facing }),
        }
    }

    pub const fn facing(&self) -> Direction3 {
        self.facing
    }
}

/// The two halves of a door have disjoint state: the top half knows about
/// the hinge and power, the bottom half about opening and facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DoorHalf {
    Top { hinge_on_right: bool, powered: bool },
    Bottom { open: bool, facing: Direction },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WoodenDoor {
    pub species: WoodSpecies,
    pub half: DoorHalf,
}

/// Powered, detector and activator rails. They can only run straight or
/// ascend; turning shapes are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ActivatableRail {
    direction: RailDirection,
    active: bool,
}

impl ActivatableRail {
    pub fn new(direction: RailDirection, active: bool) -> Result<Self, BlockError> {
        if direction.is_turning() {
            return Err(BlockError::TurningRail(direction));
        }
        Ok(Self { direction, active })
    }

    pub const fn direction(&self) -> RailDirection {
        self.direction
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Cactus {
    age: u8,
}

impl Cactus {
    pub const MAX_AGE: u8 = 15;

    pub fn new(age: u8) -> Result<Self, BlockError> {
        check_range("cactus age", age, 0, Self::MAX_AGE).map(|age| Self { age })
    }

    pub const fn age(&self) -> u8 {
        self.age
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Fire {
    intensity: u8,
}

impl Fire {
    pub const MAX_INTENSITY: u8 = 15;

    pub fn new(intensity: u8) -> Result<Self, BlockError> {
        check_range("fire intensity", intensity, 0, Self::MAX_INTENSITY)
            .map(|intensity| Self { intensity })
    }

    pub const fn intensity(&self) -> u8 {
        self.intensity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Farmland {
    wetness: u8,
}

impl Farmland {
    pub const MAX_WETNESS: u8 = 7;

    pub fn new(wetness: u8) -> Result<Self, BlockError> {
        check_range("farmland wetness", wetness, 0, Self::MAX_WETNESS)
            .map(|wetness| Self { wetness })
    }

    pub const fn wetness(&self) -> u8 {
        self.wetness
    }
}

/// Snow, from a single layer up to a full block (`thickness == 8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Snow {
    thickness: u8,
}

impl Snow {
    pub const MAX_THICKNESS: u8 = 8;
    pub const FULL: Snow = Snow {
        thickness: Self::MAX_THICKNESS,
    };

    pub fn new(thickness: u8) -> Result<Self, BlockError> {
        check_range("snow thickness", thickness, 1, Self::MAX_THICKNESS)
            .map(|thickness| Self { thickness })
    }

    pub const fn thickness(&self) -> u8 {
        self.thickness
    }

    pub const fn is_full(&self) -> bool {
        self.thickness == Self::MAX_THICKNESS
    }
}

// ── The sum type ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Block {
    Simple(SimpleBlock),
    Stone(Mineral),
    Dirt(Dirt),
    Cobblestone(Cobblestone),
    WoodPlanks(WoodSpecies),
    Sapling(Sapling),
    Water(Liquid),
    Lava(Liquid),
    Sand(Sand),
    Wood(Wood),
    Sponge(Sponge),
    Dispenser(Dispenser),
    Sandstone(Finish),
    Bed(Bed),
    PoweredRail(ActivatableRail),
    DetectorRail(ActivatableRail),
    Wool(Color),
    Torch(Torch),
    Fire(Fire),
    Chest(Chest),
    Farmland(Farmland),
    WoodenDoor(WoodenDoor),
    Rail(RailDirection),
    IronDoor(DoorHalf),
    Snow(Snow),
    Cactus(Cactus),
    StainedGlass(Color),
    StoneBricks(StoneBricks),
    FenceGate(FenceGate),
    ActivatorRail(ActivatableRail),
    StainedClay(Color),
    RedSandstone(Finish),
    /// Produced when decoding an identifier nobody registered.
    Unknown,
}

impl Block {
    /// The static type of this value, or `None` for `Unknown`.
    pub const fn kind(&self) -> Option<BlockKind> {
        let kind = match self {
            Block::Simple(simple) => BlockKind::Simple(*simple),
            Block::Stone(_) => BlockKind::Stone,
            Block::Dirt(_) => BlockKind::Dirt,
            Block::Cobblestone(_) => BlockKind::Cobblestone,
            Block::WoodPlanks(_) => BlockKind::WoodPlanks,
            Block::Sapling(_) => BlockKind::Sapling,
            Block::Water(_) => BlockKind::Water,
            Block::Lava(_) => BlockKind::Lava,
            Block::Sand(_) => BlockKind::Sand,
            Block::Wood(_) => BlockKind::Wood,
            Block::Sponge(_) => BlockKind::Sponge,
            Block::Dispenser(_) => BlockKind::Dispenser,
            Block::Sandstone(_) => BlockKind::Sandstone,
            Block::Bed(_) => BlockKind::Bed,
            Block::PoweredRail(_) => BlockKind::PoweredRail,
            Block::DetectorRail(_) => BlockKind::DetectorRail,
            Block::Wool(_) => BlockKind::Wool,
            Block::Torch(_) => BlockKind::Torch,
            Block::Fire(_) => BlockKind::Fire,
            Block::Chest(_) => BlockKind::Chest,
            Block::Farmland(_) => BlockKind::Farmland,
            Block::WoodenDoor(_) => BlockKind::WoodenDoor,
            Block::Rail(_) => BlockKind::Rail,
            Block::IronDoor(_) => BlockKind::IronDoor,
            Block::Snow(_) => BlockKind::Snow,
            Block::Cactus(_) => BlockKind::Cactus,
            Block::StainedGlass(_) => BlockKind::StainedGlass,
            Block::StoneBricks(_) => BlockKind::StoneBricks,
            Block::FenceGate(_) => BlockKind::FenceGate,
            Block::ActivatorRail(_) => BlockKind::ActivatorRail,
            Block::StainedClay(_) => BlockKind::StainedClay,
            Block::RedSandstone(_) => BlockKind::RedSandstone,
            Block::Unknown => return None,
        };
        Some(kind)
    }

    pub const fn is_unknown(&self) -> bool {
        matches!(self, Block::Unknown)
    }
}

macro_rules! block_kinds {
    ($($name:ident),* $(,)?) => {
        /// The static type of a `Block` value, independent of its field values.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum BlockKind {
            Simple(SimpleBlock),
            $($name),*
        }

        impl BlockKind {
            /// Every kind that carries state.
            pub const STATEFUL: &'static [BlockKind] = &[$(BlockKind::$name),*];
        }
    };
}

block_kinds! {
    Stone,
    Dirt,
    Cobblestone,
    WoodPlanks,
    Sapling,
    Water,
    Lava,
    Sand,
    Wood,
    Sponge,
    Dispenser,
    Sandstone,
    Bed,
    PoweredRail,
    DetectorRail,
    Wool,
    Torch,
    Fire,
    Chest,
    Farmland,
    WoodenDoor,
    Rail,
    IronDoor,
    Snow,
    Cactus,
    StainedGlass,
    StoneBricks,
    FenceGate,
    ActivatorRail,
    StainedClay,
    RedSandstone,
}

impl BlockKind {
    /// Simple kinds first, then stateful ones.
    pub fn all() -> impl Iterator<Item = BlockKind> {
        SimpleBlock::ALL
            .iter()
            .copied()
            .map(BlockKind::Simple)
            .chain(Self::STATEFUL.iter().copied())
    }

    pub const fn is_simple(self) -> bool {
        matches!(self, BlockKind::Simple(_))
    }
}
