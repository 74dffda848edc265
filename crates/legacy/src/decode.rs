//! Legacy pair → block.
//!
//! Dispatch goes through a 256-entry table indexed by type id, filled once
//! from the registry bindings. Each rule declares the data bits it owns and
//! only ever sees those bits, so higher bits can never change the result.

use std::sync::LazyLock;

use mcblock_model::block::{
    ActivatableRail, Bed, BedPart, Cactus, Chest, Dispenser, DoorHalf, Farmland, FenceGate, Fire,
    Liquid, Sapling, Snow, Torch, Wood, WoodenDoor,
};
use mcblock_model::{Block, BlockKind};

use crate::LegacyBlock;
use crate::registry::{self as ids, registry};
use crate::tables::*;

/// How to rebuild a block from the data byte of one type id.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// The id alone determines the block.
    Fixed(Block),
    /// `unpack` receives the pair with `data & mask`.
    Unpack {
        mask: u8,
        unpack: fn(LegacyBlock) -> Block,
    },
}

impl Rule {
    /// Data bits this rule reads.
    pub const fn mask(&self) -> u8 {
        match self {
            Rule::Fixed(_) => 0,
            Rule::Unpack { mask, .. } => *mask,
        }
    }

    pub fn apply(&self, raw: LegacyBlock) -> Block {
        match *self {
            Rule::Fixed(block) => block,
            Rule::Unpack { mask, unpack } => unpack(LegacyBlock::new(raw.type_id, raw.data & mask)),
        }
    }
}

const fn unpack(mask: u8, unpack: fn(LegacyBlock) -> Block) -> Rule {
    Rule::Unpack { mask, unpack }
}

static RULES: LazyLock<[Option<Rule>; 256]> = LazyLock::new(|| {
    let mut rules = [None; 256];
    for (type_id, kind) in registry().bindings() {
        rules[type_id as usize] = Some(rule(kind, type_id));
    }
    tracing::debug!(
        "Legacy decode table ready: {} rules",
        rules.iter().flatten().count()
    );
    rules
});

/// Rebuild the block stored as `raw`. Unbound ids give `Block::Unknown`.
pub fn decode(raw: LegacyBlock) -> Block {
    match &RULES[raw.type_id as usize] {
        Some(rule) => rule.apply(raw),
        None => {
            tracing::trace!(type_id = raw.type_id, "Unbound legacy type id, decoding as unknown");
            Block::Unknown
        }
    }
}

/// The rule installed for `type_id`, if any.
pub fn rule_for(type_id: u8) -> Option<Rule> {
    RULES[type_id as usize]
}

/// The reconstruction rule for `kind` under one of its ids. Kinds split
/// across several ids pick their behavior from `type_id`.
fn rule(kind: BlockKind, type_id: u8) -> Rule {
    match kind {
        BlockKind::Simple(simple) => Rule::Fixed(Block::Simple(simple)),

        BlockKind::Stone => unpack(NIBBLE, |raw| Block::Stone(MINERAL.value(raw.data))),
        BlockKind::Dirt => unpack(LOW_2, |raw| Block::Dirt(DIRT.value(raw.data))),
        BlockKind::Cobblestone => unpack(0x1, |raw| Block::Cobblestone(COBBLESTONE.value(raw.data))),
        BlockKind::Sand => unpack(0x1, |raw| Block::Sand(SAND.value(raw.data))),
        BlockKind::Sponge => unpack(0x1, |raw| Block::Sponge(SPONGE.value(raw.data))),
        BlockKind::StoneBricks => unpack(LOW_2, |raw| Block::StoneBricks(STONE_BRICKS.value(raw.data))),
        BlockKind::Sandstone => unpack(LOW_2, |raw| Block::Sandstone(FINISH.value(raw.data))),
        BlockKind::RedSandstone => unpack(LOW_2, |raw| Block::RedSandstone(FINISH.value(raw.data))),
        BlockKind::WoodPlanks => unpack(SPECIES_BITS, |raw| Block::WoodPlanks(WOOD_SPECIES.value(raw.data))),
        BlockKind::Wool => unpack(NIBBLE, |raw| Block::Wool(COLOR.value(raw.data))),
        BlockKind::StainedGlass => unpack(NIBBLE, |raw| Block::StainedGlass(COLOR.value(raw.data))),
        BlockKind::StainedClay => unpack(NIBBLE, |raw| Block::StainedClay(COLOR.value(raw.data))),

        BlockKind::Water if type_id == ids::STATIONARY_WATER => {
            unpack(NIBBLE, |raw| Block::Water(liquid(raw.data, false)))
        }
        BlockKind::Water => unpack(NIBBLE, |raw| Block::Water(liquid(raw.data, true))),
        BlockKind::Lava if type_id == ids::STATIONARY_LAVA => {
            unpack(NIBBLE, |raw| Block::Lava(liquid(raw.data, false)))
        }
        BlockKind::Lava => unpack(NIBBLE, |raw| Block::Lava(liquid(raw.data, true))),

        BlockKind::Wood if type_id == ids::LOG2 => unpack(NIBBLE, |raw| {
            Block::Wood(Wood {
                species: WOOD_SPECIES.value((raw.data & LOG2_SPECIES) + LOG2_SPECIES_BASE),
                axis: AXIS.value(raw.data & LOG_AXIS),
            })
        }),
        BlockKind::Wood => unpack(NIBBLE, |raw| {
            Block::Wood(Wood {
                species: WOOD_SPECIES.value(raw.data & LOG_SPECIES),
                axis: AXIS.value(raw.data & LOG_AXIS),
            })
        }),
        BlockKind::Sapling => unpack(NIBBLE, |raw| {
            Block::Sapling(Sapling {
                species: WOOD_SPECIES.value(raw.data & SPECIES_BITS),
                ready_to_grow: has(raw.data, SAPLING_READY),
            })
        }),

        BlockKind::Bed => unpack(NIBBLE, |raw| {
            Block::Bed(Bed {
                part: if has(raw.data, BED_HEAD) {
                    BedPart::Head
                } else {
                    BedPart::Foot
                },
                facing: BED_FACING.value(raw.data & BED_FACING_BITS),
                occupied: has(raw.data, BED_OCCUPIED),
            })
        }),
        BlockKind::Chest => unpack(LOW_3, |raw| {
            Block::Chest(Chest {
                facing: CHEST_FACING.value(raw.data),
            })
        }),
        BlockKind::Dispenser => unpack(NIBBLE, |raw| {
            Block::Dispenser(Dispenser {
                facing: DISPENSER_FACING.value(raw.data & DISPENSER_FACING_BITS),
                activated: has(raw.data, DISPENSER_ACTIVATED),
            })
        }),
        BlockKind::FenceGate => unpack(LOW_3, |raw| {
            Block::FenceGate(FenceGate {
                facing: FENCE_GATE_FACING.value(raw.data & FENCE_GATE_FACING_BITS),
                open: has(raw.data, FENCE_GATE_OPEN),
            })
        }),
        BlockKind::Torch => unpack(LOW_3, |raw| {
            Block::Torch(Torch::new(TORCH_FACING.value(raw.data)).unwrap_or(Torch::STANDING))
        }),

        BlockKind::WoodenDoor => unpack(NIBBLE, |raw| {
            Block::WoodenDoor(WoodenDoor {
                species: DOOR_SPECIES.value(raw.type_id),
                half: door_half(raw.data),
            })
        }),
        BlockKind::IronDoor => unpack(NIBBLE, |raw| Block::IronDoor(door_half(raw.data))),

        BlockKind::Rail => unpack(NIBBLE, |raw| Block::Rail(RAIL_DIRECTION.value(raw.data))),
        BlockKind::PoweredRail => unpack(NIBBLE, |raw| Block::PoweredRail(activatable_rail(raw.data))),
        BlockKind::DetectorRail => unpack(NIBBLE, |raw| Block::DetectorRail(activatable_rail(raw.data))),
        BlockKind::ActivatorRail => unpack(NIBBLE, |raw| Block::ActivatorRail(activatable_rail(raw.data))),

        BlockKind::Cactus => unpack(NIBBLE, |raw| Block::Cactus(Cactus::new(raw.data).unwrap_or_default())),
        BlockKind::Fire => unpack(NIBBLE, |raw| Block::Fire(Fire::new(raw.data).unwrap_or_default())),
        BlockKind::Farmland => unpack(LOW_3, |raw| Block::Farmland(Farmland::new(raw.data).unwrap_or_default())),
        BlockKind::Snow if type_id == ids::SNOW_LAYER => unpack(NIBBLE, |raw| {
            let thickness = raw.data.clamp(1, Snow::MAX_THICKNESS);
            Block::Snow(Snow::new(thickness).unwrap_or(Snow::FULL))
        }),
        BlockKind::Snow => Rule::Fixed(Block::Snow(Snow::FULL)),
    }
}

fn liquid(data: u8, flowing: bool) -> Liquid {
    Liquid::new(
        LEVEL.value(data & LIQUID_LEVEL),
        flowing,
        has(data, LIQUID_FALLING),
    )
}

fn door_half(data: u8) -> DoorHalf {
    if has(data, DOOR_TOP) {
        DoorHalf::Top {
            hinge_on_right: has(data, DOOR_HINGE_RIGHT),
            powered: has(data, DOOR_POWERED),
        }
    } else {
        DoorHalf::Bottom {
            open: has(data, DOOR_OPEN),
            facing: DOOR_BOTTOM_FACING.value(data & DOOR_FACING),
        }
    }
}

fn activatable_rail(data: u8) -> ActivatableRail {
    let direction = ACTIVATABLE_RAIL_DIRECTION.value(data & RAIL_SHAPE);
    ActivatableRail::new(direction, has(data, RAIL_ACTIVE)).unwrap_or_default()
}
