//! Block → legacy pair.

use mcblock_model::block::{ActivatableRail, BedPart, DoorHalf};
use mcblock_model::properties::Level;
use mcblock_model::{Block, BlockKind};

use crate::LegacyBlock;
use crate::error::EncodeError;
use crate::registry::{self as ids, registry};
use crate::tables::*;

/// Pack `block` into its legacy pair.
///
/// Fails only for `Block::Unknown`, which has no legacy form.
pub fn encode(block: &Block) -> Result<LegacyBlock, EncodeError> {
    let pair = match *block {
        Block::Simple(simple) => LegacyBlock::simple(id(BlockKind::Simple(simple))),

        // Material and finish: the table bits are the data byte.
        Block::Stone(mineral) => LegacyBlock::new(id(BlockKind::Stone), MINERAL.bits(mineral)),
        Block::Dirt(dirt) => LegacyBlock::new(id(BlockKind::Dirt), DIRT.bits(dirt)),
        Block::Cobblestone(cobble) => {
            LegacyBlock::new(id(BlockKind::Cobblestone), COBBLESTONE.bits(cobble))
        }
        Block::Sand(sand) => LegacyBlock::new(id(BlockKind::Sand), SAND.bits(sand)),
        Block::Sponge(sponge) => LegacyBlock::new(id(BlockKind::Sponge), SPONGE.bits(sponge)),
        Block::StoneBricks(bricks) => {
            LegacyBlock::new(id(BlockKind::StoneBricks), STONE_BRICKS.bits(bricks))
        }
        Block::Sandstone(finish) => LegacyBlock::new(id(BlockKind::Sandstone), FINISH.bits(finish)),
        Block::RedSandstone(finish) => {
            LegacyBlock::new(id(BlockKind::RedSandstone), FINISH.bits(finish))
        }
        Block::WoodPlanks(species) => {
            LegacyBlock::new(id(BlockKind::WoodPlanks), WOOD_SPECIES.bits(species))
        }
        Block::Wool(color) => LegacyBlock::new(id(BlockKind::Wool), COLOR.bits(color)),
        Block::StainedGlass(color) => {
            LegacyBlock::new(id(BlockKind::StainedGlass), COLOR.bits(color))
        }
        // Written under the plain clay id; reading id 82 back gives plain clay.
        Block::StainedClay(color) => LegacyBlock::new(ids::CLAY, COLOR.bits(color)),

        // Liquids: the id carries flowing vs. stationary.
        Block::Water(liquid) => {
            let type_id = if liquid.flowing {
                id(BlockKind::Water)
            } else {
                ids::STATIONARY_WATER
            };
            LegacyBlock::new(type_id, liquid_data(liquid.level, liquid.falling))
        }
        Block::Lava(liquid) => {
            let type_id = if liquid.flowing {
                id(BlockKind::Lava)
            } else {
                ids::STATIONARY_LAVA
            };
            LegacyBlock::new(type_id, liquid_data(liquid.level, liquid.falling))
        }

        Block::Wood(wood) => {
            let species = WOOD_SPECIES.bits(wood.species);
            let axis = AXIS.bits(wood.axis);
            if species < LOG2_SPECIES_BASE {
                LegacyBlock::new(id(BlockKind::Wood), species | axis)
            } else {
                LegacyBlock::new(ids::LOG2, (species - LOG2_SPECIES_BASE) | axis)
            }
        }
        Block::Sapling(sapling) => LegacyBlock::new(
            id(BlockKind::Sapling),
            WOOD_SPECIES.bits(sapling.species) | flag(sapling.ready_to_grow, SAPLING_READY),
        ),

        // Orientation
        Block::Bed(bed) => LegacyBlock::new(
            id(BlockKind::Bed),
            BED_FACING.bits(bed.facing)
                | flag(bed.occupied, BED_OCCUPIED)
                | flag(bed.part == BedPart::Head, BED_HEAD),
        ),
        Block::Chest(chest) => LegacyBlock::new(id(BlockKind::Chest), CHEST_FACING.bits(chest.facing)),
        Block::Dispenser(dispenser) => LegacyBlock::new(
            id(BlockKind::Dispenser),
            DISPENSER_FACING.bits(dispenser.facing) | flag(dispenser.activated, DISPENSER_ACTIVATED),
        ),
        Block::FenceGate(gate) => LegacyBlock::new(
            id(BlockKind::FenceGate),
            FENCE_GATE_FACING.bits(gate.facing) | flag(gate.open, FENCE_GATE_OPEN),
        ),
        Block::Torch(torch) => LegacyBlock::new(id(BlockKind::Torch), TORCH_FACING.bits(torch.facing())),

        // Doors: the id carries the material, the data byte the half.
        Block::WoodenDoor(door) => LegacyBlock::new(DOOR_SPECIES.bits(door.species), door_data(door.half)),
        Block::IronDoor(half) => LegacyBlock::new(id(BlockKind::IronDoor), door_data(half)),

        Block::Rail(direction) => LegacyBlock::new(id(BlockKind::Rail), RAIL_DIRECTION.bits(direction)),
        Block::PoweredRail(rail) => LegacyBlock::new(id(BlockKind::PoweredRail), activatable_rail_data(rail)),
        Block::DetectorRail(rail) => {
            LegacyBlock::new(id(BlockKind::DetectorRail), activatable_rail_data(rail))
        }
        Block::ActivatorRail(rail) => {
            LegacyBlock::new(id(BlockKind::ActivatorRail), activatable_rail_data(rail))
        }

        // Counters are stored as-is.
        Block::Cactus(cactus) => LegacyBlock::new(id(BlockKind::Cactus), cactus.age()),
        Block::Fire(fire) => LegacyBlock::new(id(BlockKind::Fire), fire.intensity()),
        Block::Farmland(farmland) => LegacyBlock::new(id(BlockKind::Farmland), farmland.wetness()),
        Block::Snow(snow) if snow.is_full() => LegacyBlock::simple(id(BlockKind::Snow)),
        Block::Snow(snow) => LegacyBlock::new(ids::SNOW_LAYER, snow.thickness()),

        Block::Unknown => return Err(EncodeError::UnknownBlock),
    };
    Ok(pair)
}

fn id(kind: BlockKind) -> u8 {
    registry().id_of(kind)
}

fn liquid_data(level: Level, falling: bool) -> u8 {
    LEVEL.bits(level) | flag(falling, LIQUID_FALLING)
}

fn door_data(half: DoorHalf) -> u8 {
    match half {
        DoorHalf::Top {
            hinge_on_right,
            powered,
        } => DOOR_TOP | flag(hinge_on_right, DOOR_HINGE_RIGHT) | flag(powered, DOOR_POWERED),
        DoorHalf::Bottom { open, facing } => flag(open, DOOR_OPEN) | DOOR_BOTTOM_FACING.bits(facing),
    }
}

fn activatable_rail_data(rail: ActivatableRail) -> u8 {
    ACTIVATABLE_RAIL_DIRECTION.bits(rail.direction()) | flag(rail.is_active(), RAIL_ACTIVE)
}
