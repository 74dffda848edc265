//! Literal encodings for the block families with packed state.

use mcblock_legacy::registry::{self as ids, registry};
use mcblock_legacy::{EncodeError, LegacyBlock, decode, encode};
use mcblock_model::block::{
    ActivatableRail, Bed, BedPart, Cactus, Chest, Cobblestone, Dirt, Dispenser, DoorHalf, Farmland,
    FenceGate, Fire, Liquid, Sand, Sapling, Snow, Sponge, StoneBricks, Torch, Wood, WoodenDoor,
};
use mcblock_model::properties::{
    Axis, Color, Direction, Direction3, Finish, Level, Mineral, RailDirection, WoodSpecies,
};
use mcblock_model::{Block, BlockKind};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Encode `block`, check the pair, then decode the pair back.
fn assert_pair(block: Block, type_id: u8, data: u8) {
    let pair = encode(&block).unwrap();
    assert_eq!(
        pair,
        LegacyBlock::new(type_id, data),
        "encoding {block:?}"
    );
    assert_eq!(decode(pair), block, "decoding {pair}");
}

fn wooden_door(species: WoodSpecies, half: DoorHalf) -> Block {
    Block::WoodenDoor(WoodenDoor { species, half })
}

fn top(hinge_on_right: bool, powered: bool) -> DoorHalf {
    DoorHalf::Top {
        hinge_on_right,
        powered,
    }
}

fn bottom(open: bool, facing: Direction) -> DoorHalf {
    DoorHalf::Bottom { open, facing }
}

fn rail(direction: RailDirection, active: bool) -> ActivatableRail {
    ActivatableRail::new(direction, active).unwrap()
}

// ---------------------------------------------------------------------------
// Stone
// ---------------------------------------------------------------------------

#[test]
fn smooth_andesite_is_stone_data_six() {
    assert_pair(Block::Stone(Mineral::SmoothAndesite), ids::STONE, 0x06);
    assert_eq!(registry().id_of(BlockKind::Stone), 1);
}

#[test]
fn stone_minerals_decode_from_the_nibble() {
    assert_eq!(decode(LegacyBlock::new(1, 0)), Block::Stone(Mineral::Stone));
    assert_eq!(decode(LegacyBlock::new(1, 5)), Block::Stone(Mineral::Andesite));
    assert_eq!(decode(LegacyBlock::new(1, 2)), Block::Stone(Mineral::SmoothGranite));
    // Bits above the nibble are not looked at.
    assert_eq!(decode(LegacyBlock::new(1, 0x20)), Block::Stone(Mineral::Stone));
    // Values the format does not define fall back to plain stone.
    assert_eq!(decode(LegacyBlock::new(1, 0x0E)), Block::Stone(Mineral::Stone));
}

// ---------------------------------------------------------------------------
// Liquids
// ---------------------------------------------------------------------------

#[test]
fn water_id_carries_flowing() {
    assert_pair(Block::Water(Liquid::new(Level::Source, true, false)), 8, 0x0);
    assert_pair(Block::Water(Liquid::new(Level::Highest, true, true)), 8, 0x9);
    assert_pair(Block::Water(Liquid::new(Level::Lowest, false, false)), 9, 0x7);
    assert_pair(Block::Water(Liquid::new(Level::Mid, false, true)), 9, 0xC);
}

#[test]
fn lava_id_carries_flowing() {
    assert_pair(Block::Lava(Liquid::new(Level::Source, true, false)), 10, 0x0);
    assert_pair(Block::Lava(Liquid::new(Level::Highest, true, true)), 10, 0x9);
    assert_pair(Block::Lava(Liquid::new(Level::Lowest, false, false)), 11, 0x7);
    assert_pair(Block::Lava(Liquid::new(Level::Mid, false, true)), 11, 0xC);
}

// ---------------------------------------------------------------------------
// Doors
// ---------------------------------------------------------------------------

#[test]
fn door_tops_set_bit_three() {
    assert_pair(wooden_door(WoodSpecies::Oak, top(true, false)), 64, 0x9);
    assert_pair(wooden_door(WoodSpecies::DarkOak, top(false, false)), 197, 0x8);
    assert_pair(wooden_door(WoodSpecies::Spruce, top(false, true)), 193, 0xA);
    assert_pair(Block::IronDoor(top(true, true)), 71, 0xB);
}

#[test]
fn door_bottoms_clear_bit_three() {
    assert_pair(wooden_door(WoodSpecies::Birch, bottom(true, Direction::North)), 194, 0x7);
    assert_pair(wooden_door(WoodSpecies::Jungle, bottom(false, Direction::South)), 195, 0x1);
    assert_pair(wooden_door(WoodSpecies::Acacia, bottom(true, Direction::East)), 196, 0x4);
    assert_pair(wooden_door(WoodSpecies::Spruce, bottom(true, Direction::West)), 193, 0x6);
    assert_pair(Block::IronDoor(bottom(false, Direction::West)), 71, 0x2);
}

#[test]
fn spruce_halves_share_an_id_but_not_a_layout() {
    let lower = encode(&wooden_door(WoodSpecies::Spruce, bottom(true, Direction::West))).unwrap();
    let upper = encode(&wooden_door(WoodSpecies::Spruce, top(false, true))).unwrap();
    assert_eq!(lower.type_id, upper.type_id);
    assert_eq!(lower.data & 0x8, 0);
    assert_eq!(upper.data & 0x8, 0x8);
}

#[test]
fn iron_door_is_told_apart_by_id() {
    match decode(LegacyBlock::new(71, 0x0B)) {
        Block::IronDoor(DoorHalf::Top {
            hinge_on_right,
            powered,
        }) => {
            assert!(hinge_on_right);
            assert!(powered);
        }
        other => panic!("expected an iron door top, got {other:?}"),
    }
    assert!(matches!(
        decode(LegacyBlock::new(64, 0x0B)),
        Block::WoodenDoor(WoodenDoor {
            species: WoodSpecies::Oak,
            half: DoorHalf::Top { .. }
        })
    ));
}

// ---------------------------------------------------------------------------
// Rails
// ---------------------------------------------------------------------------

#[test]
fn plain_rails_use_all_ten_shapes() {
    let expected = [
        (RailDirection::NorthSouth, 0x0),
        (RailDirection::EastWest, 0x1),
        (RailDirection::AscendingEast, 0x2),
        (RailDirection::AscendingWest, 0x3),
        (RailDirection::AscendingNorth, 0x4),
        (RailDirection::AscendingSouth, 0x5),
        (RailDirection::TurningSouthEast, 0x6),
        (RailDirection::TurningSouthWest, 0x7),
        (RailDirection::TurningNorthWest, 0x8),
        (RailDirection::TurningNorthEast, 0x9),
    ];
    for (direction, data) in expected {
        assert_pair(Block::Rail(direction), 66, data);
    }
}

#[test]
fn activatable_rails_or_in_the_active_bit() {
    use RailDirection::*;

    assert_pair(Block::ActivatorRail(rail(AscendingNorth, false)), 157, 0x4);
    assert_pair(Block::ActivatorRail(rail(AscendingSouth, true)), 157, 0xD);
    assert_pair(Block::DetectorRail(rail(AscendingWest, false)), 28, 0x3);
    assert_pair(Block::DetectorRail(rail(AscendingWest, true)), 28, 0xB);
    assert_pair(Block::PoweredRail(rail(AscendingEast, false)), 27, 0x2);
    assert_pair(Block::PoweredRail(rail(AscendingEast, true)), 27, 0xA);
    assert_pair(Block::PoweredRail(rail(NorthSouth, false)), 27, 0x0);
    assert_pair(Block::PoweredRail(rail(NorthSouth, true)), 27, 0x8);
    assert_pair(Block::DetectorRail(rail(NorthSouth, true)), 28, 0x8);
    assert_pair(Block::ActivatorRail(rail(NorthSouth, true)), 157, 0x8);
}

#[test]
fn activator_rail_decodes_as_activator_rail() {
    let decoded = decode(LegacyBlock::new(157, 0x0D));
    assert_eq!(decoded.kind(), Some(BlockKind::ActivatorRail));
    match decoded {
        Block::ActivatorRail(rail) => {
            assert_eq!(rail.direction(), RailDirection::AscendingSouth);
            assert!(rail.is_active());
        }
        other => panic!("expected an activator rail, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

#[test]
fn bed_head_is_bit_three_and_occupied_bit_two() {
    let bed = |part, facing, occupied| {
        Block::Bed(Bed {
            part,
            facing,
            occupied,
        })
    };
    assert_pair(bed(BedPart::Head, Direction::North, true), 26, 0xE);
    assert_pair(bed(BedPart::Head, Direction::North, false), 26, 0xA);
    assert_pair(bed(BedPart::Foot, Direction::North, true), 26, 0x6);
    assert_pair(bed(BedPart::Foot, Direction::South, false), 26, 0x0);
    assert_pair(bed(BedPart::Foot, Direction::West, false), 26, 0x1);
    assert_pair(bed(BedPart::Head, Direction::East, false), 26, 0xB);
}

#[test]
fn fence_gate_open_is_bit_two() {
    assert_pair(
        Block::FenceGate(FenceGate {
            facing: Direction::East,
            open: true,
        }),
        107,
        0x7,
    );
    assert_pair(
        Block::FenceGate(FenceGate {
            facing: Direction::West,
            open: false,
        }),
        107,
        0x1,
    );
}

#[test]
fn dispenser_activated_is_bit_three() {
    assert_pair(
        Block::Dispenser(Dispenser {
            facing: Direction3::West,
            activated: true,
        }),
        23,
        0xC,
    );
    assert_pair(
        Block::Dispenser(Dispenser {
            facing: Direction3::Up,
            activated: false,
        }),
        23,
        0x1,
    );
    assert_pair(Block::Dispenser(Dispenser::default()), 23, 0x0);
}

#[test]
fn torch_and_chest_facings() {
    let torch = |facing| Block::Torch(Torch::new(facing).unwrap());
    assert_pair(torch(Direction3::East), 50, 1);
    assert_pair(torch(Direction3::West), 50, 2);
    assert_pair(torch(Direction3::South), 50, 3);
    assert_pair(torch(Direction3::North), 50, 4);
    assert_pair(torch(Direction3::Up), 50, 5);

    let chest = |facing| Block::Chest(Chest { facing });
    assert_pair(chest(Direction::North), 54, 2);
    assert_pair(chest(Direction::South), 54, 3);
    assert_pair(chest(Direction::West), 54, 4);
    assert_pair(chest(Direction::East), 54, 5);
}

// ---------------------------------------------------------------------------
// Trees
// ---------------------------------------------------------------------------

#[test]
fn sapling_ready_is_bit_three() {
    let sapling = |species, ready_to_grow| {
        Block::Sapling(Sapling {
            species,
            ready_to_grow,
        })
    };
    assert_pair(sapling(WoodSpecies::Spruce, true), 6, 0x9);
    assert_pair(sapling(WoodSpecies::Oak, false), 6, 0x0);
    assert_pair(sapling(WoodSpecies::DarkOak, false), 6, 0x5);
    assert_pair(sapling(WoodSpecies::Acacia, true), 6, 0xC);
}

#[test]
fn log_axis_sits_above_species() {
    let log = |species, axis| Block::Wood(Wood { species, axis });
    assert_pair(log(WoodSpecies::Birch, Axis::NorthSouth), 17, 0xA);
    assert_pair(log(WoodSpecies::Oak, Axis::UpDown), 17, 0x0);
    assert_pair(log(WoodSpecies::Spruce, Axis::EastWest), 17, 0x5);
    assert_pair(log(WoodSpecies::Jungle, Axis::Bark), 17, 0xF);
    assert_pair(log(WoodSpecies::Acacia, Axis::UpDown), 162, 0x0);
    assert_pair(log(WoodSpecies::DarkOak, Axis::NorthSouth), 162, 0x9);
}

#[test]
fn planks_store_species() {
    assert_pair(Block::WoodPlanks(WoodSpecies::Oak), 5, 0);
    assert_pair(Block::WoodPlanks(WoodSpecies::Jungle), 5, 3);
    assert_pair(Block::WoodPlanks(WoodSpecies::DarkOak), 5, 5);
}

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

#[test]
fn material_values() {
    assert_pair(Block::Dirt(Dirt::Plain), 3, 0);
    assert_pair(Block::Dirt(Dirt::Coarse), 3, 1);
    assert_pair(Block::Dirt(Dirt::Podzol), 3, 2);
    assert_pair(Block::Cobblestone(Cobblestone::Mossy), 4, 1);
    assert_pair(Block::Sand(Sand::Plain), 12, 0);
    assert_pair(Block::Sand(Sand::Red), 12, 1);
    assert_pair(Block::Sponge(Sponge::Wet), 19, 1);
    assert_pair(Block::StoneBricks(StoneBricks::Chiseled), 98, 3);
    assert_pair(Block::Sandstone(Finish::Smooth), 24, 2);
    assert_pair(Block::RedSandstone(Finish::Chiseled), 179, 1);
}

#[test]
fn colors_fill_the_nibble() {
    assert_pair(Block::Wool(Color::White), 35, 0);
    assert_pair(Block::Wool(Color::Lime), 35, 5);
    assert_pair(Block::Wool(Color::Black), 35, 15);
    assert_pair(Block::StainedGlass(Color::Red), 95, 14);
    assert_pair(Block::StainedGlass(Color::LightBlue), 95, 3);
    assert_eq!(decode(LegacyBlock::new(159, 11)), Block::StainedClay(Color::Blue));
}

// ---------------------------------------------------------------------------
// Counters
// ---------------------------------------------------------------------------

#[test]
fn counters_are_stored_as_is() {
    assert_pair(Block::Cactus(Cactus::new(15).unwrap()), 81, 15);
    assert_pair(Block::Cactus(Cactus::new(0).unwrap()), 81, 0);
    assert_pair(Block::Fire(Fire::new(7).unwrap()), 51, 7);
    assert_pair(Block::Farmland(Farmland::new(7).unwrap()), 60, 7);
    assert_pair(Block::Snow(Snow::new(3).unwrap()), 78, 3);
    assert_pair(Block::Snow(Snow::FULL), 80, 0);
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

#[test]
fn conversion_traits_match_the_free_functions() {
    let pair = LegacyBlock::new(26, 0xE);
    let block = Block::from(pair);
    assert_eq!(block, decode(pair));
    assert_eq!(LegacyBlock::try_from(&block), Ok(pair));
    assert_eq!(LegacyBlock::try_from(block), Ok(pair));

    let unbound: Block = LegacyBlock::new(255, 3).into();
    assert!(unbound.is_unknown());
}

// ---------------------------------------------------------------------------
// Unknown
// ---------------------------------------------------------------------------

#[test]
fn unbound_ids_decode_as_unknown() {
    assert!(!registry().is_bound(255));
    for data in [0x00, 0x01, 0x0F, 0x80, 0xFF] {
        assert_eq!(decode(LegacyBlock::new(255, data)), Block::Unknown);
    }
    assert_eq!(decode(LegacyBlock::new(18, 0)), Block::Unknown);
}

#[test]
fn unknown_blocks_cannot_be_encoded() {
    assert_eq!(encode(&Block::Unknown), Err(EncodeError::UnknownBlock));
    assert_eq!(
        LegacyBlock::try_from(Block::Unknown),
        Err(EncodeError::UnknownBlock)
    );
}
