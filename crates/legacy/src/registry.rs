//! Legacy type identifiers and the binding of block kinds to them.
//!
//! `BINDINGS` is the single source of truth. A kind may appear more than once
//! when the legacy format splits its state across ids (flowing water, layered
//! snow, the second log id, wooden door species); the first row listed for a
//! kind is its primary id.

use std::collections::HashMap;
use std::sync::LazyLock;

use mcblock_model::BlockKind;
use mcblock_model::BlockKind as K;
use mcblock_model::SimpleBlock as S;

use crate::error::RegistryError;

// ── Legacy type ids ─────────────────────────────────────────────────────

pub const AIR: u8 = 0;
pub const STONE: u8 = 1;
pub const GRASS: u8 = 2;
pub const DIRT: u8 = 3;
pub const COBBLESTONE: u8 = 4;
pub const PLANKS: u8 = 5;
pub const SAPLING: u8 = 6;
pub const BEDROCK: u8 = 7;
pub const FLOWING_WATER: u8 = 8;
pub const STATIONARY_WATER: u8 = 9;
pub const FLOWING_LAVA: u8 = 10;
pub const STATIONARY_LAVA: u8 = 11;
pub const SAND: u8 = 12;
pub const GRAVEL: u8 = 13;
pub const GOLD_ORE: u8 = 14;
pub const IRON_ORE: u8 = 15;
pub const COAL_ORE: u8 = 16;
pub const LOG: u8 = 17;
pub const SPONGE: u8 = 19;
pub const GLASS: u8 = 20;
pub const LAPIS_ORE: u8 = 21;
pub const LAPIS_BLOCK: u8 = 22;
pub const DISPENSER: u8 = 23;
pub const SANDSTONE: u8 = 24;
pub const NOTE_BLOCK: u8 = 25;
pub const BED: u8 = 26;
pub const POWERED_RAIL: u8 = 27;
pub const DETECTOR_RAIL: u8 = 28;
pub const COBWEB: u8 = 30;
pub const WOOL: u8 = 35;
pub const GOLD_BLOCK: u8 = 41;
pub const IRON_BLOCK: u8 = 42;
pub const BRICKS: u8 = 45;
pub const TNT: u8 = 46;
pub const BOOKSHELF: u8 = 47;
pub const OBSIDIAN: u8 = 49;
pub const TORCH: u8 = 50;
pub const FIRE: u8 = 51;
pub const CHEST: u8 = 54;
pub const DIAMOND_ORE: u8 = 56;
pub const DIAMOND_BLOCK: u8 = 57;
pub const CRAFTING_TABLE: u8 = 58;
pub const FARMLAND: u8 = 60;
pub const OAK_DOOR: u8 = 64;
pub const RAIL: u8 = 66;
pub const IRON_DOOR: u8 = 71;
pub const REDSTONE_ORE: u8 = 73;
pub const SNOW_LAYER: u8 = 78;
pub const ICE: u8 = 79;
pub const SNOW: u8 = 80;
pub const CACTUS: u8 = 81;
pub const CLAY: u8 = 82;
pub const JUKEBOX: u8 = 84;
pub const NETHERRACK: u8 = 87;
pub const SOUL_SAND: u8 = 88;
pub const GLOWSTONE: u8 = 89;
pub const STAINED_GLASS: u8 = 95;
pub const STONE_BRICKS: u8 = 98;
pub const MELON: u8 = 103;
pub const FENCE_GATE: u8 = 107;
pub const MYCELIUM: u8 = 110;
pub const NETHER_BRICKS: u8 = 112;
pub const END_STONE: u8 = 121;
pub const DRAGON_EGG: u8 = 122;
pub const REDSTONE_LAMP: u8 = 123;
pub const EMERALD_ORE: u8 = 129;
pub const EMERALD_BLOCK: u8 = 133;
pub const REDSTONE_BLOCK: u8 = 152;
pub const QUARTZ_ORE: u8 = 153;
pub const ACTIVATOR_RAIL: u8 = 157;
pub const STAINED_CLAY: u8 = 159;
pub const LOG2: u8 = 162;
pub const SLIME: u8 = 165;
pub const BARRIER: u8 = 166;
pub const SEA_LANTERN: u8 = 169;
pub const HARDENED_CLAY: u8 = 172;
pub const COAL_BLOCK: u8 = 173;
pub const PACKED_ICE: u8 = 174;
pub const RED_SANDSTONE: u8 = 179;
pub const SPRUCE_DOOR: u8 = 193;
pub const BIRCH_DOOR: u8 = 194;
pub const JUNGLE_DOOR: u8 = 195;
pub const ACACIA_DOOR: u8 = 196;
pub const DARK_OAK_DOOR: u8 = 197;

// ── Bindings ────────────────────────────────────────────────────────────

pub const BINDINGS: &[(BlockKind, u8)] = &[
    (K::Simple(S::Air), AIR),
    (K::Stone, STONE),
    (K::Simple(S::Grass), GRASS),
    (K::Dirt, DIRT),
    (K::Cobblestone, COBBLESTONE),
    (K::WoodPlanks, PLANKS),
    (K::Sapling, SAPLING),
    (K::Simple(S::Bedrock), BEDROCK),
    (K::Water, FLOWING_WATER),
    (K::Water, STATIONARY_WATER),
    (K::Lava, FLOWING_LAVA),
    (K::Lava, STATIONARY_LAVA),
    (K::Sand, SAND),
    (K::Simple(S::Gravel), GRAVEL),
    (K::Simple(S::GoldOre), GOLD_ORE),
    (K::Simple(S::IronOre), IRON_ORE),
    (K::Simple(S::CoalOre), COAL_ORE),
    (K::Wood, LOG),
    (K::Sponge, SPONGE),
    (K::Simple(S::Glass), GLASS),
    (K::Simple(S::LapisOre), LAPIS_ORE),
    (K::Simple(S::LapisBlock), LAPIS_BLOCK),
    (K::Dispenser, DISPENSER),
    (K::Sandstone, SANDSTONE),
    (K::Simple(S::NoteBlock), NOTE_BLOCK),
    (K::Bed, BED),
    (K::PoweredRail, POWERED_RAIL),
    (K::DetectorRail, DETECTOR_RAIL),
    (K::Simple(S::Cobweb), COBWEB),
    (K::Wool, WOOL),
    (K::Simple(S::GoldBlock), GOLD_BLOCK),
    (K::Simple(S::IronBlock), IRON_BLOCK),
    (K::Simple(S::Bricks), BRICKS),
    (K::Simple(S::Tnt), TNT),
    (K::Simple(S::Bookshelf), BOOKSHELF),
    (K::Simple(S::Obsidian), OBSIDIAN),
    (K::Torch, TORCH),
    (K::Fire, FIRE),
    (K::Chest, CHEST),
    (K::Simple(S::DiamondOre), DIAMOND_ORE),
    (K::Simple(S::DiamondBlock), DIAMOND_BLOCK),
    (K::Simple(S::CraftingTable), CRAFTING_TABLE),
    (K::Farmland, FARMLAND),
    (K::WoodenDoor, OAK_DOOR),
    (K::Rail, RAIL),
    (K::IronDoor, IRON_DOOR),
    (K::Simple(S::RedstoneOre), REDSTONE_ORE),
    (K::Snow, SNOW),
    (K::Snow, SNOW_LAYER),
    (K::Simple(S::Ice), ICE),
    (K::Cactus, CACTUS),
    (K::Simple(S::Clay), CLAY),
    (K::Simple(S::Jukebox), JUKEBOX),
    (K::Simple(S::Netherrack), NETHERRACK),
    (K::Simple(S::SoulSand), SOUL_SAND),
    (K::Simple(S::Glowstone), GLOWSTONE),
    (K::StainedGlass, STAINED_GLASS),
    (K::StoneBricks, STONE_BRICKS),
    (K::Simple(S::Melon), MELON),
    (K::FenceGate, FENCE_GATE),
    (K::Simple(S::Mycelium), MYCELIUM),
    (K::Simple(S::NetherBricks), NETHER_BRICKS),
    (K::Simple(S::EndStone), END_STONE),
    (K::Simple(S::DragonEgg), DRAGON_EGG),
    (K::Simple(S::RedstoneLamp), REDSTONE_LAMP),
    (K::Simple(S::EmeraldOre), EMERALD_ORE),
    (K::Simple(S::EmeraldBlock), EMERALD_BLOCK),
    (K::Simple(S::RedstoneBlock), REDSTONE_BLOCK),
    (K::Simple(S::QuartzOre), QUARTZ_ORE),
    (K::ActivatorRail, ACTIVATOR_RAIL),
    (K::StainedClay, STAINED_CLAY),
    (K::Wood, LOG2),
    (K::Simple(S::Slime), SLIME),
    (K::Simple(S::Barrier), BARRIER),
    (K::Simple(S::SeaLantern), SEA_LANTERN),
    (K::Simple(S::HardenedClay), HARDENED_CLAY),
    (K::Simple(S::CoalBlock), COAL_BLOCK),
    (K::Simple(S::PackedIce), PACKED_ICE),
    (K::RedSandstone, RED_SANDSTONE),
    (K::WoodenDoor, SPRUCE_DOOR),
    (K::WoodenDoor, BIRCH_DOOR),
    (K::WoodenDoor, JUNGLE_DOOR),
    (K::WoodenDoor, ACACIA_DOOR),
    (K::WoodenDoor, DARK_OAK_DOOR),
];

// ── Registry ────────────────────────────────────────────────────────────

/// Validated two-way index over a binding table.
#[derive(Debug)]
pub struct Registry {
    by_id: [Option<BlockKind>; 256],
    primary: HashMap<BlockKind, u8>,
}

impl Registry {
    /// Index `bindings`. Every kind must be bound at least once and no id may
    /// be claimed twice.
    pub fn build(bindings: &[(BlockKind, u8)]) -> Result<Self, RegistryError> {
        let mut by_id = [None; 256];
        let mut primary = HashMap::new();

        for &(kind, id) in bindings {
            if let Some(first) = by_id[id as usize] {
                return Err(RegistryError::DuplicateId {
                    id,
                    first,
                    second: kind,
                });
            }
            by_id[id as usize] = Some(kind);
            primary.entry(kind).or_insert(id);
        }

        if let Some(kind) = BlockKind::all().find(|kind| !primary.contains_key(kind)) {
            return Err(RegistryError::Unbound(kind));
        }

        Ok(Self { by_id, primary })
    }

    /// Primary type id of `kind`. Total: `build` rejects unbound kinds.
    pub fn id_of(&self, kind: BlockKind) -> u8 {
        self.primary[&kind]
    }

    pub fn kind_of(&self, id: u8) -> Option<BlockKind> {
        self.by_id[id as usize]
    }

    pub fn is_bound(&self, id: u8) -> bool {
        self.by_id[id as usize].is_some()
    }

    /// All bound `(id, kind)` pairs in id order.
    pub fn bindings(&self) -> impl Iterator<Item = (u8, BlockKind)> + '_ {
        (0..=u8::MAX).filter_map(move |id| self.kind_of(id).map(|kind| (id, kind)))
    }

    /// Number of bound ids.
    pub fn len(&self) -> usize {
        self.by_id.iter().filter(|kind| kind.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| match Registry::build(BINDINGS) {
    Ok(registry) => {
        tracing::debug!("Legacy block registry ready: {} ids bound", registry.len());
        registry
    }
    Err(e) => panic!("legacy block bindings are inconsistent: {e}"),
});

/// The process-wide registry, built from `BINDINGS` on first use.
pub fn registry() -> &'static Registry {
    &REGISTRY
}
