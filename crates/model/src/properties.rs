//! Property enumerations shared by block values.
//!
//! No numeric discriminants. The legacy codec keeps every enum-to-bits
//! mapping in its own tables.

use serde::Serialize;

/// Horizontal facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
}

/// Facing along any of the six axis directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Direction3 {
    #[default]
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction3 {
    pub const ALL: [Direction3; 6] = [
        Direction3::Down,
        Direction3::Up,
        Direction3::North,
        Direction3::South,
        Direction3::West,
        Direction3::East,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum WoodSpecies {
    #[default]
    Oak,
    Spruce,
    Birch,
    Jungle,
    Acacia,
    DarkOak,
}

impl WoodSpecies {
    pub const ALL: [WoodSpecies; 6] = [
        WoodSpecies::Oak,
        WoodSpecies::Spruce,
        WoodSpecies::Birch,
        WoodSpecies::Jungle,
        WoodSpecies::Acacia,
        WoodSpecies::DarkOak,
    ];
}

/// Stone material. The "smooth" kinds are the polished variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Mineral {
    #[default]
    Stone,
    Granite,
    SmoothGranite,
    Diorite,
    SmoothDiorite,
    Andesite,
    SmoothAndesite,
}

impl Mineral {
    pub const ALL: [Mineral; 7] = [
        Mineral::Stone,
        Mineral::Granite,
        Mineral::SmoothGranite,
        Mineral::Diorite,
        Mineral::SmoothDiorite,
        Mineral::Andesite,
        Mineral::SmoothAndesite,
    ];
}

/// Dye color used by wool, stained glass and stained clay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Color {
    #[default]
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl Color {
    pub const ALL: [Color; 16] = [
        Color::White,
        Color::Orange,
        Color::Magenta,
        Color::LightBlue,
        Color::Yellow,
        Color::Lime,
        Color::Pink,
        Color::Gray,
        Color::LightGray,
        Color::Cyan,
        Color::Purple,
        Color::Blue,
        Color::Brown,
        Color::Green,
        Color::Red,
        Color::Black,
    ];
}

/// Liquid height, from the source block down to the thinnest flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Level {
    #[default]
    Source,
    Highest,
    Higher,
    High,
    Mid,
    Low,
    Lower,
    Lowest,
}

impl Level {
    pub const ALL: [Level; 8] = [
        Level::Source,
        Level::Highest,
        Level::Higher,
        Level::High,
        Level::Mid,
        Level::Low,
        Level::Lower,
        Level::Lowest,
    ];
}

/// Track shape of a rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RailDirection {
    #[default]
    NorthSouth,
    EastWest,
    AscendingEast,
    AscendingWest,
    AscendingNorth,
    AscendingSouth,
    TurningSouthEast,
    TurningSouthWest,
    TurningNorthWest,
    TurningNorthEast,
}

impl RailDirection {
    pub const ALL: [RailDirection; 10] = [
        RailDirection::NorthSouth,
        RailDirection::EastWest,
        RailDirection::AscendingEast,
        RailDirection::AscendingWest,
        RailDirection::AscendingNorth,
        RailDirection::AscendingSouth,
        RailDirection::TurningSouthEast,
        RailDirection::TurningSouthWest,
        RailDirection::TurningNorthWest,
        RailDirection::TurningNorthEast,
    ];

    pub const fn is_ascending(self) -> bool {
        matches!(
            self,
            RailDirection::AscendingEast
                | RailDirection::AscendingWest
                | RailDirection::AscendingNorth
                | RailDirection::AscendingSouth
        )
    }

    pub const fn is_turning(self) -> bool {
        matches!(
            self,
            RailDirection::TurningSouthEast
                | RailDirection::TurningSouthWest
                | RailDirection::TurningNorthWest
                | RailDirection::TurningNorthEast
        )
    }
}

/// Surface finish of sandstone-like blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Finish {
    #[default]
    Plain,
    Chiseled,
    Smooth,
}

impl Finish {
    pub const ALL: [Finish; 3] = [Finish::Plain, Finish::Chiseled, Finish::Smooth];
}

/// Orientation of a log. `Bark` is the all-sides-bark block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Axis {
    #[default]
    UpDown,
    EastWest,
    NorthSouth,
    Bark,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::UpDown, Axis::EastWest, Axis::NorthSouth, Axis::Bark];
}
