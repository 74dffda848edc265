//! Codec between typed `Block` values and the legacy `(type id, data)` pair.
//!
//! The registry binds every block kind to its type id. `encode` packs a
//! block's state into the data byte; `decode` reverses it through a 256-entry
//! dispatch table and never fails: ids nobody bound come back as
//! `Block::Unknown`.

pub mod audit;
pub mod decode;
pub mod encode;
pub mod error;
pub mod registry;
pub mod tables;

use std::fmt;
use std::str::FromStr;

use mcblock_model::Block;
use serde::Serialize;

pub use decode::decode;
pub use encode::encode;
pub use error::{EncodeError, ParsePairError, RegistryError};
pub use registry::{Registry, registry};

/// A block as stored or transmitted in the legacy format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct LegacyBlock {
    pub type_id: u8,
    pub data: u8,
}

impl LegacyBlock {
    pub const fn new(type_id: u8, data: u8) -> Self {
        Self { type_id, data }
    }

    /// A pair with an empty data byte.
    pub const fn simple(type_id: u8) -> Self {
        Self { type_id, data: 0 }
    }
}

impl From<LegacyBlock> for Block {
    fn from(raw: LegacyBlock) -> Self {
        decode::decode(raw)
    }
}

impl TryFrom<&Block> for LegacyBlock {
    type Error = EncodeError;

    fn try_from(block: &Block) -> Result<Self, Self::Error> {
        encode::encode(block)
    }
}

impl TryFrom<Block> for LegacyBlock {
    type Error = EncodeError;

    fn try_from(block: Block) -> Result<Self, Self::Error> {
        encode::encode(&block)
    }
}

impl fmt::Display for LegacyBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.type_id, self.data)
    }
}

/// Parses `ID` or `ID:DATA`. Both parts accept decimal or `0x` hex.
impl FromStr for LegacyBlock {
    type Err = ParsePairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (type_id, data) = match s.split_once(':') {
            Some((type_id, data)) => (type_id, Some(data)),
            None => (s, None),
        };
        let type_id = parse_byte(type_id)?;
        let data = data.map(parse_byte).transpose()?.unwrap_or(0);
        Ok(Self::new(type_id, data))
    }
}

fn parse_byte(s: &str) -> Result<u8, ParsePairError> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|source| ParsePairError {
        input: s.to_string(),
        source,
    })
}
