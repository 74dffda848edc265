use std::num::ParseIntError;

use mcblock_model::BlockKind;

/// The binding table is inconsistent. Fatal for the process-wide registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("type id {id} is bound to both {first:?} and {second:?}")]
    DuplicateId {
        id: u8,
        first: BlockKind,
        second: BlockKind,
    },

    #[error("{0:?} is not bound to any type id")]
    Unbound(BlockKind),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("an unknown block has no legacy representation")]
    UnknownBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid byte {input:?}")]
pub struct ParsePairError {
    pub input: String,
    #[source]
    pub source: ParseIntError,
}
