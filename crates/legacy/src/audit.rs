//! Exhaustive self-check of the codec.
//!
//! Decodes every `(type id, data)` pair, re-encodes the result and sorts the
//! outcome. Type ids are swept in parallel; the registry and decode table are
//! shared read-only between workers.

use rayon::prelude::*;
use serde::Serialize;

use crate::registry::{Registry, registry};
use crate::{LegacyBlock, decode, encode};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Type ids with a registered kind.
    pub bound_ids: usize,
    /// Pairs examined.
    pub pairs: usize,
    /// Pairs that decoded to `Block::Unknown`.
    pub unknown: usize,
    /// Pairs that re-encode to exactly themselves.
    pub identical: usize,
    /// Pairs that re-encode under the same id with unused bits dropped.
    pub normalized: usize,
    /// Pairs that re-encode under a different id.
    pub aliased: usize,
    /// Ids contributing to `aliased`, ascending.
    pub aliased_ids: Vec<u8>,
    /// Pairs whose decoded kind disagrees with the registry binding.
    pub kind_mismatches: Vec<LegacyBlock>,
}

impl AuditReport {
    fn merge(mut self, other: AuditReport) -> AuditReport {
        self.pairs += other.pairs;
        self.unknown += other.unknown;
        self.identical += other.identical;
        self.normalized += other.normalized;
        self.aliased += other.aliased;
        self.aliased_ids.extend(other.aliased_ids);
        self.kind_mismatches.extend(other.kind_mismatches);
        self
    }

    /// No decode produced a kind other than the one bound to its id.
    pub fn is_consistent(&self) -> bool {
        self.kind_mismatches.is_empty()
    }
}

/// Sweep all 65 536 pairs.
pub fn sweep() -> AuditReport {
    let registry = registry();
    let mut report = (0u16..256)
        .into_par_iter()
        .map(|type_id| sweep_id(registry, type_id as u8))
        .reduce(AuditReport::default, AuditReport::merge);

    report.bound_ids = registry.len();
    report.aliased_ids.sort_unstable();
    report.kind_mismatches.sort_unstable_by_key(|raw| (raw.type_id, raw.data));

    tracing::info!(
        bound_ids = report.bound_ids,
        unknown = report.unknown,
        identical = report.identical,
        normalized = report.normalized,
        aliased = report.aliased,
        "Legacy codec audit complete"
    );
    report
}

fn sweep_id(registry: &Registry, type_id: u8) -> AuditReport {
    let expected = registry.kind_of(type_id);
    let mut report = AuditReport::default();

    for data in 0..=u8::MAX {
        let raw = LegacyBlock::new(type_id, data);
        let block = decode(raw);
        report.pairs += 1;

        if block.kind() != expected {
            report.kind_mismatches.push(raw);
        }

        match encode(&block) {
            Err(_) => report.unknown += 1,
            Ok(again) if again == raw => report.identical += 1,
            Ok(again) if again.type_id == raw.type_id => report.normalized += 1,
            Ok(_) => report.aliased += 1,
        }
    }

    if report.aliased > 0 {
        report.aliased_ids.push(type_id);
    }
    report
}
