use super::label::InstructionLabel;
use super::rules::derive_instruction;
use crate::model::Order;
use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Order counts per instruction label, for dashboard badges.
///
/// Every label is always present, so a badge with no orders reads zero rather
/// than disappearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionSummary {
    counts: BTreeMap<InstructionLabel, usize>,
}

impl Default for InstructionSummary {
    fn default() -> Self {
        Self {
            counts: InstructionLabel::iter().map(|label| (label, 0)).collect(),
        }
    }
}

impl InstructionSummary {
    /// Counts orders by their freshly derived label; cached labels are ignored.
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        orders
            .into_iter()
            .map(derive_instruction)
            .collect()
    }

    pub fn record(&mut self, label: InstructionLabel) {
        *self.counts.entry(label).or_insert(0) += 1;
    }

    pub fn count(&self, label: InstructionLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(label, count)` pairs in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (InstructionLabel, usize)> + '_ {
        self.counts.iter().map(|(label, count)| (*label, *count))
    }
}

impl FromIterator<InstructionLabel> for InstructionSummary {
    fn from_iter<I: IntoIterator<Item = InstructionLabel>>(labels: I) -> Self {
        let mut summary = Self::default();
        for label in labels {
            summary.record(label);
        }
        summary
    }
}
