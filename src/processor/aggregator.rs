//! Channel resolution and per-variable min/max aggregation.

use crate::constants::CHANNEL_PREFIX;
use crate::models::{MappingEntry, VariableStats};
use chrono::NaiveDateTime;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Owns the channel table and the statistics table for one input file
///
/// Records are only ever mutated through [`StatsAggregator::apply_value`].
#[derive(Debug, Default)]
pub struct StatsAggregator {
    channels: HashMap<String, i32>,
    statistics: BTreeMap<i32, VariableStats>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a channel mapping; a later mapping for the same channel wins
    pub fn record_mapping(&mut self, entry: MappingEntry) {
        if let Some(previous) = self.channels.insert(entry.channel.clone(), entry.variable_id) {
            if previous != entry.variable_id {
                debug!(
                    "Channel '{}' remapped from variable {} to {}",
                    entry.channel, previous, entry.variable_id
                );
            }
        }
    }

    /// Variable id currently mapped to a channel token
    ///
    /// Value lines write the channel as `@1` while mapping lines usually write
    /// `1`. The token is looked up as written first, then with one leading
    /// `@` removed.
    pub fn resolve(&self, channel: &str) -> Option<i32> {
        self.channels.get(channel).copied().or_else(|| {
            channel
                .strip_prefix(CHANNEL_PREFIX)
                .and_then(|bare| self.channels.get(bare).copied())
        })
    }

    /// Fold a value into the record for `variable_id`, creating it on first use
    pub fn apply_value(&mut self, variable_id: i32, value: f64, timestamp: NaiveDateTime) {
        match self.statistics.entry(variable_id) {
            Entry::Vacant(slot) => {
                slot.insert(VariableStats::new(variable_id, value, timestamp));
            }
            Entry::Occupied(mut slot) => {
                slot.get_mut().update(value, timestamp);
            }
        }
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn variable_count(&self) -> usize {
        self.statistics.len()
    }

    pub fn get(&self, variable_id: i32) -> Option<&VariableStats> {
        self.statistics.get(&variable_id)
    }

    /// Drain all records in ascending variable id order
    pub fn into_sorted_records(self) -> Vec<VariableStats> {
        self.statistics.into_values().collect()
    }
}
