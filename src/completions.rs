use crate::models::DateKey;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Which days have a finished workout. Only `true` entries are kept, so a
/// missing key and an explicit `false` read the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompletionStore {
    days: BTreeMap<DateKey, bool>,
}

impl CompletionStore {
    pub fn is_completed(&self, key: DateKey) -> bool {
        self.days.get(&key).copied().unwrap_or(false)
    }

    /// Flips the flag for `key` and returns the new value.
    pub fn toggle(&mut self, key: DateKey) -> bool {
        if self.days.remove(&key).is_some() {
            false
        } else {
            self.days.insert(key, true);
            true
        }
    }

    pub fn completed_count(&self) -> usize {
        self.days.len()
    }
}

impl FromIterator<DateKey> for CompletionStore {
    fn from_iter<I: IntoIterator<Item = DateKey>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().map(|key| (key, true)).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for CompletionStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<DateKey, bool>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, done)| done.then_some(key))
            .collect())
    }
}
