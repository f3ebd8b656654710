use serde::{Deserialize, Serialize};

use crate::structs::MarketSnapshot;

use super::Persistable;

/* Keeps the last complete MarketSnapshot on disk so the app can render the previous
figures before (or instead of) a new refresh. Replacement is wholesale: a refresh never
merges into the stored snapshot field by field.
*/
#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotManager {
    snapshot: Option<MarketSnapshot>,
    path: String,
    persist: bool,
}

impl Persistable for SnapshotManager {
    const PATH: &'static str = ".data/market_snapshot";

    fn default_new(path: String, persist: bool) -> Self {
        Self {
            snapshot: None,
            path,
            persist,
        }
    }

    fn get_path(&self) -> &str {
        return &self.path;
    }

    fn is_persistent(&self) -> bool {
        return self.persist;
    }
}

impl SnapshotManager {
    pub fn get(&self) -> Option<&MarketSnapshot> {
        return self.snapshot.as_ref();
    }

    pub fn replace(&mut self, snapshot: MarketSnapshot) {
        self.snapshot = Some(snapshot);
    }
}

impl Drop for SnapshotManager {
    fn drop(&mut self) {
        let _save = self.save();
    }
}
