use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::Persistable;

/* Injected key-value store for the small bits of market state that survive between
refreshes, today only the last known good USD/IDR rate. Values are stored as strings and
parsed at the call site, no TTL: a cached value is trusted until overwritten.

The fetcher takes this as a trait object so tests can hand it an in-memory fake.
*/
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CacheManager {
    entries: HashMap<String, String>,
    path: String,
    persist: bool,
}

impl Persistable for CacheManager {
    const PATH: &'static str = ".data/market_cache";

    fn default_new(path: String, persist: bool) -> Self {
        Self {
            entries: HashMap::new(),
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

impl KeyValueStore for CacheManager {
    fn get(&self, key: &str) -> Option<String> {
        return self.entries.get(key).cloned();
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

impl Drop for CacheManager {
    fn drop(&mut self) {
        let _save = self.save();
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_cache_roundtrip() {
        let path = ".data_test/market_cache".to_string();
        {
            let mut cache = CacheManager::new(Some(path.clone())).unwrap();
            cache.set("usd_idr_rate", "15500".to_string());
            cache.save().unwrap();
        }
        let cache = CacheManager::new(Some(path)).unwrap();
        assert_eq!(cache.get("usd_idr_rate"), Some("15500".to_string()));
        cache.delete().unwrap();
    }
}
