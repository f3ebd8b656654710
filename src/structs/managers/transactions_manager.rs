use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::structs::{Transaction, TransactionId};

use super::Persistable;

/* The ledger collaborator: holds every transaction of the user, whatever its source
(local entry, cloud sync). It handles saving the data and loading the previous data if
they exist, the merging of data, and it implements the Drop trait to save when the
reference is dropped.
*/
#[derive(Serialize, Deserialize)]
pub struct TransactionManager {
    transactions: Vec<Transaction>,
    hash_set: HashSet<TransactionId>, // prevents duplicates when re-importing from a store
    path: String,
    persist: bool,
}

impl Persistable for TransactionManager {
    const PATH: &'static str = ".data/transactions";

    fn default_new(path: String, persist: bool) -> Self {
        Self {
            transactions: Vec::new(),
            hash_set: HashSet::new(),
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

impl TransactionManager {
    pub fn get(&self) -> &Vec<Transaction> {
        return &self.transactions;
    }

    /* Add transaction by avoiding duplicates */
    pub fn push(&mut self, tx: Transaction) {
        if self.hash_set.insert(tx.id.clone()) {
            self.transactions.push(tx);
        }
    }

    /* Extends transactions by avoiding duplicates */
    pub fn extend(&mut self, txs: Vec<Transaction>) {
        for tx in txs {
            self.push(tx);
        }
    }

    pub fn sort(&mut self) {
        self.transactions.sort_by(|a, b| a.date.cmp(&b.date))
    }
}

impl Drop for TransactionManager {
    fn drop(&mut self) {
        let _save = self.save();
    }
}
