//! Persistent client state using redb.
//!
//! Holds what a browser tab would keep in memory between pages, so that
//! separate CLI invocations can carry it forward:
//! - The logged-in farmer session
//! - A registration awaiting OTP verification
//! - The most recent claim result (for the payout view)

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ClientError, ClientResult};
use crate::types::{ClaimResult, FarmerSession, PendingVerification};

const STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("client_state");

const SESSION_KEY: &str = "session";
const PENDING_KEY: &str = "pending_verification";
const LAST_CLAIM_KEY: &str = "last_claim";

/// Client state store
#[derive(Clone)]
pub struct SessionStore {
    db: Arc<RwLock<Database>>,
}

impl SessionStore {
    /// Open (or create) the store at the given path.
    ///
    /// Creates parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STATE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Session
    // ═══════════════════════════════════════════════════════════════════════

    pub fn save_session(&self, session: &FarmerSession) -> ClientResult<()> {
        self.put(SESSION_KEY, session)
    }

    pub fn load_session(&self) -> ClientResult<Option<FarmerSession>> {
        self.get(SESSION_KEY)
    }

    /// Log out: drops the session and the last claim shown for it.
    pub fn clear_session(&self) -> ClientResult<()> {
        self.remove(&[SESSION_KEY, LAST_CLAIM_KEY])
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pending verification
    // ═══════════════════════════════════════════════════════════════════════

    pub fn save_pending_verification(&self, pending: &PendingVerification) -> ClientResult<()> {
        self.put(PENDING_KEY, pending)
    }

    pub fn load_pending_verification(&self) -> ClientResult<Option<PendingVerification>> {
        self.get(PENDING_KEY)
    }

    pub fn clear_pending_verification(&self) -> ClientResult<()> {
        self.remove(&[PENDING_KEY])
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Last claim
    // ═══════════════════════════════════════════════════════════════════════

    pub fn save_last_claim(&self, result: &ClaimResult) -> ClientResult<()> {
        self.put(LAST_CLAIM_KEY, result)
    }

    pub fn load_last_claim(&self) -> ClientResult<Option<ClaimResult>> {
        self.get(LAST_CLAIM_KEY)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Helpers
    // ═══════════════════════════════════════════════════════════════════════

    fn put<T: Serialize>(&self, key: &str, value: &T) -> ClientResult<()> {
        let data =
            serde_json::to_vec(value).map_err(|e| ClientError::Serialization(e.to_string()))?;
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            table.insert(key, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn get<T: DeserializeOwned>(&self, key: &str) -> ClientResult<Option<T>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;

        match table.get(key)? {
            Some(v) => {
                let value = serde_json::from_slice(v.value())
                    .map_err(|e| ClientError::Serialization(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn remove(&self, keys: &[&str]) -> ClientResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(STATE_TABLE)?;
            for key in keys {
                table.remove(*key)?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClaimId, FarmerId, RegistrationNo};
    use tempfile::TempDir;

    fn create_test_store() -> (SessionStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::open(temp_dir.path().join("state.redb")).unwrap();
        (store, temp_dir)
    }

    fn session() -> FarmerSession {
        serde_json::from_value(serde_json::json!({
            "farmer_id": 4,
            "registration_no": "HBL-2025-C0FFEE",
            "name": "Lakshmi",
            "lands": []
        }))
        .unwrap()
    }

    #[test]
    fn test_store_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/state.redb");
        assert!(SessionStore::open(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_empty_store_has_nothing() {
        let (store, _temp) = create_test_store();
        assert!(store.load_session().unwrap().is_none());
        assert!(store.load_pending_verification().unwrap().is_none());
        assert!(store.load_last_claim().unwrap().is_none());
    }

    #[test]
    fn test_session_save_load_clear() {
        let (store, _temp) = create_test_store();
        store.save_session(&session()).unwrap();

        let loaded = store.load_session().unwrap().unwrap();
        assert_eq!(loaded.farmer_id, FarmerId(4));

        store.clear_session().unwrap();
        assert!(store.load_session().unwrap().is_none());
    }

    #[test]
    fn test_logout_drops_last_claim_but_keeps_pending() {
        let (store, _temp) = create_test_store();
        let claim: ClaimResult = serde_json::from_value(serde_json::json!({
            "claim_id": 3, "is_stressed": true, "probability": 0.7, "payout_percentage": 40.0
        }))
        .unwrap();
        let pending = PendingVerification {
            registration_no: RegistrationNo::new("HBL-2025-111111"),
            otp: Some("123456".into()),
        };

        store.save_session(&session()).unwrap();
        store.save_last_claim(&claim).unwrap();
        store.save_pending_verification(&pending).unwrap();

        assert_eq!(store.load_last_claim().unwrap().unwrap().claim_id, ClaimId(3));

        store.clear_session().unwrap();
        assert!(store.load_last_claim().unwrap().is_none());
        assert_eq!(store.load_pending_verification().unwrap(), Some(pending));
    }

    #[test]
    fn test_state_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.redb");
        {
            let store = SessionStore::open(&path).unwrap();
            store.save_session(&session()).unwrap();
        }
        let store = SessionStore::open(&path).unwrap();
        assert!(store.load_session().unwrap().is_some());
    }
}
