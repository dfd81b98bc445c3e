//! OTP store contract and in-memory implementation

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::RwLock;
use tracing::debug;

use crate::clock::Clock;
use crate::domain::entities::otp::OtpRecord;
use crate::errors::OtpStoreError;
use pa_shared::config::OtpConfig;

/// Storage contract for one-time passcodes
///
/// Holds at most one live record per identity key. Operations on the same
/// key are linearized by the implementation; an expired record behaves
/// identically to an absent one everywhere.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Install a new code for the key, replacing any existing record
    ///
    /// Expires `ttl` after now. Fails only when the underlying storage is
    /// unavailable.
    async fn save(&self, key: &str, code: &str) -> Result<(), OtpStoreError>;

    /// Return the live code for the key
    ///
    /// # Returns
    /// * `Ok(String)` - A non-expired code exists
    /// * `Err(OtpStoreError::NotFound)` - Nothing stored, or the record expired
    async fn find(&self, key: &str) -> Result<String, OtpStoreError>;

    /// Atomically compare a candidate against the stored code and consume on match
    ///
    /// The compare and the delete happen under one exclusive critical
    /// section, so two concurrent verifications of the same code cannot
    /// both succeed.
    ///
    /// # Returns
    /// * `Ok(true)` - Candidate matched; the record is gone
    /// * `Ok(false)` - Candidate did not match; the record is retained
    /// * `Err(OtpStoreError::NotFound)` - Nothing stored, or the record expired
    async fn find_and_consume(&self, key: &str, candidate: &str) -> Result<bool, OtpStoreError>;
}

/// In-memory OTP store
///
/// One `RwLock` guards the whole record map. Reads (`find`) never upgrade
/// to a write lock: an expired record is simply reported as absent and left
/// for a mutating path or the background sweep to evict. All check-then-act
/// sequences (`save`, `find_and_consume`, [`Self::evict_expired`]) run
/// entirely under the write lock.
pub struct MemoryOtpStore {
    records: RwLock<HashMap<String, OtpRecord>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl MemoryOtpStore {
    /// Create an empty store
    ///
    /// # Arguments
    ///
    /// * `config` - OTP configuration supplying the TTL
    /// * `clock` - Time source used for expiry decisions
    pub fn new(config: &OtpConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            ttl: config.ttl(),
            clock,
        }
    }

    /// Evict every expired record, returning how many were removed
    ///
    /// Called periodically by the sweeper to bound memory growth from keys
    /// that request codes but never verify them.
    pub async fn evict_expired(&self) -> usize {
        let now = self.clock.now();
        let mut records = self.records.write().await;

        let before = records.len();
        records.retain(|_, record| !record.is_expired(now));
        before - records.len()
    }

    /// Number of stored records, live and expired alike
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records at all
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn save(&self, key: &str, code: &str) -> Result<(), OtpStoreError> {
        let now = self.clock.now();
        let mut records = self.records.write().await;

        records.insert(key.to_string(), OtpRecord::new(code, now, self.ttl));
        debug!(phone_number = key, event = "otp_saved", "Stored OTP record");
        Ok(())
    }

    async fn find(&self, key: &str) -> Result<String, OtpStoreError> {
        let now = self.clock.now();
        let records = self.records.read().await;

        match records.get(key) {
            Some(record) if !record.is_expired(now) => Ok(record.code.clone()),
            _ => Err(OtpStoreError::NotFound),
        }
    }

    async fn find_and_consume(&self, key: &str, candidate: &str) -> Result<bool, OtpStoreError> {
        let now = self.clock.now();
        let mut records = self.records.write().await;

        let (expired, matched) = match records.get(key) {
            None => return Err(OtpStoreError::NotFound),
            Some(record) => (record.is_expired(now), record.matches(candidate)),
        };

        if expired {
            records.remove(key);
            debug!(phone_number = key, event = "otp_expired", "Evicted expired OTP");
            return Err(OtpStoreError::NotFound);
        }

        if matched {
            records.remove(key);
            debug!(phone_number = key, event = "otp_consumed", "Consumed OTP record");
            return Ok(true);
        }

        // Mismatch keeps the record live for limited retries until it
        // expires or is replaced.
        Ok(false)
    }
}
