//! In-memory port implementations
//!
//! Each fake counts its calls so tests can assert that short-circuit
//! paths perform zero external work, and each failure-prone fake can be
//! switched into a failing mode.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;

use modlog_core::traits::{
    CaseStore, ErrorSink, LabelResolver, LogDispatcher, ModerationConfigStore, PortResult,
};
use modlog_core::{GuildLogConfig, LogEntry, LogError, ModerationCase, Snowflake};

/// In-memory ModerationConfigStore
///
/// The counter update goes through the DashMap entry, whose shard lock
/// makes the read-increment-write atomic per guild, mirroring the
/// single-statement upsert of the Postgres store.
#[derive(Default)]
pub struct MemoryConfigStore {
    configs: DashMap<Snowflake, GuildLogConfig>,
    pub get_calls: AtomicUsize,
    pub increment_calls: AtomicUsize,
    fail_increment: AtomicBool,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a guild's configuration
    pub fn insert(&self, config: GuildLogConfig) {
        self.configs.insert(config.guild_id, config);
    }

    /// Make subsequent counter updates fail
    pub fn fail_increments(&self) {
        self.fail_increment.store(true, Ordering::SeqCst);
    }

    /// Current counter value for assertions
    pub fn next_case_number(&self, guild_id: Snowflake) -> Option<i64> {
        self.configs.get(&guild_id).map(|c| c.next_case_number)
    }
}

#[async_trait]
impl ModerationConfigStore for MemoryConfigStore {
    async fn get_config(&self, guild_id: Snowflake) -> PortResult<Option<GuildLogConfig>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.configs.get(&guild_id).map(|c| c.clone()))
    }

    async fn increment_case_number(&self, guild_id: Snowflake) -> PortResult<i64> {
        self.increment_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_increment.load(Ordering::SeqCst) {
            return Err(LogError::Database("counter write refused".to_string()));
        }
        let mut entry = self
            .configs
            .entry(guild_id)
            .or_insert_with(|| GuildLogConfig::disabled(guild_id));
        entry.next_case_number += 1;
        Ok(entry.next_case_number)
    }
}

/// In-memory CaseStore
#[derive(Default)]
pub struct MemoryCaseStore {
    cases: Mutex<Vec<ModerationCase>>,
    pub create_calls: AtomicUsize,
    fail: AtomicBool,
}

impl MemoryCaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_creates(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn allow_creates(&self) {
        self.fail.store(false, Ordering::SeqCst);
    }

    pub fn cases(&self) -> Vec<ModerationCase> {
        self.cases.lock().clone()
    }
}

#[async_trait]
impl CaseStore for MemoryCaseStore {
    async fn create(&self, case: &ModerationCase) -> PortResult<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(LogError::Database("insert refused".to_string()));
        }
        self.cases.lock().push(case.clone());
        Ok(())
    }
}

/// Recording LogDispatcher handing out sequential message ids
#[derive(Default)]
pub struct RecordingDispatcher {
    sent: Mutex<Vec<(Snowflake, LogEntry)>>,
    next_message_id: AtomicI64,
    pub send_calls: AtomicUsize,
    fail: AtomicBool,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self {
            next_message_id: AtomicI64::new(9000),
            ..Self::default()
        }
    }

    pub fn fail_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<(Snowflake, LogEntry)> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl LogDispatcher for RecordingDispatcher {
    async fn send_entry(&self, channel_id: Snowflake, entry: &LogEntry) -> PortResult<Snowflake> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(LogError::Dispatch("simulated network error".to_string()));
        }
        let id = Snowflake::new(self.next_message_id.fetch_add(1, Ordering::SeqCst));
        self.sent.lock().push((channel_id, entry.clone()));
        Ok(id)
    }
}

/// Label resolver that echoes `locale/key`, making lookups assertable
pub struct EchoLabels;

impl LabelResolver for EchoLabels {
    fn label(&self, locale: &str, key: &str) -> String {
        format!("{locale}/{key}")
    }
}

/// Error sink collecting reported error codes
#[derive(Default)]
pub struct CollectingSink {
    errors: Mutex<Vec<LogError>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<LogError> {
        self.errors.lock().clone()
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.errors.lock().iter().map(LogError::code).collect()
    }
}

impl ErrorSink for CollectingSink {
    fn report(&self, error: &LogError) {
        self.errors.lock().push(error.clone());
    }
}
