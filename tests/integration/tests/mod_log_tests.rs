//! Moderation log integration tests
//!
//! Exercises the coordinator state machine end to end against the
//! in-memory ports, including the concurrency guarantees of case number
//! allocation.
//!
//! Run with: cargo test -p integration-tests --test mod_log_tests

use std::collections::HashSet;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use futures::future::join_all;

use integration_tests::{
    moderator, request, MemoryConfigStore, TestHarness, GUILD, LOG_CHANNEL,
};
use modlog_core::{ActionExtras, GuildLogConfig, Snowflake, Subject};
use modlog_service::{CaseSequencer, LogActionRequest};

// ============================================================================
// Case number allocation
// ============================================================================

#[tokio::test]
async fn concurrent_allocations_produce_exact_sequence() {
    let store = Arc::new(MemoryConfigStore::new());
    store.insert(GuildLogConfig::enabled(GUILD, LOG_CHANNEL));
    let sequencer = Arc::new(CaseSequencer::new(store.clone()));

    const N: usize = 64;
    let tasks = (0..N).map(|_| {
        let sequencer = Arc::clone(&sequencer);
        tokio::spawn(async move { sequencer.next_case_number(GUILD).await.unwrap() })
    });

    let numbers: HashSet<i64> = join_all(tasks)
        .await
        .into_iter()
        .map(|res| res.unwrap())
        .collect();

    let expected: HashSet<i64> = (1..=N as i64).collect();
    assert_eq!(numbers, expected);
    assert_eq!(store.next_case_number(GUILD), Some(N as i64 + 1));
}

#[tokio::test]
async fn first_case_of_unseeded_guild_is_one() {
    let store = Arc::new(MemoryConfigStore::new());
    let sequencer = CaseSequencer::new(store);

    let number = sequencer.next_case_number(GUILD).await.unwrap();
    assert_eq!(number, 1);
}

#[tokio::test]
async fn allocations_are_independent_per_guild() {
    let store = Arc::new(MemoryConfigStore::new());
    let sequencer = CaseSequencer::new(store);

    let a = Snowflake::new(1);
    let b = Snowflake::new(2);
    assert_eq!(sequencer.next_case_number(a).await.unwrap(), 1);
    assert_eq!(sequencer.next_case_number(a).await.unwrap(), 2);
    assert_eq!(sequencer.next_case_number(b).await.unwrap(), 1);
}

// ============================================================================
// Coordinator short circuits
// ============================================================================

#[tokio::test]
async fn unknown_action_performs_no_side_effects() {
    let h = TestHarness::with_enabled_guild();
    h.service
        .log_action(request("frobnicate", ActionExtras::none()))
        .await;

    assert_eq!(h.dispatcher.send_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.case_store.create_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.config_store.increment_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.sink.codes(), vec!["UNKNOWN_ACTION"]);
}

#[tokio::test]
async fn disabled_log_channel_is_a_silent_noop() {
    let h = TestHarness::new();
    h.config_store.insert(GuildLogConfig::disabled(GUILD));
    h.service.log_action(request("ban", ActionExtras::none())).await;

    assert_eq!(h.config_store.increment_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.dispatcher.send_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.case_store.create_calls.load(Ordering::SeqCst), 0);
    assert!(h.sink.codes().is_empty());
}

#[tokio::test]
async fn unconfigured_guild_is_a_silent_noop() {
    let h = TestHarness::new();
    h.service.log_action(request("ban", ActionExtras::none())).await;

    assert_eq!(h.config_store.increment_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.dispatcher.send_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.case_store.create_calls.load(Ordering::SeqCst), 0);
    assert!(h.sink.codes().is_empty());
}

// ============================================================================
// Entry shape
// ============================================================================

#[tokio::test]
async fn text_mute_inserts_channel_before_moderator_pair() {
    let h = TestHarness::with_enabled_guild();
    h.service
        .log_action(request("text-mute", ActionExtras::channel("#general")))
        .await;

    let sent = h.dispatcher.sent();
    assert_eq!(sent.len(), 1);
    let (channel_id, entry) = &sent[0];
    assert_eq!(*channel_id, LOG_CHANNEL);
    assert_eq!(entry.title, "en_us/textMuteAdd");

    let fields: Vec<(&str, &str)> = entry
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.value.as_str()))
        .collect();
    assert_eq!(
        fields,
        [
            ("User", "@user"),
            ("User ID", "200"),
            ("Reason", "spam"),
            ("Channel", "#general"),
            ("Responsible Moderator", "@mod"),
            ("Moderator ID", "100"),
        ]
    );
}

#[tokio::test]
async fn clear_replaces_user_fields_with_channel_fields() {
    let h = TestHarness::with_enabled_guild();
    let req = LogActionRequest {
        guild_id: GUILD,
        action: "clear".to_string(),
        actor: moderator(),
        target: Subject::new(Snowflake::new(300), "#general"),
        reason: None,
        extras: ActionExtras::cleared(42),
    };
    h.service.log_action(req).await;

    let sent = h.dispatcher.sent();
    assert_eq!(sent.len(), 1);
    let entry = &sent[0].1;

    let fields: Vec<(&str, &str)> = entry
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.value.as_str()))
        .collect();
    assert_eq!(
        fields,
        [
            ("Channel", "#general"),
            ("Channel ID", "300"),
            ("Cleared", "42"),
            ("Responsible Moderator", "@mod"),
            ("Moderator ID", "100"),
        ]
    );
}

#[tokio::test]
async fn entry_carries_case_number_and_localized_title() {
    let h = TestHarness::with_enabled_guild();
    h.service.log_action(request("ban", ActionExtras::none())).await;
    h.service.log_action(request("unban", ActionExtras::none())).await;

    let sent = h.dispatcher.sent();
    assert_eq!(sent[0].1.title, "en_us/guildBanAdd");
    assert_eq!(sent[0].1.footer_text(), "Case Number: 1");
    assert_eq!(sent[1].1.title, "en_us/guildBanRemove");
    assert_eq!(sent[1].1.footer_text(), "Case Number: 2");
}

// ============================================================================
// Failure isolation
// ============================================================================

#[tokio::test]
async fn dispatch_failure_still_persists_the_case() {
    let h = TestHarness::with_enabled_guild();
    h.dispatcher.fail_sends();
    h.service.log_action(request("kick", ActionExtras::none())).await;

    let cases = h.case_store.cases();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].guild_id, GUILD);
    assert_eq!(cases[0].number, 1);
    assert_eq!(cases[0].message_id, None);
    assert_eq!(h.sink.codes(), vec!["DISPATCH_ERROR"]);
}

#[tokio::test]
async fn sequencer_failure_aborts_dispatch_and_persistence() {
    let h = TestHarness::with_enabled_guild();
    h.config_store.fail_increments();
    h.service.log_action(request("warn", ActionExtras::none())).await;

    assert_eq!(h.dispatcher.send_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.case_store.create_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.sink.codes(), vec!["SEQUENCER_PERSIST_ERROR"]);
}

#[tokio::test]
async fn record_persist_failure_leaves_number_consumed() {
    let h = TestHarness::with_enabled_guild();
    h.case_store.fail_creates();
    h.service.log_action(request("ban", ActionExtras::none())).await;

    // The entry went out and the counter moved, but no record exists.
    assert_eq!(h.dispatcher.send_calls.load(Ordering::SeqCst), 1);
    assert!(h.case_store.cases().is_empty());
    assert_eq!(h.config_store.next_case_number(GUILD), Some(2));
    assert_eq!(h.sink.codes(), vec!["RECORD_PERSIST_ERROR"]);

    // The consumed number is a permanent gap; the next action gets 2.
    h.case_store.allow_creates();
    h.service.log_action(request("ban", ActionExtras::none())).await;
    assert_eq!(h.case_store.cases()[0].number, 2);
}

// ============================================================================
// Idempotence and concurrency through the coordinator
// ============================================================================

#[tokio::test]
async fn identical_calls_create_distinct_cases() {
    let h = TestHarness::with_enabled_guild();
    h.service.log_action(request("mute", ActionExtras::none())).await;
    h.service.log_action(request("mute", ActionExtras::none())).await;

    let cases = h.case_store.cases();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].number, 1);
    assert_eq!(cases[1].number, 2);
    assert_ne!(cases[0].message_id, cases[1].message_id);
}

#[tokio::test]
async fn concurrent_actions_get_unique_case_numbers() {
    let h = Arc::new(TestHarness::with_enabled_guild());

    const N: usize = 32;
    let tasks = (0..N).map(|_| {
        let h = Arc::clone(&h);
        tokio::spawn(async move {
            h.service
                .log_action(request("warn", ActionExtras::none()))
                .await;
        })
    });
    join_all(tasks).await;

    let numbers: HashSet<i64> = h.case_store.cases().iter().map(|c| c.number).collect();
    let expected: HashSet<i64> = (1..=N as i64).collect();
    assert_eq!(numbers, expected);
    assert!(h.sink.codes().is_empty());
}
