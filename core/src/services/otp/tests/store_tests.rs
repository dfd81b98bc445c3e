//! Tests for the in-memory OTP store

use std::sync::Arc;

use chrono::Duration;
use pa_shared::config::OtpConfig;

use crate::clock::{ManualClock, SystemClock};
use crate::errors::OtpStoreError;
use crate::services::otp::{MemoryOtpStore, OtpStore};

const PHONE: &str = "+989123456789";

fn store_with_manual_clock() -> (MemoryOtpStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_now());
    let store = MemoryOtpStore::new(&OtpConfig::default(), clock.clone());
    (store, clock)
}

#[tokio::test]
async fn test_find_returns_saved_code() {
    let (store, _clock) = store_with_manual_clock();

    store.save(PHONE, "123456").await.unwrap();

    assert_eq!(store.find(PHONE).await.unwrap(), "123456");
}

#[tokio::test]
async fn test_save_replaces_previous_code() {
    let (store, _clock) = store_with_manual_clock();

    store.save(PHONE, "111111").await.unwrap();
    store.save(PHONE, "222222").await.unwrap();

    assert_eq!(store.find(PHONE).await.unwrap(), "222222");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_find_unknown_key_reports_not_found() {
    let (store, _clock) = store_with_manual_clock();

    let result = store.find(PHONE).await;

    assert!(matches!(result, Err(OtpStoreError::NotFound)));
}

#[tokio::test]
async fn test_find_treats_expired_code_as_absent_without_evicting() {
    let (store, clock) = store_with_manual_clock();
    store.save(PHONE, "123456").await.unwrap();

    clock.advance(Duration::seconds(121));

    let result = store.find(PHONE).await;
    assert!(matches!(result, Err(OtpStoreError::NotFound)));
    // Removal is left to the sweeper or the next consume attempt.
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_find_honors_exact_expiry_boundary() {
    let (store, clock) = store_with_manual_clock();
    store.save(PHONE, "123456").await.unwrap();

    clock.advance(Duration::seconds(120));

    assert_eq!(store.find(PHONE).await.unwrap(), "123456");
}

#[tokio::test]
async fn test_consume_with_matching_code_is_single_use() {
    let (store, _clock) = store_with_manual_clock();
    store.save(PHONE, "123456").await.unwrap();

    assert!(store.find_and_consume(PHONE, "123456").await.unwrap());

    let second = store.find_and_consume(PHONE, "123456").await;
    assert!(matches!(second, Err(OtpStoreError::NotFound)));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_consume_with_wrong_code_retains_record() {
    let (store, _clock) = store_with_manual_clock();
    store.save(PHONE, "123456").await.unwrap();

    assert!(!store.find_and_consume(PHONE, "654321").await.unwrap());

    // A failed guess must not burn the real code.
    assert!(store.find_and_consume(PHONE, "123456").await.unwrap());
}

#[tokio::test]
async fn test_consume_unknown_key_reports_not_found() {
    let (store, _clock) = store_with_manual_clock();

    let result = store.find_and_consume(PHONE, "123456").await;

    assert!(matches!(result, Err(OtpStoreError::NotFound)));
}

#[tokio::test]
async fn test_consume_expired_code_evicts_record() {
    let (store, clock) = store_with_manual_clock();
    store.save(PHONE, "123456").await.unwrap();

    clock.advance(Duration::seconds(121));

    let result = store.find_and_consume(PHONE, "123456").await;
    assert!(matches!(result, Err(OtpStoreError::NotFound)));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_keys_are_isolated() {
    let (store, _clock) = store_with_manual_clock();
    store.save("+989121111111", "111111").await.unwrap();
    store.save("+989122222222", "222222").await.unwrap();

    assert!(store.find_and_consume("+989121111111", "111111").await.unwrap());

    assert_eq!(store.find("+989122222222").await.unwrap(), "222222");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_consume_admits_exactly_one_caller() {
    let store = Arc::new(MemoryOtpStore::new(
        &OtpConfig::default(),
        Arc::new(SystemClock),
    ));
    store.save(PHONE, "123456").await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.find_and_consume(PHONE, "123456").await
        }));
    }

    let mut consumed = 0;
    let mut not_found = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(true) => consumed += 1,
            Ok(false) => panic!("matching code reported as mismatch"),
            Err(OtpStoreError::NotFound) => not_found += 1,
            Err(other) => panic!("unexpected store error: {}", other),
        }
    }

    assert_eq!(consumed, 1);
    assert_eq!(not_found, 15);
    assert!(store.is_empty().await);
}
