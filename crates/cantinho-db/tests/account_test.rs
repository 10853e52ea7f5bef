//! Integration tests for account registration and login.
//!
//! Tests verify:
//! - A taken code is always rejected, whatever the new question/answer
//! - Login requires an existing account, the same question id, and the same
//!   answer ignoring case
//! - Legacy account documents without security fields degrade to invalid
//!   credentials instead of failing to decode

use cantinho_db::test_fixtures::{credentials, failing_database, memory_database};
use cantinho_db::{DocumentStore, Error};
use serde_json::json;

#[tokio::test]
async fn test_register_returns_code_as_user_id() {
    let (db, store) = memory_database("acc");

    let user_id = db
        .accounts()
        .unwrap()
        .register(credentials("9wq1", "q1", "Paris"))
        .await
        .unwrap();

    assert_eq!(user_id, "9wq1");
    let stored = store.get("users", "9wq1").await.unwrap().unwrap();
    assert_eq!(
        serde_json::Value::Object(stored),
        json!({"code": "9wq1", "question_id": "q1", "answer": "Paris"})
    );
}

#[tokio::test]
async fn test_register_duplicate_code_fails_for_any_answer() {
    let (db, store) = memory_database("acc");
    let accounts = db.accounts().unwrap();
    accounts
        .register(credentials("9wq1", "q1", "Paris"))
        .await
        .unwrap();

    for (question, answer) in [("q2", "Rome"), ("q1", "Paris"), ("q1", ""), ("q9", "PARIS")] {
        let result = accounts
            .register(credentials("9wq1", question, answer))
            .await;
        assert!(
            matches!(result, Err(Error::DuplicateAccount(ref code)) if code == "9wq1"),
            "expected DuplicateAccount for ({}, {}), got {:?}",
            question,
            answer,
            result
        );
    }

    // The original account is untouched
    let stored = store.get("users", "9wq1").await.unwrap().unwrap();
    assert_eq!(stored["answer"], "Paris");
}

#[tokio::test]
async fn test_register_blank_code_is_invalid_input() {
    let (db, store) = memory_database("acc");

    let result = db
        .accounts()
        .unwrap()
        .register(credentials("   ", "q1", "x"))
        .await;

    assert!(matches!(result, Err(Error::InvalidInput(_))));
    assert!(store.is_empty("users").await);
}

#[tokio::test]
async fn test_login_scenario() {
    let (db, _store) = memory_database("acc");
    let accounts = db.accounts().unwrap();
    accounts
        .register(credentials("9wq1", "q1", "Paris"))
        .await
        .unwrap();

    let ok = accounts
        .login(&credentials("9wq1", "q1", "paris"))
        .await
        .unwrap();
    assert_eq!(ok, "9wq1");

    let wrong_answer = accounts.login(&credentials("9wq1", "q1", "Rome")).await;
    assert!(matches!(wrong_answer, Err(Error::InvalidCredentials)));

    let wrong_question = accounts.login(&credentials("9wq1", "q2", "Paris")).await;
    assert!(matches!(wrong_question, Err(Error::InvalidCredentials)));

    let unknown = accounts.login(&credentials("0000", "q1", "x")).await;
    assert!(matches!(unknown, Err(Error::AccountNotFound(ref code)) if code == "0000"));
}

#[tokio::test]
async fn test_login_answer_case_folding_both_sides() {
    for stored_answer in ["blue", "BLUE", "Blue"] {
        let (db, _store) = memory_database("acc");
        let accounts = db.accounts().unwrap();
        accounts
            .register(credentials("1234", "q1", stored_answer))
            .await
            .unwrap();

        for supplied in ["Blue", "blue", "BLUE", "bLuE"] {
            let result = accounts.login(&credentials("1234", "q1", supplied)).await;
            assert_eq!(
                result.unwrap(),
                "1234",
                "stored {:?} should accept {:?}",
                stored_answer,
                supplied
            );
        }
    }
}

#[tokio::test]
async fn test_login_case_folding_is_unicode_aware() {
    let (db, _store) = memory_database("acc");
    let accounts = db.accounts().unwrap();
    accounts
        .register(credentials("5678", "q3", "São Paulo"))
        .await
        .unwrap();

    assert!(accounts
        .login(&credentials("5678", "q3", "SÃO PAULO"))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_login_legacy_account_without_security_fields() {
    let (db, store) = memory_database("acc");
    store
        .set(
            "users",
            "1111",
            json!({"code": "1111"}).as_object().cloned().unwrap(),
        )
        .await
        .unwrap();

    let result = db
        .accounts()
        .unwrap()
        .login(&credentials("1111", "q1", "anything"))
        .await;

    assert!(matches!(result, Err(Error::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_legacy_account_with_only_question() {
    let (db, store) = memory_database("acc");
    store
        .set(
            "users",
            "2222",
            json!({"code": "2222", "question_id": "q1"})
                .as_object()
                .cloned()
                .unwrap(),
        )
        .await
        .unwrap();

    let result = db
        .accounts()
        .unwrap()
        .login(&credentials("2222", "q1", ""))
        .await;

    assert!(matches!(result, Err(Error::InvalidCredentials)));
}

#[tokio::test]
async fn test_register_store_failure_is_not_a_duplicate() {
    let db = failing_database("boom");

    let result = db
        .accounts()
        .unwrap()
        .register(credentials("9wq1", "q1", "Paris"))
        .await;

    assert!(
        matches!(result, Err(Error::Write(ref msg)) if msg == "boom"),
        "{:?}",
        result
    );
}

#[tokio::test]
async fn test_login_store_failure_is_not_account_not_found() {
    let db = failing_database("boom");

    let result = db
        .accounts()
        .unwrap()
        .login(&credentials("9wq1", "q1", "Paris"))
        .await;

    assert!(
        matches!(result, Err(Error::Query(ref msg)) if msg == "boom"),
        "{:?}",
        result
    );
}
