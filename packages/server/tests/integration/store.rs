//! Behaviour shared by every `RegistrationStore` backend.

use std::sync::Arc;

use common::{Division, Grade, NewRegistration, RegistrationStats, RegistrationStatus};
use registration_server::database::init_db;
use registration_server::store::{
    DatabaseStore, MemoryStore, NewUser, RegistrationStore, StoreError, UserStore,
};

use crate::common::sqlite_memory_config;

fn submission(name: &str, grade: Grade, division: Division) -> NewRegistration {
    NewRegistration {
        student_name: name.to_string(),
        grade,
        division,
        email: Some("student@example.com".into()),
        committee: "icj".into(),
        suggestions: None,
    }
}

async fn database_store() -> Arc<DatabaseStore> {
    let db = init_db(&sqlite_memory_config())
        .await
        .expect("Failed to initialize SQLite database");
    Arc::new(DatabaseStore::new(db))
}

async fn exercise_crud(store: &dyn RegistrationStore) {
    let a = store
        .create_registration(submission("A", Grade::Eighth, Division::A))
        .await
        .unwrap();
    let b = store
        .create_registration(submission("B", Grade::Ninth, Division::B))
        .await
        .unwrap();
    assert!(b.id > a.id);
    assert_eq!(a.status, RegistrationStatus::Pending);
    assert_eq!(a.email.as_deref(), Some("student@example.com"));

    let fetched = store.get_registration(a.id).await.unwrap();
    assert_eq!(fetched.as_ref().map(|r| r.id), Some(a.id));

    let listed: Vec<i32> = store
        .list_registrations()
        .await
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(listed, vec![b.id, a.id]);

    let updated = store
        .update_registration_status(a.id, RegistrationStatus::Confirmed)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, RegistrationStatus::Confirmed);
    assert_eq!(updated.student_name, a.student_name);
    assert_eq!(updated.created_at, a.created_at);

    assert_eq!(
        store.registration_stats().await.unwrap(),
        RegistrationStats {
            total: 2,
            confirmed: 1,
            pending: 1,
            rejected: 0,
        }
    );

    assert!(store.delete_registration(b.id).await.unwrap());
    assert!(!store.delete_registration(b.id).await.unwrap());
    assert!(store.get_registration(b.id).await.unwrap().is_none());
    assert!(
        store
            .update_registration_status(b.id, RegistrationStatus::Rejected)
            .await
            .unwrap()
            .is_none()
    );

    let c = store
        .create_registration(submission("C", Grade::Twelfth, Division::K))
        .await
        .unwrap();
    assert!(c.id > b.id, "ids must not be reused");

    let stats = store.registration_stats().await.unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.total, stats.confirmed + stats.pending + stats.rejected);
}

async fn exercise_users(store: &dyn UserStore) {
    let created = store
        .create_user(NewUser {
            username: "admin".into(),
            password_hash: "$argon2id$placeholder".into(),
        })
        .await
        .unwrap();

    assert_eq!(store.get_user(created.id).await.unwrap(), Some(created.clone()));
    assert_eq!(
        store.find_user_by_username("admin").await.unwrap(),
        Some(created)
    );
    assert!(store.find_user_by_username("root").await.unwrap().is_none());

    let taken = store
        .create_user(NewUser {
            username: "admin".into(),
            password_hash: "other".into(),
        })
        .await;
    assert!(matches!(taken, Err(StoreError::Conflict(_))));
}

#[tokio::test]
async fn memory_store_crud() {
    exercise_crud(&MemoryStore::new()).await;
}

#[tokio::test]
async fn database_store_crud() {
    exercise_crud(database_store().await.as_ref()).await;
}

#[tokio::test]
async fn memory_store_users() {
    exercise_users(&MemoryStore::new()).await;
}

#[tokio::test]
async fn database_store_users() {
    exercise_users(database_store().await.as_ref()).await;
}

#[tokio::test]
async fn database_store_enforces_unique_student_tuple() {
    let store = database_store().await;
    store
        .create_registration(submission("Asha Rao", Grade::Tenth, Division::A))
        .await
        .unwrap();

    let clash = store
        .create_registration(submission("  ASHA RAO", Grade::Tenth, Division::A))
        .await;

    assert!(matches!(clash, Err(StoreError::Conflict(_))));
    assert_eq!(store.list_registrations().await.unwrap().len(), 1);
}
