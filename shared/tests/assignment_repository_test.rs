use shared::test_environment::TestEnvironment;
use shared::{AssignmentDocument, AssignmentKey, AssignmentRepository, AssignmentStore};

fn hw(title: &str) -> AssignmentKey {
    AssignmentKey::new(title, "CS1", "2024-01-01")
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_insert_then_list_in_storage_order() {
    let env = TestEnvironment::new().await.unwrap();
    let repo = AssignmentRepository::new(env.db_pool.pool());

    let first = repo.insert(AssignmentDocument::new(hw("HW1"), false)).await.unwrap();
    let second = repo.insert(AssignmentDocument::new(hw("HW2"), true)).await.unwrap();

    let all = repo.list().await.unwrap();
    assert_eq!(all, vec![first, second]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_set_done_keeps_other_fields() {
    let env = TestEnvironment::new().await.unwrap();
    let repo = AssignmentRepository::new(env.db_pool.pool());

    let created = repo.insert(AssignmentDocument::new(hw("HW1"), false)).await.unwrap();
    repo.insert(AssignmentDocument::new(hw("HW2"), false)).await.unwrap();

    let matched = repo.set_done(&hw("HW1"), true).await.unwrap();
    assert_eq!(matched, 1);

    let found = repo.find_by_key(&hw("HW1")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, created.id);
    assert_eq!(found[0].key(), hw("HW1"));
    assert!(found[0].done);

    let untouched = repo.find_by_key(&hw("HW2")).await.unwrap();
    assert!(!untouched[0].done);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_set_done_updates_first_duplicate_only() {
    let env = TestEnvironment::new().await.unwrap();
    let repo = AssignmentRepository::new(env.db_pool.pool());

    let first = repo.insert(AssignmentDocument::new(hw("HW1"), false)).await.unwrap();
    let second = repo.insert(AssignmentDocument::new(hw("HW1"), false)).await.unwrap();

    assert_eq!(repo.set_done(&hw("HW1"), true).await.unwrap(), 1);

    let found = repo.find_by_key(&hw("HW1")).await.unwrap();
    assert_eq!(found[0].id, first.id);
    assert!(found[0].done);
    assert_eq!(found[1].id, second.id);
    assert!(!found[1].done);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_delete_removes_every_match() {
    let env = TestEnvironment::new().await.unwrap();
    let repo = AssignmentRepository::new(env.db_pool.pool());

    repo.insert(AssignmentDocument::new(hw("HW1"), false)).await.unwrap();
    repo.insert(AssignmentDocument::new(hw("HW1"), true)).await.unwrap();
    repo.insert(AssignmentDocument::new(hw("HW2"), false)).await.unwrap();

    assert_eq!(repo.delete(&hw("HW1")).await.unwrap(), 2);

    let remaining = repo.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "HW2");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_missing_key_is_noop() {
    let env = TestEnvironment::new().await.unwrap();
    let repo = AssignmentRepository::new(env.db_pool.pool());

    repo.insert(AssignmentDocument::new(hw("HW1"), false)).await.unwrap();

    assert_eq!(repo.delete(&hw("missing")).await.unwrap(), 0);
    assert_eq!(repo.set_done(&hw("missing"), true).await.unwrap(), 0);
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_ping_and_health_check() {
    let env = TestEnvironment::new().await.unwrap();
    let repo = AssignmentRepository::new(env.db_pool.pool());

    repo.ping().await.unwrap();
    env.db_pool.health_check().await.unwrap();
}
