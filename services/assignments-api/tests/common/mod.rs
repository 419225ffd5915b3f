use assignments_api::{create_app, AppOptions, AppState};
use async_trait::async_trait;
use axum_test::TestServer;
use shared::{
    Assignment, AssignmentDocument, AssignmentKey, AssignmentStore, DatabaseError,
    InMemoryAssignmentStore,
};
use std::sync::Arc;

pub struct TestFixture {
    pub store: Arc<InMemoryAssignmentStore>,
    pub server: TestServer,
}

pub fn setup_test_fixture() -> TestFixture {
    let store = Arc::new(InMemoryAssignmentStore::new());
    let state = AppState::new(store.clone());
    let app = create_app(state, &AppOptions::default());

    TestFixture {
        store,
        server: TestServer::new(app).unwrap(),
    }
}

/// A store whose backend can never be reached.
pub struct UnreachableStore;

fn unreachable() -> DatabaseError {
    DatabaseError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl AssignmentStore for UnreachableStore {
    async fn list(&self) -> Result<Vec<Assignment>, DatabaseError> {
        Err(unreachable())
    }

    async fn insert(&self, _document: AssignmentDocument) -> Result<Assignment, DatabaseError> {
        Err(unreachable())
    }

    async fn set_done(&self, _key: &AssignmentKey, _done: bool) -> Result<u64, DatabaseError> {
        Err(unreachable())
    }

    async fn delete(&self, _key: &AssignmentKey) -> Result<u64, DatabaseError> {
        Err(unreachable())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(unreachable())
    }
}

pub fn setup_unreachable_server() -> TestServer {
    let app = create_app(AppState::new(Arc::new(UnreachableStore)), &AppOptions::default());
    TestServer::new(app).unwrap()
}

pub mod fixtures {
    use serde_json::{json, Value};

    pub fn hw1() -> Value {
        json!({"title": "HW1", "course": "CS1", "due": "2024-01-01"})
    }

    pub fn hw1_with_done(done: bool) -> Value {
        json!({"title": "HW1", "course": "CS1", "due": "2024-01-01", "done": done})
    }

    pub fn without(mut body: Value, field: &str) -> Value {
        body.as_object_mut().unwrap().remove(field);
        body
    }
}
