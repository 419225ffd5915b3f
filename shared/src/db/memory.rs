use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::error::DatabaseError;
use crate::models::{Assignment, AssignmentDocument, AssignmentKey};
use crate::traits::AssignmentStore;
use crate::utils::generate_ulid;

/// Process-local assignment collection. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryAssignmentStore {
    documents: RwLock<Vec<(String, AssignmentDocument)>>,
}

impl InMemoryAssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl AssignmentStore for InMemoryAssignmentStore {
    async fn list(&self) -> Result<Vec<Assignment>, DatabaseError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .map(|(id, document)| Assignment::from_document(id.clone(), document.clone()))
            .collect())
    }

    async fn insert(&self, document: AssignmentDocument) -> Result<Assignment, DatabaseError> {
        let id = generate_ulid();
        self.documents
            .write()
            .await
            .push((id.clone(), document.clone()));
        Ok(Assignment::from_document(id, document))
    }

    async fn set_done(&self, key: &AssignmentKey, done: bool) -> Result<u64, DatabaseError> {
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|(_, d)| key.matches(d)) {
            Some((_, document)) => {
                document.done = done;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, key: &AssignmentKey) -> Result<u64, DatabaseError> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|(_, document)| !key.matches(document));
        Ok((before - documents.len()) as u64)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
