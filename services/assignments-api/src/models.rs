use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use shared::utils::non_empty;
use shared::{AssignmentDocument, AssignmentKey};

use crate::error::ApiError;

/// JSON body extractor whose rejections (missing content type, malformed JSON,
/// wrongly typed fields) all surface as a bare 400.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Assignment-shaped request body shared by all write endpoints.
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation error rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentPayload {
    pub title: Option<String>,
    pub course: Option<String>,
    pub due: Option<String>,
    pub done: Option<bool>,
}

impl AssignmentPayload {
    pub fn new(title: &str, course: &str, due: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            course: Some(course.to_string()),
            due: Some(due.to_string()),
            done: None,
        }
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    /// The identifying triple, if title, course and due are all present and non-empty.
    pub fn key(&self) -> Result<AssignmentKey, ApiError> {
        let title = required("title", self.title.clone())?;
        let course = required("course", self.course.clone())?;
        let due = required("due", self.due.clone())?;
        Ok(AssignmentKey { title, course, due })
    }

    pub fn into_document(self) -> Result<AssignmentDocument, ApiError> {
        let key = self.key()?;
        Ok(AssignmentDocument::new(key, self.done.unwrap_or(false)))
    }

    pub fn into_status_change(self) -> Result<(AssignmentKey, bool), ApiError> {
        let key = self.key()?;
        let done = self
            .done
            .ok_or_else(|| ApiError::BadRequest("missing field: done".to_string()))?;
        Ok((key, done))
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ApiError> {
    non_empty(value).ok_or_else(|| ApiError::BadRequest(format!("missing field: {}", field)))
}
