use serde::{Deserialize, Serialize};

/// Body of a stored assignment document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDocument {
    pub title: String,
    pub course: String,
    pub due: String,
    #[serde(default)]
    pub done: bool,
}

impl AssignmentDocument {
    pub fn new(key: AssignmentKey, done: bool) -> Self {
        Self {
            title: key.title,
            course: key.course,
            due: key.due,
            done,
        }
    }
}

/// The (title, course, due) triple used to address documents on update and delete.
///
/// Nothing prevents two documents from sharing a key. Delete removes every
/// match; a status change updates only the earliest one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentKey {
    pub title: String,
    pub course: String,
    pub due: String,
}

impl AssignmentKey {
    pub fn new(
        title: impl Into<String>,
        course: impl Into<String>,
        due: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            course: course.into(),
            due: due.into(),
        }
    }

    pub fn matches(&self, document: &AssignmentDocument) -> bool {
        self.title == document.title && self.course == document.course && self.due == document.due
    }
}

/// An assignment as returned by the store, tagged with its store-generated id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub course: String,
    pub due: String,
    pub done: bool,
}

impl Assignment {
    pub fn from_document(id: String, document: AssignmentDocument) -> Self {
        Self {
            id,
            title: document.title,
            course: document.course,
            due: document.due,
            done: document.done,
        }
    }

    pub fn key(&self) -> AssignmentKey {
        AssignmentKey::new(&self.title, &self.course, &self.due)
    }
}
