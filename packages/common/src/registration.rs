use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::school::{Division, Grade};
use crate::status::RegistrationStatus;

/// One student's registration for a committee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Store-assigned identity, never reused.
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Asha Rao")]
    pub student_name: String,
    pub grade: Grade,
    pub division: Division,
    #[schema(example = "asha@example.com")]
    pub email: Option<String>,
    /// Committee id from the static catalog.
    #[schema(example = "unsc")]
    pub committee: String,
    pub suggestions: Option<String>,
    pub status: RegistrationStatus,
    #[schema(example = "2025-09-01T08:00:00Z")]
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey::new(&self.student_name, self.grade, self.division)
    }
}

/// A validated submission, ready to be handed to a store.
///
/// Optional fields never hold empty strings; blanks are normalized to `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewRegistration {
    pub student_name: String,
    pub grade: Grade,
    pub division: Division,
    pub email: Option<String>,
    pub committee: String,
    pub suggestions: Option<String>,
}

impl NewRegistration {
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey::new(&self.student_name, self.grade, self.division)
    }

    /// Materialize the record a store persists for this submission.
    pub fn into_registration(self, id: i32, created_at: DateTime<Utc>) -> Registration {
        Registration {
            id,
            student_name: self.student_name,
            grade: self.grade,
            division: self.division,
            email: self.email,
            committee: self.committee,
            suggestions: self.suggestions,
            status: RegistrationStatus::Pending,
            created_at,
        }
    }
}

/// Uniqueness key for registrations: one per (student name, grade, division).
///
/// Names compare case-insensitively and ignore surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub student_name: String,
    pub grade: Grade,
    pub division: Division,
}

impl DedupKey {
    pub fn new(student_name: &str, grade: Grade, division: Division) -> Self {
        Self {
            student_name: normalize_name(student_name),
            grade,
            division,
        }
    }
}

/// Canonical form of a student name used for duplicate detection.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
