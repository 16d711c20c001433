use common::{Division, Grade, RegistrationStatus};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub student_name: String,
    /// Lower-cased, trimmed `student_name`. Part of the unique
    /// `(student_name_key, grade, division)` index.
    pub student_name_key: String,
    pub grade: Grade,
    pub division: Division,
    pub email: Option<String>,
    pub committee: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub suggestions: Option<String>,

    #[sea_orm(indexed)]
    pub status: RegistrationStatus,

    #[sea_orm(indexed)]
    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for common::Registration {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            student_name: m.student_name,
            grade: m.grade,
            division: m.division,
            email: m.email,
            committee: m.committee,
            suggestions: m.suggestions,
            status: m.status,
            created_at: m.created_at,
        }
    }
}
