//! Student entity model
//!
//! This module contains the SeaORM entity model for the students table.
//! `mentor_id` is the only attribute that changes after creation, and only
//! through mentor assignment.

use super::mentor::Entity as Mentor;
use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// A student with at most one currently assigned mentor
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Generated identifier (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Caller-supplied identifier, not unique
    pub external_id: Option<String>,

    pub name: Option<String>,

    pub email: Option<String>,

    /// Cohort or class label
    pub batch: Option<String>,

    /// Currently assigned mentor, if any
    pub mentor_id: Option<Uuid>,

    /// Timestamp when the student was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp of the last mentor assignment (or creation)
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Mentor",
        from = "Column::MentorId",
        to = "super::mentor::Column::Id",
        on_delete = "SetNull"
    )]
    Mentor,
}

impl Related<Mentor> for Entity {
    fn to() -> RelationDef {
        Relation::Mentor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
