//! Mentor entity model
//!
//! This module contains the SeaORM entity model for the mentors table.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// A mentor that may be assigned to any number of students
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mentors")]
pub struct Model {
    /// Generated identifier (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Caller-supplied identifier, not unique
    pub external_id: Option<String>,

    pub name: Option<String>,

    pub email: Option<String>,

    /// Timestamp when the mentor was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the mentor was last updated
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Students,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
