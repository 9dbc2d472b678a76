use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// One append-only audit record of a unit transition.
///
/// There is deliberately no foreign key to `units`: ledger rows must
/// outlive hard-deleted units. The employee relation is logic-level only
/// and used for the display-name join in ledger queries.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub unit_id: String,
    pub employee_id: i32,
    pub movement_type: String,
    pub from_department: String,
    pub to_department: String,
    pub from_section: String,
    pub to_section: String,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id",
        skip_fk
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
