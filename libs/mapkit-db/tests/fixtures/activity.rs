//! The "activity" fixture family: string primary keys, and a composite key
//! made of two foreign keys into the same table.

use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseConnection};

pub mod action {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "actions")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod complex_action {
    use sea_orm::entity::prelude::*;

    /// Keyed by two actions at once.
    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "complex_actions")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub action1_name: String,
        #[sea_orm(primary_key, auto_increment = false)]
        pub action2_name: String,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::action::Entity",
            from = "Column::Action1Name",
            to = "super::action::Column::Name"
        )]
        Action1,
        #[sea_orm(
            belongs_to = "super::action::Entity",
            from = "Column::Action2Name",
            to = "super::action::Column::Name"
        )]
        Action2,
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod token {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "action_tokens")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub token: String,
        pub action1_name: String,
        pub action2_name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Create the activity tables on a fresh connection.
pub async fn create_schema(db: &DatabaseConnection) -> Result<()> {
    db.execute_unprepared(
        "CREATE TABLE actions (
            name TEXT PRIMARY KEY NOT NULL
        )",
    )
    .await?;

    db.execute_unprepared(
        "CREATE TABLE complex_actions (
            action1_name TEXT NOT NULL,
            action2_name TEXT NOT NULL,
            name TEXT NOT NULL,
            PRIMARY KEY (action1_name, action2_name)
        )",
    )
    .await?;

    db.execute_unprepared(
        "CREATE TABLE action_tokens (
            token TEXT PRIMARY KEY NOT NULL,
            action1_name TEXT NOT NULL,
            action2_name TEXT NOT NULL
        )",
    )
    .await?;

    Ok(())
}
