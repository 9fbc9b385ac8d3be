//! The "legacy directory" fixture family: users, their articles, cars
//! shared through a junction table, and user-to-user references. Column
//! names deliberately keep the legacy spelling (`iUserId`, `sUsername`).

use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseConnection};

pub mod user {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "legacy_users")]
    pub struct Model {
        #[sea_orm(primary_key, column_name = "iUserId")]
        pub id: i32,
        #[sea_orm(column_name = "sUsername", unique)]
        pub username: String,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::article::Entity")]
        Articles,
        #[sea_orm(has_many = "super::user_car::Entity")]
        UserCars,
    }

    impl Related<super::article::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Articles.def()
        }
    }

    impl Related<super::car::Entity> for Entity {
        fn to() -> RelationDef {
            super::user_car::Relation::Car.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::user_car::Relation::User.def().rev())
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod article {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "legacy_articles")]
    pub struct Model {
        #[sea_orm(primary_key, column_name = "iArticleId")]
        pub id: i32,
        pub topic: String,
        pub text: String,
        #[sea_orm(column_name = "iUserId")]
        pub user_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::user::Entity",
            from = "Column::UserId",
            to = "super::user::Column::Id"
        )]
        User,
    }

    impl Related<super::user::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::User.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod car {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "legacy_cars")]
    pub struct Model {
        #[sea_orm(primary_key, column_name = "iCarId")]
        pub id: i32,
        pub description: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::user_car::Entity")]
        UserCars,
    }

    impl Related<super::user::Entity> for Entity {
        fn to() -> RelationDef {
            super::user_car::Relation::User.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::user_car::Relation::Car.def().rev())
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod user_car {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "legacy_users_cars")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "iUserId")]
        pub user_id: i32,
        #[sea_orm(primary_key, auto_increment = false, column_name = "iCarId")]
        pub car_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::user::Entity",
            from = "Column::UserId",
            to = "super::user::Column::Id"
        )]
        User,
        #[sea_orm(
            belongs_to = "super::car::Entity",
            from = "Column::CarId",
            to = "super::car::Column::Id"
        )]
        Car,
    }

    impl Related<super::user::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::User.def()
        }
    }

    impl Related<super::car::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Car.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod user_reference {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "legacy_users_reference")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false, column_name = "iUserIdSource")]
        pub source_id: i32,
        #[sea_orm(primary_key, auto_increment = false, column_name = "iUserIdTarget")]
        pub target_id: i32,
        pub description: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::user::Entity",
            from = "Column::SourceId",
            to = "super::user::Column::Id"
        )]
        Source,
        #[sea_orm(
            belongs_to = "super::user::Entity",
            from = "Column::TargetId",
            to = "super::user::Column::Id"
        )]
        Target,
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Create the directory tables on a fresh connection.
pub async fn create_schema(db: &DatabaseConnection) -> Result<()> {
    db.execute_unprepared(
        r#"CREATE TABLE legacy_users (
            "iUserId" INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            "sUsername" TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL
        )"#,
    )
    .await?;

    db.execute_unprepared(
        r#"CREATE TABLE legacy_articles (
            "iArticleId" INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            topic TEXT NOT NULL,
            text TEXT NOT NULL,
            "iUserId" INTEGER NOT NULL
        )"#,
    )
    .await?;

    db.execute_unprepared(
        r#"CREATE TABLE legacy_cars (
            "iCarId" INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            description TEXT
        )"#,
    )
    .await?;

    db.execute_unprepared(
        r#"CREATE TABLE legacy_users_cars (
            "iUserId" INTEGER NOT NULL,
            "iCarId" INTEGER NOT NULL,
            PRIMARY KEY ("iUserId", "iCarId")
        )"#,
    )
    .await?;

    db.execute_unprepared(
        r#"CREATE TABLE legacy_users_reference (
            "iUserIdSource" INTEGER NOT NULL,
            "iUserIdTarget" INTEGER NOT NULL,
            description TEXT NOT NULL,
            PRIMARY KEY ("iUserIdSource", "iUserIdTarget")
        )"#,
    )
    .await?;

    Ok(())
}
