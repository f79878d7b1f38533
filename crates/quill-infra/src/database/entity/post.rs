//! Blogpost entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogposts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub date: DateTimeWithTimeZone,
    pub author_id: Uuid,
    pub edited: bool,
    pub last_edit: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Blogpost.
impl From<Model> for quill_core::domain::Blogpost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            body: model.body,
            date: model.date.into(),
            author: model.author_id,
            edited: model.edited,
            last_edit: model.last_edit.map(Into::into),
        }
    }
}

/// Conversion from domain Blogpost to SeaORM ActiveModel.
impl From<quill_core::domain::Blogpost> for ActiveModel {
    fn from(post: quill_core::domain::Blogpost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            body: Set(post.body),
            date: Set(post.date.into()),
            author_id: Set(post.author),
            edited: Set(post.edited),
            last_edit: Set(post.last_edit.map(Into::into)),
        }
    }
}
