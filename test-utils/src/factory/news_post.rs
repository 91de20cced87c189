use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test news posts with customizable fields.
///
/// Defaults to a published post whose publication timestamp is now.
pub struct NewsPostFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    body: String,
    published: bool,
}

impl<'a> NewsPostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Post {}", id),
            body: "Post body".to_string(),
            published: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub async fn build(self) -> Result<entity::news_post::Model, DbErr> {
        let now = Utc::now();
        entity::news_post::ActiveModel {
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            published: ActiveValue::Set(self.published),
            published_at: ActiveValue::Set(self.published.then_some(now)),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published news post with default values.
pub async fn create_news_post(db: &DatabaseConnection) -> Result<entity::news_post::Model, DbErr> {
    NewsPostFactory::new(db).build().await
}
