use sea_orm::DatabaseConnection;

use crate::server::{
    data::news_post::NewsPostRepository,
    error::{validation::ValidationError, AppError},
    model::news::{CreateNewsPostParams, NewsPost, UpdateNewsPostParams},
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_published(&self) -> Result<Vec<NewsPost>, AppError> {
        let repo = NewsPostRepository::new(self.db);
        let posts = repo.get_published().await?;
        Ok(posts)
    }

    /// Gets one published post for the public site; drafts resolve to `None`.
    pub async fn get_published_by_id(&self, id: i32) -> Result<Option<NewsPost>, AppError> {
        let repo = NewsPostRepository::new(self.db);
        let post = repo.find_published_by_id(id).await?;
        Ok(post)
    }

    pub async fn get_all(&self) -> Result<Vec<NewsPost>, AppError> {
        let repo = NewsPostRepository::new(self.db);
        let posts = repo.get_all().await?;
        Ok(posts)
    }

    pub async fn create(&self, params: CreateNewsPostParams) -> Result<NewsPost, AppError> {
        if params.title.is_empty() {
            return Err(ValidationError::MissingField("title").into());
        }

        let repo = NewsPostRepository::new(self.db);
        let post = repo.create(params).await?;
        Ok(post)
    }

    pub async fn update(&self, params: UpdateNewsPostParams) -> Result<Option<NewsPost>, AppError> {
        if params.title.is_empty() {
            return Err(ValidationError::MissingField("title").into());
        }

        let repo = NewsPostRepository::new(self.db);
        let post = repo.update(params).await?;
        Ok(post)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = NewsPostRepository::new(self.db);
        let deleted = repo.delete(id).await?;
        Ok(deleted)
    }
}
