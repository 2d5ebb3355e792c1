use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder,
    Set, SqlErr,
    sea_query::{NullOrdering, Order},
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{NewMovie, ReviewUpdate},
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Lowest rating first, unrated movies last, ties by title descending.
    pub async fn list_ranked(&self) -> AppResult<Vec<movie::Model>> {
        let movies = movie::Entity::find()
            .order_by_with_nulls(movie::Column::Rating, Order::Asc, NullOrdering::Last)
            .order_by_desc(movie::Column::Title)
            .all(&self.db)
            .await?;
        tracing::debug!(count = movies.len(), "listed movies");
        Ok(movies)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(movie::Entity::find().count(&self.db).await?)
    }

    pub async fn insert(&self, new: NewMovie) -> AppResult<movie::Model> {
        let title = new.title.clone();
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(new.rating),
            ranking: Set(new.ranking),
            review: Set(new.review),
            img_url: Set(new.img_url),
        };

        match model.insert(&self.db).await {
            Ok(movie) => Ok(movie),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::DuplicateTitle(title))
            },
            Err(err) => Err(err.into()),
        }
    }

    pub async fn update_review(
        &self,
        movie: movie::Model,
        update: ReviewUpdate,
    ) -> AppResult<movie::Model> {
        let mut model = movie.into_active_model();
        model.rating = Set(Some(update.rating));
        model.review = Set(Some(update.review));
        Ok(model.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
