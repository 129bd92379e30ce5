use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    NotSet, QueryFilter, QueryOrder, Set, TransactionTrait, Value, sea_query::Expr,
};

use crate::{
    entities::{director, genre, movie},
    error::{AppError, AppResult},
    models::{MovieFilter, MovieInput, NameInput},
};

/// Read-through access to the movie database. Holds no cached rows.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_movie(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list_movies(&self, filter: MovieFilter) -> AppResult<Vec<movie::Model>> {
        let mut query = movie::Entity::find();
        if let Some(director_id) = filter.director_id {
            query = query.filter(movie::Column::DirectorId.eq(director_id));
        }
        if let Some(genre_id) = filter.genre_id {
            query = query.filter(movie::Column::GenreId.eq(genre_id));
        }
        Ok(query.order_by_asc(movie::Column::Id).all(&self.db).await?)
    }

    pub async fn create_movie(&self, input: MovieInput) -> AppResult<movie::Model> {
        let txn = self.db.begin().await?;
        check_references(&txn, input.genre_id, input.director_id).await?;

        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            trailer: Set(input.trailer),
            year: Set(input.year),
            rating: Set(input.rating),
            genre_id: Set(input.genre_id),
            director_id: Set(input.director_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(model)
    }

    /// Applies every field present in `input`; absent fields keep their value.
    pub async fn update_movie(
        &self,
        id: i32,
        input: MovieInput,
    ) -> AppResult<Option<movie::Model>> {
        let txn = self.db.begin().await?;
        let Some(existing) = movie::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        check_references(&txn, input.genre_id, input.director_id).await?;

        let mut model: movie::ActiveModel = existing.clone().into();
        if input.title.is_some() {
            model.title = Set(input.title);
        }
        if input.description.is_some() {
            model.description = Set(input.description);
        }
        if input.trailer.is_some() {
            model.trailer = Set(input.trailer);
        }
        if input.year.is_some() {
            model.year = Set(input.year);
        }
        if input.rating.is_some() {
            model.rating = Set(input.rating);
        }
        if input.genre_id.is_some() {
            model.genre_id = Set(input.genre_id);
        }
        if input.director_id.is_some() {
            model.director_id = Set(input.director_id);
        }

        let model = if model.is_changed() { model.update(&txn).await? } else { existing };

        txn.commit().await?;
        Ok(Some(model))
    }

    pub async fn delete_movie(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;
        let res = movie::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn find_director(&self, id: i32) -> AppResult<Option<director::Model>> {
        Ok(director::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list_directors(&self) -> AppResult<Vec<director::Model>> {
        Ok(director::Entity::find().order_by_asc(director::Column::Id).all(&self.db).await?)
    }

    pub async fn create_director(&self, input: NameInput) -> AppResult<director::Model> {
        let txn = self.db.begin().await?;
        let model =
            director::ActiveModel { id: NotSet, name: Set(input.name) }.insert(&txn).await?;
        txn.commit().await?;
        Ok(model)
    }

    pub async fn rename_director(
        &self,
        id: i32,
        input: NameInput,
    ) -> AppResult<Option<director::Model>> {
        let txn = self.db.begin().await?;
        let Some(existing) = director::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut model: director::ActiveModel = existing.into();
        model.name = Set(input.name);
        let model = model.update(&txn).await?;

        txn.commit().await?;
        Ok(Some(model))
    }

    /// Movies directed by `id` keep existing with their `director_id` cleared.
    pub async fn delete_director(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        movie::Entity::update_many()
            .col_expr(movie::Column::DirectorId, Expr::value(Value::Int(None)))
            .filter(movie::Column::DirectorId.eq(id))
            .exec(&txn)
            .await?;
        let res = director::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn find_genre(&self, id: i32) -> AppResult<Option<genre::Model>> {
        Ok(genre::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list_genres(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().order_by_asc(genre::Column::Id).all(&self.db).await?)
    }

    pub async fn create_genre(&self, input: NameInput) -> AppResult<genre::Model> {
        let txn = self.db.begin().await?;
        let model = genre::ActiveModel { id: NotSet, name: Set(input.name) }.insert(&txn).await?;
        txn.commit().await?;
        Ok(model)
    }

    pub async fn rename_genre(&self, id: i32, input: NameInput) -> AppResult<Option<genre::Model>> {
        let txn = self.db.begin().await?;
        let Some(existing) = genre::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut model: genre::ActiveModel = existing.into();
        model.name = Set(input.name);
        let model = model.update(&txn).await?;

        txn.commit().await?;
        Ok(Some(model))
    }

    /// Movies in genre `id` keep existing with their `genre_id` cleared.
    pub async fn delete_genre(&self, id: i32) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        movie::Entity::update_many()
            .col_expr(movie::Column::GenreId, Expr::value(Value::Int(None)))
            .filter(movie::Column::GenreId.eq(id))
            .exec(&txn)
            .await?;
        let res = genre::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}

async fn check_references(
    txn: &DatabaseTransaction,
    genre_id: Option<i32>,
    director_id: Option<i32>,
) -> AppResult<()> {
    if let Some(genre_id) = genre_id {
        if genre::Entity::find_by_id(genre_id).one(txn).await?.is_none() {
            return Err(AppError::BadRequest(format!("genre {genre_id} does not exist")));
        }
    }
    if let Some(director_id) = director_id {
        if director::Entity::find_by_id(director_id).one(txn).await?.is_none() {
            return Err(AppError::BadRequest(format!("director {director_id} does not exist")));
        }
    }
    Ok(())
}
