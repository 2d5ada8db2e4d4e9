//! Arrow tables for query results.
//!
//! Converts query results into Arrow [`RecordBatch`]es so they can be shown
//! with Arrow's pretty printer or handed to other Arrow tooling.

use std::sync::Arc;

use arrow::{
    array::{ArrayRef, Float64Array, Int32Array, RecordBatch, StringArray, UInt32Array},
    datatypes::{DataType, Field, Schema, SchemaRef},
};

use crate::{
    catalog::Movie,
    error::Result,
    query::{ExpandedMovie, RatedMovie},
};

fn movie_fields() -> Vec<Field> {
    vec![
        Field::new("id", DataType::UInt32, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("year", DataType::Int32, false),
        Field::new("country", DataType::Utf8, false),
        Field::new("directors", DataType::Utf8, false),
        Field::new("genres", DataType::Utf8, false),
    ]
}

/// Schema of [`movies_to_batch`].
#[must_use]
pub fn movies_schema() -> SchemaRef {
    Arc::new(Schema::new(movie_fields()))
}

/// Schema of [`rated_movies_to_batch`]: the movie columns plus
/// `average_rating`.
#[must_use]
pub fn rated_movies_schema() -> SchemaRef {
    let mut fields = movie_fields();
    fields.push(Field::new("average_rating", DataType::Float64, false));
    Arc::new(Schema::new(fields))
}

/// Schema of [`reviews_to_batch`].
#[must_use]
pub fn reviews_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("critic_id", DataType::UInt32, false),
        Field::new("critic", DataType::Utf8, false),
        Field::new("age", DataType::UInt32, false),
        Field::new("country", DataType::Utf8, false),
        Field::new("score", DataType::Float64, false),
    ]))
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn movie_columns<'m>(movies: impl Iterator<Item = &'m Movie> + Clone) -> Vec<ArrayRef> {
    vec![
        Arc::new(UInt32Array::from(movies.clone().map(|m| m.id).collect::<Vec<_>>())),
        Arc::new(StringArray::from(
            movies.clone().map(|m| m.name.as_str()).collect::<Vec<_>>(),
        )),
        Arc::new(Int32Array::from(movies.clone().map(|m| m.year).collect::<Vec<_>>())),
        Arc::new(StringArray::from(
            movies
                .clone()
                .map(|m| m.location.country.as_str())
                .collect::<Vec<_>>(),
        )),
        Arc::new(StringArray::from(
            movies
                .clone()
                .map(|m| join_ids(&m.directors))
                .collect::<Vec<_>>(),
        )),
        Arc::new(StringArray::from(
            movies.map(|m| join_ids(&m.genres)).collect::<Vec<_>>(),
        )),
    ]
}

/// One row per movie; director and genre ids are comma-joined.
///
/// # Errors
///
/// Returns an error if the batch cannot be assembled.
pub fn movies_to_batch(movies: &[Movie]) -> Result<RecordBatch> {
    let batch = RecordBatch::try_new(movies_schema(), movie_columns(movies.iter()))?;
    Ok(batch)
}

/// One row per rated movie.
///
/// # Errors
///
/// Returns an error if the batch cannot be assembled.
pub fn rated_movies_to_batch(rated: &[RatedMovie]) -> Result<RecordBatch> {
    let mut columns = movie_columns(rated.iter().map(|r| &r.movie));
    columns.push(Arc::new(Float64Array::from(
        rated.iter().map(|r| r.average_rating).collect::<Vec<_>>(),
    )));
    let batch = RecordBatch::try_new(rated_movies_schema(), columns)?;
    Ok(batch)
}

/// One row per review of an expanded movie.
///
/// # Errors
///
/// Returns an error if the batch cannot be assembled.
pub fn reviews_to_batch(movie: &ExpandedMovie) -> Result<RecordBatch> {
    let reviews = &movie.reviews;
    let batch = RecordBatch::try_new(
        reviews_schema(),
        vec![
            Arc::new(UInt32Array::from(
                reviews.iter().map(|r| r.critic.id).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                reviews
                    .iter()
                    .map(|r| r.critic.name.as_str())
                    .collect::<Vec<_>>(),
            )),
            Arc::new(UInt32Array::from(
                reviews.iter().map(|r| r.critic.age).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                reviews
                    .iter()
                    .map(|r| r.critic.country.as_str())
                    .collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                reviews.iter().map(|r| r.score).collect::<Vec<_>>(),
            )),
        ],
    )?;
    Ok(batch)
}
