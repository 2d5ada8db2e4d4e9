//! Read-only queries over a [`MovieCatalog`].
//!
//! [`QueryService`] borrows a catalog and answers the fixed analytical
//! questions: average release year, movies above a critic-score threshold,
//! movies by a director, average score of a movie, movies with an excellent
//! rating, and the expanded view of a movie.
//!
//! Averages over no elements are degenerate and return [`f64::NAN`]. Name
//! lookups that match nothing return a named error
//! ([`Error::DirectorNotFound`], [`Error::MovieNotFound`]). Every result is a
//! freshly built value; the catalog is only ever read.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    catalog::{Critic, Director, Genre, Location, Movie, MovieCatalog, MovieId, Rating},
    error::{Error, Result},
};

/// Default inclusive score for a rating to count as excellent.
pub const EXCELLENT_SCORE: f64 = 9.0;

/// A movie together with the mean of its critic scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedMovie {
    /// The rated movie.
    #[serde(flatten)]
    pub movie: Movie,
    /// Mean score over all of the movie's ratings.
    pub average_rating: f64,
}

/// One critic's review attached to an [`ExpandedMovie`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    /// The critic who wrote the review.
    pub critic: Critic,
    /// The critic's score.
    pub score: f64,
}

/// A movie with its foreign keys replaced by full records and its reviews
/// attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedMovie {
    /// Movie id.
    pub id: MovieId,
    /// Title.
    pub name: String,
    /// Release year.
    pub year: i32,
    /// Filming location.
    pub location: Location,
    /// Directors, in the order the movie lists them.
    pub directors: Vec<Director>,
    /// Genres, in the order the movie lists them.
    pub genres: Vec<Genre>,
    /// Reviews, in rating order.
    pub reviews: Vec<Review>,
}

/// Answers analytical questions about a borrowed catalog.
///
/// # Example
///
/// ```
/// use cinemateca::{datasets::sample, QueryService};
///
/// let catalog = sample();
/// let service = QueryService::new(&catalog);
///
/// let matrix = service.expand_movie_details("Matrix").unwrap();
/// assert_eq!(matrix.directors.len(), 2);
/// assert!(service.average_rating_for_movie(matrix.id) > 8.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueryService<'a> {
    catalog: &'a MovieCatalog,
    excellent_score: f64,
}

impl<'a> QueryService<'a> {
    /// Creates a query service over `catalog`.
    ///
    /// Default configuration:
    /// - excellent_score: 9.0
    #[must_use]
    pub fn new(catalog: &'a MovieCatalog) -> Self {
        Self {
            catalog,
            excellent_score: EXCELLENT_SCORE,
        }
    }

    /// Sets the inclusive score from which a rating counts as excellent.
    #[must_use]
    pub fn excellent_score(mut self, score: f64) -> Self {
        self.excellent_score = score;
        self
    }

    /// Returns the catalog being queried.
    #[must_use]
    pub fn catalog(&self) -> &'a MovieCatalog {
        self.catalog
    }

    /// Mean release year over all movies.
    ///
    /// Returns [`f64::NAN`] for an empty catalog.
    #[must_use]
    pub fn average_release_year(&self) -> f64 {
        let average = mean(self.catalog.movies().iter().map(|m| f64::from(m.year)));
        tracing::debug!(average, "average release year");
        average
    }

    /// Movies whose mean critic score is strictly greater than `threshold`.
    ///
    /// Movies without ratings are never included. Results follow the order
    /// in which each movie first appears in the rating list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DanglingReference`] if a qualifying rating group
    /// refers to a movie that is not in the catalog.
    pub fn movies_with_average_rating_above(&self, threshold: f64) -> Result<Vec<RatedMovie>> {
        let mut rated = Vec::new();
        for (movie_id, ratings) in self.ratings_by_movie() {
            let average_rating = mean(ratings.iter().map(|r| r.score));
            if average_rating > threshold {
                let movie = self.movie(movie_id)?;
                rated.push(RatedMovie {
                    movie: movie.clone(),
                    average_rating,
                });
            }
        }
        tracing::debug!(threshold, matches = rated.len(), "movies above average");
        Ok(rated)
    }

    /// Movies directed by the director with exactly this name, in catalog
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectorNotFound`] if no director has that name.
    pub fn movies_by_director(&self, name: &str) -> Result<Vec<Movie>> {
        let director = self
            .catalog
            .director_by_name(name)
            .ok_or_else(|| Error::director_not_found(name))?;
        let movies: Vec<Movie> = self
            .catalog
            .movies()
            .iter()
            .filter(|m| m.is_directed_by(director.id))
            .cloned()
            .collect();
        tracing::debug!(director = name, matches = movies.len(), "movies by director");
        Ok(movies)
    }

    /// Mean score over all ratings of one movie.
    ///
    /// Returns [`f64::NAN`] if the movie has no ratings, including when the
    /// id is unknown.
    #[must_use]
    pub fn average_rating_for_movie(&self, movie_id: MovieId) -> f64 {
        let average = mean(self.catalog.ratings_for(movie_id).map(|r| r.score));
        tracing::debug!(movie_id, average, "average rating for movie");
        average
    }

    /// One movie per rating whose score reaches the excellent threshold.
    ///
    /// A movie rated excellently by several critics appears once per such
    /// rating, in rating order. The result is empty when no rating
    /// qualifies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DanglingReference`] if a qualifying rating refers to
    /// a movie that is not in the catalog.
    pub fn movies_with_excellent_rating(&self) -> Result<Vec<Movie>> {
        let movies = self
            .catalog
            .ratings()
            .iter()
            .filter(|r| r.score >= self.excellent_score)
            .map(|r| self.movie(r.movie).cloned())
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            threshold = self.excellent_score,
            matches = movies.len(),
            "movies with excellent rating"
        );
        Ok(movies)
    }

    /// Builds the expanded view of the movie with exactly this name.
    ///
    /// Directors and genres are resolved to full records and every rating of
    /// the movie becomes a [`Review`] carrying its critic. The stored movie
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No movie has that name ([`Error::MovieNotFound`])
    /// - A director, genre or critic id cannot be resolved
    ///   ([`Error::DanglingReference`])
    pub fn expand_movie_details(&self, name: &str) -> Result<ExpandedMovie> {
        let movie = self
            .catalog
            .movie_by_name(name)
            .ok_or_else(|| Error::movie_not_found(name))?;

        let directors = movie
            .directors
            .iter()
            .map(|&id| {
                self.catalog
                    .director(id)
                    .cloned()
                    .ok_or_else(|| Error::dangling("director", id))
            })
            .collect::<Result<Vec<_>>>()?;

        let genres = movie
            .genres
            .iter()
            .map(|&id| {
                self.catalog
                    .genre(id)
                    .cloned()
                    .ok_or_else(|| Error::dangling("genre", id))
            })
            .collect::<Result<Vec<_>>>()?;

        let reviews = self
            .catalog
            .ratings_for(movie.id)
            .map(|rating| -> Result<Review> {
                let critic = self
                    .catalog
                    .critic(rating.critic)
                    .cloned()
                    .ok_or_else(|| Error::dangling("critic", rating.critic))?;
                Ok(Review {
                    critic,
                    score: rating.score,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            movie = name,
            directors = directors.len(),
            genres = genres.len(),
            reviews = reviews.len(),
            "expanded movie"
        );

        Ok(ExpandedMovie {
            id: movie.id,
            name: movie.name.clone(),
            year: movie.year,
            location: movie.location.clone(),
            directors,
            genres,
            reviews,
        })
    }

    /// Groups ratings by movie id, keeping groups in first-seen order.
    fn ratings_by_movie(&self) -> Vec<(MovieId, Vec<&'a Rating>)> {
        let mut slots: HashMap<MovieId, usize> = HashMap::new();
        let mut groups: Vec<(MovieId, Vec<&'a Rating>)> = Vec::new();
        for rating in self.catalog.ratings() {
            let slot = *slots.entry(rating.movie).or_insert_with(|| {
                groups.push((rating.movie, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(rating);
        }
        groups
    }

    fn movie(&self, id: MovieId) -> Result<&'a Movie> {
        self.catalog
            .movie(id)
            .ok_or_else(|| Error::dangling("movie", id))
    }
}

/// Arithmetic mean; [`f64::NAN`] when there are no values.
#[allow(clippy::cast_precision_loss)]
fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return f64::NAN;
    }
    sum / count as f64
}
