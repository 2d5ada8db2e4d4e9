//! Catalog entities and the in-memory [`MovieCatalog`].
//!
//! A catalog is five flat collections linked by integer ids: movies point at
//! directors and genres, ratings point at a movie and a critic. Catalog
//! documents may use either the English field names of these types or the
//! Spanish keys of the original dataset layout (`peliculas`, `nombre`,
//! `anio`, `puntuacion`, ...).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a [`Movie`].
pub type MovieId = u32;
/// Identifier of a [`Director`].
pub type DirectorId = u32;
/// Identifier of a [`Genre`].
pub type GenreId = u32;
/// Identifier of a [`Critic`].
pub type CriticId = u32;

/// Address of the set where a movie was filmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Street name.
    #[serde(alias = "calle")]
    pub street: String,
    /// Street number.
    #[serde(alias = "numero")]
    pub number: u32,
    /// Country.
    #[serde(alias = "pais")]
    pub country: String,
}

/// A movie with foreign keys to its directors and genres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique movie id.
    pub id: MovieId,
    /// Title.
    #[serde(alias = "nombre")]
    pub name: String,
    /// Release year.
    #[serde(alias = "anio")]
    pub year: i32,
    /// Filming location.
    #[serde(alias = "direccionSetFilmacion")]
    pub location: Location,
    /// Ids of the movie's directors.
    #[serde(alias = "directores")]
    pub directors: Vec<DirectorId>,
    /// Ids of the movie's genres.
    #[serde(alias = "generos")]
    pub genres: Vec<GenreId>,
}

impl Movie {
    /// Returns true if `director` is one of this movie's directors.
    #[must_use]
    pub fn is_directed_by(&self, director: DirectorId) -> bool {
        self.directors.contains(&director)
    }
}

/// A film director.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    /// Unique director id.
    pub id: DirectorId,
    /// Full name.
    #[serde(alias = "nombre")]
    pub name: String,
}

/// A film genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Unique genre id.
    pub id: GenreId,
    /// Genre name.
    #[serde(alias = "nombre")]
    pub name: String,
}

/// A film critic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Critic {
    /// Unique critic id.
    pub id: CriticId,
    /// Full name.
    #[serde(alias = "nombre")]
    pub name: String,
    /// Age in years.
    #[serde(alias = "edad")]
    pub age: u32,
    /// Country of residence.
    #[serde(alias = "pais")]
    pub country: String,
}

/// A critic's score for one movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Rated movie.
    #[serde(alias = "pelicula")]
    pub movie: MovieId,
    /// Critic who gave the score.
    #[serde(alias = "critico")]
    pub critic: CriticId,
    /// Score, usually between 0 and 10.
    #[serde(alias = "puntuacion")]
    pub score: f64,
}

/// A read-only catalog of movies, directors, genres, critics and ratings.
///
/// The catalog is never modified by queries; build one with
/// [`MovieCatalog::new`], load one with [`MovieCatalog::from_json`], or use
/// the embedded [`crate::datasets::sample`].
///
/// # Example
///
/// ```
/// use cinemateca::MovieCatalog;
///
/// let catalog = MovieCatalog::from_json_str(
///     r#"{"peliculas": [{"id": 1, "nombre": "Matrix", "anio": 1999,
///         "direccionSetFilmacion": {"calle": "Av. Roca", "numero": 3023, "pais": "Argentina"},
///         "directores": [2, 3], "generos": [1, 2]}]}"#,
/// )
/// .unwrap();
/// assert_eq!(catalog.movies()[0].year, 1999);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieCatalog {
    #[serde(default, alias = "peliculas")]
    movies: Vec<Movie>,
    #[serde(default, alias = "directores")]
    directors: Vec<Director>,
    #[serde(default, alias = "generos")]
    genres: Vec<Genre>,
    #[serde(default, alias = "criticos")]
    critics: Vec<Critic>,
    #[serde(default, alias = "calificaciones")]
    ratings: Vec<Rating>,
}

impl MovieCatalog {
    /// Creates a catalog from its five collections.
    ///
    /// Referenced ids are not checked here; queries report unresolved ids
    /// as [`Error::DanglingReference`] when they need them.
    #[must_use]
    pub fn new(
        movies: Vec<Movie>,
        directors: Vec<Director>,
        genres: Vec<Genre>,
        critics: Vec<Critic>,
        ratings: Vec<Rating>,
    ) -> Self {
        Self {
            movies,
            directors,
            genres,
            critics,
            ratings,
        }
    }

    /// Parses a catalog from a JSON document.
    ///
    /// Missing top-level collections are treated as empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        tracing::debug!(
            movies = catalog.movies.len(),
            ratings = catalog.ratings.len(),
            "parsed catalog"
        );
        Ok(catalog)
    }

    /// Loads a catalog from a `.json` file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file extension is not `json`
    /// - The file cannot be read
    /// - The document is malformed
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {}
            other => return Err(Error::unsupported_format(other.unwrap_or(""))),
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        Self::from_json_str(&content)
    }

    /// Serializes the catalog to pretty-printed JSON with English keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All movies, in catalog order.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All directors.
    #[must_use]
    pub fn directors(&self) -> &[Director] {
        &self.directors
    }

    /// All genres.
    #[must_use]
    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// All critics.
    #[must_use]
    pub fn critics(&self) -> &[Critic] {
        &self.critics
    }

    /// All ratings, in catalog order.
    #[must_use]
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Looks up a movie by id.
    #[must_use]
    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Looks up the first movie with exactly this name.
    #[must_use]
    pub fn movie_by_name(&self, name: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.name == name)
    }

    /// Looks up a director by id.
    #[must_use]
    pub fn director(&self, id: DirectorId) -> Option<&Director> {
        self.directors.iter().find(|d| d.id == id)
    }

    /// Looks up the first director with exactly this name.
    #[must_use]
    pub fn director_by_name(&self, name: &str) -> Option<&Director> {
        self.directors.iter().find(|d| d.name == name)
    }

    /// Looks up a genre by id.
    #[must_use]
    pub fn genre(&self, id: GenreId) -> Option<&Genre> {
        self.genres.iter().find(|g| g.id == id)
    }

    /// Looks up a critic by id.
    #[must_use]
    pub fn critic(&self, id: CriticId) -> Option<&Critic> {
        self.critics.iter().find(|c| c.id == id)
    }

    /// Iterates over the ratings of one movie, in catalog order.
    pub fn ratings_for(&self, movie: MovieId) -> impl Iterator<Item = &Rating> + '_ {
        self.ratings.iter().filter(move |r| r.movie == movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> Movie {
        Movie {
            id: 2,
            name: "Matrix".to_string(),
            year: 1999,
            location: Location {
                street: "Av. Roca".to_string(),
                number: 3023,
                country: "Argentina".to_string(),
            },
            directors: vec![2, 3],
            genres: vec![1, 2],
        }
    }

    #[test]
    fn test_lookups() {
        let catalog = MovieCatalog::new(
            vec![matrix()],
            vec![Director {
                id: 2,
                name: "Lana Wachowski".to_string(),
            }],
            vec![],
            vec![],
            vec![],
        );
        assert_eq!(catalog.movie(2).map(|m| m.name.as_str()), Some("Matrix"));
        assert!(catalog.movie(1).is_none());
        assert_eq!(catalog.movie_by_name("Matrix").map(|m| m.id), Some(2));
        assert!(catalog.movie_by_name("matrix").is_none());
        assert_eq!(catalog.director_by_name("Lana Wachowski").map(|d| d.id), Some(2));
        assert!(catalog.genre(1).is_none());
    }

    #[test]
    fn test_is_directed_by() {
        let movie = matrix();
        assert!(movie.is_directed_by(3));
        assert!(!movie.is_directed_by(1));
    }

    #[test]
    fn test_ratings_for() {
        let catalog = MovieCatalog::new(
            vec![matrix()],
            vec![],
            vec![],
            vec![],
            vec![
                Rating { movie: 2, critic: 1, score: 9.0 },
                Rating { movie: 7, critic: 1, score: 3.0 },
                Rating { movie: 2, critic: 2, score: 10.0 },
            ],
        );
        let scores: Vec<f64> = catalog.ratings_for(2).map(|r| r.score).collect();
        assert_eq!(scores, vec![9.0, 10.0]);
    }

    #[test]
    fn test_from_json_str_spanish_keys() {
        let json = r#"{
            "peliculas": [{
                "id": 2, "nombre": "Matrix", "anio": 1999,
                "direccionSetFilmacion": {"calle": "Av. Roca", "numero": 3023, "pais": "Argentina"},
                "directores": [2, 3], "generos": [1, 2]
            }],
            "criticos": [{"id": 1, "nombre": "Pepe Perez", "edad": 60, "pais": "Espania"}],
            "calificaciones": [{"pelicula": 2, "critico": 1, "puntuacion": 8}]
        }"#;
        let catalog = MovieCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.movies(), &[matrix()]);
        assert_eq!(catalog.critics()[0].age, 60);
        assert_eq!(catalog.ratings()[0].score, 8.0);
        assert!(catalog.directors().is_empty());
        assert!(catalog.genres().is_empty());
    }

    #[test]
    fn test_json_round_trip_uses_english_keys() {
        let catalog = MovieCatalog::new(vec![matrix()], vec![], vec![], vec![], vec![]);
        let json = catalog.to_json_string().unwrap();
        assert!(json.contains("\"movies\""));
        assert!(json.contains("\"location\""));
        let parsed = MovieCatalog::from_json_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_from_json_str_malformed() {
        let result = MovieCatalog::from_json_str("{\"movies\": [{\"id\": \"x\"}]}");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let catalog = MovieCatalog::new(vec![matrix()], vec![], vec![], vec![], vec![]);
        std::fs::write(&path, catalog.to_json_string().unwrap()).unwrap();

        let loaded = MovieCatalog::from_json(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_from_json_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = MovieCatalog::from_json(dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_from_json_wrong_extension() {
        let result = MovieCatalog::from_json("catalog.csv");
        assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
    }
}
