//! Sample movie catalog
//!
//! Five movies, six directors, six genres, four critics and nine ratings.
//! One movie ("Forrest Gump") has no ratings, so averages over it are
//! degenerate.

use crate::catalog::{Critic, Director, Genre, Location, Movie, MovieCatalog, Rating};

/// Short description of the embedded sample catalog.
pub const SAMPLE_DESCRIPTION: &str = "Sample movie catalog: 5 movies, 6 directors, 6 genres, \
                                      4 critics and 9 ratings on a 0-10 scale.";

/// Load the embedded sample catalog
///
/// # Example
///
/// ```
/// use cinemateca::datasets::sample;
///
/// let catalog = sample();
/// assert_eq!(catalog.movies().len(), 5);
/// assert_eq!(catalog.ratings().len(), 9);
/// ```
#[must_use]
pub fn sample() -> MovieCatalog {
    MovieCatalog::new(movies(), directors(), genres(), critics(), ratings())
}

fn movie(
    id: u32,
    name: &str,
    year: i32,
    (street, number, country): (&str, u32, &str),
    directors: &[u32],
    genres: &[u32],
) -> Movie {
    Movie {
        id,
        name: name.to_string(),
        year,
        location: Location {
            street: street.to_string(),
            number,
            country: country.to_string(),
        },
        directors: directors.to_vec(),
        genres: genres.to_vec(),
    }
}

fn movies() -> Vec<Movie> {
    vec![
        movie(
            1,
            "Back to the Future",
            1985,
            ("Av. Siempre viva", 2043, "Colombia"),
            &[1],
            &[1, 2, 6],
        ),
        movie(
            2,
            "Matrix",
            1999,
            ("Av. Roca", 3023, "Argentina"),
            &[2, 3],
            &[1, 2],
        ),
        movie(
            3,
            "Indiana Jones y los cazadores del arca perdida",
            2012,
            ("Av. Roca", 3023, "Camboya"),
            &[5, 6],
            &[2, 6],
        ),
        movie(
            4,
            "Origen",
            2010,
            ("Calle Mayor", 120, "Francia"),
            &[4],
            &[1, 5],
        ),
        movie(
            5,
            "Forrest Gump",
            1994,
            ("Greenbow Road", 12, "Estados Unidos"),
            &[1],
            &[3, 4],
        ),
    ]
}

fn directors() -> Vec<Director> {
    [
        (1, "Robert Zemeckis"),
        (2, "Lana Wachowski"),
        (3, "Lilly Wachowski"),
        (4, "Christopher Nolan"),
        (5, "Steven Spielberg"),
        (6, "George Lucas"),
    ]
    .into_iter()
    .map(|(id, name)| Director {
        id,
        name: name.to_string(),
    })
    .collect()
}

fn genres() -> Vec<Genre> {
    [
        (1, "Ciencia Ficcion"),
        (2, "Accion"),
        (3, "Drama"),
        (4, "Comedia"),
        (5, "Suspenso"),
        (6, "Aventura"),
    ]
    .into_iter()
    .map(|(id, name)| Genre {
        id,
        name: name.to_string(),
    })
    .collect()
}

fn critics() -> Vec<Critic> {
    [
        (1, "Pepe Perez", 60, "Espania"),
        (2, "Alina Robles", 21, "Argentina"),
        (3, "Suzana Mendez", 33, "Argentina"),
        (4, "Pedro Sanchez", 45, "Mexico"),
    ]
    .into_iter()
    .map(|(id, name, age, country)| Critic {
        id,
        name: name.to_string(),
        age,
        country: country.to_string(),
    })
    .collect()
}

fn ratings() -> Vec<Rating> {
    // (movie, critic, score)
    [
        (1, 1, 8.0),
        (1, 2, 9.0),
        (2, 1, 10.0),
        (2, 2, 9.0),
        (2, 4, 7.0),
        (3, 3, 5.0),
        (3, 2, 7.0),
        (4, 4, 6.0),
        (4, 1, 8.0),
    ]
    .into_iter()
    .map(|(movie, critic, score)| Rating {
        movie,
        critic,
        score,
    })
    .collect()
}
