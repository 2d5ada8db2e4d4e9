//! Query commands and their table/JSON output.

use std::path::Path;

use arrow::{array::RecordBatch, util::pretty::print_batches};
use serde::Serialize;

use crate::{
    datasets::sample, movies_to_batch, rated_movies_to_batch, reviews_to_batch, MovieCatalog,
    MovieId, QueryService,
};

/// Load the catalog from `path`, or the embedded sample when absent.
pub(crate) fn load_catalog(path: Option<&Path>) -> crate::Result<MovieCatalog> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog");
            MovieCatalog::from_json(path)
        }
        None => Ok(sample()),
    }
}

/// Render an average, showing degenerate averages as `n/a`.
pub(crate) fn format_average(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.2}", value)
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> crate::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table(batch: &RecordBatch, empty_message: &str) -> crate::Result<()> {
    if batch.num_rows() == 0 {
        println!("{}", empty_message);
        return Ok(());
    }
    print_batches(std::slice::from_ref(batch)).map_err(crate::Error::Arrow)
}

#[derive(Serialize)]
struct CatalogInfo {
    movies: usize,
    directors: usize,
    genres: usize,
    critics: usize,
    ratings: usize,
}

/// Display catalog collection sizes.
pub(crate) fn cmd_info(catalog: &MovieCatalog, json: bool) -> crate::Result<()> {
    let info = CatalogInfo {
        movies: catalog.movies().len(),
        directors: catalog.directors().len(),
        genres: catalog.genres().len(),
        critics: catalog.critics().len(),
        ratings: catalog.ratings().len(),
    };
    if json {
        return print_json(&info);
    }
    println!("Movies: {}", info.movies);
    println!("Directors: {}", info.directors);
    println!("Genres: {}", info.genres);
    println!("Critics: {}", info.critics);
    println!("Ratings: {}", info.ratings);
    Ok(())
}

/// Display the average release year.
pub(crate) fn cmd_average_year(catalog: &MovieCatalog, json: bool) -> crate::Result<()> {
    let average = QueryService::new(catalog).average_release_year();
    if json {
        return print_json(&serde_json::json!({ "average_release_year": average }));
    }
    println!("Average release year: {}", format_average(average));
    Ok(())
}

/// Display movies whose average score is above `threshold`.
pub(crate) fn cmd_above(catalog: &MovieCatalog, threshold: f64, json: bool) -> crate::Result<()> {
    let rated = QueryService::new(catalog).movies_with_average_rating_above(threshold)?;
    if json {
        return print_json(&rated);
    }
    print_table(
        &rated_movies_to_batch(&rated)?,
        &format!("No movies with an average above {}", threshold),
    )
}

/// Display the movies of a director.
pub(crate) fn cmd_director(catalog: &MovieCatalog, name: &str, json: bool) -> crate::Result<()> {
    let movies = QueryService::new(catalog).movies_by_director(name)?;
    if json {
        return print_json(&movies);
    }
    print_table(
        &movies_to_batch(&movies)?,
        &format!("No movies directed by {}", name),
    )
}

/// Display the average score of a movie.
pub(crate) fn cmd_movie_rating(
    catalog: &MovieCatalog,
    id: MovieId,
    json: bool,
) -> crate::Result<()> {
    let average = QueryService::new(catalog).average_rating_for_movie(id);
    if json {
        return print_json(&serde_json::json!({ "movie": id, "average_rating": average }));
    }
    println!("Average rating for movie {}: {}", id, format_average(average));
    Ok(())
}

/// Display one movie per excellent rating.
pub(crate) fn cmd_excellent(
    catalog: &MovieCatalog,
    min_score: f64,
    json: bool,
) -> crate::Result<()> {
    let movies = QueryService::new(catalog)
        .excellent_score(min_score)
        .movies_with_excellent_rating()?;
    if json {
        return print_json(&movies);
    }
    print_table(
        &movies_to_batch(&movies)?,
        &format!("No ratings of {} or more", min_score),
    )
}

/// Display a movie with its directors, genres and reviews.
pub(crate) fn cmd_expand(catalog: &MovieCatalog, name: &str, json: bool) -> crate::Result<()> {
    let movie = QueryService::new(catalog).expand_movie_details(name)?;
    if json {
        return print_json(&movie);
    }

    let names = |items: Vec<&str>| items.join(", ");
    println!("{} ({})", movie.name, movie.year);
    println!(
        "Filmed at: {} {}, {}",
        movie.location.street, movie.location.number, movie.location.country
    );
    println!(
        "Directors: {}",
        names(movie.directors.iter().map(|d| d.name.as_str()).collect())
    );
    println!(
        "Genres: {}",
        names(movie.genres.iter().map(|g| g.name.as_str()).collect())
    );
    print_table(&reviews_to_batch(&movie)?, "No reviews")
}
