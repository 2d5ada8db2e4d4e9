//! Integration tests for cinemateca.

#![allow(clippy::float_cmp, clippy::unwrap_used)]

use cinemateca::{
    datasets::sample, movies_to_batch, Error, MovieCatalog, QueryService, EXCELLENT_SCORE,
};

const INDIANA: &str = "Indiana Jones y los cazadores del arca perdida";

fn names<'a>(movies: impl IntoIterator<Item = &'a cinemateca::Movie>) -> Vec<&'a str> {
    movies.into_iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn test_sample_average_release_year() {
    let catalog = sample();
    let service = QueryService::new(&catalog);

    let years: Vec<f64> = catalog.movies().iter().map(|m| f64::from(m.year)).collect();
    let expected = years.iter().sum::<f64>() / years.len() as f64;
    assert_eq!(service.average_release_year(), expected);
    assert_eq!(service.average_release_year(), 2000.0);
}

#[test]
fn test_sample_movies_above_seven() {
    let catalog = sample();
    let rated = QueryService::new(&catalog)
        .movies_with_average_rating_above(7.0)
        .unwrap();

    // "Origen" averages exactly 7.0 and is excluded.
    assert_eq!(
        names(rated.iter().map(|r| &r.movie)),
        vec!["Back to the Future", "Matrix"]
    );
    assert_eq!(rated[0].average_rating, 8.5);
    assert!((rated[1].average_rating - 26.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_sample_movies_by_director() {
    let catalog = sample();
    let service = QueryService::new(&catalog);

    let spielberg = service.movies_by_director("Steven Spielberg").unwrap();
    assert_eq!(names(&spielberg), vec![INDIANA]);

    let lilly = service.movies_by_director("Lilly Wachowski").unwrap();
    assert_eq!(names(&lilly), vec!["Matrix"]);

    let err = service.movies_by_director("steven spielberg").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_sample_average_rating_for_movie() {
    let catalog = sample();
    let service = QueryService::new(&catalog);
    assert_eq!(service.average_rating_for_movie(1), 8.5);
    assert_eq!(service.average_rating_for_movie(3), 6.0);
    assert!(service.average_rating_for_movie(5).is_nan());
}

#[test]
fn test_sample_excellent_ratings() {
    let catalog = sample();
    let movies = QueryService::new(&catalog)
        .movies_with_excellent_rating()
        .unwrap();

    let qualifying = catalog
        .ratings()
        .iter()
        .filter(|r| r.score >= EXCELLENT_SCORE)
        .count();
    assert_eq!(movies.len(), qualifying);
    assert_eq!(
        names(&movies),
        vec!["Back to the Future", "Matrix", "Matrix"]
    );
}

#[test]
fn test_sample_expand_indiana_jones() {
    let catalog = sample();
    let before = catalog.clone();
    let expanded = QueryService::new(&catalog)
        .expand_movie_details(INDIANA)
        .unwrap();

    assert_eq!(expanded.id, 3);
    assert_eq!(expanded.location.country, "Camboya");
    let directors: Vec<&str> = expanded.directors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(directors, vec!["Steven Spielberg", "George Lucas"]);
    let genres: Vec<&str> = expanded.genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(genres, vec!["Accion", "Aventura"]);

    assert_eq!(expanded.reviews.len(), catalog.ratings_for(3).count());
    assert_eq!(expanded.reviews[0].critic.name, "Suzana Mendez");
    assert_eq!(expanded.reviews[0].critic.age, 33);
    assert_eq!(expanded.reviews[0].score, 5.0);
    assert_eq!(expanded.reviews[1].critic.name, "Alina Robles");
    assert_eq!(expanded.reviews[1].score, 7.0);

    assert_eq!(catalog, before);
}

#[test]
fn test_expand_unrated_movie_has_no_reviews() {
    let catalog = sample();
    let expanded = QueryService::new(&catalog)
        .expand_movie_details("Forrest Gump")
        .unwrap();
    assert!(expanded.reviews.is_empty());
    assert_eq!(expanded.directors[0].name, "Robert Zemeckis");
}

#[test]
fn test_expand_unknown_movie() {
    let catalog = sample();
    let err = QueryService::new(&catalog)
        .expand_movie_details("Volver al futuro")
        .unwrap_err();
    assert!(matches!(err, Error::MovieNotFound { ref name } if name == "Volver al futuro"));
}

#[test]
fn test_expanded_movie_json_shape() {
    let catalog = sample();
    let expanded = QueryService::new(&catalog)
        .expand_movie_details(INDIANA)
        .unwrap();
    let json = serde_json::to_value(&expanded).unwrap();

    assert_eq!(json["directors"][0]["id"], 5);
    assert_eq!(json["directors"][0]["name"], "Steven Spielberg");
    assert_eq!(json["reviews"][0]["critic"]["country"], "Argentina");
    assert_eq!(json["reviews"][1]["score"], 7.0);
}

#[test]
fn test_original_layout_document() {
    let json = r#"{
        "peliculas": [
            {"id": 1, "nombre": "Matrix", "anio": 1999,
             "direccionSetFilmacion": {"calle": "Av. Roca", "numero": 3023, "pais": "Argentina"},
             "directores": [1], "generos": [1]}
        ],
        "directores": [{"id": 1, "nombre": "Lana Wachowski"}],
        "generos": [{"id": 1, "nombre": "Accion"}],
        "criticos": [
            {"id": 1, "nombre": "Pepe Perez", "edad": 60, "pais": "Espania"},
            {"id": 2, "nombre": "Alina Robles", "edad": 21, "pais": "Argentina"}
        ],
        "calificaciones": [
            {"pelicula": 1, "critico": 1, "puntuacion": 9},
            {"pelicula": 1, "critico": 2, "puntuacion": 10}
        ]
    }"#;
    let catalog = MovieCatalog::from_json_str(json).unwrap();
    let service = QueryService::new(&catalog);

    assert_eq!(service.average_rating_for_movie(1), 9.5);
    assert_eq!(service.movies_with_excellent_rating().unwrap().len(), 2);
    assert_eq!(
        service.expand_movie_details("Matrix").unwrap().reviews.len(),
        2
    );
}

#[test]
fn test_empty_catalog_is_degenerate_not_an_error() {
    let catalog = MovieCatalog::default();
    let service = QueryService::new(&catalog);

    assert!(service.average_release_year().is_nan());
    assert!(service.average_rating_for_movie(1).is_nan());
    assert!(service.movies_with_average_rating_above(0.0).unwrap().is_empty());
    assert!(service.movies_with_excellent_rating().unwrap().is_empty());
    assert!(service.movies_by_director("anyone").is_err());
    assert!(service.expand_movie_details("anything").is_err());
}

#[test]
fn test_catalog_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.json");
    std::fs::write(&path, sample().to_json_string().unwrap()).unwrap();

    let loaded = MovieCatalog::from_json(&path).unwrap();
    assert_eq!(loaded, sample());
    let batch = movies_to_batch(loaded.movies()).unwrap();
    assert_eq!(batch.num_rows(), 5);
}
