//! cinemateca - Analytical queries over an in-memory movie catalog
//!
//! A catalog holds movies, directors, genres, critics and ratings. The
//! [`QueryService`] borrows a catalog and answers fixed questions about it
//! without ever modifying it.
//!
//! # Design Principles
//!
//! 1. **Read-only** - Queries borrow the catalog and build fresh results
//! 2. **Explicit absence** - Unknown names are named errors, empty averages
//!    are `NaN`
//! 3. **Injected data** - Any catalog can be queried, not only the embedded
//!    one
//!
//! # Quick Start
//!
//! ```
//! use cinemateca::{datasets::sample, QueryService};
//!
//! let catalog = sample();
//! let service = QueryService::new(&catalog);
//!
//! for movie in service.movies_with_excellent_rating().unwrap() {
//!     println!("{} ({})", movie.name, movie.year);
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::cast_precision_loss,
        clippy::too_many_lines
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod catalog;
/// CLI module for command-line interface
#[cfg(feature = "cli")]
pub mod cli;
pub mod datasets;
pub mod error;
pub mod query;
pub mod table;

// Re-exports for convenience
pub use catalog::{
    Critic, CriticId, Director, DirectorId, Genre, GenreId, Location, Movie, MovieCatalog,
    MovieId, Rating,
};
pub use error::{Error, Result};
pub use query::{ExpandedMovie, QueryService, RatedMovie, Review, EXCELLENT_SCORE};
pub use table::{movies_to_batch, rated_movies_to_batch, reviews_to_batch};
