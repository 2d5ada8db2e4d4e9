//! Embedded catalogs
//!
//! Provides one-liner access to a small movie catalog for tutorials,
//! examples, tests and benchmarking. No file or network access is needed.
//!
//! # Example
//!
//! ```
//! use cinemateca::{datasets::sample, QueryService};
//!
//! let catalog = sample();
//! let service = QueryService::new(&catalog);
//! assert_eq!(service.average_release_year(), 2000.0);
//! ```

mod sample;

pub use sample::{sample, SAMPLE_DESCRIPTION};
