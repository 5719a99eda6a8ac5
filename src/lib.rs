//! Seeded fake column data for seeding test databases.
//!
//! Each run generates one column kind (`email`, `siret`, ...) as
//! `id<TAB>value` rows.
//!
//! ```rust
//! use populate::{ColumnKind, Locale, Populator, Seed};
//!
//! let mut populator = Populator::new(Locale::EnUs, Some(&Seed::from(42)));
//! let rows: Vec<_> = populator
//!     .generate(ColumnKind::FirstName, 3)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(rows.len(), 3);
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod generator;
pub mod locale;
pub mod seed;
pub mod writer;

pub use column::ColumnKind;
pub use config::{PopulateConfig, PopulateConfigBuilder};
pub use error::{PopulateError, Result};
pub use generator::{FakeSource, Populator, Row, Rows};
pub use locale::Locale;
pub use seed::Seed;
pub use writer::{Escape, TsvWriter};
