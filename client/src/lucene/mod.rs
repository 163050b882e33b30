//! The Lucene query expression core.
//!
//! A search is a [`Query`] of top-level [`Field`]s, each pairing a search key with
//! one or more [`Term`]s, or combining other fields with AND/OR groups and
//! `+`/`-` decorators. Everything renders through [`Render`] into the string the
//! MusicBrainz search endpoint expects, e.g.
//! `artist:"The Beatles" -(secondarytype:Compilation OR secondarytype:Live)`.
//!
//! This is a one-way compiler: nothing here parses query strings.

pub mod field;
pub mod query;
pub mod render;
pub mod term;

pub use field::Field;
pub use query::{FieldId, Query, QueryError};
pub use render::Render;
pub use term::{escape, Term, TermValue, RESERVED};
