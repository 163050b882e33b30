//! Typed builders for the MusicBrainz Lucene search syntax, plus a thin blocking client
//! that sends the rendered query string to the web service.
//!
//! ```
//! use brainz_client::prelude::*;
//!
//! let query = ReleaseGroupSearch::compose(|s| {
//!     let artist = s.artist("The Beatles");
//!     let album = s.release_group("Revolver");
//!     s.and(artist, album);
//! });
//! assert_eq!(query, r#"(artist:"The Beatles" AND releasegroup:Revolver)"#);
//! ```

// Load before other modules which depend on macros in here.
#[macro_use]
mod log;

pub use crate::http::{Client, Paging};
pub use crate::responses::*;

pub mod entity;
pub mod http;
pub mod lucene;
pub mod responses;
pub mod search;
pub mod types;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("Reqwest error: {0}")]
    Reqwest(reqwest::Error),
    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Invalid paging: {0}")]
    InvalidPaging(String),
    #[error("Refusing to send an empty search query")]
    EmptyQuery,
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Everything needed to compose a search in one import.
pub mod prelude {
    pub use crate::entity::Entity;
    pub use crate::lucene::{Field, FieldId, Query, Render, Term, TermValue};
    pub use crate::search::{
        AnnotationSearch, AreaSearch, ArtistSearch, CdStubSearch, EntitySearch, EventSearch,
        InstrumentSearch, LabelSearch, PlaceSearch, RecordingSearch, ReleaseGroupSearch,
        ReleaseSearch, SearchField, SeriesSearch, TagSearch, TermBuilder, WorkSearch,
    };
    pub use crate::types::*;
}
