//! Typed values accepted by the search builders.
//!
//! Names and titles render as text terms, MBIDs render verbatim, and dates
//! render as quoted ISO days. Wrapping a plain string in one of these types
//! only documents intent; it never changes how the text is escaped.

use std::{fmt::Display, time::SystemTime};

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::lucene::{term::impl_term_value, TermValue};

/// Declares string newtypes that render through the given [`TermValue`] variant.
macro_rules! string_value {
    ($variant:ident => $($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            pub struct $name(String);

            impl $name {
                pub fn new<S: Into<String>>(value: S) -> Self {
                    Self(value.into())
                }

                pub fn value(&self) -> &str {
                    &self.0
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }

            impl From<String> for $name {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }

            impl Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl_term_value! {
                $name => |v| TermValue::$variant(v.0);
            }
        )*
    };
}

string_value! { Text =>
    ArtistName,
    /// Title of a release or release group.
    AlbumTitle,
    AreaName,
    EventName,
    InstrumentName,
    LabelName,
    PlaceName,
    RecordingTitle,
    SeriesName,
    TrackTitle,
    WorkName,
    /// A disc ID calculated from a CD's table of contents.
    DiscId,
    /// International Standard Musical Work Code.
    Iswc,
    /// International Standard Recording Code.
    Isrc,
}

string_value! { Id =>
    /// An MBID of an entity of any kind.
    Mbid,
    AreaMbid,
    ArtistMbid,
    EventMbid,
    GenreMbid,
    InstrumentMbid,
    LabelMbid,
    PlaceMbid,
    RecordingMbid,
    ReleaseMbid,
    ReleaseGroupMbid,
    SeriesMbid,
    TrackMbid,
    UrlMbid,
    WorkMbid,
}

macro_rules! mbid_from_uuid {
    ($($name:ident),* $(,)?) => {
        $(
            impl From<Uuid> for $name {
                fn from(value: Uuid) -> Self {
                    Self(value.hyphenated().to_string())
                }
            }
        )*
    };
}

mbid_from_uuid!(
    Mbid,
    AreaMbid,
    ArtistMbid,
    EventMbid,
    GenreMbid,
    InstrumentMbid,
    LabelMbid,
    PlaceMbid,
    RecordingMbid,
    ReleaseMbid,
    ReleaseGroupMbid,
    SeriesMbid,
    TrackMbid,
    UrlMbid,
    WorkMbid,
);

/// The year part of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(pub i32);

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Year(value)
    }
}

impl From<NaiveDate> for Year {
    fn from(value: NaiveDate) -> Self {
        Year(value.year())
    }
}

/// A date search key accepts a bare year, a calendar day, or a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartialDate {
    Year(Year),
    Date(NaiveDate),
    Instant(SystemTime),
}

impl From<Year> for PartialDate {
    fn from(value: Year) -> Self {
        PartialDate::Year(value)
    }
}

impl From<NaiveDate> for PartialDate {
    fn from(value: NaiveDate) -> Self {
        PartialDate::Date(value)
    }
}

impl From<SystemTime> for PartialDate {
    fn from(value: SystemTime) -> Self {
        PartialDate::Instant(value)
    }
}

impl_term_value! {
    Year => |v| TermValue::Year(v.0);
    PartialDate => |v| match v {
        PartialDate::Year(year) => TermValue::Year(year.0),
        PartialDate::Date(date) => TermValue::Date(date),
        PartialDate::Instant(instant) => TermValue::Instant(instant),
    };
}

/// <https://musicbrainz.org/doc/Artist#Type>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumIter)]
pub enum ArtistType {
    Person,
    Group,
    Orchestra,
    Choir,
    Character,
    Other,
}

/// Primary and secondary release group types,
/// <https://musicbrainz.org/doc/Release_Group/Type>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumIter)]
pub enum ReleaseGroupType {
    Album,
    Single,
    #[strum(serialize = "EP")]
    Ep,
    Broadcast,
    Other,
    Compilation,
    Soundtrack,
    Spokenword,
    Interview,
    Audiobook,
    #[strum(serialize = "Audio drama")]
    AudioDrama,
    Live,
    Remix,
    #[strum(serialize = "DJ-mix")]
    DjMix,
    #[strum(serialize = "Mixtape/Street")]
    MixtapeStreet,
    Demo,
    #[strum(serialize = "Field recording")]
    FieldRecording,
}

/// <https://musicbrainz.org/doc/Release#Status>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumIter)]
pub enum ReleaseStatus {
    Official,
    Promotion,
    Bootleg,
    #[strum(serialize = "Pseudo-Release")]
    PseudoRelease,
    Withdrawn,
    Cancelled,
}

impl_term_value! {
    ArtistType => |v| TermValue::Text(v.as_ref().to_string());
    ReleaseGroupType => |v| TermValue::Text(v.as_ref().to_string());
    ReleaseStatus => |v| TermValue::Text(v.as_ref().to_string());
}
