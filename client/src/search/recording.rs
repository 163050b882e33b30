use strum::{AsRefStr, EnumIter};

use crate::{
    entity::Entity,
    search::SearchField,
    types::{
        AlbumTitle, ArtistMbid, ArtistName, Isrc, PartialDate, RecordingMbid, RecordingTitle,
        ReleaseGroupMbid, ReleaseGroupType, ReleaseMbid, ReleaseStatus, TrackMbid,
    },
};

/// Search keys of the recording index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum RecordingField {
    Alias,
    #[strum(serialize = "arid")]
    ArtistId,
    Artist,
    ArtistName,
    Comment,
    Country,
    CreditName,
    Date,
    #[strum(serialize = "dur")]
    Duration,
    FirstReleaseDate,
    Format,
    Isrc,
    Number,
    Position,
    PrimaryType,
    #[strum(serialize = "qdur")]
    QuantizedDuration,
    Recording,
    RecordingAccent,
    Release,
    #[strum(serialize = "reid")]
    ReleaseId,
    #[strum(serialize = "rgid")]
    ReleaseGroupId,
    #[strum(serialize = "rid")]
    RecordingId,
    SecondaryType,
    Status,
    Tag,
    #[strum(serialize = "tid")]
    TrackId,
    #[strum(serialize = "tnum")]
    TrackNumber,
    #[strum(serialize = "tracks")]
    TrackCount,
    #[strum(serialize = "tracksrelease")]
    ReleaseTrackCount,
    Video,
    /// Searches the recording title.
    #[strum(serialize = "")]
    Default,
}

impl SearchField for RecordingField {}

entity_search! {
    /// Builds recording searches.
    ///
    /// Durations are in milliseconds. The quantized duration is the duration
    /// divided by 2000, which lets a search tolerate small differences:
    ///
    /// ```
    /// use brainz_client::prelude::*;
    ///
    /// let query = RecordingSearch::compose(|s| {
    ///     s.recording("Locomotive Breath");
    ///     s.quantized_duration(423_000 / 2000);
    /// });
    /// assert_eq!(query, "recording:\"Locomotive Breath\" qdur:211");
    /// ```
    RecordingSearch(Entity::Recording, RecordingField)
}

impl RecordingSearch {
    search_ops! { RecordingField;
        /// (part of) any alias attached to the recording, diacritics are ignored
        alias, alias_with => Alias: String;
        artist_id, artist_id_with => ArtistId: ArtistMbid;
        /// (part of) the combined credited artist name for the recording,
        /// including join phrases
        artist, artist_with => Artist: ArtistName;
        /// (part of) the name of any of the recording artists
        artist_name, artist_name_with => ArtistName: ArtistName;
        comment, comment_with => Comment: String;
        /// the 2-letter code for the country any release of this recording was
        /// released in
        country, country_with => Country: String;
        credit_name, credit_name_with => CreditName: ArtistName;
        /// the release date of any release including this recording
        date, date_with => Date: PartialDate;
        /// the recording duration in milliseconds
        duration, duration_with => Duration: i64;
        first_release_date, first_release_date_with => FirstReleaseDate: PartialDate;
        /// the format of any medium including this recording, insensitive to case,
        /// spaces and separators
        format, format_with => Format: String;
        isrc, isrc_with => Isrc: Isrc;
        /// the free-text number of the track on any medium including this
        /// recording, e.g. `A4`
        number, number_with => Number: String;
        /// the position inside its release of any medium including this recording,
        /// starting from 1
        position, position_with => Position: i64;
        primary_type, primary_type_with => PrimaryType: ReleaseGroupType;
        quantized_duration, quantized_duration_with => QuantizedDuration: i64;
        /// (part of) the recording's name, or the name of a track connected to
        /// this recording, diacritics are ignored
        recording, recording_with => Recording: RecordingTitle;
        recording_accent, recording_accent_with => RecordingAccent: String;
        /// (part of) the title of any release including this recording
        release, release_with => Release: AlbumTitle;
        release_id, release_id_with => ReleaseId: ReleaseMbid;
        release_group_id, release_group_id_with => ReleaseGroupId: ReleaseGroupMbid;
        recording_id, recording_id_with => RecordingId: RecordingMbid;
        secondary_type, secondary_type_with => SecondaryType: ReleaseGroupType;
        status, status_with => Status: ReleaseStatus;
        tag, tag_with => Tag: String;
        track_id, track_id_with => TrackId: TrackMbid;
        /// the position of the track on any medium including this recording,
        /// starting from 1
        track_number, track_number_with => TrackNumber: i64;
        /// the number of tracks on any medium including this recording
        track_count, track_count_with => TrackCount: i64;
        /// the number of tracks on any release, as a whole, including this
        /// recording
        release_track_count, release_track_count_with => ReleaseTrackCount: i64;
        /// whether the recording is a video recording
        video, video_with => Video: bool;
        default_field, default_field_with => Default: String;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{
        lucene::Term,
        search::{test_support::assert_covers_all_keys, EntitySearch, TermBuilder},
    };

    #[test]
    fn test_search_keys() {
        assert_eq!(RecordingField::iter().count(), 31);
        assert_eq!(RecordingField::ReleaseTrackCount.value(), "tracksrelease");
        assert_eq!(RecordingField::RecordingId.value(), "rid");
    }

    #[test]
    fn test_all_term_functions_cover_all_fields() {
        let z = |_: TermBuilder| Term::single("z");
        let query = RecordingSearch::compose(|s| {
            s.alias_with(z);
            s.artist_id_with(z);
            s.artist_with(z);
            s.artist_name_with(z);
            s.comment_with(z);
            s.country_with(z);
            s.credit_name_with(z);
            s.date_with(z);
            s.duration_with(z);
            s.first_release_date_with(z);
            s.format_with(z);
            s.isrc_with(z);
            s.number_with(z);
            s.position_with(z);
            s.primary_type_with(z);
            s.quantized_duration_with(z);
            s.recording_with(z);
            s.recording_accent_with(z);
            s.release_with(z);
            s.release_id_with(z);
            s.release_group_id_with(z);
            s.recording_id_with(z);
            s.secondary_type_with(z);
            s.status_with(z);
            s.tag_with(z);
            s.track_id_with(z);
            s.track_number_with(z);
            s.track_count_with(z);
            s.release_track_count_with(z);
            s.video_with(z);
            s.default_field_with(z);
        });
        assert_covers_all_keys::<RecordingField>(&query, "z");
    }

    #[test]
    fn test_value_functions() {
        let release_day = NaiveDate::from_ymd_opt(1971, 3, 19).unwrap();
        let query = RecordingSearch::compose(|s| {
            s.recording("Wind-Up");
            s.isrc("GBAYE7100011");
            s.date(release_day);
            s.video(false);
        });
        assert_eq!(
            query,
            "recording:Wind\\-Up isrc:GBAYE7100011 date:\"1971-03-19\" video:false"
        );
    }

    #[test]
    fn test_duration_range() {
        let query = RecordingSearch::compose(|s| {
            s.duration_with(|t| t.inclusive(200_000, 260_000));
        });
        assert_eq!(query, "dur:[200000 TO 260000]");
    }

    #[test]
    fn test_raw_wildcard_title() {
        let query = RecordingSearch::compose(|s| {
            s.recording_with(|t| t.raw("locomo*"));
        });
        assert_eq!(query, "recording:locomo*");
    }
}
