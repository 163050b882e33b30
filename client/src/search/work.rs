use strum::{AsRefStr, EnumIter};

use crate::{
    entity::Entity,
    search::SearchField,
    types::{ArtistMbid, ArtistName, Iswc, RecordingMbid, RecordingTitle, WorkMbid, WorkName},
};

/// Search keys of the work index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum WorkField {
    Alias,
    #[strum(serialize = "arid")]
    ArtistId,
    Artist,
    Comment,
    #[strum(serialize = "")]
    Default,
    Iswc,
    #[strum(serialize = "lang")]
    Language,
    Recording,
    #[strum(serialize = "recording_count")]
    RecordingCount,
    #[strum(serialize = "rid")]
    RecordingId,
    Tag,
    Type,
    #[strum(serialize = "wid")]
    WorkId,
    Work,
    WorkAccent,
}

impl SearchField for WorkField {}

entity_search! {
    /// Builds work searches.
    WorkSearch(Entity::Work, WorkField)
}

impl WorkSearch {
    search_ops! { WorkField;
        alias, alias_with => Alias: String;
        /// the MBID of an artist related to the work, e.g. a composer or lyricist
        artist_id, artist_id_with => ArtistId: ArtistMbid;
        /// (part of) the name of an artist related to the work
        artist, artist_with => Artist: ArtistName;
        comment, comment_with => Comment: String;
        default_field, default_field_with => Default: String;
        /// any ISWC associated with the work
        iswc, iswc_with => Iswc: Iswc;
        /// the ISO 639-3 code for any of the languages of the work's lyrics
        language, language_with => Language: String;
        /// (part of) the title of a recording related to the work
        recording, recording_with => Recording: RecordingTitle;
        /// the number of recordings related to the work
        recording_count, recording_count_with => RecordingCount: i64;
        recording_id, recording_id_with => RecordingId: RecordingMbid;
        tag, tag_with => Tag: String;
        work_type, work_type_with => Type: String;
        work_id, work_id_with => WorkId: WorkMbid;
        /// (part of) the work's title, diacritics are ignored
        work, work_with => Work: WorkName;
        work_accent, work_accent_with => WorkAccent: String;
    }
}
