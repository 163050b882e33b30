use strum::{AsRefStr, EnumIter};

use crate::{
    entity::Entity,
    search::SearchField,
    types::{AlbumTitle, ArtistName, DiscId, PartialDate},
};

/// Search keys of the CD stub index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CdStubField {
    Added,
    Artist,
    Barcode,
    Comment,
    DiscId,
    Title,
    #[strum(serialize = "tracks")]
    TrackCount,
    /// Searches artist and title at once.
    #[strum(serialize = "")]
    Default,
}

impl SearchField for CdStubField {}

entity_search! {
    /// Builds searches for CD stubs, the unverified disc listings submitted for
    /// discs that do not match any release.
    CdStubSearch(Entity::CdStub, CdStubField)
}

impl CdStubSearch {
    search_ops! { CdStubField;
        /// the date the CD stub was added
        added, added_with => Added: PartialDate;
        artist, artist_with => Artist: ArtistName;
        barcode, barcode_with => Barcode: String;
        comment, comment_with => Comment: String;
        /// the CD stub's disc ID
        disc_id, disc_id_with => DiscId: DiscId;
        title, title_with => Title: AlbumTitle;
        /// the number of tracks on the CD stub
        track_count, track_count_with => TrackCount: i64;
        default_field, default_field_with => Default: String;
    }
}
