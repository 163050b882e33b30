use strum::{AsRefStr, EnumIter};

use crate::{
    entity::Entity,
    search::SearchField,
    types::{
        AlbumTitle, ArtistMbid, ArtistName, PartialDate, ReleaseGroupMbid, ReleaseGroupType,
        ReleaseMbid, ReleaseStatus,
    },
};

/// Search keys of the release group index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ReleaseGroupField {
    Alias,
    #[strum(serialize = "arid")]
    ArtistId,
    Artist,
    ArtistName,
    Comment,
    CreditName,
    FirstReleaseDate,
    PrimaryType,
    #[strum(serialize = "reid")]
    ReleaseId,
    Release,
    ReleaseGroup,
    ReleaseGroupAccent,
    #[strum(serialize = "releases")]
    ReleaseCount,
    #[strum(serialize = "rgid")]
    ReleaseGroupId,
    SecondaryType,
    Status,
    Tag,
    /// Searches the release group title.
    #[strum(serialize = "")]
    Default,
}

impl SearchField for ReleaseGroupField {}

entity_search! {
    /// Builds release group searches.
    ReleaseGroupSearch(Entity::ReleaseGroup, ReleaseGroupField)
}

impl ReleaseGroupSearch {
    search_ops! { ReleaseGroupField;
        /// (part of) any alias attached to the release group, diacritics are ignored
        alias, alias_with => Alias: String;
        /// the MBID of any of the release group artists
        artist_id, artist_id_with => ArtistId: ArtistMbid;
        /// (part of) the combined credited artist name for the release group,
        /// including join phrases
        artist, artist_with => Artist: ArtistName;
        /// (part of) the name of any of the release group artists
        artist_name, artist_name_with => ArtistName: ArtistName;
        /// (part of) the release group's disambiguation comment
        comment, comment_with => Comment: String;
        /// (part of) the credited name of any of the release group artists on
        /// this particular release group
        credit_name, credit_name_with => CreditName: ArtistName;
        /// the release date of the earliest release in this release group
        first_release_date, first_release_date_with => FirstReleaseDate: PartialDate;
        primary_type, primary_type_with => PrimaryType: ReleaseGroupType;
        /// the MBID of any of the releases in the release group
        release_id, release_id_with => ReleaseId: ReleaseMbid;
        /// (part of) the title of any of the releases in the release group
        release, release_with => Release: AlbumTitle;
        /// (part of) the release group's title, diacritics are ignored
        release_group, release_group_with => ReleaseGroup: AlbumTitle;
        /// (part of) the release group's title, with the specified diacritics
        release_group_accent, release_group_accent_with => ReleaseGroupAccent: String;
        /// the number of releases in the release group
        release_count, release_count_with => ReleaseCount: i64;
        release_group_id, release_group_id_with => ReleaseGroupId: ReleaseGroupMbid;
        secondary_type, secondary_type_with => SecondaryType: ReleaseGroupType;
        /// the status of any of the releases in the release group
        status, status_with => Status: ReleaseStatus;
        /// (part of) a tag attached to the release group
        tag, tag_with => Tag: String;
        default_field, default_field_with => Default: String;
    }
}
