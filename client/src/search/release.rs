use strum::{AsRefStr, EnumIter};

use crate::{
    entity::Entity,
    search::SearchField,
    types::{
        AlbumTitle, ArtistMbid, ArtistName, LabelMbid, LabelName, PartialDate, ReleaseGroupMbid,
        ReleaseGroupType, ReleaseMbid, ReleaseStatus,
    },
};

/// Search keys of the release index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ReleaseField {
    Alias,
    #[strum(serialize = "arid")]
    ArtistId,
    Artist,
    ArtistName,
    Asin,
    Barcode,
    #[strum(serialize = "catno")]
    CatalogNumber,
    Comment,
    Country,
    CreditName,
    Date,
    #[strum(serialize = "discids")]
    DiscIdCount,
    #[strum(serialize = "discidsmedium")]
    MediumDiscIdCount,
    Format,
    #[strum(serialize = "laid")]
    LabelId,
    Label,
    #[strum(serialize = "lang")]
    Language,
    #[strum(serialize = "mediums")]
    MediumCount,
    #[strum(serialize = "tracksmedium")]
    MediumTrackCount,
    Packaging,
    PrimaryType,
    Quality,
    #[strum(serialize = "reid")]
    ReleaseId,
    Release,
    ReleaseAccent,
    #[strum(serialize = "rgid")]
    ReleaseGroupId,
    Script,
    SecondaryType,
    Status,
    Tag,
    #[strum(serialize = "tracks")]
    TrackCount,
    /// Searches the release title.
    #[strum(serialize = "")]
    Default,
}

impl SearchField for ReleaseField {}

entity_search! {
    /// Builds release searches.
    ReleaseSearch(Entity::Release, ReleaseField)
}

impl ReleaseSearch {
    search_ops! { ReleaseField;
        /// (part of) any alias attached to the release, diacritics are ignored
        alias, alias_with => Alias: String;
        artist_id, artist_id_with => ArtistId: ArtistMbid;
        /// (part of) the combined credited artist name for the release,
        /// including join phrases
        artist, artist_with => Artist: ArtistName;
        artist_name, artist_name_with => ArtistName: ArtistName;
        /// an Amazon ASIN for the release
        asin, asin_with => Asin: String;
        /// the barcode for the release
        barcode, barcode_with => Barcode: String;
        /// any catalog number for this release, insensitive to case, spaces and
        /// separators
        catalog_number, catalog_number_with => CatalogNumber: String;
        comment, comment_with => Comment: String;
        /// the 2-letter code for the country the release was released in
        country, country_with => Country: String;
        credit_name, credit_name_with => CreditName: ArtistName;
        /// a release date for the release
        date, date_with => Date: PartialDate;
        /// the total number of disc IDs attached to all mediums on the release
        disc_id_count, disc_id_count_with => DiscIdCount: i64;
        /// the number of disc IDs attached to any one medium on the release
        medium_disc_id_count, medium_disc_id_count_with => MediumDiscIdCount: i64;
        format, format_with => Format: String;
        label_id, label_id_with => LabelId: LabelMbid;
        /// (part of) the name of any of the release labels
        label, label_with => Label: LabelName;
        /// the ISO 639-3 code for the release language
        language, language_with => Language: String;
        medium_count, medium_count_with => MediumCount: i64;
        /// the number of tracks on any one medium on the release
        medium_track_count, medium_track_count_with => MediumTrackCount: i64;
        packaging, packaging_with => Packaging: String;
        primary_type, primary_type_with => PrimaryType: ReleaseGroupType;
        /// the listed quality of the data for the release, one of `low`,
        /// `normal` or `high`
        quality, quality_with => Quality: String;
        release_id, release_id_with => ReleaseId: ReleaseMbid;
        /// (part of) the release's title, diacritics are ignored
        release, release_with => Release: AlbumTitle;
        release_accent, release_accent_with => ReleaseAccent: String;
        release_group_id, release_group_id_with => ReleaseGroupId: ReleaseGroupMbid;
        /// the ISO 15924 code for the release script
        script, script_with => Script: String;
        secondary_type, secondary_type_with => SecondaryType: ReleaseGroupType;
        status, status_with => Status: ReleaseStatus;
        tag, tag_with => Tag: String;
        /// the total number of tracks on the release
        track_count, track_count_with => TrackCount: i64;
        default_field, default_field_with => Default: String;
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{
        lucene::Term,
        search::{test_support::assert_covers_all_keys, EntitySearch, TermBuilder},
    };

    #[test]
    fn test_search_keys() {
        assert_eq!(ReleaseField::iter().count(), 32);
        assert_eq!(ReleaseField::CatalogNumber.value(), "catno");
        assert_eq!(ReleaseField::MediumDiscIdCount.value(), "discidsmedium");
    }

    #[test]
    fn test_all_term_functions_cover_all_fields() {
        let z = |_: TermBuilder| Term::single("z");
        let query = ReleaseSearch::compose(|s| {
            s.alias_with(z);
            s.artist_id_with(z);
            s.artist_with(z);
            s.artist_name_with(z);
            s.asin_with(z);
            s.barcode_with(z);
            s.catalog_number_with(z);
            s.comment_with(z);
            s.country_with(z);
            s.credit_name_with(z);
            s.date_with(z);
            s.disc_id_count_with(z);
            s.medium_disc_id_count_with(z);
            s.format_with(z);
            s.label_id_with(z);
            s.label_with(z);
            s.language_with(z);
            s.medium_count_with(z);
            s.medium_track_count_with(z);
            s.packaging_with(z);
            s.primary_type_with(z);
            s.quality_with(z);
            s.release_id_with(z);
            s.release_with(z);
            s.release_accent_with(z);
            s.release_group_id_with(z);
            s.script_with(z);
            s.secondary_type_with(z);
            s.status_with(z);
            s.tag_with(z);
            s.track_count_with(z);
            s.default_field_with(z);
        });
        assert_covers_all_keys::<ReleaseField>(&query, "z");
    }

    #[test]
    fn test_value_functions() {
        let query = ReleaseSearch::compose(|s| {
            s.release("Aqualung");
            s.barcode("5099902894324");
            s.catalog_number("CDP 32 1044 2");
            s.status(ReleaseStatus::Official);
        });
        assert_eq!(
            query,
            "release:Aqualung barcode:5099902894324 catno:\"CDP 32 1044 2\" status:Official"
        );
    }

    #[test]
    fn test_label_or_label_id() {
        let query = ReleaseSearch::compose(|s| {
            let by_name = s.label("Chrysalis");
            let by_id = s.label_id("3ef2b1e6-6e14-4a77-9bb2-3f4b7b0a8d48");
            s.or(by_name, by_id);
            s.medium_count(1);
        });
        assert_eq!(
            query,
            "(label:Chrysalis OR laid:3ef2b1e6-6e14-4a77-9bb2-3f4b7b0a8d48) mediums:1"
        );
    }
}
