use strum::{AsRefStr, EnumIter};

use crate::{
    entity::Entity,
    search::SearchField,
    types::{AreaName, ArtistMbid, ArtistName, ArtistType, PartialDate},
};

/// Search keys of the artist index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ArtistField {
    Alias,
    #[strum(serialize = "primary_alias")]
    PrimaryAlias,
    Area,
    #[strum(serialize = "arid")]
    ArtistId,
    Artist,
    ArtistAccent,
    Begin,
    BeginArea,
    Comment,
    Country,
    End,
    EndArea,
    Ended,
    Gender,
    Ipi,
    Isni,
    SortName,
    Tag,
    Type,
    /// Searches alias, artist and sortname at once.
    #[strum(serialize = "")]
    Default,
}

impl SearchField for ArtistField {}

entity_search! {
    /// Builds artist searches.
    ///
    /// ```
    /// use brainz_client::prelude::*;
    ///
    /// let query = ArtistSearch::compose(|s| {
    ///     s.artist("Jethro Tull");
    ///     s.artist_type(ArtistType::Group);
    /// });
    /// assert_eq!(query, "artist:\"Jethro Tull\" type:Group");
    /// ```
    ArtistSearch(Entity::Artist, ArtistField)
}

impl ArtistSearch {
    search_ops! { ArtistField;
        /// (part of) any alias attached to the artist, diacritics are ignored
        alias, alias_with => Alias: String;
        /// (part of) any primary alias attached to the artist
        primary_alias, primary_alias_with => PrimaryAlias: String;
        /// (part of) the name of the artist's main associated area
        area, area_with => Area: AreaName;
        artist_id, artist_id_with => ArtistId: ArtistMbid;
        /// (part of) the artist's name, diacritics are ignored
        artist, artist_with => Artist: ArtistName;
        /// (part of) the artist's name, with the specified diacritics
        artist_accent, artist_accent_with => ArtistAccent: String;
        /// the artist's begin date
        begin_date, begin_date_with => Begin: PartialDate;
        begin_area, begin_area_with => BeginArea: AreaName;
        /// (part of) the artist's disambiguation comment
        comment, comment_with => Comment: String;
        /// the 2-letter code for the artist's main associated country
        country, country_with => Country: String;
        /// the artist's end date
        end_date, end_date_with => End: PartialDate;
        end_area, end_area_with => EndArea: AreaName;
        /// whether the artist has ended or not
        ended, ended_with => Ended: bool;
        gender, gender_with => Gender: String;
        /// an IPI code associated with the artist
        ipi, ipi_with => Ipi: String;
        /// an ISNI code associated with the artist
        isni, isni_with => Isni: String;
        sort_name, sort_name_with => SortName: String;
        /// (part of) a tag attached to the artist
        tag, tag_with => Tag: String;
        artist_type, artist_type_with => Type: ArtistType;
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
        let keys: Vec<String> = ArtistField::iter().map(|k| k.value().to_string()).collect();
        assert_eq!(keys.len(), 20);
        assert!(keys.iter().any(|k| k == "primary_alias"));
        assert!(keys.iter().any(|k| k == "beginarea"));
        assert!(keys.iter().any(|k| k.is_empty()));
    }

    #[test]
    fn test_all_term_functions_cover_all_fields() {
        let z = |_: TermBuilder| Term::single("z");
        let query = ArtistSearch::compose(|s| {
            s.alias_with(z);
            s.primary_alias_with(z);
            s.area_with(z);
            s.artist_id_with(z);
            s.artist_with(z);
            s.artist_accent_with(z);
            s.begin_date_with(z);
            s.begin_area_with(z);
            s.comment_with(z);
            s.country_with(z);
            s.end_date_with(z);
            s.end_area_with(z);
            s.ended_with(z);
            s.gender_with(z);
            s.ipi_with(z);
            s.isni_with(z);
            s.sort_name_with(z);
            s.tag_with(z);
            s.artist_type_with(z);
            s.default_field_with(z);
        });
        assert_covers_all_keys::<ArtistField>(&query, "z");
    }

    #[test]
    fn test_value_functions() {
        let mbid = "b10bbbfc-cf9e-42e0-be17-e2c3e1d2600d";
        let day = NaiveDate::from_ymd_opt(1969, 12, 31).unwrap();
        assert_eq!(
            ArtistSearch::compose(|s| {
                s.artist("Jethro Tull");
            }),
            "artist:\"Jethro Tull\""
        );
        assert_eq!(ArtistSearch::compose(|s| { s.ended(true); }), "ended:true");
        assert_eq!(
            ArtistSearch::compose(|s| { s.begin_date(day); }),
            "begin:\"1969-12-31\""
        );
        assert_eq!(
            ArtistSearch::compose(|s| { s.artist_id(mbid); }),
            format!("arid:{}", mbid)
        );
        assert_eq!(
            ArtistSearch::compose(|s| { s.default_field("Aqualung"); }),
            "Aqualung"
        );
    }

    #[test]
    fn test_empty_search_renders_empty() {
        assert_eq!(ArtistSearch::default().build(), "");
        assert_eq!(ArtistSearch::compose(|_| {}), "");
    }

    #[test]
    fn test_ranges_under_one_key() {
        let query = ArtistSearch::compose(|s| {
            s.begin_date_with(|t| t.inclusive(1960, 1970));
            let uk = s.country("GB");
            let ended = s.ended(false);
            s.and(uk, ended);
        });
        assert_eq!(query, "begin:[1960 TO 1970] (country:GB AND ended:false)");
    }

    #[test]
    #[should_panic(expected = "issued by another query")]
    fn test_handle_from_another_search_panics() {
        let mut first = ArtistSearch::default();
        first.artist("Jethro Tull");
        let country = first.country("GB");
        let mut second = ArtistSearch::default();
        second.artist("Fairport Convention");
        second.country("GB");
        second.prohibit(country);
    }
}
