use strum::{AsRefStr, EnumIter};

use crate::{
    entity::Entity,
    search::SearchField,
    types::{AreaName, PartialDate, PlaceMbid, PlaceName},
};

/// Search keys of the place index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PlaceField {
    #[strum(serialize = "pid")]
    PlaceId,
    Address,
    Alias,
    Area,
    Begin,
    Comment,
    End,
    Ended,
    #[strum(serialize = "lat")]
    Latitude,
    #[strum(serialize = "long")]
    Longitude,
    Place,
    PlaceAccent,
    Type,
    #[strum(serialize = "")]
    Default,
}

impl SearchField for PlaceField {}

entity_search! {
    /// Builds place searches.
    ///
    /// Coordinates are decimal degrees and render quoted, so ranges over them
    /// compare as the index stores them.
    PlaceSearch(Entity::Place, PlaceField)
}

impl PlaceSearch {
    search_ops! { PlaceField;
        place_id, place_id_with => PlaceId: PlaceMbid;
        /// (part of) the physical address for this place
        address, address_with => Address: String;
        alias, alias_with => Alias: String;
        /// (part of) the name of the place's main associated area
        area, area_with => Area: AreaName;
        begin_date, begin_date_with => Begin: PartialDate;
        comment, comment_with => Comment: String;
        end_date, end_date_with => End: PartialDate;
        ended, ended_with => Ended: bool;
        latitude, latitude_with => Latitude: f64;
        longitude, longitude_with => Longitude: f64;
        /// (part of) the place's name, diacritics are ignored
        place, place_with => Place: PlaceName;
        place_accent, place_accent_with => PlaceAccent: String;
        place_type, place_type_with => Type: String;
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
        assert_eq!(PlaceField::iter().count(), 14);
        assert_eq!(PlaceField::Longitude.value(), "long");
    }

    #[test]
    fn test_all_term_functions_cover_all_fields() {
        let z = |_: TermBuilder| Term::single("z");
        let query = PlaceSearch::compose(|s| {
            s.place_id_with(z);
            s.address_with(z);
            s.alias_with(z);
            s.area_with(z);
            s.begin_date_with(z);
            s.comment_with(z);
            s.end_date_with(z);
            s.ended_with(z);
            s.latitude_with(z);
            s.longitude_with(z);
            s.place_with(z);
            s.place_accent_with(z);
            s.place_type_with(z);
            s.default_field_with(z);
        });
        assert_covers_all_keys::<PlaceField>(&query, "z");
    }

    #[test]
    fn test_value_functions() {
        let query = PlaceSearch::compose(|s| {
            s.place("Abbey Road Studios");
            s.latitude(51.5321);
        });
        assert_eq!(query, "place:\"Abbey Road Studios\" lat:\"51.5321\"");
    }
}
