use strum::{AsRefStr, EnumIter};

use crate::{
    entity::Entity,
    search::SearchField,
    types::{AreaMbid, AreaName, PartialDate},
};

/// Search keys of the area index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum AreaField {
    Alias,
    #[strum(serialize = "aid")]
    AreaId,
    Area,
    AreaAccent,
    Begin,
    Comment,
    End,
    Ended,
    Iso,
    Iso1,
    Iso2,
    Iso3,
    SortName,
    Tag,
    Type,
    #[strum(serialize = "")]
    Default,
}

impl SearchField for AreaField {}

entity_search! {
    /// Builds area searches.
    AreaSearch(Entity::Area, AreaField)
}

impl AreaSearch {
    search_ops! { AreaField;
        alias, alias_with => Alias: String;
        area_id, area_id_with => AreaId: AreaMbid;
        /// (part of) the area's name, diacritics are ignored
        area, area_with => Area: AreaName;
        area_accent, area_accent_with => AreaAccent: String;
        begin_date, begin_date_with => Begin: PartialDate;
        comment, comment_with => Comment: String;
        end_date, end_date_with => End: PartialDate;
        ended, ended_with => Ended: bool;
        /// an ISO 3166-1, 3166-2 or 3166-3 code attached to the area
        iso, iso_with => Iso: String;
        /// an ISO 3166-1 code attached to the area
        iso1, iso1_with => Iso1: String;
        /// an ISO 3166-2 code attached to the area
        iso2, iso2_with => Iso2: String;
        /// an ISO 3166-3 code attached to the area
        iso3, iso3_with => Iso3: String;
        sort_name, sort_name_with => SortName: String;
        tag, tag_with => Tag: String;
        /// the area's type, e.g. `Country` or `City`
        area_type, area_type_with => Type: String;
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
        assert_eq!(AreaField::iter().count(), 16);
        assert_eq!(AreaField::AreaId.value(), "aid");
    }

    #[test]
    fn test_all_term_functions_cover_all_fields() {
        let z = |_: TermBuilder| Term::single("z");
        let query = AreaSearch::compose(|s| {
            s.alias_with(z);
            s.area_id_with(z);
            s.area_with(z);
            s.area_accent_with(z);
            s.begin_date_with(z);
            s.comment_with(z);
            s.end_date_with(z);
            s.ended_with(z);
            s.iso_with(z);
            s.iso1_with(z);
            s.iso2_with(z);
            s.iso3_with(z);
            s.sort_name_with(z);
            s.tag_with(z);
            s.area_type_with(z);
            s.default_field_with(z);
        });
        assert_covers_all_keys::<AreaField>(&query, "z");
    }

    #[test]
    fn test_value_functions() {
        let query = AreaSearch::compose(|s| {
            s.area("New York");
            s.iso2("US-NY");
            s.area_type("Subdivision");
        });
        assert_eq!(query, "area:\"New York\" iso2:US\\-NY type:Subdivision");
    }
}
