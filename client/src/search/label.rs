use strum::{AsRefStr, EnumIter};

use crate::{
    entity::Entity,
    search::SearchField,
    types::{AreaName, LabelMbid, LabelName, PartialDate},
};

/// Search keys of the label index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LabelField {
    Alias,
    Area,
    Begin,
    Code,
    Comment,
    Country,
    End,
    Ended,
    Ipi,
    Isni,
    Label,
    LabelAccent,
    #[strum(serialize = "laid")]
    LabelId,
    #[strum(serialize = "release_count")]
    ReleaseCount,
    SortName,
    Tag,
    Type,
    #[strum(serialize = "")]
    Default,
}

impl SearchField for LabelField {}

entity_search! {
    /// Builds label searches.
    LabelSearch(Entity::Label, LabelField)
}

impl LabelSearch {
    search_ops! { LabelField;
        alias, alias_with => Alias: String;
        /// (part of) the name of the label's main associated area
        area, area_with => Area: AreaName;
        begin_date, begin_date_with => Begin: PartialDate;
        /// the label code for the label, without the `LC` prefix
        code, code_with => Code: i64;
        comment, comment_with => Comment: String;
        /// the 2-letter code for the label's main associated country
        country, country_with => Country: String;
        end_date, end_date_with => End: PartialDate;
        ended, ended_with => Ended: bool;
        ipi, ipi_with => Ipi: String;
        isni, isni_with => Isni: String;
        /// (part of) the label's name, diacritics are ignored
        label, label_with => Label: LabelName;
        label_accent, label_accent_with => LabelAccent: String;
        label_id, label_id_with => LabelId: LabelMbid;
        /// the number of releases the label appears on
        release_count, release_count_with => ReleaseCount: i64;
        sort_name, sort_name_with => SortName: String;
        tag, tag_with => Tag: String;
        label_type, label_type_with => Type: String;
        default_field, default_field_with => Default: String;
    }
}
