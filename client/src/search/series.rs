use strum::{AsRefStr, EnumIter};

use crate::{
    entity::Entity,
    search::SearchField,
    types::{SeriesMbid, SeriesName},
};

/// Search keys of the series index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SeriesField {
    #[strum(serialize = "")]
    Default,
    Alias,
    Comment,
    Series,
    #[strum(serialize = "sid")]
    SeriesId,
    Type,
    Tag,
}

impl SearchField for SeriesField {}

entity_search! {
    SeriesSearch(Entity::Series, SeriesField)
}

impl SeriesSearch {
    search_ops! { SeriesField;
        default_field, default_field_with => Default: String;
        alias, alias_with => Alias: String;
        comment, comment_with => Comment: String;
        /// (part of) the series' name, diacritics are ignored
        series, series_with => Series: SeriesName;
        series_id, series_id_with => SeriesId: SeriesMbid;
        series_type, series_type_with => Type: String;
        tag, tag_with => Tag: String;
    }
}
