use strum::{AsRefStr, EnumIter};

use crate::{entity::Entity, search::SearchField};

/// Search keys of the tag index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TagField {
    #[strum(serialize = "")]
    Default,
    Tag,
}

impl SearchField for TagField {}

entity_search! {
    TagSearch(Entity::Tag, TagField)
}

impl TagSearch {
    search_ops! { TagField;
        default_field, default_field_with => Default: String;
        /// (part of) the tag's name
        tag, tag_with => Tag: String;
    }
}
