use strum::{AsRefStr, EnumIter};

use crate::{entity::Entity, search::SearchField, types::Mbid};

/// Search keys of the annotation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum AnnotationField {
    #[strum(serialize = "")]
    Default,
    Entity,
    Id,
    Name,
    Text,
    Type,
}

impl SearchField for AnnotationField {}

entity_search! {
    /// Builds annotation searches.
    AnnotationSearch(Entity::Annotation, AnnotationField)
}

impl AnnotationSearch {
    search_ops! { AnnotationField;
        default_field, default_field_with => Default: String;
        /// the annotated entity's MBID
        entity, entity_with => Entity: Mbid;
        /// the numeric ID of the annotation
        id, id_with => Id: i64;
        /// the annotated entity's name or title, diacritics are ignored
        name, name_with => Name: String;
        /// the annotation's content, includes wiki formatting
        text, text_with => Text: String;
        /// the annotated entity's type
        entity_type, entity_type_with => Type: String;
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
    fn test_all_term_functions_cover_all_fields() {
        assert_eq!(AnnotationField::iter().count(), 6);
        let z = |_: TermBuilder| Term::single("z");
        let query = AnnotationSearch::compose(|s| {
            s.default_field_with(z);
            s.entity_with(z);
            s.id_with(z);
            s.name_with(z);
            s.text_with(z);
            s.entity_type_with(z);
        });
        assert_covers_all_keys::<AnnotationField>(&query, "z");
    }

    #[test]
    fn test_value_functions() {
        let query = AnnotationSearch::compose(|s| {
            s.entity("bdb24cb5-404b-4f60-bba4-7b730325ae47");
            s.entity_type("artist");
            s.text("Stockholm");
        });
        assert_eq!(
            query,
            "entity:bdb24cb5-404b-4f60-bba4-7b730325ae47 type:artist text:Stockholm"
        );
    }
}
