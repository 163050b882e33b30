use strum::{AsRefStr, EnumIter};

use crate::{
    entity::Entity,
    search::SearchField,
    types::{InstrumentMbid, InstrumentName},
};

/// Search keys of the instrument index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum InstrumentField {
    Alias,
    Comment,
    Description,
    #[strum(serialize = "iid")]
    InstrumentId,
    Instrument,
    InstrumentAccent,
    Type,
    Tag,
    #[strum(serialize = "")]
    Default,
}

impl SearchField for InstrumentField {}

entity_search! {
    InstrumentSearch(Entity::Instrument, InstrumentField)
}

impl InstrumentSearch {
    search_ops! { InstrumentField;
        alias, alias_with => Alias: String;
        comment, comment_with => Comment: String;
        /// (part of) the description of the instrument, in English
        description, description_with => Description: String;
        instrument_id, instrument_id_with => InstrumentId: InstrumentMbid;
        /// (part of) the instrument's name, diacritics are ignored
        instrument, instrument_with => Instrument: InstrumentName;
        instrument_accent, instrument_accent_with => InstrumentAccent: String;
        /// the instrument's type, e.g. `Wind instrument`
        instrument_type, instrument_type_with => Type: String;
        tag, tag_with => Tag: String;
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
    fn test_all_term_functions_cover_all_fields() {
        assert_eq!(InstrumentField::iter().count(), 9);
        let z = |_: TermBuilder| Term::single("z");
        let query = InstrumentSearch::compose(|s| {
            s.alias_with(z);
            s.comment_with(z);
            s.description_with(z);
            s.instrument_id_with(z);
            s.instrument_with(z);
            s.instrument_accent_with(z);
            s.instrument_type_with(z);
            s.tag_with(z);
            s.default_field_with(z);
        });
        assert_covers_all_keys::<InstrumentField>(&query, "z");
    }

    #[test]
    fn test_value_functions() {
        let query = InstrumentSearch::compose(|s| {
            let flute = s.instrument("flute");
            let type_ = s.instrument_type("Wind instrument");
            s.and(flute, type_);
        });
        assert_eq!(query, "(instrument:flute AND type:\"Wind instrument\")");
    }
}
