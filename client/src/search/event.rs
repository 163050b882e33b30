use strum::{AsRefStr, EnumIter};

use crate::{
    entity::Entity,
    search::SearchField,
    types::{
        AreaMbid, AreaName, ArtistMbid, ArtistName, EventMbid, EventName, PartialDate, PlaceMbid,
        PlaceName,
    },
};

/// Search keys of the event index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EventField {
    Alias,
    #[strum(serialize = "aid")]
    AreaId,
    Area,
    #[strum(serialize = "arid")]
    ArtistId,
    Artist,
    Begin,
    Comment,
    End,
    Ended,
    #[strum(serialize = "eid")]
    EventId,
    Event,
    EventAccent,
    #[strum(serialize = "pid")]
    PlaceId,
    Place,
    Tag,
    Type,
    #[strum(serialize = "")]
    Default,
}

impl SearchField for EventField {}

entity_search! {
    /// Builds event searches.
    EventSearch(Entity::Event, EventField)
}

impl EventSearch {
    search_ops! { EventField;
        alias, alias_with => Alias: String;
        /// the MBID of an area related to the event
        area_id, area_id_with => AreaId: AreaMbid;
        /// (part of) the name of an area related to the event
        area, area_with => Area: AreaName;
        /// the MBID of an artist related to the event
        artist_id, artist_id_with => ArtistId: ArtistMbid;
        /// (part of) the name of an artist related to the event
        artist, artist_with => Artist: ArtistName;
        begin_date, begin_date_with => Begin: PartialDate;
        comment, comment_with => Comment: String;
        end_date, end_date_with => End: PartialDate;
        ended, ended_with => Ended: bool;
        event_id, event_id_with => EventId: EventMbid;
        /// (part of) the event's name, diacritics are ignored
        event, event_with => Event: EventName;
        event_accent, event_accent_with => EventAccent: String;
        /// the MBID of a place related to the event
        place_id, place_id_with => PlaceId: PlaceMbid;
        /// (part of) the name of a place related to the event
        place, place_with => Place: PlaceName;
        tag, tag_with => Tag: String;
        event_type, event_type_with => Type: String;
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
        assert_eq!(EventField::iter().count(), 17);
    }

    #[test]
    fn test_all_term_functions_cover_all_fields() {
        let z = |_: TermBuilder| Term::single("z");
        let query = EventSearch::compose(|s| {
            s.alias_with(z);
            s.area_id_with(z);
            s.area_with(z);
            s.artist_id_with(z);
            s.artist_with(z);
            s.begin_date_with(z);
            s.comment_with(z);
            s.end_date_with(z);
            s.ended_with(z);
            s.event_id_with(z);
            s.event_with(z);
            s.event_accent_with(z);
            s.place_id_with(z);
            s.place_with(z);
            s.tag_with(z);
            s.event_type_with(z);
            s.default_field_with(z);
        });
        assert_covers_all_keys::<EventField>(&query, "z");
    }

    #[test]
    fn test_festival_in_date_range() {
        let from = NaiveDate::from_ymd_opt(1970, 8, 26).unwrap();
        let to = NaiveDate::from_ymd_opt(1970, 8, 31).unwrap();
        let query = EventSearch::compose(|s| {
            s.event("Isle of Wight Festival");
            s.begin_date_with(|t| t.inclusive(from, to));
        });
        assert_eq!(
            query,
            "event:\"Isle of Wight Festival\" begin:[\"1970-08-26\" TO \"1970-08-31\"]"
        );
    }
}
