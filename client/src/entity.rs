/// The searchable entity kinds, spelled as the web service's resource path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Entity {
    Annotation,
    Area,
    Artist,
    #[strum(serialize = "cdstub")]
    CdStub,
    Event,
    Instrument,
    Label,
    Place,
    Recording,
    Release,
    ReleaseGroup,
    Series,
    Tag,
    Work,
}

impl Entity {
    /// The key holding the result list in a search response body.
    pub fn results_key(&self) -> &'static str {
        match self {
            Entity::Annotation => "annotations",
            Entity::Area => "areas",
            Entity::Artist => "artists",
            Entity::CdStub => "cdstubs",
            Entity::Event => "events",
            Entity::Instrument => "instruments",
            Entity::Label => "labels",
            Entity::Place => "places",
            Entity::Recording => "recordings",
            Entity::Release => "releases",
            Entity::ReleaseGroup => "release-groups",
            Entity::Series => "series",
            Entity::Tag => "tags",
            Entity::Work => "works",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_resource_names() {
        assert_eq!(Entity::ReleaseGroup.as_ref(), "release-group");
        assert_eq!(Entity::CdStub.as_ref(), "cdstub");
        assert_eq!(Entity::Artist.to_string(), "artist");
        assert_eq!(Entity::iter().count(), 14);
    }

    #[test]
    fn test_results_keys_are_distinct() {
        let mut keys: Vec<_> = Entity::iter().map(|e| e.results_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 14);
    }
}
