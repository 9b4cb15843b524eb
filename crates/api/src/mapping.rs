//! Field mapping between persistence entities and wire DTOs.

use codecamp_core::camp::DEFAULT_LENGTH_DAYS;
use codecamp_db::models::camp::{Camp, CampModel};
use codecamp_db::models::talk::{Speaker, SpeakerModel, Talk, TalkModel};

/// Bidirectional camp mapping.
pub trait CampMapper: Send + Sync {
    /// Project an entity onto its wire shape.
    fn to_model(&self, camp: &Camp) -> CampModel;

    /// Build a new, unsaved entity from a DTO.
    fn to_entity(&self, model: &CampModel) -> Camp;

    /// Overlay the fields carried by `model` onto an existing entity.
    fn apply(&self, model: &CampModel, camp: &mut Camp);
}

/// Plain field-by-field mapper.
///
/// `moniker` and `event_date` are always copied. Optional DTO fields only
/// overwrite the entity when present, so a partial body leaves the rest of
/// the stored camp alone. DTO talks are never copied onto an entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapper;

/// Replace `target` only when the DTO carried a value.
fn overlay<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        target.clone_from(value);
    }
}

impl CampMapper for FieldMapper {
    fn to_model(&self, camp: &Camp) -> CampModel {
        CampModel {
            name: camp.name.clone(),
            moniker: camp.moniker.clone(),
            event_date: camp.event_date,
            length: Some(camp.length),
            venue: camp.venue.clone(),
            location_address1: camp.address1.clone(),
            location_address2: camp.address2.clone(),
            location_address3: camp.address3.clone(),
            location_city_town: camp.city_town.clone(),
            location_state_province: camp.state_province.clone(),
            location_postal_code: camp.postal_code.clone(),
            location_country: camp.country.clone(),
            talks: camp.talks.iter().map(talk_model).collect(),
        }
    }

    fn to_entity(&self, model: &CampModel) -> Camp {
        let mut camp = Camp {
            id: 0,
            name: None,
            moniker: model.moniker.clone(),
            event_date: model.event_date,
            length: DEFAULT_LENGTH_DAYS,
            venue: None,
            address1: None,
            address2: None,
            address3: None,
            city_town: None,
            state_province: None,
            postal_code: None,
            country: None,
            talks: Vec::new(),
        };
        self.apply(model, &mut camp);
        camp
    }

    fn apply(&self, model: &CampModel, camp: &mut Camp) {
        camp.moniker.clone_from(&model.moniker);
        camp.event_date = model.event_date;
        if let Some(length) = model.length {
            camp.length = length;
        }
        overlay(&mut camp.name, &model.name);
        overlay(&mut camp.venue, &model.venue);
        overlay(&mut camp.address1, &model.location_address1);
        overlay(&mut camp.address2, &model.location_address2);
        overlay(&mut camp.address3, &model.location_address3);
        overlay(&mut camp.city_town, &model.location_city_town);
        overlay(&mut camp.state_province, &model.location_state_province);
        overlay(&mut camp.postal_code, &model.location_postal_code);
        overlay(&mut camp.country, &model.location_country);
    }
}

fn talk_model(talk: &Talk) -> TalkModel {
    TalkModel {
        title: talk.title.clone(),
        abstract_text: talk.abstract_text.clone(),
        level: talk.level,
        speaker: talk.speaker.as_ref().map(speaker_model),
    }
}

fn speaker_model(speaker: &Speaker) -> SpeakerModel {
    SpeakerModel {
        first_name: speaker.first_name.clone(),
        middle_name: speaker.middle_name.clone(),
        last_name: speaker.last_name.clone(),
        company: speaker.company.clone(),
        company_url: speaker.company_url.clone(),
        blog_url: speaker.blog_url.clone(),
        twitter: speaker.twitter.clone(),
        github: speaker.github.clone(),
    }
}
