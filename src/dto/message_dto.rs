use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::{
    batch::Batch,
    camp::Camp,
    message::{CreateMessage, Message},
};
use crate::services::message_view::{MessageFilter, MessageView};
use crate::services::playback::{Cue, PlaybackSchedule};
use crate::utils::image::validate_data_uri;
use crate::utils::validation::{known_font, not_blank};

fn trimmed<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// Submission form. Field aliases keep older clients working.
///
/// Name and content are trimmed as they are read, so length limits apply to
/// the text that is stored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMessagePayload {
    #[serde(alias = "sender", deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 50), custom(function = "not_blank"))]
    pub name: String,
    #[serde(alias = "message", alias = "text", deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 5000), custom(function = "not_blank"))]
    pub content: String,
    #[serde(alias = "campId")]
    pub camp: Camp,
    #[schema(value_type = u8, minimum = 1, maximum = 99)]
    pub batch: Batch,
    #[validate(custom(function = "known_font"))]
    pub font: Option<String>,
    #[serde(alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(alias = "openOn")]
    pub open_on: Option<NaiveDate>,
}

impl CreateMessagePayload {
    /// Runs field validation plus the checks that need runtime context and
    /// returns the normalised message to store.
    pub fn into_new_message(self, max_image_bytes: usize, today: NaiveDate) -> Result<CreateMessage> {
        self.validate()?;

        if let Some(open_on) = self.open_on {
            if open_on < today {
                return Err(Error::BadRequest("open_on must not be in the past".into()));
            }
        }

        let image_url = match self.image_url.as_deref().map(str::trim) {
            Some(uri) if !uri.is_empty() => Some(validate_data_uri(uri, max_image_bytes)?.to_string()),
            _ => None,
        };

        Ok(CreateMessage {
            name: self.name,
            content: self.content,
            camp: self.camp,
            batch: self.batch,
            font: self.font,
            image_url,
            open_on: self.open_on,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub camp: Option<Camp>,
    pub camp_label: Option<String>,
    #[schema(value_type = Option<u8>)]
    pub batch: Option<Batch>,
    pub font: Option<String>,
    pub image_url: Option<String>,
    pub open_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(value: Message) -> Self {
        let camp = value.camp();
        let batch = value.batch();
        Self {
            id: value.id,
            name: value.name,
            content: value.content,
            camp,
            camp_label: camp.map(|c| c.label().to_string()),
            batch,
            font: value.font,
            image_url: value.image_url,
            open_on: value.open_on,
            created_at: value.created_at,
        }
    }
}

impl From<&Message> for MessageResponse {
    fn from(value: &Message) -> Self {
        Self::from(value.clone())
    }
}

/// Query string for the admin list; empty values mean "all".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MessageListQuery {
    pub camp: Option<String>,
    pub batch: Option<String>,
    pub page: Option<usize>,
}

impl MessageListQuery {
    pub fn filter(&self) -> Result<MessageFilter> {
        parse_filter(self.camp.as_deref(), self.batch.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlaybackQuery {
    pub camp: Option<String>,
    pub batch: Option<String>,
}

impl PlaybackQuery {
    pub fn filter(&self) -> Result<MessageFilter> {
        parse_filter(self.camp.as_deref(), self.batch.as_deref())
    }
}

fn parse_filter(camp: Option<&str>, batch: Option<&str>) -> Result<MessageFilter> {
    let camp = match camp.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            raw.parse::<Camp>()
                .map_err(|e| Error::BadRequest(e.to_string()))?,
        ),
        None => None,
    };
    let batch = match batch.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            raw.parse::<Batch>()
                .map_err(|e| Error::BadRequest(e.to_string()))?,
        ),
        None => None,
    };
    Ok(MessageFilter { camp, batch })
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessagePageResponse {
    pub items: Vec<MessageResponse>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub camps: Vec<Camp>,
    #[schema(value_type = Vec<u8>)]
    pub batches: Vec<Batch>,
}

impl From<&MessageView> for MessagePageResponse {
    fn from(view: &MessageView) -> Self {
        let page = view.page();
        Self {
            items: page.items.iter().map(MessageResponse::from).collect(),
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
            camps: view.camp_facets(),
            batches: view.batch_facets(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CueResponse {
    pub message_id: Uuid,
    pub name: String,
    pub content: String,
    pub start_ms: u64,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaybackResponse {
    pub cues: Vec<CueResponse>,
    pub closing_message: String,
    pub closing_at_ms: u64,
    pub ends_at_ms: u64,
}

impl From<Cue> for CueResponse {
    fn from(cue: Cue) -> Self {
        Self {
            message_id: cue.message_id,
            name: cue.name,
            content: cue.content,
            start_ms: cue.start.as_millis() as u64,
            duration_ms: cue.duration.as_millis() as u64,
        }
    }
}

impl From<PlaybackSchedule> for PlaybackResponse {
    fn from(schedule: PlaybackSchedule) -> Self {
        Self {
            cues: schedule.cues.into_iter().map(Into::into).collect(),
            closing_message: schedule.closing_message,
            closing_at_ms: schedule.closing_at.as_millis() as u64,
            ends_at_ms: schedule.ends_at.as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_field_names_are_accepted() {
        let payload: CreateMessagePayload = serde_json::from_value(json!({
            "sender": "Kim",
            "text": "see you",
            "campId": "1",
            "batch": "3"
        }))
        .unwrap();
        assert_eq!(payload.name, "Kim");
        assert_eq!(payload.content, "see you");
        assert_eq!(payload.camp, Camp::Back);
        assert_eq!(payload.batch.get(), 3);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn blank_fields_and_unknown_fonts_fail_validation() {
        let payload: CreateMessagePayload = serde_json::from_value(json!({
            "name": "   ",
            "content": "hi",
            "camp": "BACK",
            "batch": 1,
            "font": "Comic Sans"
        }))
        .unwrap();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("font"));
        assert!(!fields.contains_key("content"));
    }

    #[test]
    fn new_message_is_trimmed_and_checked() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let payload: CreateMessagePayload = serde_json::from_value(json!({
            "name": "  Lee ",
            "content": " remember us \n",
            "camp": "DESN",
            "batch": 2,
            "image_url": "",
            "open_on": "2027-01-01"
        }))
        .unwrap();
        let message = payload.into_new_message(1024, today).unwrap();
        assert_eq!(message.name, "Lee");
        assert_eq!(message.content, "remember us");
        assert!(message.image_url.is_none());
    }

    #[test]
    fn length_limits_apply_after_trimming() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let padded_name = format!("  {}  ", "a".repeat(50));
        let payload: CreateMessagePayload = serde_json::from_value(json!({
            "name": padded_name,
            "content": format!("\n{}\n", "가".repeat(5000)),
            "camp": "BACK",
            "batch": 1
        }))
        .unwrap();
        let message = payload.into_new_message(1024, today).unwrap();
        assert_eq!(message.name, "a".repeat(50));
        assert_eq!(message.content.chars().count(), 5000);

        let payload: CreateMessagePayload = serde_json::from_value(json!({
            "name": "a".repeat(51),
            "content": "hi",
            "camp": "BACK",
            "batch": 1
        }))
        .unwrap();
        assert!(matches!(
            payload.into_new_message(1024, today),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn past_open_date_and_bad_image_are_rejected() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let base = json!({ "name": "a", "content": "b", "camp": "BACK", "batch": 1 });

        let mut past = base.clone();
        past["open_on"] = json!("2026-10-18");
        let payload: CreateMessagePayload = serde_json::from_value(past).unwrap();
        assert!(matches!(payload.into_new_message(1024, today), Err(Error::BadRequest(_))));

        let mut image = base;
        image["image_url"] = json!("https://example.com/cat.jpg");
        let payload: CreateMessagePayload = serde_json::from_value(image).unwrap();
        assert!(payload.into_new_message(1024, today).is_err());
    }

    #[test]
    fn empty_query_values_are_wildcards() {
        let query = MessageListQuery {
            camp: Some(String::new()),
            batch: Some(" ".into()),
            page: None,
        };
        assert!(query.filter().unwrap().is_empty());
    }

    #[test]
    fn bad_query_values_are_rejected() {
        let query = PlaybackQuery {
            camp: Some("XYZ".into()),
            batch: None,
        };
        assert!(matches!(query.filter(), Err(Error::BadRequest(_))));
        let query = PlaybackQuery {
            camp: None,
            batch: Some("0".into()),
        };
        assert!(query.filter().is_err());
    }
}
