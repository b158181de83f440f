use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::{batch::Batch, camp::Camp};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub camp: String,
    pub batch: i16,
    pub font: Option<String>,
    pub image_url: Option<String>,
    pub open_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Camp of the row, recognising legacy numeric codes.
    pub fn camp(&self) -> Option<Camp> {
        Camp::parse(&self.camp)
    }

    pub fn batch(&self) -> Option<Batch> {
        Batch::new(self.batch as i64).ok()
    }
}

#[derive(Debug, Clone)]
pub struct CreateMessage {
    pub name: String,
    pub content: String,
    pub camp: Camp,
    pub batch: Batch,
    pub font: Option<String>,
    pub image_url: Option<String>,
    pub open_on: Option<NaiveDate>,
}
