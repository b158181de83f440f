use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{batch::Batch, camp::Camp, font::FontOption};
use crate::utils::access_code::AccessTarget;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SecretPassagePayload {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SecretPassageResponse {
    pub camp: Camp,
    pub camp_label: String,
    #[schema(value_type = u8)]
    pub batch: Batch,
    pub route: String,
}

impl From<AccessTarget> for SecretPassageResponse {
    fn from(target: AccessTarget) -> Self {
        Self {
            camp: target.camp,
            camp_label: target.camp.label().to_string(),
            batch: target.batch,
            route: target.route(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AccessCodePayload {
    pub camp: Camp,
    #[schema(value_type = u8, minimum = 1, maximum = 99)]
    pub batch: Batch,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessCodeResponse {
    pub code: String,
    pub route: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CampResponse {
    pub code: Camp,
    pub numeric_alias: String,
    pub label: String,
}

impl From<Camp> for CampResponse {
    fn from(camp: Camp) -> Self {
        Self {
            code: camp,
            numeric_alias: camp.numeric_alias().to_string(),
            label: camp.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FontResponse {
    pub value: String,
    pub font_family: String,
}

impl From<&FontOption> for FontResponse {
    fn from(font: &FontOption) -> Self {
        Self {
            value: font.value.to_string(),
            font_family: font.font_family.to_string(),
        }
    }
}
