//! DTOs for creating aliases.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CreatedLink;

/// Request to shorten a URL. The URL is stored as given.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUrlResponse {
    pub alias: String,
    pub short_url: String,
}

impl From<CreatedLink> for CreateUrlResponse {
    fn from(link: CreatedLink) -> Self {
        Self {
            alias: link.alias,
            short_url: link.short_url,
        }
    }
}
