use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::contacts::models::Contact;
use crate::shared::validation::PHONE_REGEX;

/// Response DTO for a visitor message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponseDto {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactResponseDto {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            phone: c.phone,
            message: c.message,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// List wrapper keyed by resource name
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactListDto {
    pub contacts: Vec<ContactResponseDto>,
}

/// Body for submitting a visitor message (no auth required)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateContactDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub message: String,
}

/// Partial update body; absent fields keep their stored values
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateContactDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_contact_validation() {
        let dto = CreateContactDto {
            name: "Aziz".to_string(),
            phone: "+998901234567".to_string(),
            message: "Salom".to_string(),
        };
        assert!(dto.validate().is_ok());

        let dto = CreateContactDto {
            name: "Aziz".to_string(),
            phone: "call me".to_string(),
            message: "Salom".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
