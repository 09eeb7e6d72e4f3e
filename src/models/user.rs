use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity. Authentication is out of scope; users only anchor
/// bookmark ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    pub fn new(email: String, name: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

// ========== DTOs (Data Transfer Objects) ==========

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_email(&self.email)?;
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref email) = self.email {
            validate_email(email)?;
        }
        if let Some(ref name) = self.name {
            if name.trim().is_empty() {
                return Err("Name cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if EmailAddress::is_valid(email) {
        Ok(())
    } else {
        Err("Invalid email address".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("reader@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_create_user_validation() {
        let req = CreateUserRequest {
            email: "reader@example.com".to_string(),
            name: "  ".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
