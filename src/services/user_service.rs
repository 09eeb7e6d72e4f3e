use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::*,
};

/// Service for user accounts. Users exist to anchor bookmark ownership;
/// there is no authentication layer in front of them.
#[derive(Clone)]
pub struct UserService {
    db: Database,
}

impl UserService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> ApiResult<User> {
        // 1. Reject duplicate emails up front
        if self.db.get_user_by_email(&request.email).await?.is_some() {
            return Err(ApiError::Conflict(format!(
                "User with email '{}' already exists",
                request.email
            )));
        }

        // 2. Create and persist
        let user = User::new(request.email, request.name);
        self.db.create_user(&user).await?;

        Ok(user)
    }

    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.db.list_users().await
    }

    pub async fn get_user(&self, user_id: &str) -> ApiResult<User> {
        self.db
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("User {} not found", user_id)))
    }

    pub async fn update_user(&self, user_id: &str, request: UpdateUserRequest) -> ApiResult<User> {
        // 1. Fetch the user
        let mut user = self.get_user(user_id).await?;

        // 2. Guard email changes against collisions
        if let Some(email) = request.email {
            if email != user.email {
                if self.db.get_user_by_email(&email).await?.is_some() {
                    return Err(ApiError::Conflict(format!(
                        "User with email '{}' already exists",
                        email
                    )));
                }
                user.email = email;
            }
        }

        if let Some(name) = request.name {
            user.name = name;
        }
        user.updated_at = chrono::Utc::now().to_rfc3339();

        // 3. Persist
        self.db.update_user(&user).await?;

        Ok(user)
    }

    /// Delete a user along with their bookmarks and tag attachments.
    pub async fn remove_user(&self, user_id: &str) -> ApiResult<()> {
        self.get_user(user_id).await?;
        self.db.delete_user(user_id).await?;

        Ok(())
    }
}
