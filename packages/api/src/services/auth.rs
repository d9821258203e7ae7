use serde_json::json;

use crate::models::{AdminLogin, AuthGrant, MasterLogin, ProfileUpdate, RegisterRequest, UserLogin, UserRecord};
use crate::{ApiClient, ApiError};

/// `/auth/*` endpoints.
pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn auth(&self) -> AuthService<'_> {
        AuthService { client: self }
    }
}

impl AuthService<'_> {
    pub async fn register_user(&self, request: &RegisterRequest) -> Result<AuthGrant, ApiError> {
        let login: UserLogin = self.client.post("/auth/user/register", request).await?;
        Ok(login.into())
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<AuthGrant, ApiError> {
        let body = json!({ "email": email, "password": password });
        let login: UserLogin = self.client.post("/auth/user/login", &body).await?;
        Ok(login.into())
    }

    pub async fn login_admin(&self, username: &str, password: &str) -> Result<AuthGrant, ApiError> {
        let body = json!({ "username": username, "password": password });
        let login: AdminLogin = self.client.post("/auth/admin/login", &body).await?;
        Ok(login.into())
    }

    pub async fn login_master(&self, username: &str, password: &str) -> Result<AuthGrant, ApiError> {
        let body = json!({ "username": username, "password": password });
        let login: MasterLogin = self.client.post("/auth/master/login", &body).await?;
        Ok(login.into())
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserRecord, ApiError> {
        #[derive(serde::Deserialize)]
        struct Updated {
            user: UserRecord,
        }
        let updated: Updated = self.client.put("/auth/profile", update).await?;
        Ok(updated.user)
    }
}
