use serde::{Deserialize, Serialize};
use store::{Profile, Role};

use super::user::UserRecord;

/// `POST /auth/user/register` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub srn: String,
    pub year: String,
    pub branch: String,
    pub division: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

/// `data` of a user login or registration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserLogin {
    pub user: UserRecord,
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl AdminRecord {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .or(self.email.as_deref())
            .unwrap_or("Admin")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminLogin {
    pub admin: AdminRecord,
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterRecord {
    pub username: String,
    #[serde(default)]
    pub access_level: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MasterLogin {
    pub master: MasterRecord,
    pub token: String,
}

/// Everything the session store needs after a successful login.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthGrant {
    pub token: String,
    pub role: Role,
    pub user_id: String,
    pub profile: Profile,
}

impl From<UserLogin> for AuthGrant {
    fn from(login: UserLogin) -> Self {
        let profile = login.user.to_profile();
        Self {
            token: login.token,
            role: Role::User,
            user_id: login.user.id,
            profile,
        }
    }
}

impl From<AdminLogin> for AuthGrant {
    fn from(login: AdminLogin) -> Self {
        let profile = Profile {
            id: login.admin.id.clone(),
            display_name: login.admin.display_name().to_string(),
            email: login.admin.email.clone(),
            avatar_url: None,
            srn: None,
        };
        Self {
            token: login.token,
            role: Role::Admin,
            user_id: login.admin.id,
            profile,
        }
    }
}

impl From<MasterLogin> for AuthGrant {
    fn from(login: MasterLogin) -> Self {
        // The master account has no database id; its username stands in.
        let profile = Profile {
            id: login.master.username.clone(),
            display_name: login.master.username.clone(),
            email: None,
            avatar_url: None,
            srn: None,
        };
        Self {
            token: login.token,
            role: Role::Master,
            user_id: login.master.username,
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_login_grant() {
        let json = r#"{
            "user": {"_id": "u1", "fullName": "Asha Rao", "email": "asha@example.com",
                     "srn": "01FE22BEC017", "role": "user",
                     "class": {"year": "3rd Year", "branch": "ECE", "division": "A"}},
            "token": "jwt"
        }"#;
        let login: UserLogin = serde_json::from_str(json).unwrap();
        let grant = AuthGrant::from(login);
        assert_eq!(grant.role, Role::User);
        assert_eq!(grant.user_id, "u1");
        assert_eq!(grant.profile.display_name, "Asha Rao");
        assert_eq!(grant.profile.srn.as_deref(), Some("01FE22BEC017"));
    }

    #[test]
    fn test_admin_login_grant_name_fallback() {
        let json = r#"{"admin": {"_id": "a1", "email": "ops@club.edu"}, "token": "jwt"}"#;
        let login: AdminLogin = serde_json::from_str(json).unwrap();
        let grant = AuthGrant::from(login);
        assert_eq!(grant.role, Role::Admin);
        assert_eq!(grant.profile.display_name, "ops@club.edu");
    }

    #[test]
    fn test_master_login_grant_uses_username() {
        let json = r#"{"master": {"username": "root", "role": "master",
                       "accessLevel": "full_system_access"}, "token": "jwt"}"#;
        let grant = AuthGrant::from(serde_json::from_str::<MasterLogin>(json).unwrap());
        assert_eq!(grant.role, Role::Master);
        assert_eq!(grant.user_id, "root");
    }

    #[test]
    fn test_register_request_is_camel_case() {
        let req = RegisterRequest {
            full_name: "Asha".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["fullName"], "Asha");
        assert!(value.get("profilePic").is_none());
    }
}
