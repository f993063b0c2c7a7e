use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{UserProfile, UserSummary};

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub newsletter: bool,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The user as echoed back by registration (camelCase keys).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub newsletter: bool,
}

impl From<UserProfile> for RegisteredUser {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            newsletter: user.newsletter,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub user: RegisteredUser,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newsletter_defaults_to_false() {
        let req: RegisterRequest = serde_json::from_value(serde_json::json!({
            "email": "a@b.c",
            "password": "pw",
            "firstName": "Ann",
        }))
        .unwrap();
        assert!(!req.newsletter);
        assert_eq!(req.first_name.as_deref(), Some("Ann"));
        assert!(req.phone.is_none());
    }

    #[test]
    fn registered_user_uses_camel_case_keys() {
        let user = RegisteredUser {
            id: 4,
            email: "a@b.c".into(),
            first_name: Some("Ann".into()),
            last_name: None,
            phone: None,
            newsletter: true,
        };
        let body = serde_json::to_value(user).unwrap();
        assert_eq!(body["firstName"], "Ann");
        assert!(body.get("first_name").is_none());
        assert_eq!(body["newsletter"], true);
    }
}
