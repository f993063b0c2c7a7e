use crate::{
    db::{self, OrmConn},
    dto::users::ProfileResponse,
    error::{AppError, AppResult},
    models::UserProfile,
    response::ApiResponse,
};

pub const GET_PROFILE: &str = r#"
    SELECT id, email, first_name, last_name, phone, newsletter
    FROM users
    WHERE id = $1
"#;

/// Parses the raw `userId` query value; absent, blank or non-integer is a 400.
pub fn parse_user_id(raw: Option<&str>) -> AppResult<i32> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("User ID required".into()))?;
    raw.parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("Invalid user ID: {raw}")))
}

pub async fn get_profile(
    conn: &OrmConn,
    user_id: Option<&str>,
) -> AppResult<ApiResponse<ProfileResponse>> {
    let user_id = parse_user_id(user_id)?;

    let user: Option<UserProfile> =
        db::fetch_optional(conn, GET_PROFILE, vec![user_id.into()]).await?;
    let user = match user {
        Some(u) => u,
        None => return Err(AppError::NotFound("User not found".into())),
    };

    Ok(ApiResponse::success(ProfileResponse { user }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_is_required() {
        assert!(matches!(parse_user_id(None), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_user_id(Some("  ")), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn user_id_must_be_an_integer() {
        let err = parse_user_id(Some("abc")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid user ID: abc");
    }

    #[test]
    fn user_id_is_parsed() {
        assert_eq!(parse_user_id(Some("42")).unwrap(), 42);
        assert_eq!(parse_user_id(Some(" 7 ")).unwrap(), 7);
    }
}
