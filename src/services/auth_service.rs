use crate::{
    db,
    dto::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
    error::{AppError, AppResult},
    models::{UserCredentials, UserProfile},
    response::ApiResponse,
    state::AppState,
};

/// The unique index on `email` decides; a conflicting insert returns no row.
pub const INSERT_USER: &str = r#"
    INSERT INTO users (email, password_hash, first_name, last_name, phone, newsletter)
    VALUES ($1, $2, $3, $4, $5, $6)
    ON CONFLICT (email) DO NOTHING
    RETURNING id, email, first_name, last_name, phone, newsletter
"#;

pub const FIND_CREDENTIALS: &str = r#"
    SELECT id, email, first_name, last_name, password_hash
    FROM users
    WHERE email = $1
"#;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<RegisterResponse>> {
    let RegisterRequest {
        email,
        password,
        first_name,
        last_name,
        phone,
        newsletter,
    } = payload;
    tracing::debug!(%email, newsletter, "registering user");

    let password_hash = state.passwords.hash(&password)?;

    let user: Option<UserProfile> = db::fetch_optional(
        state.orm.as_ref(),
        INSERT_USER,
        vec![
            email.into(),
            password_hash.into(),
            first_name.into(),
            last_name.into(),
            phone.into(),
            newsletter.into(),
        ],
    )
    .await?;

    let user = match user {
        Some(u) => u,
        None => return Err(AppError::BadRequest("User already exists".into())),
    };

    tracing::info!(user_id = user.id, "user registered");
    Ok(ApiResponse::with_message(
        "User created",
        RegisterResponse { user: user.into() },
    ))
}

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { email, password } = payload;
    tracing::debug!(%email, "login attempt");

    let user: Option<UserCredentials> =
        db::fetch_optional(state.orm.as_ref(), FIND_CREDENTIALS, vec![email.into()]).await?;

    let user = match user {
        Some(u) => u,
        None => return Err(AppError::BadRequest(INVALID_CREDENTIALS.into())),
    };

    if !state.passwords.verify(&password, &user.password_hash)? {
        return Err(AppError::BadRequest(INVALID_CREDENTIALS.into()));
    }

    Ok(ApiResponse::with_message(
        "Logged in",
        LoginResponse { user: user.into() },
    ))
}
