use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::UserProfile;

/// `userId` is taken as a raw string so a missing or malformed value can be
/// reported as a 400 with a JSON body.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfileQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user: UserProfile,
}
