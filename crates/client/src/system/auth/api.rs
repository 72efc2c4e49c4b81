use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use reqwest::Method;

use crate::shared::endpoints;
use crate::shared::envelope::normalize_record;
use crate::shared::error::ApiError;
use crate::shared::http::ApiClient;

/// Login with email and password
///
/// On success the token, profile and expiry are persisted in the client's
/// session store, so subsequent calls authenticate automatically.
pub async fn login(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let body = api
        .send_json(Method::POST, endpoints::AUTH_LOGIN, &request)
        .await?;

    let login: LoginResponse = normalize_record(body)?
        .ok_or_else(|| ApiError::decode("Login response carried no payload"))?;

    api.session().save_login(&login);
    Ok(login)
}

/// Logout: tell the server, then drop the local session either way
pub async fn logout(api: &ApiClient) -> Result<(), ApiError> {
    let result = api.post(endpoints::AUTH_LOGOUT).await;
    api.session().clear();
    result.map(|_| ())
}

/// Get current user info
pub async fn current_user(api: &ApiClient) -> Result<Option<UserInfo>, ApiError> {
    let body = api.get(endpoints::AUTH_ME).await?;
    normalize_record(body)
}
