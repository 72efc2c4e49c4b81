use contracts::domain::a001_brand::aggregate::{Brand, BrandDto};
use contracts::domain::common::ListQuery;
use reqwest::Method;

use crate::shared::api_utils::list_query_string;
use crate::shared::endpoints;
use crate::shared::envelope::{normalize_list, normalize_record};
use crate::shared::error::ApiError;
use crate::shared::http::{form_fields, ApiClient, FileField};

/// Fetch all brands
pub async fn fetch_brands(api: &ApiClient, query: &ListQuery) -> Result<Vec<Brand>, ApiError> {
    let path = format!("{}{}", endpoints::GET_ALL_BRAND, list_query_string(query));
    let body = api.get(&path).await?;
    normalize_list(body)
}

/// Fetch single brand
pub async fn fetch_brand(api: &ApiClient, id: &str) -> Result<Option<Brand>, ApiError> {
    let body = match api.get(&endpoints::get_brand(id)).await {
        Ok(body) => body,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };
    normalize_record(body)
}

/// Create brand. A logo file forces a multipart request.
pub async fn create_brand(
    api: &ApiClient,
    dto: &BrandDto,
    logo: Option<FileField>,
) -> Result<Option<Brand>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let body = match logo {
        Some(file) => {
            api.send_multipart(
                Method::POST,
                endpoints::CREATE_BRAND,
                form_fields(dto)?,
                vec![("logo".to_string(), file)],
            )
            .await?
        }
        None => {
            api.send_json(Method::POST, endpoints::CREATE_BRAND, dto)
                .await?
        }
    };
    normalize_record(body)
}

/// Update brand
pub async fn update_brand(
    api: &ApiClient,
    id: &str,
    dto: &BrandDto,
    logo: Option<FileField>,
) -> Result<Option<Brand>, ApiError> {
    dto.validate().map_err(ApiError::validation)?;
    let path = endpoints::update_brand(id);
    let body = match logo {
        Some(file) => {
            api.send_multipart(
                Method::PUT,
                &path,
                form_fields(dto)?,
                vec![("logo".to_string(), file)],
            )
            .await?
        }
        None => api.send_json(Method::PUT, &path, dto).await?,
    };
    normalize_record(body)
}

/// Delete brand
pub async fn delete_brand(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete(&endpoints::delete_brand(id)).await?;
    Ok(())
}

/// Flip the active flag, returns the updated record
pub async fn toggle_brand_status(api: &ApiClient, id: &str) -> Result<Option<Brand>, ApiError> {
    let body = api.post(&endpoints::brand_toggle_status(id)).await?;
    normalize_record(body)
}

/// Make this the default brand for new products
pub async fn set_default_brand(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.post(&endpoints::brand_set_default(id)).await?;
    Ok(())
}
