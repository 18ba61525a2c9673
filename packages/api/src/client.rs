use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};

use crate::error::{ApiError, FieldErrors};
use crate::models::{
    ImageFile, ItemDetail, ItemId, LoginResponse, NewItem, Product, RegisterPayload,
    RegisterResponse, UpdateItem,
};

/// The deployed catalog API.
pub const DEFAULT_BASE_URL: &str = "https://web-production-3ca4c.up.railway.app/api";

/// Typed client for the remote catalog service.
///
/// Every method issues exactly one request and maps the response to a typed
/// body or an [`ApiError`]. There is deliberately no retry, timeout or
/// backoff here; callers surface failures to the user immediately.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /login` with a JSON body.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        Ok(decoded(response).await?.json().await?)
    }

    /// `POST /register` as multipart form data. Returns the new bearer token.
    pub async fn register(&self, payload: RegisterPayload) -> Result<String, ApiError> {
        let mut form = Form::new()
            .text("first_name", payload.first_name)
            .text("last_name", payload.last_name)
            .text("user_name", payload.user_name)
            .text("email", payload.email)
            .text("password", payload.password)
            .text("password_confirmation", payload.password_confirmation);
        if let Some(image) = payload.profile_image {
            form = form.part("profile_image", image_part(image)?);
        }

        let response = self
            .http
            .post(self.url("/register"))
            .multipart(form)
            .send()
            .await?;
        let body: RegisterResponse = decoded(response).await?.json().await?;
        Ok(body.data.token)
    }

    /// `GET /items` — the full catalog; filtering and paging happen
    /// client-side.
    pub async fn list_items(&self, token: &str) -> Result<Vec<Product>, ApiError> {
        let response = self
            .http
            .get(self.url("/items"))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(decoded(response).await?.json().await?)
    }

    /// `GET /items/:id`.
    pub async fn get_item(&self, token: &str, id: &ItemId) -> Result<ItemDetail, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/items/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Ok(decoded(response).await?.json().await?)
    }

    /// `POST /items` as multipart form data.
    pub async fn create_item(&self, token: &str, item: NewItem) -> Result<(), ApiError> {
        let form = Form::new()
            .text("name", item.name)
            .text("price", item.price)
            .part("image", image_part(item.image)?);

        let response = self
            .http
            .post(self.url("/items"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        decoded(response).await?;
        Ok(())
    }

    /// `POST /items/:id` with a `_method=PUT` override, as the API expects
    /// for multipart updates.
    pub async fn update_item(
        &self,
        token: &str,
        id: &ItemId,
        item: UpdateItem,
    ) -> Result<(), ApiError> {
        let mut form = Form::new()
            .text("name", item.name)
            .text("price", item.price)
            .text("_method", "PUT");
        if let Some(image) = item.image {
            form = form.part("image", image_part(image)?);
        }

        let response = self
            .http
            .post(self.url(&format!("/items/{id}")))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        decoded(response).await?;
        Ok(())
    }

    /// `DELETE /items/:id`.
    pub async fn delete_item(&self, token: &str, id: &ItemId) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/items/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        decoded(response).await?;
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn image_part(image: ImageFile) -> Result<Part, ApiError> {
    let part = Part::bytes(image.bytes)
        .file_name(image.file_name)
        .mime_str(&image.mime)?;
    Ok(part)
}

/// Maps a response to the gateway error taxonomy: 2xx passes through, 401 is
/// [`ApiError::Unauthorized`], 422 carries [`FieldErrors`], anything else is
/// a server error with whatever text the body held.
async fn decoded(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::UNPROCESSABLE_ENTITY => {
            let errors: FieldErrors = response.json().await.unwrap_or_default();
            Err(ApiError::Validation(errors))
        }
        _ => {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}
