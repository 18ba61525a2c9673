use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque product identifier, assigned by the remote API.
///
/// The API serves ids as JSON numbers but they are only ever echoed back in
/// URL paths, so the client keeps them as strings and accepts either wire
/// form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u64),
            Str(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(n) => ItemId(n.to_string()),
            Raw::Str(s) => ItemId(s),
        })
    }
}

/// One catalog entry as returned by `GET /items`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: ItemId,
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub image_url: String,
}

/// Body of `GET /items/:id`. The detail endpoint does not echo the id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDetail {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    pub user_name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Body of `POST /register`: the token is nested under `data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct RegisterResponse {
    pub data: RegisterData,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct RegisterData {
    pub token: String,
}

/// A picked image ready for multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Wraps raw bytes, inferring the MIME type from the file extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Fields for `POST /items`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: String,
    pub image: ImageFile,
}

/// Fields for the method-overridden `POST /items/:id`; the image is only
/// sent when the user picked a replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateItem {
    pub name: String,
    pub price: String,
    pub image: Option<ImageFile>,
}

/// Fields for `POST /register`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterPayload {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub profile_image: Option<ImageFile>,
}
