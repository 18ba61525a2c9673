//! Image picker used by the signup, add and edit forms.
//!
//! A styled `label` targets a hidden file input, so no script is needed to
//! open the browser's picker. The selected file is read through the Dioxus
//! file engine and handed to the parent as bytes plus a base64 data URL for
//! the preview. The data URL is also what the signup flow persists as the
//! avatar.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use dioxus::prelude::*;

use api::ImageFile;

/// An image chosen in the picker: upload payload plus preview source.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedImage {
    pub file: ImageFile,
    pub preview_url: String,
}

impl PickedImage {
    pub fn new(file: ImageFile) -> Self {
        let preview_url = data_url(&file);
        Self { file, preview_url }
    }
}

fn data_url(file: &ImageFile) -> String {
    format!("data:{};base64,{}", file.mime, BASE64.encode(&file.bytes))
}

/// Click-to-pick upload box with preview.
///
/// `preview` is the currently displayed image (a data URL for a fresh pick,
/// or an existing remote URL on the edit screen); `invalid` draws the error
/// border.
#[component]
pub fn UploadBox(
    id: String,
    preview: Option<String>,
    #[props(default)] invalid: bool,
    on_pick: EventHandler<PickedImage>,
) -> Element {
    let on_change = move |evt: FormEvent| {
        if let Some(file_engine) = evt.files() {
            let Some(name) = file_engine.files().first().cloned() else {
                return;
            };
            spawn(async move {
                match file_engine.read_file(&name).await {
                    Some(bytes) => {
                        on_pick.call(PickedImage::new(ImageFile::new(name, bytes)));
                    }
                    None => tracing::error!("failed to read selected file {name}"),
                }
            });
        }
    };

    rsx! {
        label {
            r#for: "{id}",
            class: if invalid { "upload-box upload-box-invalid" } else { "upload-box" },
            if let Some(src) = preview {
                img { class: "upload-preview", src: "{src}", alt: "Preview" }
            } else {
                span { class: "upload-icon", "\u{2b06}" }
            }
        }
        input {
            id: "{id}",
            r#type: "file",
            accept: "image/*",
            class: "upload-input",
            onchange: on_change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picked_image_preview_is_a_data_url() {
        let picked = PickedImage::new(ImageFile::new("photo.png", vec![1, 2, 3]));
        assert!(picked.preview_url.starts_with("data:image/png;base64,"));
        assert_eq!(picked.file.file_name, "photo.png");
    }
}
