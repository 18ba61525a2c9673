//! Shared UI for the admin panel: the session context, toasts, modal and
//! form controls, and the pure logic behind the product list (search,
//! pagination) and form validation.

use dioxus::prelude::*;

pub mod listing;
pub mod validate;

mod confirm;
pub use confirm::ConfirmPopup;

mod session;
pub use session::{use_session, SessionHandle, SessionProvider};

mod spinner;
pub use spinner::Spinner;

mod timer;
pub use timer::sleep;

mod toast;
pub use toast::{use_toast, ToastProvider, ToastVariant, Toasts};

mod upload;
pub use upload::{PickedImage, UploadBox};

pub const MAIN_CSS: Asset = asset!("/assets/ui.css");
