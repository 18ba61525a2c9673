use dioxus::prelude::*;

use ui::{SessionProvider, ToastProvider};
use views::{AddItem, EditItem, Favorites, Login, OrderList, Products, Shell, ShowItem, SignUp};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/signup")]
    SignUp {},
    #[layout(Shell)]
        #[route("/products")]
        Products {},
        #[route("/products/add")]
        AddItem {},
        #[route("/products/edit/:id")]
        EditItem { id: String },
        #[route("/products/show/:id")]
        ShowItem { id: String },
        #[route("/favorites")]
        Favorites {},
        #[route("/orderlist")]
        OrderList {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Base URL of the remote catalog API. Override at build time with
/// `CATALOG_API_BASE`.
const API_BASE_URL: &str = match option_env!("CATALOG_API_BASE") {
    Some(url) => url,
    None => api::client::DEFAULT_BASE_URL,
};

fn api_client() -> api::ApiClient {
    api::ApiClient::new(API_BASE_URL)
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
