mod add_item;
mod edit_item;
mod favorites;
mod login;
mod order_list;
mod products;
mod shell;
mod show_item;
mod signup;

pub use add_item::AddItem;
pub use edit_item::EditItem;
pub use favorites::Favorites;
pub use login::Login;
pub use order_list::OrderList;
pub use products::Products;
pub use shell::Shell;
pub use show_item::ShowItem;
pub use signup::SignUp;

/// Inline placeholder shown when a product image fails to load.
pub(crate) const FALLBACK_IMAGE: &str = "data:image/svg+xml;utf8,\
<svg xmlns='http://www.w3.org/2000/svg' width='200' height='200'>\
<rect width='100%25' height='100%25' fill='%23e9ecef'/>\
<text x='50%25' y='50%25' dominant-baseline='middle' text-anchor='middle' \
fill='%23868e96' font-family='sans-serif' font-size='14'>No image</text></svg>";
