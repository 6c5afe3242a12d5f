mod favorites;
#[cfg(test)]
mod favorites_test;
mod home;
mod login;
mod menu_detail;
mod not_found;
mod notifications;
mod post;
mod profile;
mod profile_edit;
mod register;
mod register_shop;
mod shop_detail;
mod shops;

pub use favorites::FavoritesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use menu_detail::MenuDetailPage;
pub use not_found::NotFoundPage;
pub use notifications::NotificationsPage;
pub use post::PostPage;
pub use profile::ProfilePage;
pub use profile_edit::ProfileEditPage;
pub use register::RegisterPage;
pub use register_shop::RegisterShopPage;
pub use shop_detail::ShopDetailPage;
pub use shops::ShopsPage;

use crate::api::ApiError;
use crate::session::store::{self, SessionState};
use yew::UseStateHandle;
use yewdux::Dispatch;

/// Shared failure path for page fetches.
///
/// A rejected bearer clears the session; the gate's store subscription then
/// redirects to login. Anything else stays inline so the page keeps its
/// content mounted.
pub(crate) fn surface_error(
    err: &ApiError,
    dispatch: &Dispatch<SessionState>,
    error: &UseStateHandle<Option<String>>,
) {
    match err {
        ApiError::Unauthorized => store::clear_session(dispatch),
        other => error.set(Some(other.to_string())),
    }
}
