pub mod auth;
pub mod favorites;
pub mod menus;
pub mod notifications;
pub mod shops;
pub mod uploads;
