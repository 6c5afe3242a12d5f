pub mod error_banner;
pub mod language_selector;
pub mod loading;
pub mod menu_card;
pub mod shop_card;
