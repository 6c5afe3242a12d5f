pub mod account_service;
pub mod favorite_service;
pub mod menu_service;
pub mod notification_service;
pub mod shop_service;
