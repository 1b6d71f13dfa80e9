pub mod api_utils;
pub mod dialogs;
pub mod icons;
pub mod loading_guard;
pub mod modal;
pub mod resource_api;
pub mod resource_page;
