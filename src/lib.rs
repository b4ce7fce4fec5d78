pub mod api;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod home;
pub mod models;
pub mod navigation;
pub mod search_form;
pub mod spinner;
