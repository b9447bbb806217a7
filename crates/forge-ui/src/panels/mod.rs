pub mod chat;
pub mod home;
pub mod nav;
pub mod projects;
pub mod settings;
pub mod toasts;
