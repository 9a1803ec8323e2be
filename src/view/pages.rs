pub mod about;
pub mod blog;
pub mod faqs;
pub mod home;
pub mod not_found;
pub mod projects;
pub mod quote;
pub mod services;
