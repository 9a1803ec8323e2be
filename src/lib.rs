pub mod menu;
pub mod view;
