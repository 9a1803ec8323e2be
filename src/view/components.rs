pub mod header;
pub mod menu;
pub mod page;
