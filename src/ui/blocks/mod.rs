pub mod check_item;
pub mod header;
