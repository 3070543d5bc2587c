pub mod check;
pub mod networks;
pub mod show;
