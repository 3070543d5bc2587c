pub mod check;
pub mod explain;
pub mod networks;
pub mod paths;
pub mod project_root;
pub mod show;
