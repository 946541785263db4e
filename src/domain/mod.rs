pub mod directory_path;
pub mod path_error;
pub mod rename_rule;
