pub mod commands;
pub mod dict_source;
pub mod settings;
