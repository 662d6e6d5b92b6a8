pub mod compiler;
pub mod config;
pub mod filesystem_utils;
pub mod path_literal;
pub mod shader;
