pub mod analysis;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod stopwords;
// cmd and reports are binary modules, declared in main.rs.
