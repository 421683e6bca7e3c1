pub mod sweep;
pub mod top;
