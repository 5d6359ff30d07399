pub mod app;
pub mod cursor;
pub mod edit;
