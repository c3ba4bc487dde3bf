pub mod categories;
pub mod fitting;
pub mod form;
pub mod handlers;
pub mod models;
pub mod scorer;
