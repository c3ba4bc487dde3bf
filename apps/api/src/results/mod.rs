pub mod email;
pub mod handlers;
pub mod models;
pub mod sink;
