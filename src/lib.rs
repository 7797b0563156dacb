pub mod auth;
pub mod client;
pub mod core;
pub mod flow;
pub mod http;
pub mod render;
pub mod util;
