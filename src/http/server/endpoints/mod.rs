pub mod callback;
pub mod display;
pub mod login;
