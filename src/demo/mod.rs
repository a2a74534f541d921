pub mod list;
pub mod login;
