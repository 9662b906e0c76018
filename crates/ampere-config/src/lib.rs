pub mod bank;
pub mod course;
pub mod document;
pub mod error;
pub mod page;
pub mod question;
pub mod warning;
