pub mod cli;
pub mod error;
pub mod option;
pub mod session;
