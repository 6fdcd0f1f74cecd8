//! Non-graphical object builders

pub mod dictionary;

pub use dictionary::Dictionary;
