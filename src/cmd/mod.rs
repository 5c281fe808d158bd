pub mod detect;
pub mod embed;
pub mod resolve;
pub mod thumbnail;
pub mod validate;
