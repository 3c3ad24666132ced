pub mod client;
pub mod endpoints;

pub use crate::domain::model::{normalize, Arg, Params};
pub use crate::domain::request::Request;
pub use crate::utils::error::Result;
pub use client::PestoClient;
