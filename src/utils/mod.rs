pub mod http;
pub mod info;

pub use http::*;
pub use info::*;
