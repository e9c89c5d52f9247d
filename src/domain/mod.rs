pub mod args;
pub mod endpoint;
pub mod outcome;
pub mod webfinger;

pub use args::*;
pub use endpoint::*;
pub use outcome::*;
pub use webfinger::*;
