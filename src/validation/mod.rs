pub mod redirect;
pub mod webfinger;

pub use redirect::*;
pub use webfinger::*;
