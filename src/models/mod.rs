pub mod bookmark;
pub mod classification;
pub mod tag;
pub mod user;

pub use bookmark::*;
pub use classification::*;
pub use tag::*;
pub use user::*;
