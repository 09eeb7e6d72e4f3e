#![allow(unused_imports)]
pub mod bookmark_helpers;
pub mod tag_helpers;
pub mod test_db;

pub use bookmark_helpers::*;
pub use tag_helpers::*;
pub use test_db::*;
