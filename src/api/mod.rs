pub mod middleware;

pub mod bookmarks;
pub mod ml;
pub mod router;
pub mod tags;
pub mod users;

pub use middleware::*;
pub use router::build_router;
