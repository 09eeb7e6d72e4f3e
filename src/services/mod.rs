pub mod bookmark_service;
pub mod classifier;
pub mod tag_service;
pub mod user_service;

pub use bookmark_service::BookmarkService;
pub use classifier::ClassifierClient;
pub use tag_service::TagService;
pub use user_service::UserService;
