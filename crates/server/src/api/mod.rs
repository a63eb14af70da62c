pub mod filename;
pub mod handlers;
pub mod middleware;
pub mod release_groups;
pub mod routes;
pub mod subtitles;

pub use routes::create_router;
