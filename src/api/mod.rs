mod error;
mod handlers;
mod pages;
mod types;

pub use handlers::create_router;
