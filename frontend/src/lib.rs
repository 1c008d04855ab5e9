pub mod api;
pub mod app;
pub mod config;
pub mod dom;
pub mod state;
pub mod components;
pub mod pages {
    pub mod landing;
}

pub use app::App;
