pub mod api;
pub mod dispatch;
pub mod html;
pub mod image;
pub mod page;
pub mod place;
pub mod resolver;
pub mod server;
pub mod settings;
pub mod state;
pub mod view;
