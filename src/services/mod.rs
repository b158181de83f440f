pub mod auth_service;
pub mod feed_service;
pub mod message_service;
pub mod message_view;
pub mod playback;
