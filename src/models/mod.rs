pub mod admin_session;
pub mod batch;
pub mod camp;
pub mod font;
pub mod message;
