pub mod auth_dto;
pub mod message_dto;
pub mod secret_dto;
