//! Infrastructure layer: concrete storage, connection handles and DTOs.

pub mod connection;
pub mod dto;
pub mod repository;
