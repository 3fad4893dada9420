pub mod cookie;
pub mod dto;
pub mod error_mapper;
pub mod routes;
