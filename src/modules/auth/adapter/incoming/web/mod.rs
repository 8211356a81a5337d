pub mod dto;
pub mod extractors;
pub mod routes;
