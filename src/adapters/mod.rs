pub mod controllers;
pub mod dto;
pub mod error;
pub mod multipart_source;
pub mod routes;
pub mod state;

#[cfg(test)]
pub mod test_support;
