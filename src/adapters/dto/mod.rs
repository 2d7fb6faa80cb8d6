pub mod random_data_dto;
pub mod upload_dto;
