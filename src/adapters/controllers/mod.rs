pub mod random_data_controller;
pub mod upload_controller;
