use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    adapters::dto::random_data_dto::RandomDataQuery,
    application::{error::ApplicationError, services::generate_points},
    domain::{config::server::ServerConfig, models::points::Point},
};

pub struct RandomDataController;

impl RandomDataController {
    /// GET /get_random_data?num_points=100&min_value=0&max_value=1
    pub async fn get_random_data(
        State(config): State<Arc<ServerConfig>>,
        Query(query): Query<RandomDataQuery>,
    ) -> Result<Json<Vec<Point>>, ApplicationError> {
        let points = generate_points(
            query.num_points,
            query.min_value,
            query.max_value,
            config.max_points,
        )?;
        Ok(Json(points))
    }
}
