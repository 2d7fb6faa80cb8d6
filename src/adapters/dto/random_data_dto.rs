use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RandomDataQuery {
    #[serde(default = "default_num_points")]
    pub num_points: i64,
    #[serde(default)]
    pub min_value: f64,
    #[serde(default = "default_max_value")]
    pub max_value: f64,
}

fn default_num_points() -> i64 {
    100
}

fn default_max_value() -> f64 {
    1.0
}
