use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base address of the upstream pensioner detail service
    pub pensioner_detail_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            pensioner_detail_url: env::var("PENSIONER_DETAIL_URL")
                .unwrap_or_else(|_| "http://localhost:5001".to_string()),
        }
    }
}
