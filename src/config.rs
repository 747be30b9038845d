use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Every value has a default,
    /// `DATABASE_URL` overrides the individual `DB_*` parts.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => {
                let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string());
                let user = lookup("DB_USER").unwrap_or_else(|| "postgres".to_string());
                let password = lookup("DB_PASSWORD").unwrap_or_default();
                let name = lookup("DB_NAME").unwrap_or_else(|| "shop_db".to_string());
                let db_port = lookup("DB_PORT")
                    .and_then(|p| p.parse::<u16>().ok())
                    .unwrap_or(5432);
                compose_database_url(&user, &password, &host, db_port, &name)
            }
        };
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        Ok(Self {
            port,
            database_url,
            host,
        })
    }
}

fn compose_database_url(user: &str, password: &str, host: &str, port: u16, name: &str) -> String {
    if password.is_empty() {
        format!("postgres://{user}@{host}:{port}/{name}")
    } else {
        format!("postgres://{user}:{password}@{host}:{port}/{name}")
    }
}
