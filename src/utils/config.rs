use std::env;

/// Runtime configuration loaded from environment variables.
///
/// Everything that used to be a hardcoded literal (store address, allowed
/// CORS origin, upload directory) is externalized here.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: String,
    pub database_url: String,
    pub allowed_origin: String,
    pub upload_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3001".to_string()),
            database_url,
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "/tmp/uploads".to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: "8080".to_string(),
            database_url: "mongodb://localhost:27017/users".to_string(),
            allowed_origin: "http://localhost:3000".to_string(),
            upload_dir: "/tmp/uploads".to_string(),
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_missing_database_url_is_an_error() {
        env::remove_var("DATABASE_URL");
        assert!(AppConfig::from_env().is_err());
    }
}
