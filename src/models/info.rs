use serde::Serialize;

use crate::config::env_or;

pub const SERVICE_NAME: &str = "inventory-service";
pub const SERVICE_VERSION: &str = "1.0.0";
pub const ENVIRONMENT: &str = "development";
pub const DESCRIPTION: &str = "Inventory management microservice for xShop.ai platform";

/// Full metadata payload for `GET /`. Built fresh per request so deployments
/// that inject variables at process start are always reflected as-is.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub description: String,
    pub environment: String,
}

impl ServiceInfo {
    pub fn from_env() -> Self {
        Self {
            service: env_or("NAME", SERVICE_NAME),
            version: env_or("VERSION", SERVICE_VERSION),
            description: DESCRIPTION.to_string(),
            environment: env_or("APP_ENV", ENVIRONMENT),
        }
    }
}

/// Short payload for `GET /version`.
#[derive(Debug, Serialize)]
pub struct VersionInfo {
    pub version: String,
    pub service: String,
}

impl VersionInfo {
    pub fn from_env() -> Self {
        Self {
            version: env_or("VERSION", SERVICE_VERSION),
            service: env_or("NAME", SERVICE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_info_serializes_all_four_fields() {
        let info = ServiceInfo {
            service: "inventory-service".to_string(),
            version: "1.0.0".to_string(),
            description: DESCRIPTION.to_string(),
            environment: "development".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({
                "service": "inventory-service",
                "version": "1.0.0",
                "description": "Inventory management microservice for xShop.ai platform",
                "environment": "development",
            })
        );
    }

    #[test]
    fn version_info_serializes_both_fields() {
        let info = VersionInfo {
            version: "9.9.9".to_string(),
            service: "bar".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({ "version": "9.9.9", "service": "bar" })
        );
    }

    #[test]
    fn description_is_not_configurable() {
        assert_eq!(
            ServiceInfo::from_env().description,
            "Inventory management microservice for xShop.ai platform"
        );
    }
}
