/// Health check implementations for the store actor
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::store::ClicheStore;

/// Overall health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub checks: Vec<HealthCheck>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Individual health check result
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: String,
    pub message: Option<String>,
    pub duration_ms: f64,
}

/// Round-trip a read through the store actor
pub async fn check_store_health(store: &Arc<dyn ClicheStore>) -> HealthCheck {
    let start = std::time::Instant::now();

    match store.list_all().await {
        Ok(_) => HealthCheck {
            name: "store".to_string(),
            status: "healthy".to_string(),
            message: None,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        },
        Err(e) => HealthCheck {
            name: "store".to_string(),
            status: "unhealthy".to_string(),
            message: Some(format!("Store check failed: {}", e)),
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        },
    }
}

/// Get overall health status by checking all components
pub async fn get_health_status(store: &Arc<dyn ClicheStore>) -> HealthStatus {
    let checks = vec![check_store_health(store).await];

    let all_healthy = checks.iter().all(|c| c.status == "healthy");

    HealthStatus {
        status: if all_healthy {
            "healthy".to_string()
        } else {
            "unhealthy".to_string()
        },
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks,
    }
}
