// Standard library
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use tracing::{debug, info, warn};

// Current module imports
use super::constants::{default_request_timeout, IPV4_SERVICES};
use super::errors::{IpDetectionError, IpDetectionValidationError};
use super::traits::Ipv4Detector;
use super::types::{IpDetection, IpDetector, IpService, LocationInfo, ResponseFormat};

impl Default for IpDetection {
    fn default() -> Self {
        Self {
            timeout: default_request_timeout(),
        }
    }
}

impl IpDetection {
    pub fn validate(&self) -> Result<(), IpDetectionValidationError> {
        if self.timeout == 0 {
            return Err(IpDetectionValidationError::InvalidTimeout(
                "timeout must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

impl IpService {
    pub fn new(url: impl Into<String>, format: ResponseFormat) -> Self {
        Self {
            url: url.into(),
            format,
        }
    }
}

impl IpDetector {
    /// Creates a detector using the built-in service list.
    pub fn new(config: IpDetection, client: reqwest::Client) -> Self {
        let services = IPV4_SERVICES
            .iter()
            .map(|(url, format)| IpService::new(*url, *format))
            .collect();

        Self::with_services(config, client, services)
    }

    pub fn with_services(
        config: IpDetection,
        client: reqwest::Client,
        services: Vec<IpService>,
    ) -> Self {
        Self {
            services,
            timeout: Duration::from_secs(config.timeout),
            client,
        }
    }

    async fn query_ip_service(&self, service: &IpService) -> Result<Ipv4Addr, IpDetectionError> {
        let request = async {
            self.client
                .get(&service.url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await
        };

        let body = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| IpDetectionError::Timeout {
                service: service.url.clone(),
                timeout_secs: self.timeout.as_secs(),
            })?
            .map_err(|error| IpDetectionError::NetworkError {
                service: service.url.clone(),
                error,
            })?;

        let candidate = match service.format {
            ResponseFormat::Json => serde_json::from_str::<LocationInfo>(&body)
                .map_err(|_| IpDetectionError::InvalidResponse {
                    service: service.url.clone(),
                    response: body.clone(),
                })?
                .ip,
            ResponseFormat::Text => body.clone(),
        };

        let ip: IpAddr =
            candidate
                .trim()
                .parse()
                .map_err(|_| IpDetectionError::InvalidResponse {
                    service: service.url.clone(),
                    response: body.clone(),
                })?;

        // Validate IP version matches what we requested
        match ip {
            IpAddr::V4(ipv4) => Ok(ipv4),
            IpAddr::V6(_) => Err(IpDetectionError::VersionMismatch {
                service: service.url.clone(),
                got: ip,
            }),
        }
    }
}

#[async_trait]
impl Ipv4Detector for IpDetector {
    /// Tries each service in order and returns the first valid IPv4 address.
    async fn detect_ipv4(&self) -> Option<Ipv4Addr> {
        for service in &self.services {
            match self.query_ip_service(service).await {
                Ok(ip) => {
                    info!("Public 🧩 IPv4 detected via {}: {}", service.url, ip);
                    return Some(ip);
                }
                Err(e) => {
                    debug!("🧩 IPv4 detection failed: {}", e);
                }
            }
        }

        warn!(
            "🧩 No IPv4 address detected from {} services",
            self.services.len()
        );
        None
    }
}
