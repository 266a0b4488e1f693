use aws_config::{retry::RetryConfig, BehaviorVersion, Region};
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_s3::{
    config::{Credentials, StalledStreamProtectionConfig},
    Client,
};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct ProbeCredential {
    access_key_id: String,
    secret_access_key: String,
}

impl ProbeCredential {
    pub fn new(access_key_id: String, secret_access_key: String) -> Self {
        Self {
            access_key_id,
            secret_access_key,
        }
    }

    async fn load_credentials(&self) -> aws_credential_types::provider::Result {
        Ok(Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.clone(),
            None,
            None,
            "ProbeCredential",
        ))
    }
}

impl ProvideCredentials for ProbeCredential {
    fn provide_credentials<'a>(
        &'a self,
    ) -> aws_credential_types::provider::future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        aws_credential_types::provider::future::ProvideCredentials::new(self.load_credentials())
    }
}

/// Connection parameters for the target endpoint.
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
    pub region: String,
    pub force_path_style: bool,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Parameters of the one list-objects call, passed through to the wire as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRequest {
    pub bucket: String,
    pub prefix: String,
    pub max_keys: i32,
}

pub fn config_builder(config: &ClientConfig) -> aws_sdk_s3::config::Builder {
    let credential = ProbeCredential::new(
        config.access_key_id.clone(),
        config.secret_access_key.clone(),
    );
    let shared_config = aws_config::SdkConfig::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .credentials_provider(SharedCredentialsProvider::new(credential))
        .endpoint_url(&config.endpoint)
        // Max attempts 1, a failed probe is not retried.
        .retry_config(RetryConfig::standard().with_max_attempts(1))
        .build();
    // No timeout is configured anywhere, the call waits as long as the
    // endpoint keeps the connection open.
    aws_sdk_s3::config::Builder::from(&shared_config)
        .force_path_style(config.force_path_style)
        .stalled_stream_protection(StalledStreamProtectionConfig::disabled())
}

pub fn create_s3_client(config: &ClientConfig) -> Client {
    Client::from_conf(config_builder(config).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn localhost_config() -> ClientConfig {
        ClientConfig {
            endpoint: "http://localhost:80".to_string(),
            region: "us-east-1".to_string(),
            force_path_style: true,
            access_key_id: String::new(),
            secret_access_key: String::new(),
        }
    }

    #[tokio::test]
    async fn empty_credential_pair_is_served_as_is() {
        let credential = ProbeCredential::new(String::new(), String::new());
        let creds = credential.provide_credentials().await.unwrap();
        assert_eq!(creds.access_key_id(), "");
        assert_eq!(creds.secret_access_key(), "");
    }

    #[test]
    fn client_builds_from_anonymous_config() {
        let _client = create_s3_client(&localhost_config());
    }

    #[test]
    fn list_request_serializes_wire_names() {
        let request = ListRequest {
            bucket: "test".to_string(),
            prefix: "folder/".to_string(),
            max_keys: 2,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["bucket"], "test");
        assert_eq!(json["prefix"], "folder/");
        assert_eq!(json["max_keys"], 2);
    }
}
