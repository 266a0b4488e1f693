use log::info;
use lumi_probe::{create_s3_client, init_logging, run_listing, ClientConfig, ListRequest};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = init_logging()?;
    let config: ClientConfig = serde_json::from_value(json!({
        "endpoint": "http://localhost:80",
        "region": "us-east-1",
        "force_path_style": true,
        "access_key_id": "",
        "secret_access_key": ""
    }))?;
    let request: ListRequest = serde_json::from_value(json!({
        "bucket": "test",
        "prefix": "folder/",
        "max_keys": 2
    }))?;
    let client = create_s3_client(&config);
    let outcome = run_listing(&client, &request).await;
    // The exit status stays 0 whichever branch fired.
    info!("probe finished, listed: {}", outcome.is_listed());
    Ok(())
}
