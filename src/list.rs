use crate::basic::ListRequest;
use aws_sdk_s3::operation::list_objects::ListObjectsOutput;
use aws_sdk_s3::Client;
use aws_smithy_types::error::display::DisplayErrorContext;
use log::{error, info};

/// Outcome of one probe run. Exactly one branch fires per call.
#[derive(Debug)]
pub enum ListingOutcome {
    Listed(ListObjectsOutput),
    Failed {
        message: String,
        raw_body: Option<String>,
    },
}

impl ListingOutcome {
    pub fn is_listed(&self) -> bool {
        matches!(self, ListingOutcome::Listed(_))
    }
}

/// Send one list-objects request and log whichever way it went.
/// Every failure kind collapses into `Failed`; when the error still holds the
/// raw http response body, its string form is logged alongside the error.
pub async fn run_listing(client: &Client, request: &ListRequest) -> ListingOutcome {
    info!("sending request to s3-compatible api");
    let result = client
        .list_objects()
        .bucket(&request.bucket)
        .prefix(&request.prefix)
        .max_keys(request.max_keys)
        .send()
        .await;
    match result {
        Ok(response) => {
            info!("s3 api response: {:?}", response);
            ListingOutcome::Listed(response)
        }
        Err(err) => {
            let message = DisplayErrorContext(&err).to_string();
            error!("list_objects failed: {}", message);
            let raw_body = err
                .raw_response()
                .and_then(|response| response.body().bytes())
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned());
            if let Some(raw) = &raw_body {
                info!("raw response: {}", raw);
            }
            ListingOutcome::Failed { message, raw_body }
        }
    }
}
