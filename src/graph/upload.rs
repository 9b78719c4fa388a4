use reqwest::StatusCode;

use crate::core::{GraphErrorKind, Result};

/// Send the graph data to the server and return the graph URL it answers with.
pub async fn upload(api_url: &str, data: &str, title: &str) -> Result<String> {
    tracing::debug!("Uploading {} bytes of graph data to {api_url}", data.len());

    let failed = |reason: String| GraphErrorKind::UploadFailed { reason };

    let response = reqwest::Client::new()
        .post(api_url)
        .form(&[("data", data), ("title", title)])
        .send()
        .await
        .map_err(|e| failed(e.to_string()))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| failed(e.to_string()))?;

    if status != StatusCode::OK {
        tracing::debug!("Server answered {status}: {body}");
        return Err(failed(format!("server didn't return a graph URL ({status})")).into());
    }

    Ok(body)
}
