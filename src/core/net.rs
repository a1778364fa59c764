use crate::core::error::CheckinError;

/// Read the response body as text, rejecting non-2xx statuses first.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, CheckinError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(CheckinError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp.text().await?)
}
