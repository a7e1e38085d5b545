use serde::{Deserialize, Serialize};

/// The result of a single GET. Absent body/status means the request failed
/// at the network level (timeout, DNS, connect, TLS); that is a normal
/// outcome here, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOutcome {
    pub requested_url: String,
    pub resolved_url: Option<String>,
    pub http_status: Option<u16>,
    pub body: Option<String>,
    pub byte_size: usize,
}

impl FetchOutcome {
    pub fn failed(requested_url: String) -> Self {
        Self {
            requested_url,
            resolved_url: None,
            http_status: None,
            body: None,
            byte_size: 0,
        }
    }

    /// A usable page: body present and status below the error range.
    pub fn is_success(&self) -> bool {
        self.body.is_some() && matches!(self.http_status, Some(status) if status < 400)
    }
}
