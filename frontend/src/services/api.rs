use gloo::net::http::Request;
use shared::{decode_month_summaries, CredentialProvider, DaySummary, FetchError, MonthKey, SummaryRequest};

/// API client for the diary backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create an API client talking to the page's own origin
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Plan the month calendar request. Fails with `MissingToken` before any
    /// network activity when no credential is stored.
    pub fn month_calendar_request(
        &self,
        month_key: &MonthKey,
        credentials: &dyn CredentialProvider,
    ) -> Result<SummaryRequest, FetchError> {
        SummaryRequest::new(&self.base_url, month_key, credentials)
    }

    /// Get the per-day summaries of one month
    pub async fn get_month_calendar(&self, request: &SummaryRequest) -> Result<Vec<DaySummary>, FetchError> {
        let response = Request::get(request.url())
            .header("authorization", &request.authorization())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Server { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        decode_month_summaries(&body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{month_key, StaticToken};

    #[test]
    fn test_month_calendar_request_uses_base_url() {
        let client = ApiClient::with_base_url("https://diary.example".to_string());
        let key = month_key(NaiveDate::from_ymd_opt(2024, 11, 3).unwrap());

        let request = client
            .month_calendar_request(&key, &StaticToken::new("t0k"))
            .unwrap();
        assert_eq!(
            request.url(),
            "https://diary.example/api/contents/monthCalendar/202411"
        );
        assert_eq!(request.authorization(), "Bearer t0k");
    }

    #[test]
    fn test_no_token_no_request() {
        let client = ApiClient::new();
        let key = month_key(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        assert_eq!(
            client.month_calendar_request(&key, &StaticToken::none()),
            Err(FetchError::MissingToken)
        );
    }
}
