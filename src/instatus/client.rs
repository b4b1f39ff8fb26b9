use reqwest::blocking;
use reqwest::StatusCode;
use thiserror::Error;

use super::model::MetricRecord;
use super::model::MetricSample;

/// Production API root; tests point the client at a local mock instead.
pub const DEFAULT_BASE_URL: &str = "https://api.instatus.com/v1";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("unexpected {status} response from {url}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
}

/// Authenticated client for one status page's metrics resource.
pub struct Client {
    http: blocking::Client,
    base_url: String,
    page: String,
    key: String,
}

impl Client {
    pub fn new(page: &str, key: &str) -> Client {
        Client::with_base_url(DEFAULT_BASE_URL, page, key)
    }

    pub fn with_base_url(base_url: &str, page: &str, key: &str) -> Client {
        Client {
            http: blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            page: page.to_string(),
            key: key.to_string(),
        }
    }

    /// Endpoint of the page's metrics collection.
    pub fn metrics_url(&self) -> String {
        format!("{}/{}/metrics", self.base_url, self.page)
    }

    fn metric_url(&self, metric: &str) -> String {
        format!("{}/{}", self.metrics_url(), metric)
    }

    /// Fetch the metrics configured on the page.
    ///
    /// Anything but a 200 is reported as [`ApiError::Status`].
    pub fn list_metrics(&self) -> Result<Vec<MetricRecord>, ApiError> {
        let url = self.metrics_url();
        let response = self.http.get(&url).bearer_auth(&self.key).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Status { url, status, body });
        }
        Ok(response.json()?)
    }

    /// Fetch the metrics, treating a rejected request as an empty page.
    ///
    /// The failed response is logged and an empty list returned, so a page
    /// without metrics and a rejected request look the same to the caller.
    /// Transport failures still propagate.
    pub fn get_metrics(&self) -> Result<Vec<MetricRecord>, ApiError> {
        match self.list_metrics() {
            Ok(metrics) => Ok(metrics),
            Err(err @ ApiError::Status { .. }) => {
                log::error!("Error: {err}");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Append one data point to the metric's series.
    pub fn add_sample(&self, metric: &str, sample: &MetricSample) -> Result<(), ApiError> {
        let url = self.metric_url(metric);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.key)
            .json(sample)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Status { url, status, body });
        }
        log::info!("Uploaded sample for {}: {:?}", metric, sample);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::super::test_data::METRICS_BODY;
    use super::*;

    fn client_for(server: &MockServer) -> Client {
        Client::with_base_url(&server.base_url(), "abc", "k3y")
    }

    #[test]
    fn builds_the_documented_metrics_url() {
        let client = Client::new("abc", "k3y");
        assert_eq!(
            client.metrics_url(),
            "https://api.instatus.com/v1/abc/metrics"
        );
    }

    #[test]
    fn returns_the_response_body_verbatim() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/abc/metrics")
                .header("authorization", "Bearer k3y");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"id":"m1"},{"id":"m2"}]"#);
        });

        let metrics = client_for(&server).get_metrics().unwrap();

        mock.assert();
        assert_eq!(metrics, vec![json!({"id": "m1"}), json!({"id": "m2"})]);
    }

    #[test]
    fn only_a_200_counts_as_success() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/abc/metrics");
            then.status(204);
        });

        let err = client_for(&server).list_metrics().unwrap_err();
        match err {
            ApiError::Status { status, .. } => assert_eq!(status, StatusCode::NO_CONTENT),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejected_request_reads_as_an_empty_page() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/abc/metrics");
            then.status(403).body(r#"{"error":"unauthorized"}"#);
        });

        let metrics = client_for(&server).get_metrics().unwrap();

        mock.assert();
        assert!(metrics.is_empty());
    }

    #[test]
    fn repeated_fetches_return_the_same_metrics() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/abc/metrics");
            then.status(200)
                .header("content-type", "application/json")
                .body(METRICS_BODY);
        });

        let client = client_for(&server);
        let first = client.get_metrics().unwrap();
        let second = client.get_metrics().unwrap();

        mock.assert_hits(2);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn posts_the_sample_to_the_metric() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/abc/metrics/m1")
                .header("authorization", "Bearer k3y")
                .json_body(json!({"timestamp": 1_700_000_000_000_i64, "value": 87.0}));
            then.status(200).body("{}");
        });

        let sample = MetricSample {
            timestamp: 1_700_000_000_000,
            value: 87.0,
        };
        client_for(&server).add_sample("m1", &sample).unwrap();

        mock.assert();
    }

    #[test]
    fn failed_push_is_surfaced() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/abc/metrics/m1");
            then.status(500).body("boom");
        });

        let sample = MetricSample {
            timestamp: 1,
            value: 2.0,
        };
        let err = client_for(&server).add_sample("m1", &sample).unwrap_err();
        assert!(
            matches!(err, ApiError::Status { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}
