use crate::error::{FeedbackError, Result};
use crate::feedback::Feedback;
use crate::sink::FeedbackSink;

#[cfg(feature = "http")]
mod imp {
    use super::{Feedback, FeedbackError, FeedbackSink, Result};
    use reqwest::blocking::Client;
    use std::time::Duration;

    /// POSTs each submission as JSON.
    #[derive(Debug, Clone)]
    pub struct HttpSink {
        endpoint: String,
        timeout: Duration,
    }

    impl HttpSink {
        pub fn new(endpoint: String, timeout: Duration) -> Self {
            Self { endpoint, timeout }
        }
    }

    impl FeedbackSink for HttpSink {
        fn sink_name(&self) -> &'static str {
            "http"
        }

        fn deliver(&self, feedback: &Feedback) -> Result<()> {
            if !self.endpoint.starts_with("https://") && !self.endpoint.starts_with("http://") {
                return Err(FeedbackError::Delivery(format!(
                    "unsupported endpoint: {}",
                    self.endpoint
                )));
            }
            let client = Client::builder()
                .user_agent("flowsure")
                .timeout(self.timeout)
                .connect_timeout(self.timeout)
                .build()
                .map_err(|err| FeedbackError::Delivery(err.to_string()))?;
            client
                .post(&self.endpoint)
                .json(feedback)
                .send()
                .and_then(|response| response.error_for_status())
                .map_err(|err| FeedbackError::Delivery(err.to_string()))?;
            Ok(())
        }
    }
}

#[cfg(not(feature = "http"))]
mod imp {
    use super::{Feedback, FeedbackError, FeedbackSink, Result};
    use std::time::Duration;

    #[derive(Debug, Clone)]
    pub struct HttpSink {
        endpoint: String,
        timeout: Duration,
    }

    impl HttpSink {
        pub fn new(endpoint: String, timeout: Duration) -> Self {
            Self { endpoint, timeout }
        }
    }

    impl FeedbackSink for HttpSink {
        fn sink_name(&self) -> &'static str {
            "http"
        }

        fn deliver(&self, _feedback: &Feedback) -> Result<()> {
            let _ = (&self.endpoint, self.timeout);
            Err(FeedbackError::Unavailable(
                "HTTP feedback delivery requires the http feature".to_string(),
            ))
        }
    }
}

pub use imp::HttpSink;
