use async_trait::async_trait;

use crate::{Acknowledgement, Submission};

/// Transport used by [`crate::ContactForm`] to reach the submission endpoint.
#[async_trait]
pub trait MessageClient: Send + Sync {
    async fn send(&self, submission: &Submission) -> folio_shared::Result<Acknowledgement>;
}

#[cfg(feature = "http")]
mod http {
    use async_trait::async_trait;
    use folio_shared::bail;
    use url::Url;

    use super::MessageClient;
    use crate::{Acknowledgement, MESSAGE_PATH, Submission};

    /// Posts submissions as JSON to a running site.
    ///
    /// A response only counts as delivered when the status is 2xx and the
    /// body acknowledges it with `{"success": true}`.
    #[derive(Clone, Debug)]
    pub struct HttpMessageClient {
        http: reqwest::Client,
        endpoint: Url,
    }

    impl HttpMessageClient {
        pub fn new(endpoint: Url) -> Self {
            Self {
                http: reqwest::Client::new(),
                endpoint,
            }
        }

        /// Builds a client for the endpoint of the site served at `base_url`.
        pub fn from_base_url(base_url: &str) -> folio_shared::Result<Self> {
            let base = Url::parse(base_url).map_err(anyhow::Error::from)?;
            let endpoint = base.join(MESSAGE_PATH).map_err(anyhow::Error::from)?;

            Ok(Self::new(endpoint))
        }

        pub fn endpoint(&self) -> &Url {
            &self.endpoint
        }
    }

    #[async_trait]
    impl MessageClient for HttpMessageClient {
        async fn send(&self, submission: &Submission) -> folio_shared::Result<Acknowledgement> {
            let response = self
                .http
                .post(self.endpoint.clone())
                .json(submission)
                .send()
                .await
                .map_err(anyhow::Error::from)?;

            let status = response.status();
            if !status.is_success() {
                bail!("message endpoint responded with {status}");
            }

            let ack: Acknowledgement = response.json().await.map_err(anyhow::Error::from)?;
            if !ack.success {
                bail!("message endpoint did not acknowledge the submission");
            }

            Ok(ack)
        }
    }

}

#[cfg(feature = "http")]
pub use http::HttpMessageClient;
