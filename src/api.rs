use log::{debug, info};
use reqwest::StatusCode;
use url::Url;

pub const STARTING_GOALIES_URL: &str = "https://www.dailyfaceoff.com/starting-goalies/";

// The site turns away obvious bots, so we look like a desktop browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to fetch page: server returned {0}")]
    UnexpectedStatus(StatusCode),
    #[error("The request could not be completed: {0}")]
    Request(#[from] reqwest::Error),
}

pub struct StartingGoaliesClient {
    client: reqwest::Client,
    url: Url,
}

impl StartingGoaliesClient {
    pub fn new(url: Url, user_agent: &str) -> reqwest::Result<Self> {
        Ok(Self::with_client(client_builder(user_agent).build()?, url))
    }

    pub fn with_client(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }

    /// Downloads the page once.  Anything but `200 OK` is an error.
    pub async fn fetch_page(&self) -> Result<String, FetchError> {
        info!("Fetching {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;
        ensure_ok(response.status())?;
        let body = response.text().await?;
        debug!("Received {} bytes", body.len());
        Ok(body)
    }
}

pub fn client_builder(user_agent: &str) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .connection_verbose(true)
}

pub fn ensure_ok(status: StatusCode) -> Result<(), FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::UnexpectedStatus(status));
    }
    Ok(())
}
