// Fetch orchestration: one GET, then hand the page to the council's parser
use crate::config::FetchConfig;
use crate::council::Council;
use crate::error::{Error, Result};
use crate::model::{CollectionReport, RawPage};
use async_trait::async_trait;

/// Source of raw pages for the pipeline
#[async_trait]
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<RawPage>;
}

/// Fetches pages over HTTP(S) with reqwest
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(Error::HttpClient)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<RawPage> {
        let parsed = url::Url::parse(url).map_err(|e| Error::fetch(url, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::fetch(
                url,
                format!("unsupported URL scheme {:?}", parsed.scheme()),
            ));
        }

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| Error::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Where redirects ended up, read before the body consumes the response
        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(&final_url, e))?;
        Ok(RawPage::new(final_url, status.as_u16(), body))
    }
}

/// Fetch `url` and parse it with `council`.
///
/// The report is returned exactly as the council built it; an empty report is
/// a valid result. Any fetch or parse failure aborts the run.
pub async fn run_pipeline(
    council: &dyn Council,
    fetcher: &(dyn PageFetcher + Send + Sync),
    url: &str,
) -> Result<CollectionReport> {
    tracing::debug!(council = council.name(), %url, "fetching collection page");
    let page = fetcher.fetch(url).await?;
    tracing::debug!(
        status = page.status,
        bytes = page.body.len(),
        "fetched collection page"
    );

    let report = council.parse(&page)?;
    tracing::info!(
        council = council.name(),
        entries = report.len(),
        "parsed collection report"
    );

    Ok(report)
}
