//! HTTP client for the RIMS competition API.
//!
//! Every request carries the competition id and the configured `Referer`
//! (the API refuses requests that do not appear to come from the public
//! competition page).

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::error::{FetchError, Resource};
use super::models::{
    FaqList, NO_RULE_BOOK, NewsArticlePayload, NewsList, RawArticle, RawFaqResponse,
    RawNewsListResponse, RawRulesResponse, RawTeamListResponse, RulesPayload, TeamList,
    rule_book_url, select_latest_rule_book,
};
use crate::core::config::ApiConfig;
use crate::core::error::{Error, Result};
use crate::domains::documents::PdfTextExtractor;

const API_PREFIX: &str = "/api/v2/web/competition";

/// Typed access to the RIMS endpoints used by the tools.
#[derive(Debug, Clone)]
pub struct RimsApi {
    http: reqwest::Client,
    config: ApiConfig,
    documents: PdfTextExtractor,
}

impl RimsApi {
    /// Build the shared HTTP client from the API configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let referer = HeaderValue::from_str(&config.web_page_url).map_err(|e| {
            Error::config(format!("WEB_PAGE_URL is not a valid header value: {e}"))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(REFERER, referer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        let documents = PdfTextExtractor::new(http.clone()).with_temp_dir(config.pdf_temp_dir.clone());

        Ok(Self {
            http,
            config,
            documents,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn documents(&self) -> &PdfTextExtractor {
        &self.documents
    }

    fn url_for(&self, resource: Resource) -> String {
        format!("{}{}/{}", self.config.endpoint, API_PREFIX, resource.script())
    }

    /// GET a resource and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: Resource,
        query: &[(&str, &str)],
    ) -> std::result::Result<T, FetchError> {
        let url = self.url_for(resource);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(&[("id", self.config.competition_id.as_str())])
            .query(query)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("{} request returned {}", resource, status);
            return Err(FetchError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Decode { resource, source })
    }

    /// Answered FAQ entries matching `keyword` (empty keyword lists all).
    #[instrument(skip(self))]
    pub async fn faq(&self, keyword: &str) -> std::result::Result<FaqList, FetchError> {
        let raw: RawFaqResponse = self.get_json(Resource::Faq, &[("query", keyword)]).await?;
        let list = FaqList::from(raw);
        info!("Fetched {} FAQ entries", list.faq.len());
        Ok(list)
    }

    /// Rule information with the text of the most recent rule book.
    #[instrument(skip(self))]
    pub async fn rules(&self) -> std::result::Result<RulesPayload, FetchError> {
        let raw: RawRulesResponse = self.get_json(Resource::Rules, &[]).await?;
        let rules = raw.rules;

        let latest = select_latest_rule_book(&rules.rule_books).cloned();
        let rule = match latest.as_ref().and_then(rule_book_url) {
            Some(url) => {
                info!("Extracting latest rule book: {}", url);
                self.documents.extract_or_error(url).await
            }
            None => {
                info!("No rule book published");
                Value::String(NO_RULE_BOOK.to_string())
            }
        };

        Ok(RulesPayload {
            rules: rules.into_summary(latest, rule),
        })
    }

    /// News headlines, passed through as published.
    #[instrument(skip(self))]
    pub async fn news_list(&self) -> std::result::Result<NewsList, FetchError> {
        let raw: RawNewsListResponse = self.get_json(Resource::News, &[]).await?;
        Ok(NewsList::from(raw))
    }

    /// A single article; its PDF attachment, if any, is converted to text.
    #[instrument(skip(self))]
    pub async fn news_article(
        &self,
        article_id: &str,
    ) -> std::result::Result<NewsArticlePayload, FetchError> {
        let raw: RawArticle = self
            .get_json(Resource::NewsArticle, &[("article_id", article_id)])
            .await?;

        let ocr_text = match raw.pdf_url() {
            Some(url) => Some(self.documents.extract_or_error(url).await),
            None => None,
        };

        Ok(NewsArticlePayload {
            news: raw.into_article(ocr_text),
        })
    }

    /// Registered teams with their status translated to a label.
    #[instrument(skip(self))]
    pub async fn teams(&self) -> std::result::Result<TeamList, FetchError> {
        let raw: RawTeamListResponse = self.get_json(Resource::TeamList, &[]).await?;
        let list = TeamList::from(raw);
        info!("Fetched {} teams", list.teams.len());
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let api = RimsApi::new(ApiConfig::new(
            "https://rims.example.org/",
            "12",
            "https://rims.example.org/competition/12",
        ))
        .unwrap();
        assert_eq!(
            api.url_for(Resource::TeamList),
            "https://rims.example.org/api/v2/web/competition/get_teams.php"
        );
    }

    #[test]
    fn test_invalid_referer_rejected() {
        let result = RimsApi::new(ApiConfig::new("http://localhost", "1", "bad\nvalue"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
