//! Wire shapes of the RIMS API and the normalized payloads returned to clients.
//!
//! `Raw*` types mirror what the API sends and tolerate missing or null
//! fields. The remaining types are what tools serialize back to the caller.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Text placed in `rules.rule` when no rule book can be extracted.
pub const NO_RULE_BOOK: &str = "No rule book available.";
const NO_NAME: &str = "No name provided.";
const NO_ABSTRACT: &str = "No abstract provided.";

/// Treat an explicit JSON `null` like an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_array(value: Option<Value>) -> Value {
    value.unwrap_or_else(|| Value::Array(Vec::new()))
}

fn empty_string(value: Option<Value>) -> Value {
    value.unwrap_or_else(|| Value::String(String::new()))
}

// ============================================================================
// FAQ
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct RawFaqResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub answered: Vec<RawFaqItem>,
}

#[derive(Debug, Deserialize)]
pub struct RawFaqItem {
    #[serde(default)]
    pub number: Option<Value>,
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub answer: Option<Value>,
    #[serde(default)]
    pub question_image: Option<Value>,
    #[serde(default)]
    pub answer_image: Option<Value>,
}

/// One answered FAQ entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub number: Option<Value>,
    pub question: Value,
    pub answer: Value,
    pub question_image: Option<Value>,
    pub answer_image: Option<Value>,
}

impl From<RawFaqItem> for FaqEntry {
    fn from(raw: RawFaqItem) -> Self {
        Self {
            number: raw.number,
            question: empty_string(raw.question),
            answer: empty_string(raw.answer),
            question_image: raw.question_image,
            answer_image: raw.answer_image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqList {
    pub faq: Vec<FaqEntry>,
}

impl From<RawFaqResponse> for FaqList {
    fn from(raw: RawFaqResponse) -> Self {
        Self {
            faq: raw.answered.into_iter().map(FaqEntry::from).collect(),
        }
    }
}

// ============================================================================
// Rules
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct RawRulesResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub rules: RawRules,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawRules {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default, rename = "abstract")]
    pub summary: Option<Value>,
    #[serde(default, deserialize_with = "nullable")]
    pub rule_books: Vec<Map<String, Value>>,
    #[serde(default)]
    pub field_books: Option<Value>,
    #[serde(default)]
    pub other_documents: Option<Value>,
}

/// Normalized rule information of a competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesSummary {
    pub name: Value,
    #[serde(rename = "abstract")]
    pub summary: Value,
    /// Extracted rule-book text, an `{"error": ...}` object, or [`NO_RULE_BOOK`].
    pub rule: Value,
    pub latest_rule_book: Option<Map<String, Value>>,
    pub field_books: Value,
    pub other_documents: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesPayload {
    pub rules: RulesSummary,
}

impl RawRules {
    /// Assemble the summary once the rule text has been resolved.
    pub fn into_summary(self, latest_rule_book: Option<Map<String, Value>>, rule: Value) -> RulesSummary {
        RulesSummary {
            name: self.name.unwrap_or_else(|| Value::from(NO_NAME)),
            summary: self.summary.unwrap_or_else(|| Value::from(NO_ABSTRACT)),
            rule,
            latest_rule_book,
            field_books: empty_array(self.field_books),
            other_documents: empty_array(self.other_documents),
        }
    }
}

/// Parse the `date` of a rule book. Unknown formats yield `None`.
fn parse_rule_date(raw: &str) -> Option<NaiveDateTime> {
    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn rule_book_date(book: &Map<String, Value>) -> &str {
    book.get("date").and_then(Value::as_str).unwrap_or("")
}

/// Whether date `candidate` is strictly later than `best`.
///
/// Timestamps are compared when both sides parse, raw strings otherwise.
fn is_later(candidate: &str, best: &str) -> bool {
    match (parse_rule_date(candidate), parse_rule_date(best)) {
        (Some(candidate), Some(best)) => candidate > best,
        _ => candidate > best,
    }
}

/// Pick the rule book with the greatest `date`.
///
/// Equal dates keep the earliest entry.
pub fn select_latest_rule_book(books: &[Map<String, Value>]) -> Option<&Map<String, Value>> {
    let mut books = books.iter();
    let mut latest = books.next()?;

    for book in books {
        if is_later(rule_book_date(book), rule_book_date(latest)) {
            latest = book;
        }
    }

    Some(latest)
}

/// Non-empty `url` of a rule book.
pub fn rule_book_url(book: &Map<String, Value>) -> Option<&str> {
    book.get("url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}

// ============================================================================
// News
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct RawNewsListResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub news: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsList {
    pub news: Vec<Value>,
}

impl From<RawNewsListResponse> for NewsList {
    fn from(raw: RawNewsListResponse) -> Self {
        Self { news: raw.news }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub article_title: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub article: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(default)]
    pub pdf_url: Option<Value>,
}

impl RawArticle {
    /// Attached PDF, if the article links one.
    pub fn pdf_url(&self) -> Option<&str> {
        self.pdf_url
            .as_ref()
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Build the normalized article; `ocr_text` is resolved by the caller.
    pub fn into_article(self, ocr_text: Option<Value>) -> NewsArticle {
        NewsArticle {
            title: empty_string(self.article_title.or(self.title)),
            content: empty_string(self.article.or(self.content)),
            date: empty_string(self.date),
            image: empty_string(self.image),
            pdf_url: self.pdf_url,
            ocr_text,
        }
    }
}

/// A single news article, optionally with the text of its PDF attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: Value,
    pub content: Value,
    pub date: Value,
    pub image: Value,
    pub pdf_url: Option<Value>,
    pub ocr_text: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticlePayload {
    pub news: NewsArticle,
}

// ============================================================================
// Teams
// ============================================================================

/// Entry state of a team, as coded by the API's `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamStatus {
    Undisclosed,
    Entered,
    DocumentReviewPassed,
    VideoReviewPassed,
    Competing,
    Declined,
    Revoked,
    Withdrawn,
    DocumentReviewFailed,
    VideoReviewFailed,
    UnderReview,
    Exhibition,
    Unknown,
}

impl TeamStatus {
    /// All states, indexed by their numeric code.
    pub const ALL: [TeamStatus; 13] = [
        Self::Undisclosed,
        Self::Entered,
        Self::DocumentReviewPassed,
        Self::VideoReviewPassed,
        Self::Competing,
        Self::Declined,
        Self::Revoked,
        Self::Withdrawn,
        Self::DocumentReviewFailed,
        Self::VideoReviewFailed,
        Self::UnderReview,
        Self::Exhibition,
        Self::Unknown,
    ];

    /// Map a numeric code; anything outside 0..=12 is `Unknown`.
    pub fn from_code(code: i64) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .unwrap_or(Self::Unknown)
    }

    /// Map the raw `status` field. Non-integer values are `Unknown`.
    pub fn from_value(value: Option<&Value>) -> Self {
        value
            .and_then(Value::as_i64)
            .map(Self::from_code)
            .unwrap_or(Self::Unknown)
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Label as shown on the competition site.
    pub fn label(self) -> &'static str {
        match self {
            Self::Undisclosed => "状態非公開",
            Self::Entered => "エントリー済み",
            Self::DocumentReviewPassed => "書類審査通過",
            Self::VideoReviewPassed => "ビデオ審査通過",
            Self::Competing => "大会出場",
            Self::Declined => "出場辞退",
            Self::Revoked => "出場取り消し",
            Self::Withdrawn => "出場取りやめ",
            Self::DocumentReviewFailed => "書類審査落選",
            Self::VideoReviewFailed => "ビデオ審査落選",
            Self::UnderReview => "審査中",
            Self::Exhibition => "エキシビジョン参加",
            Self::Unknown => "不明",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawTeamListResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub teams: Vec<RawTeam>,
}

#[derive(Debug, Deserialize)]
pub struct RawTeam {
    #[serde(default)]
    pub team_name: Option<Value>,
    #[serde(default)]
    pub team_org: Option<Value>,
    #[serde(default)]
    pub team_icon: Option<Value>,
    #[serde(default)]
    pub team_homepage: Option<Value>,
    #[serde(default)]
    pub team_twitter: Option<Value>,
    #[serde(default)]
    pub team_facebook: Option<Value>,
    #[serde(default)]
    pub team_instagram: Option<Value>,
    #[serde(default)]
    pub team_tiktok: Option<Value>,
    #[serde(default)]
    pub team_bluesky: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, rename = "match")]
    pub match_info: Option<Value>,
}

/// One entry of the team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_name: Value,
    pub team_org: Value,
    pub team_icon: Option<Value>,
    pub team_homepage: Option<Value>,
    pub team_twitter: Option<Value>,
    pub team_facebook: Option<Value>,
    pub team_instagram: Option<Value>,
    pub team_tiktok: Option<Value>,
    pub team_bluesky: Option<Value>,
    pub status_label: String,
    pub data: Option<Value>,
    #[serde(rename = "match")]
    pub match_info: Option<Value>,
}

impl From<RawTeam> for Team {
    fn from(raw: RawTeam) -> Self {
        Self {
            status_label: TeamStatus::from_value(raw.status.as_ref()).label().to_string(),
            team_name: empty_string(raw.team_name),
            team_org: empty_string(raw.team_org),
            team_icon: raw.team_icon,
            team_homepage: raw.team_homepage,
            team_twitter: raw.team_twitter,
            team_facebook: raw.team_facebook,
            team_instagram: raw.team_instagram,
            team_tiktok: raw.team_tiktok,
            team_bluesky: raw.team_bluesky,
            data: raw.data,
            match_info: raw.match_info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamList {
    pub teams: Vec<Team>,
}

impl From<RawTeamListResponse> for TeamList {
    fn from(raw: RawTeamListResponse) -> Self {
        Self {
            teams: raw.teams.into_iter().map(Team::from).collect(),
        }
    }
}
