/// Runtime configuration shared by the CLI and the sentiment crate.
///
/// Credentials are deliberately absent: they are supplied per invocation and
/// never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    /// Base URL of the text-classification inference server.
    pub classifier_url: String,
    pub request_timeout_secs: u64,
    /// `User-Agent` sent when scraping web pages.
    pub scraper_user_agent: String,
    pub twitter_api_url: String,
    pub youtube_api_url: String,
}
