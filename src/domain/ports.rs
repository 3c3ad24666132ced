/// A source of client settings. Every field is optional so sources can be
/// layered; see [`crate::config::ClientConfig::layered`].
pub trait ConfigProvider {
    fn base_url(&self) -> Option<&str>;
    fn api_version(&self) -> Option<&str>;
    fn user_agent(&self) -> Option<&str> {
        None
    }
}
