//! Application Configuration

use url::Url;

pub const DEFAULT_QR_ENDPOINT: &str = "https://chart.googleapis.com/chart";

/// Link application configuration
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Public origin that short links are served from
    pub base_url: String,
    /// External chart service that renders QR images
    pub qr_endpoint: String,
    /// Edge length of the QR image in pixels
    pub qr_size: u32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            qr_endpoint: DEFAULT_QR_ENDPOINT.to_string(),
            qr_size: 300,
        }
    }
}

impl LinkConfig {
    /// `{base_url}/{code}`, ignoring trailing slashes on the base
    pub fn short_link(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// External QR image URL encoding the short link for `code`
    pub fn qr_image_url(&self, code: &str) -> Result<Url, url::ParseError> {
        let size = format!("{0}x{0}", self.qr_size);
        let short_link = self.short_link(code);

        Url::parse_with_params(
            &self.qr_endpoint,
            [
                ("cht", "qr"),
                ("chs", size.as_str()),
                ("chl", short_link.as_str()),
            ],
        )
    }
}
