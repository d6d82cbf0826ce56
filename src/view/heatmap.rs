// Heatmap image reference with cache-busting

use super::{Mount, RenderTarget};
use crate::error::RenderError;

#[derive(Debug)]
pub struct HeatmapRef {
    mount: Mount,
    last_token: i64,
    current: Option<String>,
}

impl Default for HeatmapRef {
    fn default() -> Self {
        Self {
            mount: Mount::Heatmap,
            last_token: 0,
            current: None,
        }
    }
}

impl HeatmapRef {
    /// The last resolved image source.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Point the image at `url` with a fresh `t=<millis>` token so the same
    /// path is never served from cache. Tokens strictly increase.
    pub fn update<R: RenderTarget + ?Sized>(
        &mut self,
        target: &mut R,
        url: &str,
    ) -> Result<&str, RenderError> {
        let now = chrono::Utc::now().timestamp_millis();
        let token = now.max(self.last_token + 1);
        let resolved = resolve(url, token);
        target.set_attr(self.mount, "src", &resolved)?;
        self.last_token = token;
        Ok(self.current.insert(resolved).as_str())
    }
}

/// `url` plus a `t` query parameter, honouring an existing query string.
pub(crate) fn resolve(url: &str, token: i64) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}t={token}")
}
