use thiserror::Error;

/// Failures the page glue can run into while binding to the browser.
///
/// None of these are surfaced to the visitor; the binding layer logs them and
/// carries on with the remaining components.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no window")]
    MissingWindow,

    #[error("no document")]
    MissingDocument,

    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },

    #[error("config: {0}")]
    Config(#[from] serde_json::Error),
}

impl SiteError {
    pub fn js(context: &'static str, message: impl Into<String>) -> Self {
        SiteError::Js {
            context,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_error_display_includes_context() {
        let e = SiteError::js("service worker", "register() rejected");
        assert_eq!(e.to_string(), "service worker: register() rejected");
    }

    #[test]
    fn config_error_converts_from_serde() {
        let raw = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: SiteError = raw.into();
        assert!(e.to_string().starts_with("config: "));
    }
}
