//! Miette-based diagnostics for configuration errors.
//!
//! TOML parse errors carry a byte span; the CLI renders them against the
//! file content so the offending line is underlined.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(propedge::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Source content (the configuration file).
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic from a TOML parse error, if it carries a span.
    #[must_use]
    pub fn from_toml(err: &toml::de::Error, src: &str) -> Option<Self> {
        let span = err.span()?;
        Some(
            Self::new(err.message(), src, span.start, span.len())
                .with_help("run `propedge config init <PATH>` for an annotated template"),
        )
    }

    /// Render to a string. `color` selects the themed or plain ASCII style.
    #[must_use]
    pub fn render(&self, color: bool) -> String {
        let theme = if color {
            GraphicalTheme::unicode()
        } else {
            GraphicalTheme::unicode_nocolor()
        };
        let mut out = String::new();
        match GraphicalReportHandler::new_themed(theme).render_report(&mut out, self) {
            Ok(()) => out,
            Err(_) => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_error_points_at_span() {
        let src = "[decision]\nbet = \n";
        let err = toml::from_str::<toml::Value>(src).unwrap_err();
        let diagnostic = ConfigDiagnostic::from_toml(&err, src).unwrap();
        assert!(diagnostic.span.offset() < src.len());
        let rendered = diagnostic.render(false);
        assert!(rendered.contains("bet"));
    }
}
