//! CSS post-processing delegated to LightningCSS: parsing, optional vendor
//! prefixing for a set of browser targets, and printing.

use crate::error::{PresetError, Result};
use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, StyleSheet};
use lightningcss::targets::{Browsers, Targets};
use std::fmt::Display;

/// Custom-property prefix used by the source framework.
pub const SOURCE_VARIABLE_PREFIX: &str = "--tw-";
/// Custom-property prefix the host engine expects.
pub const HOST_VARIABLE_PREFIX: &str = "--un-";

/// Rename the source framework's custom properties to the host convention.
/// Plain text substitution, selectors and values alike.
pub fn replace_prefix(css: &str) -> String {
    css.replace(SOURCE_VARIABLE_PREFIX, HOST_VARIABLE_PREFIX)
}

/// Parse a stylesheet, keeping its name for error messages.
pub fn parse_stylesheet<'i>(name: &str, css: &'i str) -> Result<StyleSheet<'i, 'static>> {
    let options = ParserOptions {
        filename: name.to_owned(),
        ..ParserOptions::default()
    };
    StyleSheet::parse(css, options).map_err(|err| PresetError::Parse {
        name: name.to_owned(),
        message: err.to_string(),
    })
}

pub(crate) fn print_error(err: impl Display) -> PresetError {
    PresetError::Print(err.to_string())
}

/// Vendor-prefixing hook applied to every source stylesheet before it is walked.
///
/// Without targets the stylesheet is left exactly as parsed. With targets it
/// goes through `StyleSheet::minify`, which adds the prefixed declarations
/// those browsers need. Minifying also merges adjacent rules with equal
/// bodies, which is why component rules are handed over one at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postprocessor {
    targets: Option<Browsers>,
}

impl Postprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_targets(browsers: Browsers) -> Self {
        Postprocessor {
            targets: Some(browsers),
        }
    }

    /// Prefix for a reasonable spread of current browsers.
    pub fn autoprefix() -> Self {
        Self::with_targets(default_browser_targets())
    }

    pub fn targets(&self) -> Option<Browsers> {
        self.targets
    }

    pub fn prepare(&self, sheet: &mut StyleSheet<'_, '_>) -> Result<()> {
        if let Some(browsers) = self.targets {
            log::trace!("prefixing for {:?}", browsers);
            sheet
                .minify(MinifyOptions {
                    targets: Targets::from(browsers),
                    ..MinifyOptions::default()
                })
                .map_err(print_error)?;
        }
        Ok(())
    }

    /// Parse, prepare and print a whole stylesheet.
    pub fn process(&self, name: &str, css: &str) -> Result<String> {
        let mut sheet = parse_stylesheet(name, css)?;
        self.prepare(&mut sheet)?;
        let output = sheet.to_css(PrinterOptions::default()).map_err(print_error)?;
        Ok(output.code)
    }
}

// Chrome 80+, Firefox 75+, Safari 13+, Edge 80+
fn default_browser_targets() -> Browsers {
    Browsers {
        chrome: Some(80 << 16),
        firefox: Some(75 << 16),
        safari: Some(13 << 16),
        edge: Some(80 << 16),
        ..Browsers::default()
    }
}
