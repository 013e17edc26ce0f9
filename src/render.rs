//! # Rendering
//!
//! The inverse of parsing: a sentence back to its wire form,
//! `[$]<identifier><data>[*HH][newline]`, with the checksum recomputed from
//! the identifier and data.

use crate::checksum::{checksum, format_checksum};

/// What to append after a rendered sentence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Newline {
    /// Nothing
    #[default]
    None,
    /// `\r\n`, the NMEA 0183 line terminator
    CrLf,
    /// An arbitrary terminator, appended verbatim
    Custom(String),
}

impl Newline {
    fn as_str(&self) -> &str {
        match self {
            Newline::None => "",
            Newline::CrLf => "\r\n",
            Newline::Custom(terminator) => terminator,
        }
    }
}

impl From<bool> for Newline {
    fn from(crlf: bool) -> Self {
        if crlf { Newline::CrLf } else { Newline::None }
    }
}

impl From<&str> for Newline {
    fn from(terminator: &str) -> Self {
        Newline::Custom(terminator.to_owned())
    }
}

/// Options controlling how a sentence is rendered.
///
/// The default renders the checksum and the `$` start marker without a line
/// terminator, which is also what [`Display`](std::fmt::Display) produces.
///
/// # Examples
///
/// ```rust
/// use nmea0183_sentence::{Newline, RenderOptions};
///
/// let options = RenderOptions::new().dollar(false).newline(Newline::CrLf);
/// assert!(options.checksum);
/// assert!(!options.dollar);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct RenderOptions {
    /// Append `*HH`
    pub checksum: bool,
    /// Prepend `$`
    pub dollar: bool,
    /// Line terminator
    pub newline: Newline,
}

impl RenderOptions {
    pub fn new() -> Self {
        RenderOptions {
            checksum: true,
            dollar: true,
            newline: Newline::None,
        }
    }

    pub fn checksum(mut self, checksum: bool) -> Self {
        self.checksum = checksum;
        self
    }

    pub fn dollar(mut self, dollar: bool) -> Self {
        self.dollar = dollar;
        self
    }

    pub fn newline(mut self, newline: impl Into<Newline>) -> Self {
        self.newline = newline.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::new()
    }
}

/// Renders an identifier and its data fields.
pub(crate) fn render(identifier: &str, data: &[String], options: &RenderOptions) -> String {
    let mut content = String::with_capacity(identifier.len() + data.len() * 8 + 6);
    content.push_str(identifier);
    content.push_str(&data.join(","));

    if options.checksum {
        let cc = format_checksum(checksum(&content));
        content.push('*');
        content.push_str(&cc);
    }

    let mut line = String::with_capacity(content.len() + 3);
    if options.dollar {
        line.push('$');
    }
    line.push_str(&content);
    line.push_str(options.newline.as_str());

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> Vec<String> {
        vec!["1".into(), "".into(), "3".into()]
    }

    #[test]
    fn test_render_defaults() {
        let line = render("GPXXX,", &data(), &RenderOptions::default());
        assert_eq!(line, format!("$GPXXX,1,,3*{:02X}", checksum("GPXXX,1,,3")));
    }

    #[test]
    fn test_render_options() {
        let options = RenderOptions::new().checksum(false).dollar(false);
        assert_eq!(render("GPXXX,", &data(), &options), "GPXXX,1,,3");

        let options = RenderOptions::new().checksum(false).newline(true);
        assert_eq!(render("GPXXX,", &data(), &options), "$GPXXX,1,,3\r\n");

        let options = RenderOptions::new().checksum(false).newline("\n");
        assert_eq!(render("GPXXX,", &data(), &options), "$GPXXX,1,,3\n");

        let options = RenderOptions::new().checksum(false).newline(false);
        assert_eq!(render("PGRM", &["E".to_string()], &options), "$PGRME");
    }
}
