use log::trace;
use regex::Regex;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;
use url::Url;

/// Local part, domain, then an alphabetic final label of 2-64 chars, anchored to the whole input
static EMAIL_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn get_email_pattern() -> Option<&'static Regex> {
    EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").ok())
        .as_ref()
}

const ELLIPSIS: &str = "...";

/// Convenience helpers over string slices
pub trait StrExt {
    /// Removes leading and trailing whitespace and line separators
    fn trimmed(&self) -> &str;

    /// Checks if the string is empty or contains only whitespace
    fn is_blank(&self) -> bool;

    fn is_not_blank(&self) -> bool {
        !self.is_blank()
    }

    /// Syntactic e-mail check, no DNS/MX lookup
    fn is_valid_email(&self) -> bool;

    /// Truncates to `length` graphemes and appends "..." if anything was cut
    fn truncated(&self, length: usize) -> String {
        self.truncated_with(length, true)
    }

    /// Truncates to `length` graphemes, appending "..." only when `add_ellipsis` is set.
    /// The ellipsis is added after the cut, so the result can be `length + 3` long.
    fn truncated_with(&self, length: usize, add_ellipsis: bool) -> String;

    /// Parses the string as an absolute URL
    fn to_url(&self) -> Option<Url>;
}

impl StrExt for str {
    fn trimmed(&self) -> &str {
        // `char::is_whitespace` covers newlines plus U+2028/U+2029
        self.trim()
    }

    fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    fn is_valid_email(&self) -> bool {
        get_email_pattern().is_some_and(|pattern| pattern.is_match(self))
    }

    fn truncated_with(&self, length: usize, add_ellipsis: bool) -> String {
        // Byte offset of the first grapheme past the limit, if there is one
        let Some((cut, _)) = self.grapheme_indices(true).nth(length) else {
            return self.to_string();
        };

        let mut truncated = self[..cut].to_string();
        if add_ellipsis {
            truncated.push_str(ELLIPSIS);
        }
        truncated
    }

    fn to_url(&self) -> Option<Url> {
        match Url::parse(self) {
            Ok(url) => Some(url),
            Err(e) => {
                trace!("Rejected URL {:?}: {}", self, e);
                None
            }
        }
    }
}
