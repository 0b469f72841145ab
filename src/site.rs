use fancy_regex::Regex;
use std::sync::OnceLock;

/// A URL-looking token: scheme, `://`, then anything up to a final `.word`.
const SITE_PATTERN: &str = r"https?://.+\.[0-9A-Za-z_]+";

fn site_regex() -> &'static Regex {
    static SITE_REGEX: OnceLock<Regex> = OnceLock::new();
    SITE_REGEX.get_or_init(|| Regex::new(SITE_PATTERN).expect("invalid site pattern"))
}

/// Index of the comment field expected to hold the bot's website, chosen by
/// the number of fields.
fn site_index(len: usize) -> usize {
    match len {
        0..=2 => 0,
        4 => 3,
        _ => 2,
    }
}

/// Infer a bot name from a website embedded in a comment block.
///
/// Short comments (one or two fields) only carry the site, so the matched URL
/// text is returned. Longer comments usually put the bot name (often
/// `name/version`) right before the site; that field is returned trimmed and
/// the URL itself is ignored. Returns `None` when the chosen field holds no
/// site or the candidate would be empty.
pub fn get_from_site(comment: &[String]) -> Option<&str> {
    if comment.is_empty() {
        return None;
    }

    let idx = site_index(comment.len());
    let found = match site_regex().find(&comment[idx]) {
        Ok(Some(m)) => m,
        _ => return None,
    };

    let candidate = if idx == 0 {
        found.as_str()
    } else {
        comment[idx - 1].trim()
    };
    (!candidate.is_empty()).then_some(candidate)
}
