//! Article text derivations: slugs, markup stripping, and read time.

/// Words-per-minute assumed when estimating read time.
const WORDS_PER_MINUTE: usize = 200;

/// Derive a URL-safe slug from an article title.
///
/// Lowercases the title and collapses every run of non-alphanumeric
/// characters into a single hyphen, with no leading or trailing hyphens.
/// Idempotent: slugifying a slug returns it unchanged.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Strip `<...>` tags from the rich-text editor's serialized HTML.
///
/// Each complete tag is replaced with a space so words separated only by
/// markup ("...end.</p><p>Next...") don't fuse together. A `<` with no
/// closing `>` is not a tag; it and everything after it stay literal text.
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut tag = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        if in_tag {
            if c == '>' {
                in_tag = false;
                tag.clear();
                text.push(' ');
            } else {
                tag.push(c);
            }
        } else if c == '<' {
            in_tag = true;
        } else {
            text.push(c);
        }
    }

    if in_tag {
        text.push('<');
        text.push_str(&tag);
    }

    text
}

/// Count the whitespace-separated words of plain text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate the minutes needed to read an article's rich-text content.
///
/// Markup is stripped, words are counted, and the total is divided by
/// 200 words/minute, rounded up, never less than 1.
pub fn read_time_minutes(content: &str) -> u32 {
    let words = word_count(&strip_markup(content));
    (words.div_ceil(WORDS_PER_MINUTE)).max(1) as u32
}
