//! Post-processing fix-ups applied to the raw XSLT output.
//!
//! General-purpose XML serializers escape `<` and `>` indiscriminately,
//! including inside `<style>` elements where CSS selector syntax (the child
//! combinator `>`) is not markup. The transformed HTML therefore needs two
//! textual fix-ups before a browser renders it correctly:
//!
//! 1. [`unescape_style_blocks`]: restore escaped `&lt;`/`&gt;` inside style
//!    regions to literal characters.
//! 2. [`inject_small_screen_override`]: force the items table body onto a
//!    column layout on small screens, overriding the stylesheet's default
//!    row direction.
//!
//! [`postprocess`] composes both, in that order, and is idempotent.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// CSS rule injected after the first `<style>` tag.
pub const SMALL_SCREEN_OVERRIDE: &str =
    ".items_table_body_small_screen_holder { flex-direction: column !important; }";

/// Matches one `<style ...>...</style>` region. Non-greedy so that multiple
/// regions stay separate, case-insensitive on the tag name, and `(?s)` so
/// that multi-line style content is covered.
static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)(<style[^>]*>)(.*?)(</style>)").unwrap());

/// First occurrence of a bare `<style>` opening tag, case-insensitive.
static FIRST_STYLE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<style>").unwrap());

/// Restores escaped angle brackets inside style regions.
///
/// Every `&gt;` becomes ` > ` and every `&lt;` becomes ` < ` (spaces
/// included, matching what the reference stylesheet's CSS tolerates).
/// Occurrences outside style regions are left untouched.
pub fn unescape_style_blocks(html: &str) -> String {
    STYLE_BLOCK
        .replace_all(html, |caps: &Captures| {
            let body = caps[2].replace("&gt;", " > ").replace("&lt;", " < ");
            format!("{}{}{}", &caps[1], body, &caps[3])
        })
        .into_owned()
}

/// Inserts [`SMALL_SCREEN_OVERRIDE`] immediately after the first `<style>`
/// tag.
///
/// Insertion is idempotent: when the override rule is already present
/// anywhere in the document (e.g. the output was post-processed twice) the
/// input is returned unchanged. A document without any `<style>` tag is
/// also returned unchanged.
pub fn inject_small_screen_override(html: &str) -> String {
    if html.contains(SMALL_SCREEN_OVERRIDE) {
        return html.to_string();
    }
    let Some(tag) = FIRST_STYLE_TAG.find(html) else {
        return html.to_string();
    };
    let mut out = String::with_capacity(html.len() + SMALL_SCREEN_OVERRIDE.len() + 2);
    out.push_str(&html[..tag.end()]);
    out.push(' ');
    out.push_str(SMALL_SCREEN_OVERRIDE);
    out.push(' ');
    out.push_str(&html[tag.end()..]);
    out
}

/// Runs both fix-ups in order: unescape style regions, then inject the
/// small-screen override.
pub fn postprocess(html: &str) -> String {
    inject_small_screen_override(&unescape_style_blocks(html))
}
