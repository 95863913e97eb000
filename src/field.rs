//! Field code resolution
//!
//! Footer text is written as a template with `{PAGE}` and `{NUMPAGES}` field
//! codes. They can only be resolved once layout has finished and the total
//! page count is known.

/// Footer stamped on every page.
pub const DEFAULT_FOOTER_TEMPLATE: &str = "Page {PAGE} of {NUMPAGES}";

/// Resolve the field codes in `template` for one page.
///
/// Field names are case-insensitive. Unknown fields and unbalanced braces are
/// left in the output untouched.
pub fn resolve_page_fields(template: &str, current_page: usize, total_pages: usize) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = after_open[..close].trim().to_uppercase();
        match name.as_str() {
            "PAGE" => out.push_str(&current_page.max(1).to_string()),
            "NUMPAGES" | "NUM PAGES" => out.push_str(&total_pages.max(1).to_string()),
            _ => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after_open[close + 1..];
    }

    out.push_str(rest);
    out
}
