//! Per-item expressions used in parameter values.
//!
//! - `$itemIndex` is the index of the item being processed.
//! - `$json` is the whole item; `$json.a.b` walks object keys; `$json#/a/0` is a JSON pointer.
//! - A string with embedded `{ $json.x }` segments is a template rendered to text.

mod json_pointer;
mod runtime;
mod template;

pub use json_pointer::{JsonPointer, JsonPointerError};
pub use runtime::{parse_item_expr, ExprError, ItemExpr};
pub use template::{parse_template, Segment, Template, TemplateError};

/// True when a parameter string should be evaluated rather than used verbatim.
pub fn looks_like_expression(s: &str) -> bool {
    s.trim_start().starts_with('$')
}

/// True when a parameter string embeds at least one `{ $... }` segment.
pub fn looks_like_template(s: &str) -> bool {
    let mut rest = s;
    while let Some(pos) = rest.find('{') {
        rest = &rest[pos + 1..];
        if rest.trim_start().starts_with('$') {
            return true;
        }
    }
    false
}
