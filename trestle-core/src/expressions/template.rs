use serde_json::Value as JsonValue;

use super::runtime::{parse_item_expr, ExprError, ItemExpr};
use crate::types::value_to_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Expr(ItemExpr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    pub fn render(&self, item: &JsonValue, index: usize) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            match seg {
                Segment::Literal(s) => out.push_str(s),
                Segment::Expr(e) => {
                    if let Some(s) = value_to_text(&e.evaluate(item, index)) {
                        out.push_str(&s);
                    }
                }
            }
        }
        out
    }
}

pub fn parse_template(input: &str) -> Result<Template, TemplateError> {
    let mut segments = Vec::new();
    let mut buf = String::new();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            buf.push(ch);
            continue;
        }

        // Only `{ $... }` opens an expression; other braces are literal text.
        let mut lookahead = chars.clone();
        while lookahead.next_if(|c| c.is_whitespace()).is_some() {}
        if lookahead.peek() != Some(&'$') {
            buf.push('{');
            continue;
        }

        let mut inner = String::new();
        let mut closed = false;
        for n in chars.by_ref() {
            if n == '}' {
                closed = true;
                break;
            }
            inner.push(n);
        }
        if !closed {
            return Err(TemplateError::UnclosedExpression);
        }

        let expr = parse_item_expr(inner.trim())?;
        if !buf.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut buf)));
        }
        segments.push(Segment::Expr(expr));
    }

    if !buf.is_empty() {
        segments.push(Segment::Literal(buf));
    }

    Ok(Template { segments })
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("invalid embedded expression: {0}")]
    InvalidExpr(#[from] ExprError),
    #[error("unclosed embedded expression (missing '}}')")]
    UnclosedExpression,
}
