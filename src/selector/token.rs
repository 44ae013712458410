//! Selector tokenizer.
//!
//! A selector is a whitespace-separated list of order-independent tokens:
//!
//! - Owner: `own` | `enemy` | `any`
//! - Type: `card` | `minion` | `hero` | `character` | `weapon` | `spell` | `power`
//! - Zone: `@deck` `@hand` `@play` `@grave` `@aside` `@secret`
//! - Tag: `#name`
//! - Property: `.name` or `.name<op><value>`, op one of `< > <= >= = !=`
//!
//! Classification is purely lexical. Whether a zone or tag name is known is
//! decided here too, but turning unknown names into filters is the compiler's
//! job.

use crate::core::{Result, SelectorError};
use crate::zones::Zone;

/// Owner keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OwnerToken {
    Own,
    Enemy,
    Any,
}

/// Type keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeToken {
    /// Any type.
    Card,
    Minion,
    Hero,
    /// Minion or hero.
    Character,
    Weapon,
    Spell,
    Power,
}

/// Comparison operator in a property clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl Operator {
    /// Longest symbols first so `<=` is not read as `<` followed by `=`.
    const SYMBOLS: [(&'static str, Operator); 6] = [
        ("!=", Operator::Ne),
        ("<=", Operator::Le),
        (">=", Operator::Ge),
        ("<", Operator::Lt),
        (">", Operator::Gt),
        ("=", Operator::Eq),
    ];

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Le => "<=",
            Operator::Ge => ">=",
            Operator::Eq => "=",
            Operator::Ne => "!=",
        }
    }

    /// `<`, `>`, `<=` or `>=`.
    #[must_use]
    pub fn is_ordering(self) -> bool {
        matches!(self, Operator::Lt | Operator::Gt | Operator::Le | Operator::Ge)
    }

    /// Apply an ordering operator. Equality operators compare with `==`/`!=`.
    #[must_use]
    pub fn compare(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Operator::Lt => lhs < rhs,
            Operator::Gt => lhs > rhs,
            Operator::Le => lhs <= rhs,
            Operator::Ge => lhs >= rhs,
            Operator::Eq => lhs == rhs,
            Operator::Ne => lhs != rhs,
        }
    }
}

/// A parsed `.name[op value]` token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyToken<'a> {
    pub name: &'a str,
    /// Operator and value; `None` for a bare truthiness check.
    pub comparison: Option<(Operator, &'a str)>,
}

/// A classified selector token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Owner(OwnerToken),
    Type(TypeToken),
    /// `@name`; `None` when the zone name is not recognised.
    Zone(Option<Zone>, &'a str),
    /// `#name`, without the `#`.
    Tag(&'a str),
    Property(PropertyToken<'a>),
    /// Any other bare word.
    Unknown(&'a str),
}

/// Split a selector on whitespace and classify every token.
///
/// ```
/// use ccg_select::selector::token::{tokenize, OwnerToken, Token, TypeToken};
///
/// let tokens = tokenize("enemy minion").unwrap();
/// assert_eq!(tokens, vec![Token::Owner(OwnerToken::Enemy), Token::Type(TypeToken::Minion)]);
/// ```
pub fn tokenize(selector: &str) -> Result<Vec<Token<'_>>> {
    selector
        .split_whitespace()
        .map(|raw| classify(selector, raw))
        .collect()
}

fn classify<'a>(selector: &str, raw: &'a str) -> Result<Token<'a>> {
    if let Some(name) = raw.strip_prefix('@') {
        return Ok(Token::Zone(Zone::from_selector_name(name), name));
    }
    if let Some(name) = raw.strip_prefix('#') {
        if name.is_empty() {
            return Err(SelectorError::syntax(selector, raw, "tag name missing after `#`"));
        }
        return Ok(Token::Tag(name));
    }
    if let Some(body) = raw.strip_prefix('.') {
        return parse_property(selector, raw, body).map(Token::Property);
    }

    let token = match raw {
        "own" => Token::Owner(OwnerToken::Own),
        "enemy" => Token::Owner(OwnerToken::Enemy),
        "any" => Token::Owner(OwnerToken::Any),
        "card" => Token::Type(TypeToken::Card),
        "minion" => Token::Type(TypeToken::Minion),
        "hero" => Token::Type(TypeToken::Hero),
        "character" => Token::Type(TypeToken::Character),
        "weapon" => Token::Type(TypeToken::Weapon),
        "spell" => Token::Type(TypeToken::Spell),
        "power" => Token::Type(TypeToken::Power),
        other => Token::Unknown(other),
    };
    Ok(token)
}

fn parse_property<'a>(selector: &str, raw: &'a str, body: &'a str) -> Result<PropertyToken<'a>> {
    let name_len = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(body.len());
    let (name, rest) = body.split_at(name_len);

    if name.is_empty() {
        return Err(SelectorError::syntax(selector, raw, "property name missing after `.`"));
    }
    if rest.is_empty() {
        return Ok(PropertyToken { name, comparison: None });
    }

    let (op, value) = Operator::SYMBOLS
        .iter()
        .find_map(|(symbol, op)| rest.strip_prefix(*symbol).map(|value| (*op, value)))
        .ok_or_else(|| {
            SelectorError::syntax(selector, raw, format!("unexpected {rest:?} after property name"))
        })?;

    if value.is_empty() {
        return Err(SelectorError::syntax(selector, raw, "comparison operator without value"));
    }
    // `<>`, `=<` and friends are not operators.
    if value.starts_with(['<', '>', '=', '!']) {
        return Err(SelectorError::syntax(selector, raw, format!("unknown operator in {rest:?}")));
    }

    Ok(PropertyToken {
        name,
        comparison: Some((op, value)),
    })
}
