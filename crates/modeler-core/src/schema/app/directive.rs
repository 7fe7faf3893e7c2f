use crate::{Error, Result};

/// Parsed form of a field's storage directive.
///
/// A directive is a comma-separated token list. `primary`, `autoinc` and
/// `null` are keywords; any other token overrides the column name, and the
/// last override wins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Column name override, when a non-keyword token supplied one.
    pub column_name: Option<&'a str>,

    /// True if the `primary` token was present.
    pub primary_key: bool,

    /// True if the `autoinc` token was present.
    pub auto_increment: bool,

    /// True if the `null` token was present.
    pub nullable: bool,
}

impl<'a> Directive<'a> {
    /// Parses a directive string.
    ///
    /// Returns `Ok(None)` for the empty string: the field carries no
    /// directive and does not participate in the storage schema. An empty
    /// token inside a non-empty directive (`"a,,b"`, a bare `","`, a
    /// trailing comma) is malformed.
    pub fn parse(raw: &'a str) -> Result<Option<Directive<'a>>> {
        if raw.is_empty() {
            return Ok(None);
        }

        let mut directive = Directive::default();

        for token in raw.split(',') {
            match token {
                "" => return Err(Error::malformed_directive(raw, "empty token")),
                "primary" => directive.primary_key = true,
                "autoinc" => directive.auto_increment = true,
                "null" => directive.nullable = true,
                name => directive.column_name = Some(name),
            }
        }

        Ok(Some(directive))
    }
}
