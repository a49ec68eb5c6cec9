//! Signature template validation and candidate formatting.

use std::fmt::{self, Write};

use tracing::debug;

use super::grammar;

/// Token substituted with the search index in every candidate.
pub const PLACEHOLDER: &str = "%d";

/// Reasons a signature template is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("too many placeholders: found {0}, at most 1 allowed")]
    TooManyPlaceholders(usize),

    #[error("no opening bracket found in function name")]
    MissingOpenBracket,

    #[error("character '{0}' not allowed in function name")]
    InvalidNameCharacter(char),

    #[error("function name cannot be empty")]
    EmptyFunctionName,

    #[error("invalid number of brackets: {open} '(' and {close} ')'")]
    InvalidBracketCount { open: usize, close: usize },

    #[error("closing bracket appears before opening bracket")]
    InvalidBracketOrder,

    #[error("unknown argument type '{0}'")]
    UnknownType(String),

    #[error("type '{0}' does not take a size suffix")]
    InvalidFixedTypeUsage(String),

    #[error("invalid argument '{token}', size must satisfy {min} < n <= {max} and n % {step} == 0")]
    OutOfBoundsWidth {
        token: String,
        min: u32,
        max: u32,
        step: u32,
    },
}

/// Validates a raw signature template.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. At most one placeholder
/// 2. Function name characters (placeholder removed)
/// 3. Exactly one `(` and one `)`, in that order
/// 4. Each comma separated argument type against the type grammar
pub fn validate(template: &str) -> Result<(), SignatureError> {
    let result = check_template(template);
    if let Err(ref e) = result {
        debug!(template, error = %e, "rejected signature template");
    }
    result
}

fn check_template(template: &str) -> Result<(), SignatureError> {
    let placeholders = template.matches(PLACEHOLDER).count();
    if placeholders > 1 {
        return Err(SignatureError::TooManyPlaceholders(placeholders));
    }

    let open = template
        .find('(')
        .ok_or(SignatureError::MissingOpenBracket)?;
    let name_segment = &template[..open];

    let name = name_segment.replacen(PLACEHOLDER, "", 1);
    // A ')' before the '(' is reported by the bracket checks below.
    if let Some(c) = name
        .chars()
        .find(|&c| c != ')' && !c.is_ascii_alphanumeric())
    {
        return Err(SignatureError::InvalidNameCharacter(c));
    }

    let open_count = template.matches('(').count();
    let close_count = template.matches(')').count();
    if open_count != 1 || close_count != 1 {
        return Err(SignatureError::InvalidBracketCount {
            open: open_count,
            close: close_count,
        });
    }

    let close = template
        .find(')')
        .ok_or(SignatureError::InvalidBracketCount {
            open: open_count,
            close: close_count,
        })?;
    if close < open {
        return Err(SignatureError::InvalidBracketOrder);
    }

    if name.is_empty() {
        return Err(SignatureError::EmptyFunctionName);
    }

    let args = &template[open + 1..close];
    if !args.is_empty() {
        for token in args.split(',') {
            check_type(token)?;
        }
    }

    Ok(())
}

/// Checks a single argument type such as `uint256` or `address`.
pub fn check_type(token: &str) -> Result<(), SignatureError> {
    let base_len = token
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(token.len());
    let (base, suffix) = token.split_at(base_len);

    let base_type =
        grammar::lookup(base).ok_or_else(|| SignatureError::UnknownType(token.to_string()))?;

    let Some(bound) = base_type.bound else {
        return if suffix.is_empty() {
            Ok(())
        } else {
            Err(SignatureError::InvalidFixedTypeUsage(token.to_string()))
        };
    };

    let width = if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
        suffix.parse::<u32>().ok()
    } else {
        None
    };

    match width {
        Some(w) if bound.accepts(w) => Ok(()),
        _ => Err(SignatureError::OutOfBoundsWidth {
            token: token.to_string(),
            min: bound.min,
            max: bound.max,
            step: bound.step,
        }),
    }
}

/// A validated template, split around its placeholder.
///
/// Templates without a placeholder get one inserted directly before the `(`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureTemplate {
    prefix: String,
    suffix: String,
}

impl SignatureTemplate {
    /// Validates `raw` and builds the normalized template.
    pub fn parse(raw: &str) -> Result<Self, SignatureError> {
        validate(raw)?;

        let (prefix, suffix) = match raw.split_once(PLACEHOLDER) {
            Some((prefix, suffix)) => (prefix, suffix),
            // Validation guarantees a '(' is present.
            None => raw.split_at(raw.find('(').unwrap_or(raw.len())),
        };

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// Returns the candidate signature for `index`.
    pub fn candidate(&self, index: u64) -> String {
        let mut buf = String::with_capacity(self.prefix.len() + self.suffix.len() + 20);
        self.write_candidate(index, &mut buf);
        buf
    }

    /// Writes the candidate for `index` into `buf`, reusing its allocation.
    #[inline]
    pub fn write_candidate(&self, index: u64, buf: &mut String) {
        buf.clear();
        buf.push_str(&self.prefix);
        let _ = write!(buf, "{}", index);
        buf.push_str(&self.suffix);
    }

    /// Returns the function name with the placeholder removed.
    pub fn function_name(&self) -> String {
        let joined = format!("{}{}", self.prefix, self.suffix);
        joined.split('(').next().unwrap_or("").to_string()
    }
}

impl fmt::Display for SignatureTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, PLACEHOLDER, self.suffix)
    }
}
