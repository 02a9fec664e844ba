use lazy_static::lazy_static;
use regex::Regex;

/// One token extracted from the specification. `literal` holds the text
/// between the single quotes: either one plain character or a two-character
/// backslash escape. Quotes are re-added at emission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDef {
    pub name: String,
    pub literal: Option<String>,
}

/// The ordered token list. A token's position in `tokens` is its ordinal and
/// becomes its enumeration value, so both the enum and the name table are
/// driven off this single sequence.
#[derive(Debug, Default)]
pub struct TokenTableDef {
    pub tokens: Vec<TokenDef>,
}

lazy_static! {
    // Escapes are tried before the bare-character branch so that '\'' and
    // '\\' denote quote and backslash.
    static ref TOKEN_LINE: Regex =
        Regex::new(r"^(?P<name>[a-zA-Z]+)( +'(?P<value>\\.|[^'])')?").unwrap();
}

/// Scans a single specification line. Returns `None` for any line that does
/// not start with a token name; this is the permissive-skip policy — blank
/// lines and free-form commentary contribute no record and are not errors.
/// Content after the matched portion of the line is ignored.
pub fn parse_token_line(line: &str) -> Option<TokenDef> {
    let caps = TOKEN_LINE.captures(line)?;
    Some(TokenDef {
        name: caps["name"].to_string(),
        literal: caps.name("value").map(|m| m.as_str().to_string()),
    })
}

/// Scans the whole specification, keeping matched lines in line order.
pub fn parse_token_defs(spec: &str) -> TokenTableDef {
    let mut tokens = Vec::new();
    for line in spec.split('\n') {
        if let Some(token) = parse_token_line(line) {
            tokens.push(token);
        }
    }
    TokenTableDef { tokens }
}
