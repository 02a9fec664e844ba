use std::fmt::Write;

use crate::token_def::TokenTableDef;

/// Prefix for the literal-value object macros.
pub const LITERAL_PREFIX: &str = "TOK_";
/// Prefix for the enumeration members.
pub const MEMBER_PREFIX: &str = "TOKTYPE_";
/// Trailing member whose value is the token count; sizes token-indexed tables.
pub const COUNT_SENTINEL: &str = "TOKENS_NUMBER";
/// Extended-only trailing member marking invalid or uninitialized token slots.
pub const NOT_TOKEN_SENTINEL: &str = "TOKTYPE_NOT_TOKEN";
pub const ENUM_TYPE: &str = "token_type_t";
pub const NAME_TABLE: &str = "token_type_names";

/// Output surface selection. `Minimal` emits the header alone; `Extended`
/// adds the not-a-token sentinel and the runtime name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Minimal,
    Extended,
}

/// Renders the header artifact. Emission order is record order throughout —
/// there is no sorting, so the enumeration's integer values track the
/// specification file's visual order. An empty token list yields only the
/// include-guard preamble.
pub fn gen_header(def: &TokenTableDef, variant: Variant) -> String {
    let mut out = String::with_capacity(64 * def.tokens.len() + 64);
    out.push_str("#pragma once\n\n");
    if def.tokens.is_empty() {
        return out;
    }

    for token in &def.tokens {
        if let Some(literal) = &token.literal {
            writeln!(out, "#define {}{} '{}'", LITERAL_PREFIX, token.name, literal).unwrap();
        }
    }

    out.push_str("\ntypedef enum {\n");
    for token in &def.tokens {
        writeln!(out, "    {}{},", MEMBER_PREFIX, token.name).unwrap();
    }
    match variant {
        Variant::Minimal => {
            writeln!(out, "    {}\n}} {};", COUNT_SENTINEL, ENUM_TYPE).unwrap();
        }
        Variant::Extended => {
            writeln!(
                out,
                "    {},\n    {}\n}} {};",
                COUNT_SENTINEL, NOT_TOKEN_SENTINEL, ENUM_TYPE
            )
            .unwrap();
            writeln!(
                out,
                "\nextern const char *{}[{}];",
                NAME_TABLE, COUNT_SENTINEL
            )
            .unwrap();
        }
    }
    out
}

/// Renders the source artifact defining the name table declared by the
/// extended header: one string per record — the stringified enum member
/// name — in record order, sized by the count sentinel so declaration and
/// definition cannot drift apart. An empty token list yields the include
/// line alone, matching the preamble-only header.
pub fn gen_source(def: &TokenTableDef, header_name: &str) -> String {
    let mut out = String::with_capacity(32 * def.tokens.len() + 64);
    writeln!(out, "#include \"{}\"", header_name).unwrap();
    if def.tokens.is_empty() {
        return out;
    }

    writeln!(out, "\nconst char *{}[{}] = {{", NAME_TABLE, COUNT_SENTINEL).unwrap();
    for token in &def.tokens {
        writeln!(out, "    \"{}{}\",", MEMBER_PREFIX, token.name).unwrap();
    }
    out.push_str("};\n");
    out
}
