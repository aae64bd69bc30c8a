//! Name transformation helpers used to generate idiomatic Rust code.
//==================================================================================NAME_HELPERS
/// Turn a free-form label ("Wing in ground (WIG), hazardous category A") into a
/// `PascalCase` identifier (`WingInGroundWIGHazardousCategoryA`).
///
/// Every non alphanumeric character acts as a word separator and is dropped.
/// `+`/`-` in front of a digit are spelled out so `-5` and `+5` stay distinct.
pub(crate) fn to_pascal_case(name: &str) -> String {
    let mut buffer = String::new();
    let mut capitalize_next = true;

    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '-' | '+' if chars.peek().is_some_and(|next| next.is_ascii_digit()) => {
                buffer.push_str(if c == '-' { "Minus" } else { "Plus" });
                capitalize_next = true;
            }
            '/' => {
                buffer.push_str("Or");
                capitalize_next = true;
            }
            _ if buffer.is_empty() && c.is_ascii_digit() => {
                buffer.push_str("Val");
                buffer.push(c);
                capitalize_next = true;
            }
            _ if c.is_ascii_alphanumeric() && capitalize_next => {
                buffer.push(c.to_ascii_uppercase());
                capitalize_next = false;
            }
            _ if c.is_ascii_alphanumeric() => buffer.push(c),
            _ => capitalize_next = true,
        }
    }

    buffer
}

/// Convert a `SCREAMING_SNAKE` table name into the `PascalCase` enum name.
pub(crate) fn table_type_name(name: &str) -> String {
    to_pascal_case(&name.to_lowercase())
}
