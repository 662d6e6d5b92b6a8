/// Escaped separator, independent of the host's own separator.
pub const LITERAL_SEPARATOR: char = '\\';

/// Doubles every `separator` in `path`, turning e.g. `C:\Users\dev` into
/// `C:\\Users\\dev` for pasting into a string literal.
pub fn escape_separators(path: &str, separator: char) -> String {
    let doubled: String = [separator, separator].iter().collect();
    path.split(separator).collect::<Vec<_>>().join(&doubled)
}

pub fn path_to_literal(path: &str) -> String {
    escape_separators(path, LITERAL_SEPARATOR)
}
