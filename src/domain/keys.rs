/// Raw PEM output from the key generation tool, trimmed of surrounding
/// whitespace.
#[derive(Debug, Clone)]
pub struct PemKeyPair {
    pub public_pem: String,
    pub private_pem: String,
}

/// Re-indent a multi-line value for embedding after a YAML block-literal
/// indicator.
///
/// Every line, including the first, gets exactly `width` leading spaces, and
/// the whole value is prefixed with a single newline so it can be placed
/// directly after a `|` without producing a blank first line. CRLF line
/// endings are normalized before splitting.
pub fn pad_block(text: &str, width: usize) -> String {
    let normalized = text.replace("\r\n", "\n");
    let prefix = format!("\n{}", " ".repeat(width));

    let mut padded = String::new();
    for line in normalized.split('\n') {
        padded.push_str(&prefix);
        padded.push_str(line);
    }
    padded
}
