/// Make a description safe for an unquoted CSV cell.
///
/// Drops every `,` and `"`, turns `\r\n`, `\n` and `\r` into single spaces,
/// then trims.
pub fn sanitize_description(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !matches!(c, ',' | '"')).collect();
    stripped
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_commas_and_quotes() {
        assert_eq!(sanitize_description("Acme, Ltd."), "Acme Ltd.");
        assert_eq!(sanitize_description("INV\"1"), "INV1");
        assert_eq!(sanitize_description(",\","), "");
    }

    #[test]
    fn test_line_breaks_become_single_spaces() {
        assert_eq!(sanitize_description("Coffee\nShop"), "Coffee Shop");
        assert_eq!(sanitize_description("Coffee\r\nShop"), "Coffee Shop");
        assert_eq!(sanitize_description("Coffee\rShop"), "Coffee Shop");
        // Each break is replaced on its own; nothing collapses runs of spaces.
        assert_eq!(sanitize_description("a\n\nb"), "a  b");
    }

    #[test]
    fn test_trims_after_replacement() {
        assert_eq!(sanitize_description("\n  Tesco  \r\n"), "Tesco");
    }

    #[test]
    fn test_is_idempotent() {
        let once = sanitize_description(" \"Pret\", A Manger\n");
        assert_eq!(sanitize_description(&once), once);
    }
}
