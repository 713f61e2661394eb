use crate::errors::CoreError;

/// Human-readable description for a 3-letter currency code.
/// Unknown codes pass through as themselves.
#[must_use]
pub fn currency_description(code: &str) -> &str {
    match code {
        "USD" => "United States Dollar",
        "EUR" => "Euro",
        "GBP" => "British Pound Sterling",
        "AUD" => "Australian Dollar",
        "BGN" => "Bulgarian Lev",
        "BRL" => "Brazilian Real",
        "CAD" => "Canadian Dollar",
        "CHF" => "Swiss Franc",
        "CNY" => "Chinese Yuan",
        "CZK" => "Czech Koruna",
        "DKK" => "Danish Krone",
        "HKD" => "Hong Kong Dollar",
        "HUF" => "Hungarian Forint",
        "IDR" => "Indonesian Rupiah",
        "ILS" => "Israeli New Shekel",
        "INR" => "Indian Rupee",
        "ISK" => "Icelandic Krona",
        "JPY" => "Japanese Yen",
        "KRW" => "South Korean Won",
        "MXN" => "Mexican Peso",
        "MYR" => "Malaysian Ringgit",
        "NOK" => "Norwegian Krone",
        "NZD" => "New Zealand Dollar",
        "PHP" => "Philippine Peso",
        "PLN" => "Polish Zloty",
        "RON" => "Romanian Leu",
        "SEK" => "Swedish Krona",
        "SGD" => "Singapore Dollar",
        "THB" => "Thai Baht",
        "TRY" => "Turkish Lira",
        "ZAR" => "South African Rand",
        other => other,
    }
}

/// Extract a 3-letter currency code from a display label of the form
/// `"<Description> (<CODE>)"`, e.g. `"Euro (EUR)"` → `"EUR"`.
///
/// A plain 3-letter code (no parentheses) is also accepted, so dropdowns
/// populated directly from report column headers work unchanged.
pub fn extract_code(label: &str) -> Result<String, CoreError> {
    let trimmed = label.trim();

    if is_code(trimmed) {
        return Ok(trimmed.to_uppercase());
    }

    // First parenthesized 3-letter group wins
    let mut rest = trimmed;
    while let Some(open) = rest.find('(') {
        let tail = &rest[open + 1..];
        if let Some(close) = tail.find(')') {
            let inner = &tail[..close];
            if is_code(inner) {
                return Ok(inner.to_uppercase());
            }
            rest = &tail[close + 1..];
        } else {
            break;
        }
    }

    Err(CoreError::InvalidSelection(format!(
        "no 3-letter currency code found in '{label}'"
    )))
}

fn is_code(s: &str) -> bool {
    s.len() == 3 && s.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_descriptions() {
        assert_eq!(currency_description("EUR"), "Euro");
        assert_eq!(currency_description("XYZ"), "XYZ");
    }

    #[test]
    fn extracts_parenthesized_code() {
        assert_eq!(extract_code("Euro (EUR)").unwrap(), "EUR");
        assert_eq!(extract_code("Swiss Franc (CHF)").unwrap(), "CHF");
    }

    #[test]
    fn accepts_bare_code() {
        assert_eq!(extract_code("gbp").unwrap(), "GBP");
    }

    #[test]
    fn skips_non_code_groups() {
        assert_eq!(extract_code("Real (Brazil) (BRL)").unwrap(), "BRL");
    }

    #[test]
    fn rejects_labels_without_code() {
        assert!(matches!(
            extract_code("Euro"),
            Err(CoreError::InvalidSelection(_))
        ));
        assert!(matches!(
            extract_code("Euro (EURO)"),
            Err(CoreError::InvalidSelection(_))
        ));
    }
}
