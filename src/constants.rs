//! Global constants for the dragscroll host glue

/// Body class set while a drag-scroll session is active
pub const SCROLLING_CLASS: &str = "dragscroll-scrolling";

/// Prefix of the body class carrying the direction code (e.g. `dragscroll-ne`)
pub const DIRECTION_CLASS_PREFIX: &str = "dragscroll-";

/// Class of the cursor dot element
pub const INDICATOR_CLASS: &str = "dragscroll-indicator";

/// Body class for a direction code. None for the empty code.
pub fn direction_class(code: &str) -> Option<String> {
    if code.is_empty() {
        None
    } else {
        Some(format!("{}{}", DIRECTION_CLASS_PREFIX, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_class() {
        assert_eq!(direction_class("ne").as_deref(), Some("dragscroll-ne"));
        assert_eq!(direction_class(""), None);
    }
}
