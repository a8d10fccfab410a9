use crate::types::Point;
use web_sys::{Element, MouseEvent};

/// Convert a pointer event's client coordinates to `surface`-local pixels.
pub fn client_to_local(event: &MouseEvent, surface: &Element) -> Point {
    let rect = surface.get_bounding_client_rect();

    let x = event.client_x() as f64 - rect.left();
    let y = event.client_y() as f64 - rect.top();

    Point::new(x, y)
}

/// Cache-busting value for placeholder image URLs.
pub fn random_token() -> u32 {
    let mut buf = [0u8; 4];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u32::from_le_bytes(buf),
        Err(e) => {
            log::warn!("random source unavailable: {}", e);
            0
        }
    }
}

/// Parse a CSS pixel length such as `"24px"` or `"24"`.
pub fn parse_css_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whether a CSS `font-weight` value renders bold.
pub fn is_bold_weight(value: &str) -> bool {
    match value.trim() {
        "bold" | "bolder" => true,
        other => other.parse::<u32>().map(|w| w >= 600).unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_css_px() {
        assert_eq!(parse_css_px("24px"), Some(24.0));
        assert_eq!(parse_css_px(" 13.5 "), Some(13.5));
        assert_eq!(parse_css_px("large"), None);
        assert_eq!(parse_css_px("NaN"), None);
    }

    #[test]
    fn test_is_bold_weight() {
        assert!(is_bold_weight("bold"));
        assert!(is_bold_weight("700"));
        assert!(!is_bold_weight("400"));
        assert!(!is_bold_weight("normal"));
    }
}
