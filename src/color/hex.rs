use super::model::Rgba;

/// Parse a hex color string into a normalized color.
///
/// Accepted forms, with an optional `#` prefix:
/// * `RGB` (each digit doubled, `"f"` parses as `"ff"`, fully opaque)
/// * `RRGGBB` (fully opaque)
/// * `AARRGGBB` (alpha byte leads)
///
/// Anything else, wrong length or any non-hex character, falls back to
/// opaque white, silently.
pub fn parse_hex(input: &str) -> Rgba {
    let hex = input.strip_prefix('#').unwrap_or(input);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Rgba::WHITE;
    }

    let argb = match hex.len() {
        3 => {
            let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
            format!("FF{}", doubled)
        }
        6 => format!("FF{}", hex),
        8 => hex.to_string(),
        _ => return Rgba::WHITE,
    };

    let channel = |i: usize| u8::from_str_radix(&argb[i..i + 2], 16).unwrap_or(0) as f64 / 255.0;
    Rgba {
        alpha: channel(0),
        red: channel(2),
        green: channel(4),
        blue: channel(6),
    }
}

/// Format a color as 6 uppercase hex digits `RRGGBB`. Alpha is dropped.
pub fn format_rgb_hex(color: &Rgba) -> String {
    let [r, g, b, _] = color.to_rgba8();
    format!("{:02X}{:02X}{:02X}", r, g, b)
}
