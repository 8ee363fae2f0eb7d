use crate::errors::{SVGError, SVGResult};

/// An RGB triple as written in a fill attribute.
///
/// Components are not clamped: `rgb(300, -4, 0)` keeps its values and the
/// opacity arithmetic runs on them as they are. They are stored as `i128` so
/// any integer a fill can reasonably carry fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    r: i128,
    g: i128,
    b: i128,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: i128, g: i128, b: i128) -> Self {
        Rgb { r, g, b }
    }

    pub fn red(&self) -> i128 {
        self.r
    }

    pub fn green(&self) -> i128 {
        self.g
    }

    pub fn blue(&self) -> i128 {
        self.b
    }

    pub fn max_component(&self) -> i128 {
        self.r.max(self.g).max(self.b)
    }

    pub fn min_component(&self) -> i128 {
        self.r.min(self.g).min(self.b)
    }

    /// Difference between the largest and smallest component, a cheap
    /// saturation measure.
    pub fn spread(&self) -> u128 {
        self.max_component().abs_diff(self.min_component())
    }
}

impl From<(i128, i128, i128)> for Rgb {
    fn from(value: (i128, i128, i128)) -> Self {
        Rgb::new(value.0, value.1, value.2)
    }
}

/// Parse a fill attribute value.
///
/// Returns `Ok(None)` for absent, empty or unrecognized values. A value that
/// looks like `rgb(...)` but does not hold three integers is an error.
pub fn parse_color(color: Option<&str>) -> SVGResult<Option<Rgb>> {
    let color = match color {
        Some(c) => c.trim(),
        None => return Ok(None),
    };
    if color.is_empty() {
        return Ok(None);
    }

    if let Some(digits) = color.strip_prefix('#') {
        return Ok(parse_hex(digits));
    }

    match rgb_arguments(color) {
        Some(args) => parse_rgb_function(color, args).map(Some),
        None => Ok(None),
    }
}

fn parse_hex(digits: &str) -> Option<Rgb> {
    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16).map(i128::from))
        .collect::<Option<Vec<i128>>>()?;
    match nibbles.as_slice() {
        // #rgb is shorthand for #rrggbb
        [r, g, b] => Some(Rgb::new(r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] => Some(Rgb::new(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0)),
        _ => None,
    }
}

fn rgb_arguments(color: &str) -> Option<&str> {
    let prefix = color.get(..4)?;
    if !prefix.eq_ignore_ascii_case("rgb(") || !color.ends_with(')') {
        return None;
    }
    color.get(4..color.len() - 1)
}

fn parse_rgb_function(color: &str, args: &str) -> SVGResult<Rgb> {
    let components = args
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i128>()
                .map_err(|e| SVGError::InvalidColorComponent {
                    color: color.to_string(),
                    component: part.to_string(),
                    source: e,
                })
        })
        .collect::<SVGResult<Vec<i128>>>()?;
    match components.as_slice() {
        [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
        _ => Err(SVGError::InvalidColorArity(color.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(color: &str) -> Option<Rgb> {
        parse_color(Some(color)).unwrap()
    }

    #[test]
    fn test_parse_hex6() {
        assert_eq!(parse("#ffffff"), Some(Rgb::WHITE));
        assert_eq!(parse("#000000"), Some(Rgb::new(0, 0, 0)));
        assert_eq!(parse("#1a2B3c"), Some(Rgb::new(0x1a, 0x2b, 0x3c)));
        assert_eq!(parse("#C8C8C8"), Some(Rgb::new(200, 200, 200)));
    }

    #[test]
    fn test_parse_hex3_same_as_doubled() {
        for short in ["#fff", "#000", "#abc", "#F0e", "#123"] {
            let digits: String = short[1..].chars().flat_map(|c| [c, c]).collect();
            let long = format!("#{}", digits);
            assert_eq!(parse(short), parse(&long), "{} vs {}", short, long);
            assert!(parse(short).is_some());
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse("  #fff\n"), Some(Rgb::WHITE));
        assert_eq!(parse("\trgb(1,2,3) "), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(parse("rgb(10, 20, 30)"), Some(Rgb::new(10, 20, 30)));
        assert_eq!(parse("rgb( 10 ,20,  30 )"), Some(Rgb::new(10, 20, 30)));
        assert_eq!(parse("RGB(255,255,255)"), Some(Rgb::WHITE));
    }

    #[test]
    fn test_parse_rgb_out_of_range_passes_through() {
        assert_eq!(parse("rgb(300, -5, 0)"), Some(Rgb::new(300, -5, 0)));
    }

    #[test]
    fn test_parse_rgb_beyond_i32() {
        assert_eq!(
            parse("rgb(99999999999, 255, -2147483649)"),
            Some(Rgb::new(99_999_999_999, 255, -2_147_483_649))
        );
    }

    #[test]
    fn test_spread_of_extreme_components() {
        let c = Rgb::new(i128::MAX, 0, i128::MIN);
        assert_eq!(c.spread(), u128::MAX);
        assert_eq!(Rgb::new(255, 255, -2_147_483_648).spread(), 2_147_483_903);
    }

    #[test]
    fn test_not_parseable() {
        assert_eq!(parse_color(None).unwrap(), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("notacolor"), None);
        assert_eq!(parse("white"), None);
        assert_eq!(parse("#ffff"), None);
        assert_eq!(parse("#gggggg"), None);
        assert_eq!(parse("#"), None);
        assert_eq!(parse("rgba(1, 2, 3, 0.5)"), None);
        assert_eq!(parse("rgb(1, 2, 3"), None);
        assert_eq!(parse("url(#gradient)"), None);
    }

    #[test]
    fn test_malformed_rgb_is_fatal() {
        let err = parse_color(Some("rgb(10, twenty, 30)")).unwrap_err();
        assert!(matches!(
            err,
            SVGError::InvalidColorComponent { ref component, .. } if component == "twenty"
        ));
        assert!(parse_color(Some("rgb()")).is_err());
        assert!(parse_color(Some("rgb(1.5, 2, 3)")).is_err());
    }

    #[test]
    fn test_rgb_wrong_arity_is_fatal() {
        let err = parse_color(Some("rgb(1, 2)")).unwrap_err();
        assert!(matches!(err, SVGError::InvalidColorArity(_)));
        assert!(parse_color(Some("rgb(1, 2, 3, 4)")).is_err());
    }

    #[test]
    fn test_spread() {
        let c = Rgb::new(255, 10, 100);
        assert_eq!(c.max_component(), 255);
        assert_eq!(c.min_component(), 10);
        assert_eq!(c.spread(), 245);
        assert_eq!(Rgb::WHITE.spread(), 0);
    }
}
