//! Perceptual color coordinates and their conversions.
//!
//! Conversions between sRGB and OKLCH are delegated to the
//! [`palette`] crate; textual inputs other than `oklch()` go through
//! [`csscolorparser`].

use std::fmt;
use std::str::FromStr;

use palette::{Clamp, FromColor, Oklab, Srgb};
use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

use crate::error::InvalidColorError;

/// Below this chroma the hue carries no information and is reset to 0
/// when converting from RGB.
const ACHROMATIC: f64 = 1e-4;

/// The CSS reference chroma: `oklch(… 100% …)` means a chroma of 0.4.
const CSS_CHROMA_100: f64 = 0.4;

/// A color in the OKLCH color space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Oklch {
    /// The lightness in the range 0. to 1.
    pub l: f64,
    /// The chroma, ≥ 0. and below 0.4 in practice.
    pub c: f64,
    /// The hue in degrees in the range 0. to 360.  Meaningless when
    /// the chroma is (nearly) zero.
    pub h: f64,
}

impl Oklch {
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self { Oklch { l, c, h } }

    /// Return the coordinate restricted to its valid domain: `l` in
    /// \[0, 1\], `c ≥ 0` and `h` in \[0, 360).  NaN components become 0.
    pub fn clamped(self) -> Self {
        let finite = |x: f64| if x.is_finite() { x } else { 0. };
        Oklch {
            l: finite(self.l).clamp(0., 1.),
            c: finite(self.c).max(0.),
            h: finite(self.h).rem_euclid(360.),
        }
    }

    /// Convert a RGBA color with components in \[0, 255\].  The alpha
    /// component is ignored.
    pub fn from_rgba(c: RGBA<f64>) -> Self {
        let rgb = Srgb::new(c.r / 255., c.g / 255., c.b / 255.);
        let lab: Oklab<f64> = Oklab::from_color(rgb);
        let lch: palette::Oklch<f64> = palette::Oklch::from_color(lab);
        let h = if lch.chroma < ACHROMATIC { 0. }
                else { lch.hue.into_positive_degrees() };
        Oklch { l: lch.l, c: lch.chroma, h }
    }

    /// Return the color as opaque RGBA with components in \[0, 255\].
    /// Colors outside the sRGB gamut are clamped.
    pub fn to_rgba(&self) -> RGBA<f64> {
        let lch = palette::Oklch::new(self.l, self.c, self.h);
        let rgb: Srgb<f64> = Srgb::from_color(lch).clamp();
        RGBA { r: 255. * rgb.red, g: 255. * rgb.green, b: 255. * rgb.blue,
               a: 255. }
    }

    /// Return the color in the form `#rrggbb`.
    pub fn to_hex(&self) -> String {
        let c = RGB8::from_oklch(*self);
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    }

    /// Return the CSS notation `oklch(l c h)`.
    pub fn to_css(&self) -> String {
        format!("oklch({} {} {})", self.l, self.c, self.h)
    }

    /// Same as [`Oklch::to_css`] with every component written with
    /// `decimals` digits after the point.
    pub fn to_css_rounded(&self, decimals: usize) -> String {
        format!("oklch({:.*} {:.*} {:.*})",
                decimals, self.l, decimals, self.c, decimals, self.h)
    }

    /// Whether dark text reads better than light text on this color.
    pub fn is_light(&self) -> bool {
        let RGBA { r, g, b, .. } = self.to_rgba();
        (0.299 * r + 0.587 * g + 0.114 * b) / 255. > 0.5
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Oklch {
    type Err = InvalidColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parse_color(s) }
}

/// Angular distance between two hues, in \[0, 180\].
pub(crate) fn hue_distance(h0: f64, h1: f64) -> f64 {
    let d = (h1 - h0).rem_euclid(360.);
    if d > 180. { 360. - d } else { d }
}

/// Parse any CSS color (hex, `rgb()`, `hsl()`, `hwb()`, named colors)
/// or an `oklch()` expression.
///
/// `oklch()` components are read as given, without a round trip through
/// RGB, so out of gamut colors are kept as is.
///
/// ```
/// use ditto_tones::parse_color;
/// let c = parse_color("oklch(62.3% 0.214 259.8)").unwrap();
/// assert!((c.l - 0.623).abs() < 1e-12);
/// assert!(parse_color("not-a-color").is_err());
/// ```
pub fn parse_color(s: &str) -> Result<Oklch, InvalidColorError> {
    let t = s.trim().to_ascii_lowercase();
    if t.is_empty() {
        return Err(InvalidColorError::new(s, "empty color string"));
    }
    if let Some(args) = t.strip_prefix("oklch(") {
        let args = args.strip_suffix(')')
            .ok_or_else(|| InvalidColorError::new(s, "missing \")\""))?;
        return parse_oklch_args(args)
            .map_err(|reason| InvalidColorError::new(s, reason));
    }
    let c = csscolorparser::parse(&t)
        .map_err(|e| InvalidColorError::new(s, e))?;
    Ok(Oklch::from_rgba(RGBA { r: 255. * c.r as f64, g: 255. * c.g as f64,
                               b: 255. * c.b as f64, a: 255. * c.a as f64 }))
}

/// Parse the inside of `oklch(L C H [/ A])`.  Commas are accepted as
/// separators as well.
fn parse_oklch_args(args: &str) -> Result<Oklch, &'static str> {
    let color = args.split('/').next().unwrap_or_default();
    let parts: Vec<&str> = color
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    let [l, c, h] = parts[..] else {
        return Err("oklch() expects 3 components");
    };
    let l = component(l, 1.)?;
    let c = component(c, CSS_CHROMA_100)?;
    let h = if h == "none" { 0. }
            else { number(h.strip_suffix("deg").unwrap_or(h))? };
    Ok(Oklch { l, c, h })
}

/// A number or a percentage of `full`.  `none` is 0.
fn component(s: &str, full: f64) -> Result<f64, &'static str> {
    if s == "none" { return Ok(0.) }
    match s.strip_suffix('%') {
        Some(p) => Ok(number(p)? / 100. * full),
        None => number(s),
    }
}

fn number(s: &str) -> Result<f64, &'static str> {
    match s.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err("invalid number in oklch()"),
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return the perceptual coordinate of the color.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use ditto_tones::RGBColor;
    /// let lch = RGB8::new(255, 255, 255).to_oklch();
    /// assert!((lch.l - 1.).abs() < 1e-6);
    /// ```
    fn to_oklch(&self) -> Oklch { Oklch::from_rgba(self.to_rgba()) }

    /// Return the color closest to `c` in this encoding.
    fn from_oklch(c: Oklch) -> Self { Self::from_rgba(c.to_rgba()) }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: (257. * c.r).round() as u16,  g: (257. * c.g).round() as u16,
                b: (257. * c.b).round() as u16 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8,  g: c.g.round() as u8,
                b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: self.a as f64 / 257. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: (257. * c.r).round() as u16,  g: (257. * c.g).round() as u16,
                 b: (257. * c.b).round() as u16, a: (257. * c.a).round() as u16 }
    }
}
