//! Color handling for linkviz scenes
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Node fills, value text and connector strokes all use it.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#F27A7B",
    /// "rgb(255, 0, 0)" or "white".
    ///
    /// # Examples
    ///
    /// ```
    /// use linkviz_core::color::Color;
    ///
    /// let coral = Color::new("#F27A7B").unwrap();
    /// let white = Color::new("white").unwrap();
    /// assert_ne!(coral, white);
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Parses a list of color strings, failing on the first invalid entry.
    ///
    /// ```
    /// use linkviz_core::color::Color;
    ///
    /// let colors = Color::parse_all(&["#F27A7B", "#FDD244"]).unwrap();
    /// assert_eq!(colors.len(), 2);
    /// assert!(Color::parse_all(&["#F27A7B", "nope"]).is_err());
    /// ```
    pub fn parse_all<S: AsRef<str>>(colors: &[S]) -> Result<Vec<Self>, String> {
        colors.iter().map(|c| Self::new(c.as_ref())).collect()
    }

    /// Returns the alpha component of this color, between 0.0 and 1.0
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#FFE317").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_color_alpha() {
        let color = Color::new("#4143CC").unwrap();
        assert!((color.alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_color_parse_all_reports_bad_entry() {
        let err = Color::parse_all(&["red", "#12"]).unwrap_err();
        assert!(err.contains("#12"));
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("#FD8189").unwrap();
        let color2 = Color::new("#FD8189").unwrap();
        let color3 = Color::new("#92CD33").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
