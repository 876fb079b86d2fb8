/// SVG backend configuration

/// Number formatting for emitted attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgConfig {
    /// Maximum digits after the decimal point
    pub precision: usize,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self { precision: 3 }
    }
}

impl SvgConfig {
    /// Format a number the way it is written into an attribute.
    ///
    /// Trailing zeros are dropped and negative zero prints as `0`, so a
    /// value that does not change keeps the same attribute text.
    pub fn format(&self, value: f64) -> String {
        let text = format!("{:.*}", self.precision, value);
        let text = if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.')
        } else {
            text.as_str()
        };
        if text == "-0" {
            "0".to_string()
        } else {
            text.to_string()
        }
    }
}
