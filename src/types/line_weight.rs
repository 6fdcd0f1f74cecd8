//! Line weight representation
//!
//! Line weights are written under group code 370 (R2000 onward) in
//! hundredths of a millimeter, with negative sentinels for the special
//! values.

/// A record line weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LineWeight {
    /// Use the layer's line weight (-1)
    ByLayer,
    /// Use the block's line weight (-2)
    ByBlock,
    /// Default line weight (-3), omitted from entity output
    #[default]
    Default,
    /// Specific weight in 1/100 mm (0-211)
    Value(i16),
}

impl LineWeight {
    /// Create a line weight from the raw code-370 value.
    pub fn from_value(value: i16) -> Self {
        match value {
            -1 => LineWeight::ByLayer,
            -2 => LineWeight::ByBlock,
            -3 => LineWeight::Default,
            v => LineWeight::Value(v),
        }
    }

    /// The integer written under group code 370.
    pub fn value(&self) -> i64 {
        match self {
            LineWeight::ByLayer => -1,
            LineWeight::ByBlock => -2,
            LineWeight::Default => -3,
            LineWeight::Value(v) => *v as i64,
        }
    }

    /// Default carries no information of its own and is omitted from
    /// entity output.
    pub fn is_default(&self) -> bool {
        matches!(self, LineWeight::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_values() {
        assert_eq!(LineWeight::ByLayer.value(), -1);
        assert_eq!(LineWeight::ByBlock.value(), -2);
        assert_eq!(LineWeight::Default.value(), -3);
        assert_eq!(LineWeight::Value(25).value(), 25);
    }

    #[test]
    fn test_from_value_roundtrip() {
        for raw in [-3i16, -2, -1, 0, 13, 211] {
            assert_eq!(LineWeight::from_value(raw).value(), raw as i64);
        }
    }
}
