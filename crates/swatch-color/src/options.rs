//! Serializer settings.

/// Indentation used when writing a palette document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// One tab per level.
    #[default]
    Tab,
    /// The given number of spaces per level.
    Spaces(u8),
    /// Single line, no whitespace.
    Compact,
}

impl Indent {
    /// Bytes written per nesting level, or `None` for compact output.
    pub fn bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Tab => Some(b"\t".to_vec()),
            Self::Spaces(n) => Some(vec![b' '; usize::from(n)]),
            Self::Compact => None,
        }
    }
}

/// Options for [`Palette::serialize_with`](crate::Palette::serialize_with).
///
/// # Example
///
/// ```rust
/// use swatch_color::{Indent, Palette, SerializeOptions};
///
/// let options = SerializeOptions::new().with_indent(Indent::Compact);
/// let text = Palette::default().serialize_with(&options)?;
/// assert_eq!(text, r#"{"colors":[]}"#);
/// # Ok::<(), swatch_color::ColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerializeOptions {
    /// Indentation style. Defaults to [`Indent::Tab`].
    pub indent: Indent,
}

impl SerializeOptions {
    /// Default options: tab indentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation style.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_bytes() {
        assert_eq!(Indent::Tab.bytes(), Some(b"\t".to_vec()));
        assert_eq!(Indent::Spaces(2).bytes(), Some(b"  ".to_vec()));
        assert_eq!(Indent::Compact.bytes(), None);
        assert_eq!(SerializeOptions::new().indent, Indent::Tab);
    }
}
