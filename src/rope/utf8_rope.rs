use super::shared_rope::*;

///
/// Trait implemented by ropes that can work as strings
///
pub trait Utf8Rope {
    ///
    /// Creates a rope from a string
    ///
    fn from_str(string: &str) -> Self;

    ///
    /// Converts this rope to a string
    ///
    fn to_string_lossy(&self) -> String;
}

impl Utf8Rope for SharedRope<u8> {
    ///
    /// Creates a rope containing a string value
    ///
    fn from_str(string: &str) -> Self {
        SharedRope::from(string)
    }

    ///
    /// Converts this rope to a string
    ///
    fn to_string_lossy(&self) -> String {
        // Convert the whole rope at once, so characters that span leaves are decoded correctly
        String::from_utf8_lossy(&self.to_vec()).into()
    }
}

impl Utf8Rope for SharedRope<u16> {
    ///
    /// Creates a rope containing the UTF-16 code units of a string
    ///
    fn from_str(string: &str) -> Self {
        SharedRope::from_vec(string.encode_utf16().collect())
    }

    ///
    /// Converts this rope to a string
    ///
    fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.to_vec())
    }
}
