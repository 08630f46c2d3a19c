use std::fmt;

/// Maximum number of bytes in an XKB key name such as `AE01`.
pub const KEY_NAME_LENGTH: usize = 4;

/// Fixed-capacity key name, null padded like the `<AE01>` names in keycode files.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyName([u8; KEY_NAME_LENGTH]);

impl KeyName {
    /// Copies at most four bytes of `name`, stopping early at a null byte.
    pub fn new(name: &str) -> Self {
        let mut buf = [0u8; KEY_NAME_LENGTH];
        for (slot, byte) in buf.iter_mut().zip(name.bytes().take_while(|&b| b != 0)) {
            *slot = byte;
        }
        KeyName(buf)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_NAME_LENGTH] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.iter().position(|&b| b == 0).unwrap_or(KEY_NAME_LENGTH)
    }

    pub fn is_empty(&self) -> bool {
        self.0[0] == 0
    }

    /// The name without padding. Bytes that are not valid UTF-8 are replaced.
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.0[..self.len()]).into_owned()
    }
}

impl From<&str> for KeyName {
    fn from(name: &str) -> Self {
        KeyName::new(name)
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_string())
    }
}

impl fmt::Debug for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyName({:?})", self.as_string())
    }
}
