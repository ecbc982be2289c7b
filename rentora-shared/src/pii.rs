use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wrapper for card numbers, CVVs, passwords and emails. Debug and Display
/// print a fixed mask so values never reach `tracing` output by accident.
/// Serialization passes the real value through.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

const MASK: &str = "********";

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl Masked<String> {
    /// Mask everything except the last `visible` characters, e.g. `****4242`.
    pub fn tail(&self, visible: usize) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let keep = visible.min(chars.len());
        let shown: String = chars[chars.len() - keep..].iter().collect();
        format!("****{}", shown)
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Masked(value.to_string())
    }
}

impl From<String> for Masked<String> {
    fn from(value: String) -> Self {
        Masked(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_are_masked() {
        let secret = Masked::from("hunter2");
        assert_eq!(format!("{:?}", secret), MASK);
        assert_eq!(secret.to_string(), MASK);
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn test_tail_keeps_last_digits() {
        let card = Masked::from("4242424242424242");
        assert_eq!(card.tail(4), "****4242");

        let short = Masked::from("42");
        assert_eq!(short.tail(4), "****42");
    }
}
