/// Outcome of the hidden `is_bot` form field.
///
/// Browsers submit the field's default `"false"`. Anything that rewrites it to
/// exactly `"true"` is treated as automation; every other value passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Honeypot {
    Untouched,
    Tripped,
}

impl Honeypot {
    const TRIPPED_VALUE: &'static str = "true";

    pub fn is_tripped(self) -> bool {
        self == Honeypot::Tripped
    }
}

impl From<Option<&str>> for Honeypot {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(Self::TRIPPED_VALUE) => Honeypot::Tripped,
            _ => Honeypot::Untouched,
        }
    }
}
