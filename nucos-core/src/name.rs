//! Unit name normalization
//!
//! Every unit and unit-type lookup goes through [`normalize`]: names are
//! lower-cased, all whitespace is removed and periods are dropped, so
//! `"Meter Second-1"`, `"m s-1"` and `"m.s-1"` all land on the same key.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::ops::Deref;

/// A unit or unit-type name reduced to its lookup key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName<'a>(Cow<'a, str>);

impl<'a> NormalizedName<'a> {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_owned(self) -> String {
        self.0.into_owned()
    }
}

impl Deref for NormalizedName<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NormalizedName<'_> {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_dropped(c: char) -> bool {
    c.is_whitespace() || c == '.'
}

fn lowercases_to_itself(c: char) -> bool {
    if c.is_ascii() {
        return !c.is_ascii_uppercase();
    }
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}

/// Reduce a raw name to its lookup key.
///
/// Names that are already normalized are borrowed, not copied.
pub fn normalize(raw: &str) -> NormalizedName<'_> {
    let clean = raw.chars().all(|c| !is_dropped(c) && lowercases_to_itself(c));
    if clean {
        return NormalizedName(Cow::Borrowed(raw));
    }

    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().filter(|&c| !is_dropped(c)) {
        out.extend(c.to_lowercase());
    }
    NormalizedName(Cow::Owned(out))
}
