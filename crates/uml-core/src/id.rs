use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global string interner for element IDs.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Next numeric suffix handed out by [`ElementId::with_prefix`].
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// An interned identifier for shapes and connectors.
/// Internally a `Spur` index: 4 bytes, Copy, Eq, Hash in O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Spur);

impl ElementId {
    /// Intern a string as an ElementId, or return the existing one.
    pub fn intern(s: &str) -> Self {
        ElementId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Mint a fresh ID with a type prefix (e.g. `class_1`, `rel_2`).
    ///
    /// The suffix comes from a process-wide monotonic counter, so two
    /// calls never return the same ID no matter how close together.
    pub fn with_prefix(prefix: &str) -> Self {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self::intern(&format!("{prefix}_{n}"))
    }

    /// Record an ID that came from outside (an imported document) so the
    /// counter never re-issues its numeric suffix.
    pub fn observe(id: ElementId) {
        if let Some(n) = id.numeric_suffix() {
            COUNTER.fetch_max(n.saturating_add(1), Ordering::Relaxed);
        }
    }

    /// The `N` in `prefix_N`, if the ID has that shape.
    pub fn numeric_suffix(&self) -> Option<u64> {
        let (_, tail) = self.as_str().rsplit_once('_')?;
        tail.parse().ok()
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ElementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ElementId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ElementId::intern(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_roundtrip() {
        let a = ElementId::intern("class_login");
        let b = ElementId::intern("class_login");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "class_login");
    }

    #[test]
    fn prefixed_ids_are_unique_and_increasing() {
        let a = ElementId::with_prefix("class");
        let b = ElementId::with_prefix("class");
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("class_"));
        assert!(b.numeric_suffix() > a.numeric_suffix());
    }

    #[test]
    fn observe_skips_past_imported_suffix() {
        let imported = ElementId::intern("rel_900000");
        ElementId::observe(imported);
        let fresh = ElementId::with_prefix("rel");
        assert!(fresh.numeric_suffix().unwrap() > 900_000);
    }

    #[test]
    fn non_numeric_suffix_is_ignored() {
        assert_eq!(ElementId::intern("pkg_cls_abc").numeric_suffix(), None);
        assert_eq!(ElementId::intern("plain").numeric_suffix(), None);
        assert_eq!(ElementId::intern("pkg_cls_7").numeric_suffix(), Some(7));
    }
}
