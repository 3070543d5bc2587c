//! Input source port - where named external inputs come from.

/// Read-only lookup of named external inputs (environment-like).
///
/// Implementations must treat an empty value the same as any other value;
/// fallback rules are applied by the secret resolver, not here.
pub trait InputSource {
    /// Raw value of the named input, if set
    fn var(&self, name: &str) -> Option<String>;
}

impl<S: InputSource + ?Sized> InputSource for &S {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
