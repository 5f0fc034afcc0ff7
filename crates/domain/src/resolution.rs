/// Outcome of a single record lookup. Stale upstream values fold into `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Value(String),
    Absent,
}

impl Resolution {
    /// Treat empty strings as absent.
    pub fn from_option(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Resolution::Value(v),
            _ => Resolution::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Resolution::Absent)
    }
}

/// Three-state result of a cache read.
///
/// `NegativeHit` means the key was looked up before and found absent;
/// `Miss` means it was never looked up (or has expired).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup<T> {
    Hit(T),
    NegativeHit,
    Miss,
}

impl<T> CacheLookup<T> {
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheLookup::Miss)
    }
}
