#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(pub String);

impl ClientId {
    pub const UNKNOWN: &'static str = "unknown";

    pub fn synthesize() -> Self {
        return Self(super::synthesize());
    }

    pub fn unknown() -> Self {
        return Self(Self::UNKNOWN.to_string());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }

    pub fn is_empty(&self) -> bool {
        return self.0.trim().is_empty();
    }
}
