//! Canonical record emission shared by every layer.
//!
//! Records are emitted through their `Serialize` impls. Optional fields are declared with
//! `skip_serializing_if = "Option::is_none"`, so a field disappears only when no value was
//! supplied (`false`, `0` and `""` survive), and the remaining keys keep declaration order:
//! the `type` tag first, then the kind's own fields.
use serde::Serialize;
use serde_json::Value;

/// A constructed value that can be emitted as canonical JSON.
pub trait Record: Serialize {
    /// The discriminant tag, or a descriptive name for untagged objects.
    fn kind(&self) -> &'static str;

    /// Canonical JSON value with unset fields omitted and key order preserved.
    fn to_record(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Compact canonical JSON string.
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
