//! Device kinds, circuit purposes, endpoint kinds, confidence and entity kinds.
//!
//! Persisted enums use `SCREAMING_SNAKE_CASE` serialization, matching the
//! values stored by the repository. [`EntityKind`] uses `snake_case` because it
//! is part of the `"<kind>:<id>"` node key wire format.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DeviceKind
// ---------------------------------------------------------------------------

/// Kind of a device mounted on a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceKind {
    Meter,
    MainSwitch,
    Rcd,
    Mcb,
    Spd,
    Other,
}

impl DeviceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meter => "METER",
            Self::MainSwitch => "MAIN_SWITCH",
            Self::Rcd => "RCD",
            Self::Mcb => "MCB",
            Self::Spd => "SPD",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Purpose
// ---------------------------------------------------------------------------

/// What a circuit is mainly used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Purpose {
    Sockets,
    Lights,
    Appliance,
    Outdoor,
    Garage,
    It,
    #[default]
    Other,
}

impl Purpose {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sockets => "SOCKETS",
            Self::Lights => "LIGHTS",
            Self::Appliance => "APPLIANCE",
            Self::Outdoor => "OUTDOOR",
            Self::Garage => "GARAGE",
            Self::It => "IT",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// How certain the documented mapping of a circuit or endpoint is.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Unknown < Likely < Confirmed`.
///
/// ```text
/// verification checked   : any       → confirmed
/// verification unchecked : confirmed → likely
///                          likely    → likely
///                          unknown   → unknown
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    #[default]
    Unknown,
    Likely,
    Confirmed,
}

impl Confidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Likely => "LIKELY",
            Self::Confirmed => "CONFIRMED",
        }
    }

    /// Anything short of `Confirmed` still needs checking on site.
    #[must_use]
    pub const fn is_uncertain(self) -> bool {
        !matches!(self, Self::Confirmed)
    }

    /// Confidence after one verification pass over an endpoint.
    ///
    /// A previously confirmed endpoint that is not checked again only drops to
    /// `Likely`; it never falls back to `Unknown`.
    #[must_use]
    pub const fn after_verification(self, checked: bool) -> Self {
        match (checked, self) {
            (true, _) => Self::Confirmed,
            (false, Self::Confirmed) => Self::Likely,
            (false, other) => other,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EndpointKind
// ---------------------------------------------------------------------------

/// Physical kind of an endpoint fed by a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndpointKind {
    Socket,
    Light,
    Junction,
    FixedLoad,
    Switch,
    #[default]
    Other,
}

impl EndpointKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Socket => "SOCKET",
            Self::Light => "LIGHT",
            Self::Junction => "JUNCTION",
            Self::FixedLoad => "FIXED_LOAD",
            Self::Switch => "SWITCH",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Kind of entity that can be selected and shown as a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Device,
    Circuit,
    Room,
    Endpoint,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Device => "device",
            Self::Circuit => "circuit",
            Self::Room => "room",
            Self::Endpoint => "endpoint",
        }
    }

    /// Inverse of [`EntityKind::as_str`].
    #[must_use]
    pub fn from_key_prefix(s: &str) -> Option<Self> {
        match s {
            "device" => Some(Self::Device),
            "circuit" => Some(Self::Circuit),
            "room" => Some(Self::Room),
            "endpoint" => Some(Self::Endpoint),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(device_main_switch, DeviceKind, DeviceKind::MainSwitch, "MAIN_SWITCH");
    test_serde_roundtrip!(purpose_it, Purpose, Purpose::It, "IT");
    test_serde_roundtrip!(confidence_likely, Confidence, Confidence::Likely, "LIKELY");
    test_serde_roundtrip!(
        endpoint_fixed_load,
        EndpointKind,
        EndpointKind::FixedLoad,
        "FIXED_LOAD"
    );
    test_serde_roundtrip!(entity_endpoint, EntityKind, EntityKind::Endpoint, "endpoint");

    #[test]
    fn confidence_is_ordered() {
        assert!(Confidence::Unknown < Confidence::Likely);
        assert!(Confidence::Likely < Confidence::Confirmed);
        assert_eq!(
            [Confidence::Confirmed, Confidence::Unknown, Confidence::Likely]
                .iter()
                .max(),
            Some(&Confidence::Confirmed)
        );
    }

    #[rstest]
    #[case(Confidence::Unknown, true, Confidence::Confirmed)]
    #[case(Confidence::Likely, true, Confidence::Confirmed)]
    #[case(Confidence::Confirmed, true, Confidence::Confirmed)]
    #[case(Confidence::Confirmed, false, Confidence::Likely)]
    #[case(Confidence::Likely, false, Confidence::Likely)]
    #[case(Confidence::Unknown, false, Confidence::Unknown)]
    fn verification_transitions(
        #[case] before: Confidence,
        #[case] checked: bool,
        #[case] after: Confidence,
    ) {
        assert_eq!(before.after_verification(checked), after);
    }

    #[test]
    fn unchecking_a_confirmed_endpoint_never_reaches_unknown() {
        let confirmed = Confidence::Unknown.after_verification(true);
        let unchecked = confirmed.after_verification(false);
        assert_eq!(unchecked, Confidence::Likely);
        assert_eq!(unchecked.after_verification(false), Confidence::Likely);
    }

    #[test]
    fn only_confirmed_is_certain() {
        assert!(Confidence::Unknown.is_uncertain());
        assert!(Confidence::Likely.is_uncertain());
        assert!(!Confidence::Confirmed.is_uncertain());
    }

    #[test]
    fn entity_kind_prefix_roundtrip() {
        for kind in [
            EntityKind::Device,
            EntityKind::Circuit,
            EntityKind::Room,
            EntityKind::Endpoint,
        ] {
            assert_eq!(EntityKind::from_key_prefix(kind.as_str()), Some(kind));
        }
        assert_eq!(EntityKind::from_key_prefix("panel"), None);
        assert_eq!(EntityKind::from_key_prefix("Device"), None);
    }
}
