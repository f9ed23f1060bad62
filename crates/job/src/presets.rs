//! Status presets keyed by leave policy name.
//!
//! The tracking service tags each request with a policy ("Vacations",
//! "Sick", ...); the away status shown to teammates follows it. Unknown or
//! missing policies fall back to a generic out-of-office preset so that an
//! active leave always produces a visible status.

/// The status text and emoji applied for a leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPreset {
    pub text: &'static str,
    pub emoji: &'static str,
}

/// Preset shown when the policy name is missing or unmapped.
pub const DEFAULT_PRESET: StatusPreset = StatusPreset {
    text: "Out of office",
    emoji: ":calendar:",
};

/// Known policy names and their presets.
const POLICY_PRESETS: &[(&str, StatusPreset)] = &[
    (
        "Vacations",
        StatusPreset {
            text: "On Holiday",
            emoji: ":palm_tree:",
        },
    ),
    (
        "Sick",
        StatusPreset {
            text: "Off Sick",
            emoji: ":face_with_thermometer:",
        },
    ),
];

/// Resolve the preset for a leave policy.
#[must_use]
pub fn preset_for(policy: Option<&str>) -> StatusPreset {
    policy
        .and_then(|name| {
            POLICY_PRESETS
                .iter()
                .find(|(known, _)| *known == name)
                .map(|(_, preset)| *preset)
        })
        .unwrap_or(DEFAULT_PRESET)
}
