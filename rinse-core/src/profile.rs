//! User profile and wash cadence.

use serde::{Deserialize, Serialize};

/// How often the user wants to wash: a fixed interval or a day range.
///
/// Persisted untagged, so a bare integer reads as `Fixed` and a
/// `{min, max}` object reads as `Range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cadence {
    /// Wash every `n` days.
    Fixed(u32),
    /// Wash somewhere between `min` and `max` days after the last wash.
    Range { min: u32, max: u32 },
}

impl Cadence {
    /// Enforce the cadence invariants: intervals are at least one day, and
    /// `min < max` (a violating `max` is raised to `min + 1`).
    pub fn normalized(self) -> Self {
        match self {
            Cadence::Fixed(n) => Cadence::Fixed(n.max(1)),
            Cadence::Range { min, max } => {
                let min = min.max(1);
                let max = if max > min { max } else { min + 1 };
                Cadence::Range { min, max }
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Cadence::Fixed(1) => "every day".to_string(),
            Cadence::Fixed(n) => format!("every {n} days"),
            Cadence::Range { min, max } => format!("every {min}-{max} days"),
        }
    }
}

/// The user's hair profile: freeform preference fields, the wash cadence,
/// and two behavior toggles. Absent fields mean "unset", never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_length: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shampoo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditioner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatments: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(rename = "frequency", skip_serializing_if = "Option::is_none")]
    pub cadence: Option<Cadence>,

    /// Offer a day-before wash when a new event is added.
    pub event_wash_reminder: bool,

    /// Re-plan scheduled washes automatically after logging a wash.
    pub auto_schedule_washes: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            hair_type: None,
            hair_length: None,
            shampoo: None,
            conditioner: None,
            treatments: None,
            notes: None,
            cadence: None,
            event_wash_reminder: true,
            auto_schedule_washes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cadence_reads_a_bare_integer_as_fixed() {
        let cadence: Cadence = serde_json::from_str("7").unwrap();
        assert_eq!(cadence, Cadence::Fixed(7));
    }

    #[test]
    fn cadence_reads_an_object_as_range() {
        let cadence: Cadence = serde_json::from_str(r#"{"min":2,"max":5}"#).unwrap();
        assert_eq!(cadence, Cadence::Range { min: 2, max: 5 });
    }

    #[test]
    fn cadence_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Cadence::Fixed(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&Cadence::Range { min: 2, max: 5 }).unwrap(),
            r#"{"min":2,"max":5}"#
        );
    }

    #[test]
    fn normalized_raises_a_collapsed_range() {
        assert_eq!(
            Cadence::Range { min: 5, max: 5 }.normalized(),
            Cadence::Range { min: 5, max: 6 }
        );
        assert_eq!(
            Cadence::Range { min: 5, max: 2 }.normalized(),
            Cadence::Range { min: 5, max: 6 }
        );
        assert_eq!(
            Cadence::Range { min: 2, max: 5 }.normalized(),
            Cadence::Range { min: 2, max: 5 }
        );
    }

    #[test]
    fn normalized_keeps_intervals_positive() {
        assert_eq!(Cadence::Fixed(0).normalized(), Cadence::Fixed(1));
        assert_eq!(
            Cadence::Range { min: 0, max: 3 }.normalized(),
            Cadence::Range { min: 1, max: 3 }
        );
    }

    #[test]
    fn profile_tolerates_absent_fields() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, Profile::default());
        assert!(profile.event_wash_reminder);
        assert!(!profile.auto_schedule_washes);
    }

    #[test]
    fn profile_round_trips_with_wire_names() {
        let profile = Profile {
            hair_type: Some("curly".to_string()),
            cadence: Some(Cadence::Fixed(3)),
            auto_schedule_washes: true,
            ..Profile::default()
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains(r#""hairType":"curly""#));
        assert!(json.contains(r#""frequency":3"#));
        assert!(json.contains(r#""autoScheduleWashes":true"#));

        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
