use serde::{Deserialize, Serialize};

/// Per-user alert bounds as stored on the profile. Every field is optional;
/// the engine falls back to [`ResolvedThresholds::DEFAULT`] for anything the
/// profile leaves unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertThresholds {
    pub tachycardia: Option<f64>,
    pub bradycardia: Option<f64>,
    pub hypertension_systolic: Option<f64>,
    pub hypertension_diastolic: Option<f64>,
    pub hypotension_systolic: Option<f64>,
    pub hypotension_diastolic: Option<f64>,
    #[serde(rename = "lowSpO2")]
    pub low_spo2: Option<f64>,
}

impl AlertThresholds {
    pub fn resolve(&self) -> ResolvedThresholds {
        let d = ResolvedThresholds::DEFAULT;
        ResolvedThresholds {
            tachycardia: self.tachycardia.unwrap_or(d.tachycardia),
            bradycardia: self.bradycardia.unwrap_or(d.bradycardia),
            hypertension_systolic: self
                .hypertension_systolic
                .unwrap_or(d.hypertension_systolic),
            hypertension_diastolic: self
                .hypertension_diastolic
                .unwrap_or(d.hypertension_diastolic),
            hypotension_systolic: self
                .hypotension_systolic
                .unwrap_or(d.hypotension_systolic),
            hypotension_diastolic: self
                .hypotension_diastolic
                .unwrap_or(d.hypotension_diastolic),
            low_spo2: self.low_spo2.unwrap_or(d.low_spo2),
        }
    }
}

/// Fully-populated bounds the classifier works against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedThresholds {
    pub tachycardia: f64,
    pub bradycardia: f64,
    pub hypertension_systolic: f64,
    pub hypertension_diastolic: f64,
    pub hypotension_systolic: f64,
    pub hypotension_diastolic: f64,
    pub low_spo2: f64,
}

impl ResolvedThresholds {
    pub const DEFAULT: ResolvedThresholds = ResolvedThresholds {
        tachycardia: 100.0,
        bradycardia: 60.0,
        hypertension_systolic: 140.0,
        hypertension_diastolic: 90.0,
        hypotension_systolic: 90.0,
        hypotension_diastolic: 60.0,
        low_spo2: 92.0,
    };
}

/// The slice of the user record the engine cares about. Authentication and
/// the rest of the profile live with the auth collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    #[serde(default, rename = "alertThresholds")]
    pub thresholds: AlertThresholds,
}

impl UserProfile {
    /// Stand-in profile for the demo binary, matching the seeded demo user.
    pub fn demo() -> Self {
        Self {
            id: "1".to_string(),
            full_name: "John Doe".to_string(),
            thresholds: AlertThresholds {
                tachycardia: Some(100.0),
                bradycardia: Some(60.0),
                ..AlertThresholds::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_thresholds_resolve_to_defaults() {
        let resolved = AlertThresholds::default().resolve();
        assert_eq!(resolved, ResolvedThresholds::DEFAULT);
        assert_eq!(resolved.tachycardia, 100.0);
        assert_eq!(resolved.bradycardia, 60.0);
    }

    #[test]
    fn set_fields_override_defaults_independently() {
        let thresholds = AlertThresholds {
            tachycardia: Some(110.0),
            ..AlertThresholds::default()
        };
        let resolved = thresholds.resolve();
        assert_eq!(resolved.tachycardia, 110.0);
        assert_eq!(resolved.bradycardia, 60.0);
    }

    #[test]
    fn profile_json_uses_original_field_names() {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "id": "1",
                "fullName": "John Doe",
                "alertThresholds": { "tachycardia": 100, "lowSpO2": 94 }
            }"#,
        )
        .unwrap();
        assert_eq!(profile.thresholds.tachycardia, Some(100.0));
        assert_eq!(profile.thresholds.low_spo2, Some(94.0));
        assert_eq!(profile.thresholds.bradycardia, None);
    }
}
