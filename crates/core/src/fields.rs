//! Closed employee-field enumerations.
//!
//! Field names are part of the public contract: visibility rows, modification
//! requests, and public-profile rendering all match on these exact keys.
//! Modeled as enums so unknown keys are rejected at the boundary instead of
//! being accepted and mis-filtered later.

use serde::{Deserialize, Serialize};

/// A field a modification request may target.
///
/// Includes the HR-managed name fields: employees cannot edit those directly
/// but may request a change (e.g. after a legal name change).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestField {
    FirstName,
    LastName,
    Poste,
    Email,
    Phone,
}

impl RequestField {
    /// All request-targetable fields.
    pub const ALL: &'static [RequestField] = &[
        RequestField::FirstName,
        RequestField::LastName,
        RequestField::Poste,
        RequestField::Email,
        RequestField::Phone,
    ];

    /// The wire/storage key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestField::FirstName => "first_name",
            RequestField::LastName => "last_name",
            RequestField::Poste => "poste",
            RequestField::Email => "email",
            RequestField::Phone => "phone",
        }
    }

    /// The `employees` column this field maps to.
    ///
    /// Keys and columns coincide today; the mapping is kept explicit so SQL
    /// is always built from this closed set, never from caller input.
    pub fn column(&self) -> &'static str {
        self.as_str()
    }

    /// Parse a wire/storage key. Unknown keys are a validation error.
    pub fn parse(s: &str) -> Result<RequestField, String> {
        match s {
            "first_name" => Ok(RequestField::FirstName),
            "last_name" => Ok(RequestField::LastName),
            "poste" => Ok(RequestField::Poste),
            "email" => Ok(RequestField::Email),
            "phone" => Ok(RequestField::Phone),
            other => Err(format!(
                "Unknown request field '{other}'. Must be one of: {}",
                RequestField::ALL
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

impl std::fmt::Display for RequestField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field key of the per-employee visibility gate.
///
/// One row per (employee, key) with an `is_public` flag; a missing row means
/// private (fail-closed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityField {
    FirstName,
    LastName,
    Matricule,
    Department,
    Poste,
    Email,
    Phone,
    PhotoUrl,
}

impl VisibilityField {
    /// All gated fields (identity + contact + org).
    pub const ALL: &'static [VisibilityField] = &[
        VisibilityField::FirstName,
        VisibilityField::LastName,
        VisibilityField::Matricule,
        VisibilityField::Department,
        VisibilityField::Poste,
        VisibilityField::Email,
        VisibilityField::Phone,
        VisibilityField::PhotoUrl,
    ];

    /// The wire/storage key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityField::FirstName => "first_name",
            VisibilityField::LastName => "last_name",
            VisibilityField::Matricule => "matricule",
            VisibilityField::Department => "department",
            VisibilityField::Poste => "poste",
            VisibilityField::Email => "email",
            VisibilityField::Phone => "phone",
            VisibilityField::PhotoUrl => "photo_url",
        }
    }

    /// Parse a wire/storage key. Unknown keys are a validation error.
    pub fn parse(s: &str) -> Result<VisibilityField, String> {
        match s {
            "first_name" => Ok(VisibilityField::FirstName),
            "last_name" => Ok(VisibilityField::LastName),
            "matricule" => Ok(VisibilityField::Matricule),
            "department" => Ok(VisibilityField::Department),
            "poste" => Ok(VisibilityField::Poste),
            "email" => Ok(VisibilityField::Email),
            "phone" => Ok(VisibilityField::Phone),
            "photo_url" => Ok(VisibilityField::PhotoUrl),
            other => Err(format!(
                "Unknown visibility field '{other}'. Must be one of: {}",
                VisibilityField::ALL
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

impl std::fmt::Display for VisibilityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-managed fields rendered on the public QR badge.
///
/// A direct self-edit touching any of these raises the QR-refresh signal
/// toward admins, since the badge's cached rendering is now stale.
pub const BADGE_FIELDS: &[&str] = &["poste", "email", "phone", "photo_url"];

/// Whether a field key belongs to the badge-visible set.
pub fn is_badge_field(key: &str) -> bool {
    BADGE_FIELDS.contains(&key)
}
