use crate::domain::project::{
    DifficultyLevel, PaintTier, ProjectInput, ProjectType, SquareFootage, SurfaceId,
};
use crate::error::IntakeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Contact fields collected alongside a project. None of them affect pricing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A raw estimate request, exactly as a form or CSV row supplied it.
///
/// Every field is optional text; [`IntakeForm::validate`] decides what is
/// required and what is well-formed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IntakeForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub project_type: Option<String>,
    pub square_footage: Option<String>,
    pub paint_tier: Option<String>,
    pub difficulty: Option<String>,
    /// Surface names separated by `;`, `|` or `,`.
    pub surfaces: Option<String>,
}

/// An intake that passed validation and can be priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedIntake {
    /// 1-based position of the request in its source.
    pub row: usize,
    pub contact: ContactDetails,
    pub project: ProjectInput,
}

impl IntakeForm {
    /// Checks completeness of the pricing fields, then well-formedness of the
    /// contact fields. The first failing field is reported.
    pub fn validate(self, row: usize) -> Result<ValidatedIntake, IntakeError> {
        let project_type: ProjectType = non_blank(self.project_type)
            .ok_or(IntakeError::MissingProjectType)?
            .parse()?;
        let square_footage = parse_square_footage(non_blank(self.square_footage))?;
        let paint_tier: PaintTier = non_blank(self.paint_tier)
            .ok_or(IntakeError::MissingPaintTier)?
            .parse()?;
        let difficulty_level = match non_blank(self.difficulty) {
            Some(value) => value.parse()?,
            None => DifficultyLevel::default(),
        };
        let surfaces = parse_surfaces(non_blank(self.surfaces), project_type)?;

        let contact = ContactDetails {
            name: non_blank(self.name).map(validate_name).transpose()?,
            email: non_blank(self.email).map(validate_email).transpose()?,
            phone: non_blank(self.phone).map(validate_phone).transpose()?,
            address: non_blank(self.address),
        };

        let project = ProjectInput::new(project_type, square_footage, paint_tier)
            .with_difficulty(difficulty_level)
            .with_surfaces(surfaces);

        Ok(ValidatedIntake {
            row,
            contact,
            project,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_square_footage(value: Option<String>) -> Result<SquareFootage, IntakeError> {
    let value = value.ok_or(IntakeError::MissingSquareFootage)?;
    let sqft: u32 = value
        .replace([',', '_'], "")
        .parse()
        .map_err(|_| IntakeError::InvalidSquareFootage(value.clone()))?;
    SquareFootage::new(sqft)
}

fn parse_surfaces(
    value: Option<String>,
    project_type: ProjectType,
) -> Result<BTreeSet<SurfaceId>, IntakeError> {
    let Some(value) = value else {
        return Ok(BTreeSet::new());
    };

    let mut surfaces = BTreeSet::new();
    for token in value
        .split([';', '|', ','])
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        let surface: SurfaceId = token.parse()?;
        if !surface.allowed_for(project_type) {
            return Err(IntakeError::SurfaceNotAllowed {
                surface: surface.to_string(),
                project_type: project_type.to_string(),
            });
        }
        surfaces.insert(surface);
    }
    Ok(surfaces)
}

fn validate_name(name: String) -> Result<String, IntakeError> {
    if (2..=100).contains(&name.chars().count()) {
        Ok(name)
    } else {
        Err(IntakeError::InvalidName)
    }
}

fn validate_email(email: String) -> Result<String, IntakeError> {
    let well_formed = !email.contains(char::is_whitespace)
        && email.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        });
    if well_formed {
        Ok(email)
    } else {
        Err(IntakeError::InvalidEmail(email))
    }
}

fn validate_phone(phone: String) -> Result<String, IntakeError> {
    let body = phone.strip_prefix('+').unwrap_or(&phone);
    let allowed = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')'));
    let digits = body.chars().filter(char::is_ascii_digit).count();
    if allowed && (10..=15).contains(&digits) {
        Ok(phone)
    } else {
        Err(IntakeError::InvalidPhone(phone))
    }
}
