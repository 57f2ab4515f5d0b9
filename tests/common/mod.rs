#![allow(dead_code)]

use paint_estimate::{
    DifficultyLevel, PaintTier, ProjectInput, ProjectType, SquareFootage, SurfaceId,
};
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 9] = [
    "name",
    "email",
    "phone",
    "address",
    "project_type",
    "square_footage",
    "paint_tier",
    "difficulty",
    "surfaces",
];

pub fn project(
    project_type: ProjectType,
    sqft: u32,
    tier: PaintTier,
    difficulty: DifficultyLevel,
    surfaces: &[SurfaceId],
) -> ProjectInput {
    ProjectInput::new(project_type, SquareFootage::new(sqft).unwrap(), tier)
        .with_difficulty(difficulty)
        .with_surfaces(surfaces.iter().copied())
}

/// Writes `rows` valid intake requests cycling through every project type,
/// tier and difficulty.
pub fn generate_intake_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;

    for i in 0..rows {
        let project_type = ProjectType::ALL[i % ProjectType::ALL.len()];
        let tier = PaintTier::ALL[(i / ProjectType::ALL.len()) % PaintTier::ALL.len()];
        let difficulty = DifficultyLevel::ALL[i % DifficultyLevel::ALL.len()];
        let surfaces = match project_type {
            ProjectType::Interior => "walls;ceilings",
            ProjectType::Exterior => "vinyl_siding;trim",
            ProjectType::Both => "walls;brick",
        };
        let sqft = (100 + i * 37).to_string();
        wtr.write_record([
            "",
            "",
            "",
            "",
            project_type.as_str(),
            sqft.as_str(),
            tier.as_str(),
            difficulty.as_str(),
            surfaces,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
