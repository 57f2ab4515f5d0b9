use crate::application::intake::{ContactDetails, ValidatedIntake};
use crate::domain::project::ProjectInput;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// The document handed to the estimate-intake endpoint: the original request
/// plus contact fields. The computed price range is deliberately absent.
#[derive(Debug, Serialize)]
pub struct SubmissionDocument<'a> {
    #[serde(flatten)]
    pub contact: &'a ContactDetails,
    #[serde(flatten)]
    pub project: &'a ProjectInput,
}

impl<'a> From<&'a ValidatedIntake> for SubmissionDocument<'a> {
    fn from(intake: &'a ValidatedIntake) -> Self {
        Self {
            contact: &intake.contact,
            project: &intake.project,
        }
    }
}

/// Writes submission documents as JSON Lines, one object per line.
pub struct SubmissionWriter<W: Write> {
    sink: W,
}

impl<W: Write> SubmissionWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write(&mut self, intake: &ValidatedIntake) -> Result<()> {
        serde_json::to_writer(&mut self.sink, &SubmissionDocument::from(intake))?;
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}
