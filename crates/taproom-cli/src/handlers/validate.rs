//! Form session replay handler

use super::utils::load_document;
use crate::cli::ValidateArgs;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use taproom_core::Scenario;
use tracing::info;

/// Handle the validate command
pub fn handle_validate(args: ValidateArgs, output: &mut OutputWriter) -> Result<()> {
    output.info(&format!("Replaying form session: {}", args.session.display()))?;

    let scenario: Scenario = load_document(&args.session)?;
    info!(
        fields = scenario.form.fields.len(),
        events = scenario.events.len(),
        "Loaded form session"
    );

    let report = {
        let _timer = Timer::with_details("replay", &args.session.display().to_string());
        scenario.run()?
    };

    output.scenario_report(&report, args.detailed)?;

    if report.is_blocked() {
        return Err(Error::SubmissionBlocked {
            missing: report.submission.missing_required.len(),
            invalid: report.submission.invalid_fields.len(),
        });
    }

    Ok(())
}
