//! Single-field check handlers: password, email, confirm

use crate::cli::{ConfirmArgs, EmailArgs, PasswordArgs};
use crate::error::{Error, Result};
use crate::output::{rule_rows, OutputWriter};
use taproom_core::{
    calculate_password_strength, validate_email, validate_password_confirmation,
    validate_password_strength, ValidationVerdict, VerdictLevel,
};

/// Turn an invalid verdict into the command's failure
fn verdict_result(check: &str, verdict: &ValidationVerdict) -> Result<()> {
    if verdict.is_invalid() {
        Err(Error::check_failed(check, verdict.message.clone()))
    } else {
        Ok(())
    }
}

/// Handle the password command
///
/// An empty password has nothing to score and is reported as such.
pub fn handle_password(args: PasswordArgs, output: &mut OutputWriter) -> Result<()> {
    let verdict = validate_password_strength(&args.password);
    if verdict.level == VerdictLevel::Neutral {
        return output.verdict("password", &verdict);
    }

    let result = calculate_password_strength(&args.password);
    output.strength(&result)?;

    if args.detailed {
        output.section("Rules")?;
        output.table(&["", "Requirement"], rule_rows(&args.password))?;
    }

    verdict_result("password", &verdict)
}

/// Handle the email command
pub fn handle_email(args: EmailArgs, output: &mut OutputWriter) -> Result<()> {
    let verdict = validate_email(&args.email);
    output.verdict("email", &verdict)?;
    verdict_result("email", &verdict)
}

/// Handle the confirm command
pub fn handle_confirm(args: ConfirmArgs, output: &mut OutputWriter) -> Result<()> {
    let verdict = validate_password_confirmation(&args.confirmation, Some(&args.password));
    output.verdict("confirmation", &verdict)?;
    verdict_result("confirmation", &verdict)
}
