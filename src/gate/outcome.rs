use std::io::Write;

use crate::gate::ApprovalCheck;

/// Final result of a gate run.
#[derive(Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Passed,
    Failed(String),
}

impl GateOutcome {
    /// Converts the result of the approval check into an outcome.
    /// Missing approvals and errors both fail the run.
    pub fn from_check(result: anyhow::Result<ApprovalCheck>) -> Self {
        match result {
            Ok(check) if check.approved => GateOutcome::Passed,
            Ok(check) => GateOutcome::Failed(format!(
                "There are no approvals from any of the required reviewers: {}",
                check.required_reviewers
            )),
            Err(error) => GateOutcome::Failed(format!("{error:#}")),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, GateOutcome::Failed(_))
    }

    /// Writes the outcome as a GitHub Actions workflow command.
    /// Nothing is written for a successful run.
    pub fn report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            GateOutcome::Passed => Ok(()),
            GateOutcome::Failed(message) => {
                writeln!(out, "::error::{}", escape_command_data(message))?;
                out.flush()
            }
        }
    }
}

/// https://github.com/actions/toolkit/blob/main/packages/core/src/command.ts
fn escape_command_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
