use crate::entities::{ExportIssue, IssueSummary};

const WRAP_WIDTH: usize = 100;

/// Renders an issue list for human review.
pub(crate) struct IssueReportPrinter;

impl IssueReportPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_report(&self, issues: &[ExportIssue]) -> String {
        let summary = IssueSummary::of(issues);
        let mut output = format!(
            "エラー {} 件 / 警告 {} 件\n",
            summary.errors, summary.warnings
        );
        for issue in issues {
            output.push_str(&self.print_issue(issue));
            output.push('\n');
        }
        output
    }

    fn print_issue(&self, issue: &ExportIssue) -> String {
        let line = format!(
            "[{}] {} / {} / {} ({}): {}",
            issue.severity.label(),
            issue.document_name,
            issue.entry_id.as_deref().unwrap_or("-"),
            issue.field.map_or("-", |f| f.label()),
            issue.code,
            issue.message,
        );
        textwrap::fill(
            &line,
            textwrap::Options::new(WRAP_WIDTH).subsequent_indent("    "),
        )
    }
}
