use dotlookup_domain::LookupReport;
use std::fmt::Write;

/// Plain-text rendering of a report: status entries as `label: value`,
/// answers as the owner name followed by the indented record.
pub fn render_report(report: &LookupReport) -> String {
    let mut out = String::new();

    for entry in &report.entries {
        if entry.inline {
            let _ = writeln!(out, "{}: {}", entry.label, entry.value);
        } else {
            let _ = writeln!(out, "{}", entry.label);
            let _ = writeln!(out, "    {}", entry.value);
        }
    }

    if let Some(footer) = &report.footer {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", footer);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotlookup_domain::ReportEntry;
    use std::time::Duration;

    #[test]
    fn test_status_renders_on_one_line() {
        let report = LookupReport::status("non-successful response code", "Server failure");
        assert_eq!(
            render_report(&report),
            "non-successful response code: Server failure\n"
        );
    }

    #[test]
    fn test_answers_render_under_owner_with_footer() {
        let report = LookupReport::answers(
            vec![ReportEntry::new(
                "example.com.",
                "example.com. 60 IN A 93.184.216.34",
                false,
            )],
            Duration::from_millis(12),
        );

        let rendered = render_report(&report);

        assert_eq!(
            rendered,
            "example.com.\n    example.com. 60 IN A 93.184.216.34\n\nGot answer in 12ms.\n"
        );
    }
}
