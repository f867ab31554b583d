//! Console output formatter

use colored::Colorize;
use router_application::{DemoReport, RoutedAnswer};
use router_domain::{Label, Question};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One line per question: `- {question} >>> {result}`
    pub fn format_line(question: &Question, result: &str) -> String {
        format!(
            "{} {} {} {}",
            "-".dimmed(),
            question,
            ">>>".cyan().bold(),
            result.trim()
        )
    }

    pub fn format_classification(question: &Question, label: &Label) -> String {
        Self::format_line(question, label.as_str())
    }

    pub fn format_answer(answer: &RoutedAnswer) -> String {
        format!(
            "{} {}\n{}",
            format!("[{}]", answer.route).yellow().bold(),
            format!("label: {}", answer.label.as_str().trim()).dimmed(),
            answer.answer.trim()
        )
    }

    pub fn format_list(items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("  {} {}", "*".green(), item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_demo(report: &DemoReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Classification"));
        for (question, label) in &report.classifications {
            output.push_str(&Self::format_classification(question, label));
            output.push('\n');
        }

        output.push_str(&Self::section_header("Routing"));
        for answer in &report.answers {
            output.push_str(&Self::format_line(&answer.question, &answer.answer));
            output.push('\n');
        }

        output
    }

    /// Serialize any result as pretty JSON
    pub fn format_json<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("== {} ==", title).cyan().bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use router_domain::Route;

    fn plain() {
        colored::control::set_override(false);
    }

    fn sample_answer() -> RoutedAnswer {
        RoutedAnswer {
            question: Question::new("how do I play a guitar?"),
            label: Label::new(" Art\n"),
            route: Route::Art,
            answer: "As Leonardo Da Vinci told me, practice.\n".to_string(),
        }
    }

    #[test]
    fn test_format_line_trims_result() {
        plain();
        let line = ConsoleFormatter::format_line(&Question::new("what is 2 + 2?"), " Other\n");
        assert_eq!(line, "- what is 2 + 2? >>> Other");
    }

    #[test]
    fn test_format_answer_shows_route_and_text() {
        plain();
        let text = ConsoleFormatter::format_answer(&sample_answer());
        assert_eq!(text, "[art] label: Art\nAs Leonardo Da Vinci told me, practice.");
    }

    #[test]
    fn test_format_list() {
        plain();
        let items = vec!["Apple".to_string(), "Banana".to_string()];
        assert_eq!(ConsoleFormatter::format_list(&items), "  * Apple\n  * Banana");
    }

    #[test]
    fn test_format_demo_lists_both_phases() {
        plain();
        let report = DemoReport {
            classifications: vec![(Question::new("how do I play a guitar?"), Label::new("Art"))],
            answers: vec![sample_answer()],
        };
        let text = ConsoleFormatter::format_demo(&report);
        assert!(text.contains("== Classification =="));
        assert!(text.contains("- how do I play a guitar? >>> Art\n"));
        assert!(text.contains("== Routing =="));
        assert!(text.contains(">>> As Leonardo Da Vinci told me, practice.\n"));
    }

    #[test]
    fn test_format_json_answer() {
        let json = ConsoleFormatter::format_json(&sample_answer());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["route"], "art");
        assert_eq!(value["question"]["content"], "how do I play a guitar?");
        assert_eq!(value["label"], " Art\n");
    }
}
