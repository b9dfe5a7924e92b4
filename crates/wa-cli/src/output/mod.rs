use std::fmt::Write as _;

use serde::Serialize;
use wa_client::{QueryResult, RecognizerResult};

use crate::cli::OutputFormat;

/// Human-readable rendering used by `--format text`.
pub trait TextView {
    fn to_text(&self) -> String;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(value.to_text()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

impl TextView for QueryResult {
    fn to_text(&self) -> String {
        let mut out = String::new();

        if self.is_error() {
            match &self.error_detail {
                Some(detail) => {
                    let _ = writeln!(out, "error {}: {}", detail.code, detail.message);
                }
                None => out.push_str("error: the query could not be processed\n"),
            }
            return out.trim_end().to_string();
        }

        if !self.is_success() {
            let _ = writeln!(out, "no result for '{}'", self.query);
            for spellcheck in &self.warnings.spellchecks {
                let _ = writeln!(out, "  {}", spellcheck.text);
            }
            for reinterpretation in &self.warnings.reinterpretations {
                let _ = writeln!(out, "  {}", reinterpretation.text);
            }
            return out.trim_end().to_string();
        }

        for pod in &self.pods {
            let _ = writeln!(out, "{}", pod.title);
            let mut any = false;
            for text in pod.plaintexts() {
                any = true;
                for line in text.lines() {
                    let _ = writeln!(out, "  {line}");
                }
            }
            if !any {
                out.push_str("  (image only)\n");
            }
        }

        if let Some(assumption) = self.assumptions.assumptions.first() {
            let _ = writeln!(out, "assuming {} '{}'", assumption.kind, assumption.word);
        }

        out.trim_end().to_string()
    }
}

impl TextView for RecognizerResult {
    fn to_text(&self) -> String {
        if self.queries.is_empty() {
            return String::from("(no queries)");
        }
        self.queries
            .iter()
            .map(|query| {
                let verdict = if query.is_accepted() {
                    "accepted"
                } else {
                    "rejected"
                };
                let domain = if query.domain.is_empty() {
                    "-"
                } else {
                    query.domain.as_str()
                };
                format!(
                    "{verdict}\t{domain}\t{}\t{}",
                    query.result_significance_score, query.input
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use wa_client::{ResponseFormat, decode};

    use super::{TextView, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    impl TextView for Example {
        fn to_text(&self) -> String {
            format!("{} = {}", self.id, self.value)
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn text_render_uses_text_view() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Text).expect("text render should work");
        assert_eq!(out, "x = 7");
    }

    #[test]
    fn query_result_text_lists_pods() {
        let body = br#"{"queryresult": {"success": true, "error": false, "numpods": 2, "pods": [
            {"title": "Input", "subpods": [{"plaintext": "2 + 2"}]},
            {"title": "Plot", "subpods": [{"plaintext": "", "img": {"src": "x.gif"}}]}
        ]}}"#;
        let result = decode(body, ResponseFormat::Json).expect("decodes");

        assert_eq!(result.to_text(), "Input\n  2 + 2\nPlot\n  (image only)");
    }

    #[test]
    fn query_result_text_reports_error_detail() {
        let body = br#"<queryresult success="false" error="true">
            <error><code>1</code><msg>Invalid appid</msg></error>
        </queryresult>"#;
        let result = decode(body, ResponseFormat::Xml).expect("decodes");

        assert_eq!(result.to_text(), "error 1: Invalid appid");
    }

    #[test]
    fn query_result_text_for_unknown_input() {
        let mut result =
            decode(br#"{"success": false, "error": false}"#, ResponseFormat::Json).expect("decodes");
        result.query = "asdfgh".into();

        assert_eq!(result.to_text(), "no result for 'asdfgh'");
    }
}
