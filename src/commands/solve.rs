use std::io::{Read, Write};

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::titan::algebra::{Coefficients, Solution};
use crate::io::input::{coefficients_from_tokens, read_coefficients};

#[derive(Clone, Debug)]
pub struct SolveOptions {
    /// Empty: read a, b, c from the input stream.
    pub coefficients: Vec<String>,
    pub format: OutputFormat,
    /// Printed before reading the input stream in text mode; `None` suppresses it.
    pub prompt: Option<String>,
    pub color: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    coefficients: &'a Coefficients,
    solution: &'a Solution,
}

/// Result text; the two-root case spans two lines.
pub fn render_text(solution: &Solution) -> String {
    match *solution {
        Solution::InfiniteSolutions => "Phuong trinh vo so nghiem.".to_string(),
        Solution::NoSolution => "Phuong trinh vo nghiem.".to_string(),
        Solution::Linear { x } => format!("Phuong trinh co mot nghiem: x = {}", x),
        Solution::TwoDistinctRoots { x1, x2 } => {
            format!("Phuong trinh co 2 nghiem phan biet:\nx1 = {}, x2 = {}", x1, x2)
        }
        Solution::RepeatedRoot { x } => format!("Phuong trinh co nghiem kep: x = {}", x),
        Solution::ComplexNoRealSolution => "Phuong trinh vo nghiem (nghiem phuc).".to_string(),
    }
}

fn paint(line: String, solution: &Solution) -> String {
    match solution {
        Solution::Linear { .. } | Solution::TwoDistinctRoots { .. } | Solution::RepeatedRoot { .. } => {
            line.green().bold().to_string()
        }
        Solution::InfiniteSolutions => line.cyan().bold().to_string(),
        Solution::NoSolution | Solution::ComplexNoRealSolution => line.yellow().bold().to_string(),
    }
}

pub fn render_json(coefficients: &Coefficients, solution: &Solution) -> anyhow::Result<String> {
    serde_json::to_string(&JsonReport {
        coefficients,
        solution,
    })
    .context("serializing result")
}

/// One run: obtain coefficients, solve, write the result line to `out`.
pub fn run<R: Read, W: Write>(opts: &SolveOptions, input: R, out: &mut W) -> anyhow::Result<Solution> {
    let coefficients = if opts.coefficients.is_empty() {
        if let (OutputFormat::Text, Some(prompt)) = (opts.format, opts.prompt.as_deref()) {
            write!(out, "{}", prompt)?;
            out.flush()?;
        }
        read_coefficients(input)?
    } else {
        coefficients_from_tokens(opts.coefficients.iter().map(String::as_str))?
    };

    let solution = coefficients.solve();
    info!(kind = solution.kind(), roots = ?solution.roots(), "solved");

    let line = match opts.format {
        OutputFormat::Text if opts.color => paint(render_text(&solution), &solution),
        OutputFormat::Text => render_text(&solution),
        OutputFormat::Json => render_json(&coefficients, &solution)?,
    };
    writeln!(out, "{}", line)?;
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(coefficients: &[&str], format: OutputFormat) -> SolveOptions {
        SolveOptions {
            coefficients: coefficients.iter().map(|s| s.to_string()).collect(),
            format,
            prompt: Some("a b c? ".into()),
            color: false,
        }
    }

    fn run_to_string(o: &SolveOptions, stdin: &str) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(o, stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn text_lines_for_every_case() {
        let cases = [
            ("1 -3 2", "Phuong trinh co 2 nghiem phan biet:\nx1 = 2, x2 = 1"),
            ("1 2 1", "Phuong trinh co nghiem kep: x = -1"),
            ("1 0 1", "Phuong trinh vo nghiem (nghiem phuc)."),
            ("0 2 -4", "Phuong trinh co mot nghiem: x = 2"),
            ("0 0 0", "Phuong trinh vo so nghiem."),
            ("0 0 5", "Phuong trinh vo nghiem."),
        ];
        for (input, expected) in cases {
            let out = run_to_string(&opts(&[], OutputFormat::Text), input).unwrap();
            assert_eq!(out, format!("a b c? {}\n", expected), "input {input}");
        }
    }

    #[test]
    fn args_skip_prompt_and_stdin() {
        let out = run_to_string(&opts(&["0", "4", "2"], OutputFormat::Text), "ignored").unwrap();
        insta::assert_snapshot!(out.trim_end(), @"Phuong trinh co mot nghiem: x = -0.5");
    }

    #[test]
    fn no_prompt_when_disabled() {
        let mut o = opts(&[], OutputFormat::Text);
        o.prompt = None;
        let out = run_to_string(&o, "1 0 -4").unwrap();
        assert_eq!(out, "Phuong trinh co 2 nghiem phan biet:\nx1 = 2, x2 = -2\n");
    }

    #[test]
    fn two_roots_print_header_then_values() {
        let out = run_to_string(&opts(&["1", "-3", "2"], OutputFormat::Text), "").unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, ["Phuong trinh co 2 nghiem phan biet:", "x1 = 2, x2 = 1"]);
    }

    #[test]
    fn overflowing_roots_match_between_text_and_json() {
        let text = run_to_string(&opts(&["1", "1e200", "1"], OutputFormat::Text), "").unwrap();
        assert!(text.ends_with("x1 = inf, x2 = -inf\n"), "got {text:?}");

        let json = run_to_string(&opts(&["1", "1e200", "1"], OutputFormat::Json), "").unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["solution"]["kind"], "two_distinct_roots");
        assert_eq!(v["solution"]["x1"], "inf");
        assert_eq!(v["solution"]["x2"], "-inf");
    }

    #[test]
    fn json_report() {
        let out = run_to_string(&opts(&[], OutputFormat::Json), "1 -3 2").unwrap();
        insta::assert_snapshot!(
            out.trim_end(),
            @r#"{"coefficients":{"a":1.0,"b":-3.0,"c":2.0},"solution":{"kind":"two_distinct_roots","x1":2.0,"x2":1.0}}"#
        );
    }

    #[test]
    fn invalid_input_propagates() {
        let err = run_to_string(&opts(&[], OutputFormat::Text), "1 b 3").unwrap_err();
        assert_eq!(err.to_string(), "invalid input: coefficient b is not a number: 'b'");
    }
}
