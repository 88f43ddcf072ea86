//! Read `tsconfig.json` documents from disk or memory.
//!
//! Real-world tsconfig files are JSONC: `//` and `/* */` comments and
//! trailing commas are legal. The loader rewrites those constructs to plain
//! JSON before handing the text to serde. Comments are replaced with spaces
//! so parse error positions still point into the original text.

use crate::tsconfig::TsConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Read and parse a `tsconfig.json` file.
pub fn read_tsconfig(path: &Path) -> Result<TsConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read tsconfig at {}", path.display()))?;
    parse_tsconfig(&content).with_context(|| format!("parse tsconfig at {}", path.display()))
}

/// Parse `tsconfig.json` text, accepting JSONC constructs.
pub fn parse_tsconfig(content: &str) -> Result<TsConfig> {
    let cleaned = strip_jsonc(content);
    let config = serde_json::from_str(&cleaned).context("deserialize tsconfig")?;
    tracing::debug!(bytes = content.len(), "tsconfig parsed");
    Ok(config)
}

/// Rewrite JSONC to JSON: blank out comments, drop trailing commas.
fn strip_jsonc(content: &str) -> String {
    let without_comments = blank_comments(content);
    drop_trailing_commas(&without_comments)
}

fn blank_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                // The escaped character can never close the string.
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'/') => {
                out.push(' ');
                for comment_ch in chars.by_ref() {
                    if comment_ch == '\n' {
                        out.push('\n');
                        break;
                    }
                    out.push(' ');
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                out.push(' ');
                chars.next();
                out.push(' ');
                let mut prev = '\0';
                for comment_ch in chars.by_ref() {
                    if comment_ch == '\n' {
                        out.push('\n');
                    } else {
                        out.push(' ');
                    }
                    if prev == '*' && comment_ch == '/' {
                        break;
                    }
                    prev = comment_ch;
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

fn drop_trailing_commas(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut out = String::with_capacity(content.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if in_string {
            out.push(ch);
            if ch == '\\' {
                if let Some(&escaped) = chars.get(i + 1) {
                    out.push(escaped);
                    i += 1;
                }
            } else if ch == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            ',' => {
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if !matches!(chars.get(j), Some('}') | Some(']')) {
                    out.push(ch);
                }
            }
            _ => out.push(ch),
        }
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsconfig::{Module, Target};

    #[test]
    fn parses_plain_json() {
        let config =
            parse_tsconfig(r#"{"compilerOptions": {"target": "ES2020"}}"#).expect("parse config");
        let options = config.compiler_options.expect("compilerOptions present");
        assert_eq!(options.target, Some(Target::Es2020));
    }

    #[test]
    fn strips_line_and_block_comments() {
        let content = r#"{
            // emit for node
            "compilerOptions": {
                /* the module format
                   spans two lines */
                "module": "CommonJS"
            }
        }"#;
        let config = parse_tsconfig(content).expect("parse commented config");
        let options = config.compiler_options.expect("compilerOptions present");
        assert_eq!(options.module, Some(Module::CommonJs));
    }

    #[test]
    fn drops_trailing_commas_in_objects_and_arrays() {
        let content = r#"{
            "include": ["src", "tests",],
            "compilerOptions": {
                "strict": true,
            },
        }"#;
        let config = parse_tsconfig(content).expect("parse config with trailing commas");
        assert_eq!(
            config.include,
            Some(vec!["src".to_string(), "tests".to_string()])
        );
    }

    #[test]
    fn leaves_comment_markers_inside_strings_alone() {
        let content = r#"{"exclude": ["http://example", "a//b", "c/*d*/e"]}"#;
        let config = parse_tsconfig(content).expect("parse config with slashes in strings");
        assert_eq!(
            config.exclude,
            Some(vec![
                "http://example".to_string(),
                "a//b".to_string(),
                "c/*d*/e".to_string()
            ])
        );
    }

    #[test]
    fn comma_inside_string_is_not_a_trailing_comma() {
        let content = r#"{"files": ["a,}", "b"]}"#;
        let config = parse_tsconfig(content).expect("parse config with comma in string");
        assert_eq!(
            config.files,
            Some(vec!["a,}".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn reports_the_failing_path_for_missing_files() {
        let err = read_tsconfig(Path::new("/nonexistent/tsconfig.json"))
            .expect_err("missing file should fail");
        assert!(err.to_string().contains("/nonexistent/tsconfig.json"));
    }
}
