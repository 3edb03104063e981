//! Emitter - 诊断输出器
//!
//! 负责将诊断信息格式化输出：
//! - 无源码时输出单行摘要（可选颜色）
//! - 有源码时通过 ariadne 渲染带代码片段的报告

use crate::diagnostic::Diagnostic;
use crate::span::Span;
use ariadne::{Config, Label, Report, Source};
use colored::*;

/// 诊断输出器
pub struct Emitter {
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    /// 输出单个诊断到 stderr
    pub fn emit(&self, diagnostic: &Diagnostic) {
        eprint!("{}", self.format(diagnostic));
    }

    pub fn emit_all(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// 带源码片段输出
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) {
        eprint!("{}", self.render_with_source(diagnostic, source));
    }

    /// 不依赖源码的文本格式
    pub fn format(&self, diagnostic: &Diagnostic) -> String {
        let mut out = if self.use_colors {
            format!(
                "{}: {}\n",
                diagnostic.level.colored_name(),
                diagnostic.message.bold()
            )
        } else {
            format!("{}: {}\n", diagnostic.level, diagnostic.message)
        };

        if let Some(location) = diagnostic.location() {
            let arrow = if self.use_colors {
                "-->".blue().bold().to_string()
            } else {
                "-->".to_string()
            };
            out.push_str(&format!("  {} {}\n", arrow, location));
        }

        for note in &diagnostic.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for suggestion in &diagnostic.suggestions {
            out.push_str(&format!("  = help: {}\n", suggestion.message));
            if let Some(replacement) = &suggestion.replacement {
                out.push_str(&format!("        try: {}\n", replacement));
            }
        }
        out
    }

    /// ariadne 渲染；诊断没有 span 时退回 [`Emitter::format`]
    pub fn render_with_source(&self, diagnostic: &Diagnostic, source: &str) -> String {
        let Some(span) = diagnostic.span.clone() else {
            return self.format(diagnostic);
        };

        let primary = char_span(source, &span);
        let color = diagnostic.level.label_color();

        let mut builder = Report::<Span>::build(diagnostic.level.report_kind(), (), primary.start)
            .with_config(Config::default().with_color(self.use_colors))
            .with_message(&diagnostic.message);

        if diagnostic.labels.is_empty() {
            builder = builder.with_label(
                Label::new(primary)
                    .with_message(&diagnostic.message)
                    .with_color(color),
            );
        }
        for label in &diagnostic.labels {
            builder = builder.with_label(
                Label::new(char_span(source, &label.span))
                    .with_message(&label.message)
                    .with_color(color),
            );
        }
        // ariadne 0.4 每个报告只保留一条 note / help
        if !diagnostic.notes.is_empty() {
            builder = builder.with_note(diagnostic.notes.join("\n"));
        }
        if !diagnostic.suggestions.is_empty() {
            let help = diagnostic
                .suggestions
                .iter()
                .map(|s| match &s.replacement {
                    Some(r) => format!("{} (try: {})", s.message, r),
                    None => s.message.clone(),
                })
                .collect::<Vec<_>>()
                .join("\n");
            builder = builder.with_help(help);
        }

        let mut buf = Vec::new();
        if builder
            .finish()
            .write(Source::from(source), &mut buf)
            .is_err()
        {
            return self.format(diagnostic);
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// ariadne 0.4 以字符为单位计算偏移，这里把字节 span 换算过去
fn char_span(source: &str, span: &Span) -> Span {
    let to_char = |byte: usize| {
        let byte = byte.min(source.len());
        source
            .get(..byte)
            .map_or(byte, |prefix| prefix.chars().count())
    };
    to_char(span.start)..to_char(span.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_emitter_creation() {
        assert!(Emitter::new().uses_colors());
        assert!(!Emitter::without_colors().uses_colors());
    }

    #[test]
    fn test_plain_format() {
        let emitter = Emitter::without_colors();
        let diag = Diagnostic::error("missing ';'")
            .at(Position::new(2, 9))
            .with_file("a.tyc")
            .with_note("statement ends here")
            .suggest("insert ';'");

        let text = emitter.format(&diag);
        assert_eq!(
            text,
            "error: missing ';'\n  --> a.tyc:2:9\n  = note: statement ends here\n  = help: insert ';'\n"
        );
    }

    #[test]
    fn test_render_with_source_contains_message() {
        let emitter = Emitter::without_colors();
        let source = "int x = ?;";
        let diag = Diagnostic::error("Error Token ?").span(8..9);

        let text = emitter.render_with_source(&diag, source);
        assert!(text.contains("Error Token ?"));
        assert!(text.contains("int x = ?;"));
    }

    #[test]
    fn test_render_without_span_falls_back() {
        let emitter = Emitter::without_colors();
        let diag = Diagnostic::warning("no location");
        assert_eq!(
            emitter.render_with_source(&diag, "x"),
            "warning: no location\n"
        );
    }

    #[test]
    fn test_char_span_multibyte() {
        assert_eq!(char_span("\"é\" ?", &(5..6)), 4..5);
    }
}
