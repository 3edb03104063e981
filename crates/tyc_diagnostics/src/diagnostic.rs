//! Diagnostic - 诊断信息
//!
//! 表示一个前端诊断（词法错误、语法错误等）

use crate::level::DiagnosticLevel;
use crate::span::{Position, Span};

/// 修复建议
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub message: String,
    /// 建议的替换内容（如果有）
    pub replacement: Option<String>,
}

impl Suggestion {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }
}

/// 附加在源码片段上的标注
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanLabel {
    pub span: Span,
    pub message: String,
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    /// 主要消息
    pub message: String,
    /// 源码位置（可选）
    pub span: Option<Span>,
    /// 人类可读的行列号（可选）
    pub position: Option<Position>,
    /// 源文件路径（可选）
    pub file: Option<String>,
    pub labels: Vec<SpanLabel>,
    pub notes: Vec<String>,
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            position: None,
            file: None,
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Info, message)
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Note, message)
    }

    /// 设置位置信息
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// 在源码片段上添加标注；ariadne 渲染时显示在对应位置下方
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(SpanLabel {
            span,
            message: message.into(),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// 添加简单建议（仅消息）
    pub fn suggest(self, message: impl Into<String>) -> Self {
        self.with_suggestion(Suggestion::new(message))
    }

    /// `file:line:column` 形式的位置描述
    pub fn location(&self) -> Option<String> {
        match (&self.file, self.position) {
            (Some(file), Some(pos)) => Some(format!("{}:{}", file, pos)),
            (None, Some(pos)) => Some(pos.to_string()),
            (Some(file), None) => Some(file.clone()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::error("unexpected token ';'")
            .span(0..10)
            .with_note("test note")
            .suggest("insert an expression");

        assert_eq!(diag.level, DiagnosticLevel::Error);
        assert_eq!(diag.message, "unexpected token ';'");
        assert_eq!(diag.span, Some(0..10));
        assert_eq!(diag.notes, vec!["test note".to_string()]);
        assert_eq!(diag.suggestions[0].message, "insert an expression");
        assert_eq!(diag.suggestions[0].replacement, None);
    }

    #[test]
    fn test_labels_and_replacement() {
        let diag = Diagnostic::warning("w")
            .with_label(3..4, "here")
            .with_suggestion(Suggestion::new("add semicolon").with_replacement(";"));

        assert_eq!(diag.labels.len(), 1);
        assert_eq!(diag.labels[0].span, 3..4);
        assert_eq!(
            diag.suggestions[0].replacement.as_deref(),
            Some(";")
        );
    }

    #[test]
    fn test_location() {
        let bare = Diagnostic::error("e");
        assert_eq!(bare.location(), None);

        let positioned = Diagnostic::error("e").at(Position::new(3, 7));
        assert_eq!(positioned.location().as_deref(), Some("3:7"));

        let with_file = positioned.with_file("main.tyc");
        assert_eq!(with_file.location().as_deref(), Some("main.tyc:3:7"));
    }
}
