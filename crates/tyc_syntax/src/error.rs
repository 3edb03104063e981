//! Frontend Errors
//!
//! 语法错误与前端统一错误类型，集成统一诊断系统

use crate::lexer::{LexError, Token, TokenKind};
use chumsky::error::{Simple, SimpleReason};
use thiserror::Error;
use tyc_diagnostics::{Diagnostic, DiagnosticSink, Emitter, Position, Span};

/// 消息中直接列出的期望记号上限
const MAX_LISTED: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// 出现了不该出现的记号
    UnexpectedToken,
    /// 还需要记号时输入已结束（如缺少 `;`、`}`）
    UnexpectedEnd,
    /// 括号未闭合
    UnclosedDelimiter,
    /// 记号序列合法但结构不成立（如非法赋值目标、重复 default）
    InvalidConstruct,
}

/// 语法错误：只报告第一个
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {position}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub message: String,
    /// 出错位置的记号；None 表示输入结束
    pub found: Option<TokenKind>,
    /// 期望的记号或结构，已排序去重
    pub expected: Vec<String>,
    pub span: Span,
    pub position: Position,
}

impl SyntaxError {
    pub(crate) fn from_parser_errors(errors: Vec<Simple<TokenKind>>, tokens: &[Token]) -> Self {
        // 无错误恢复时 chumsky 只返回一个（走得最远的）错误
        match errors.into_iter().min_by_key(|e| e.span().start) {
            Some(err) => Self::from_simple(err, tokens),
            None => {
                let span = tokens.last().map_or(0..0, |t| t.span.clone());
                Self {
                    kind: SyntaxErrorKind::InvalidConstruct,
                    message: "malformed program".to_string(),
                    found: None,
                    expected: Vec::new(),
                    position: position_at(tokens, span.start),
                    span,
                }
            }
        }
    }

    fn from_simple(err: Simple<TokenKind>, tokens: &[Token]) -> Self {
        let span = err.span();
        let found = err.found().cloned();
        let found_text = found
            .as_ref()
            .map_or_else(|| TokenKind::Eof.to_string(), ToString::to_string);

        let mut expected: Vec<String> = err
            .expected()
            .map(|e| match e {
                Some(kind) => kind.to_string(),
                None => TokenKind::Eof.to_string(),
            })
            .collect();
        expected.sort();
        expected.dedup();

        let (kind, message) = match err.reason() {
            SimpleReason::Custom(msg) => (SyntaxErrorKind::InvalidConstruct, msg.clone()),
            SimpleReason::Unclosed { delimiter, .. } => (
                SyntaxErrorKind::UnclosedDelimiter,
                format!("unclosed delimiter {}, found {}", delimiter, found_text),
            ),
            SimpleReason::Unexpected => {
                let kind = if found.is_some() {
                    SyntaxErrorKind::UnexpectedToken
                } else {
                    SyntaxErrorKind::UnexpectedEnd
                };
                let mut message = format!("unexpected {}", found_text);
                // 期望集较小时逐个列出，否则用标签概括
                match err.label() {
                    Some(label) if expected.is_empty() || expected.len() > MAX_LISTED => {
                        message.push_str(&format!(", expected {}", label));
                    }
                    _ if !expected.is_empty() => {
                        message.push_str(&format!(", expected {}", describe(&expected)));
                    }
                    _ => {}
                }
                (kind, message)
            }
        };

        Self {
            kind,
            message,
            found,
            expected,
            position: position_at(tokens, span.start),
            span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match (self.kind, &self.found) {
            (SyntaxErrorKind::InvalidConstruct, _) => "not allowed here".to_string(),
            (_, Some(kind)) => format!("unexpected {}", kind),
            (_, None) => "input ends here".to_string(),
        };
        let diag = Diagnostic::error(self.message.clone())
            .span(self.span.clone())
            .at(self.position)
            .with_label(self.span.clone(), label);
        if self.expected.is_empty() {
            diag
        } else {
            diag.with_note(format!("expected {}", describe(&self.expected)))
        }
    }
}

fn describe(expected: &[String]) -> String {
    match expected {
        [single] => single.clone(),
        many => format!("one of {}", many.join(", ")),
    }
}

/// 字节偏移 → 该处记号的行列号；偏移在所有记号之后时取最后一个（EOF）
fn position_at(tokens: &[Token], offset: usize) -> Position {
    let index = tokens.partition_point(|t| t.span.start < offset);
    tokens
        .get(index)
        .or_else(|| tokens.last())
        .map_or_else(Position::default, |t| t.position)
}

/// 前端错误：词法或语法阶段的第一个失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontendError {
    /// 词法错误
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    /// 语法错误
    #[error("Parse error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl FrontendError {
    pub fn span(&self) -> &Span {
        match self {
            FrontendError::Lex(err) => &err.span,
            FrontendError::Syntax(err) => &err.span,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            FrontendError::Lex(err) => err.position,
            FrontendError::Syntax(err) => err.position,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            FrontendError::Lex(err) => err.to_diagnostic(),
            FrontendError::Syntax(err) => err.to_diagnostic(),
        }
    }

    /// 转换为诊断并收集到 DiagnosticSink
    pub fn collect_to_sink(&self, sink: &mut DiagnosticSink, file_path: Option<&str>) {
        let diag = self.to_diagnostic();
        match file_path {
            Some(path) => sink.add(diag.with_file(path)),
            None => sink.add(diag),
        }
    }

    /// 使用统一诊断系统输出错误
    pub fn emit(&self, file_path: Option<&str>, source: Option<&str>) {
        let mut sink = DiagnosticSink::new();
        self.collect_to_sink(&mut sink, file_path);

        let emitter = Emitter::new();
        match source {
            Some(src) => {
                for diag in sink.diagnostics() {
                    emitter.emit_with_source(diag, src);
                }
            }
            None => emitter.emit_all(sink.diagnostics()),
        }
    }
}

/// 前端结果类型
pub type FrontendResult<T> = Result<T, FrontendError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;
    use crate::parser::parse;

    fn syntax_error(source: &str) -> SyntaxError {
        parse(&scan(source).unwrap()).unwrap_err()
    }

    #[test]
    fn test_missing_semicolon_reports_next_token() {
        let err = syntax_error("void main() {\n  int x\n}");
        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
        assert_eq!(err.found, Some(TokenKind::RBrace));
        assert_eq!(err.position, Position::new(3, 1));
        assert!(err.expected.contains(&"';'".to_string()));
        assert!(err.message.starts_with("unexpected '}'"));
    }

    #[test]
    fn test_unterminated_struct_hits_end_of_input() {
        let err = syntax_error("struct S { int x; ");
        assert_eq!(err.found, None);
        assert!(matches!(
            err.kind,
            SyntaxErrorKind::UnexpectedEnd | SyntaxErrorKind::UnclosedDelimiter
        ));
        assert_eq!(err.position, Position::new(1, 19));
    }

    #[test]
    fn test_invalid_assignment_target() {
        let err = syntax_error("void main() { a + b = c; }");
        assert_eq!(err.kind, SyntaxErrorKind::InvalidConstruct);
        assert!(err.message.contains("invalid assignment target"));
    }

    #[test]
    fn test_duplicate_default() {
        let err = syntax_error("void main() { switch (x) { default: break; default: break; } }");
        assert_eq!(err.kind, SyntaxErrorKind::InvalidConstruct);
        assert!(err.message.contains("default"));
    }

    #[test]
    fn test_error_is_deterministic() {
        let source = "void f(int a,) {}";
        let first = syntax_error(source);
        for _ in 0..5 {
            assert_eq!(syntax_error(source), first);
        }
    }

    #[test]
    fn test_diagnostic_conversion() {
        let err = FrontendError::from(syntax_error("int f;"));
        let diag = err.to_diagnostic();
        assert!(diag.level.is_error());
        assert_eq!(diag.span, Some(err.span().clone()));
        assert_eq!(diag.position, Some(Position::new(1, 6)));

        let mut sink = DiagnosticSink::new();
        err.collect_to_sink(&mut sink, Some("f.tyc"));
        assert_eq!(sink.error_count(), 1);
        assert_eq!(
            sink.diagnostics()[0].location().as_deref(),
            Some("f.tyc:1:6")
        );
    }

    #[test]
    fn test_lex_error_wraps() {
        let err: FrontendError = scan("\"bad \\a\"").unwrap_err().into();
        assert_eq!(err.to_string(), "Lexical error: Illegal Escape In String: bad \\a");
        assert_eq!(err.position(), Position::new(1, 1));
    }
}
