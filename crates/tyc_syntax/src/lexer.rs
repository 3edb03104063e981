//! Lexer
//!
//! 基于 logos 状态机的词法分析：最长匹配、关键字优先于标识符、
//! 注释与空白直接跳过。字符串字面量由回调手写扫描，以便精确报告
//! 非法转义与未闭合字符串。

use logos::{Filter, Lexer, Logos};
use std::fmt;
use thiserror::Error;
use tyc_diagnostics::{Diagnostic, LineIndex, Position, Span};

/// 字符串中允许的转义字符（反斜杠之后）
const ESCAPES: [char; 7] = ['b', 'f', 'r', 'n', 't', '"', '\\'];

/// logos 内部错误；默认值对应无法识别的字符
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexFault {
    #[default]
    ErrorChar,
    IllegalEscape(String),
    UnclosedString(String),
}

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // --- 关键字 (Keywords) ---
    #[token("auto")]
    Auto,
    #[token("break")]
    Break,
    #[token("case")]
    Case,
    #[token("continue")]
    Continue,
    #[token("default")]
    Default,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("return")]
    Return,
    #[token("struct")]
    Struct,
    #[token("switch")]
    Switch,
    #[token("while")]
    While,

    // --- 基础类型关键字 ---
    #[token("int")]
    TypeInt,
    #[token("float")]
    TypeFloat,
    #[token("string")]
    TypeString,
    #[token("void")]
    TypeVoid,

    // --- 符号 (Symbols) ---
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    Leq,
    #[token(">=")]
    Geq,
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    // 注释也从 `/` 开始，由回调决定跳过还是产生除号
    #[token("/", slash_or_comment)]
    Slash,
    #[token("%")]
    Percent,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("!")]
    Bang,
    #[token("=")]
    Eq,
    #[token(".")]
    Dot,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // --- 复杂数据 (Data) ---
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // 不带符号：`-1` 是一元负号加整数
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    IntLit(String),

    // 1.  .5  3.14  1e-5  12.e+5  .2E4
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().to_string())]
    FloatLit(String),

    // 内容保持原样，不做转义还原
    #[token("\"", lex_string)]
    StringLit(String),

    /// 输入结束；由 [`Scanner`] 追加，logos 从不产生
    Eof,
}

/// 扫描字符串字面量的剩余部分（开头的 `"` 已被匹配）
fn lex_string(lex: &mut Lexer<TokenKind>) -> Result<String, LexFault> {
    let rest = lex.remainder();
    let mut chars = rest.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(i + 1);
                return Ok(rest[..i].to_string());
            }
            '\n' | '\r' => {
                lex.bump(i);
                return Err(LexFault::UnclosedString(rest[..i].to_string()));
            }
            '\\' => match chars.next() {
                Some((_, esc)) if ESCAPES.contains(&esc) => {}
                // 反斜杠后紧跟换行：字符串在行尾结束
                Some((j, '\n' | '\r')) => {
                    lex.bump(j);
                    return Err(LexFault::UnclosedString(rest[..j].to_string()));
                }
                Some((j, esc)) => {
                    let end = j + esc.len_utf8();
                    lex.bump(end);
                    return Err(LexFault::IllegalEscape(rest[..end].to_string()));
                }
                None => break,
            },
            _ => {}
        }
    }

    lex.bump(rest.len());
    Err(LexFault::UnclosedString(rest.to_string()))
}

/// `/` 之后：`//` 跳到行尾，闭合的 `/* */` 整段跳过，其余（包括未闭合的 `/*`）是除号
fn slash_or_comment(lex: &mut Lexer<TokenKind>) -> Filter<()> {
    let rest = lex.remainder();
    if rest.starts_with('/') {
        let end = rest.find(|c: char| c == '\r' || c == '\n').unwrap_or(rest.len());
        lex.bump(end);
        return Filter::Skip;
    }
    if let Some(body) = rest.strip_prefix('*') {
        if let Some(close) = body.find("*/") {
            lex.bump(1 + close + 2);
            return Filter::Skip;
        }
    }
    Filter::Emit(())
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::Auto
                | Self::Break
                | Self::Case
                | Self::Continue
                | Self::Default
                | Self::Else
                | Self::For
                | Self::If
                | Self::Return
                | Self::Struct
                | Self::Switch
                | Self::While
                | Self::TypeInt
                | Self::TypeFloat
                | Self::TypeString
                | Self::TypeVoid
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::IntLit(_) | Self::FloatLit(_) | Self::StringLit(_)
        )
    }

    /// 关键字与符号的源码拼写
    pub fn fixed_text(&self) -> Option<&'static str> {
        let text = match self {
            Self::Auto => "auto",
            Self::Break => "break",
            Self::Case => "case",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Else => "else",
            Self::For => "for",
            Self::If => "if",
            Self::Return => "return",
            Self::Struct => "struct",
            Self::Switch => "switch",
            Self::While => "while",
            Self::TypeInt => "int",
            Self::TypeFloat => "float",
            Self::TypeString => "string",
            Self::TypeVoid => "void",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::Leq => "<=",
            Self::Geq => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Bang => "!",
            Self::Eq => "=",
            Self::Dot => ".",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Colon => ":",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = self.fixed_text() {
            return write!(f, "'{}'", text);
        }
        match self {
            Self::Ident(name) => write!(f, "identifier '{}'", name),
            Self::IntLit(text) => write!(f, "integer literal {}", text),
            Self::FloatLit(text) => write!(f, "float literal {}", text),
            Self::StringLit(text) => write!(f, "string literal \"{}\"", text),
            _ => f.write_str("end of input"),
        }
    }
}

/// 词法单元：类别、源码文本与位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 源码文本；字符串字面量为引号内的原始内容，EOF 为 `<EOF>`
    pub text: String,
    pub span: Span,
    pub position: Position,
}

impl Token {
    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    IllegalEscape,
    UnclosedString,
    ErrorChar,
}

impl LexErrorKind {
    fn prefix(&self) -> &'static str {
        match self {
            Self::IllegalEscape => "Illegal Escape In String: ",
            Self::UnclosedString => "Unclosed String: ",
            Self::ErrorChar => "Error Token ",
        }
    }
}

/// 词法错误：扫描在此终止
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{}", .kind.prefix(), .text)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 出错时已消费的文本（字符串错误不含开头的引号）
    pub text: String,
    pub span: Span,
    pub position: Position,
}

impl LexError {
    fn from_fault(fault: LexFault, slice: &str, span: Span, position: Position) -> Self {
        let (kind, text) = match fault {
            LexFault::ErrorChar => (LexErrorKind::ErrorChar, slice.to_string()),
            LexFault::IllegalEscape(text) => (LexErrorKind::IllegalEscape, text),
            LexFault::UnclosedString(text) => (LexErrorKind::UnclosedString, text),
        };
        Self {
            kind,
            text,
            span,
            position,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::IllegalEscape => "illegal escape sequence",
            LexErrorKind::UnclosedString => "string literal is never closed",
            LexErrorKind::ErrorChar => "unrecognized character",
        };
        let diag = Diagnostic::error(self.to_string())
            .span(self.span.clone())
            .at(self.position)
            .with_label(self.span.clone(), label);
        match self.kind {
            LexErrorKind::IllegalEscape => {
                diag.with_note("valid escapes are \\b \\f \\r \\n \\t \\\" \\\\")
            }
            LexErrorKind::UnclosedString => diag.suggest("add a closing '\"' before the end of the line"),
            LexErrorKind::ErrorChar => diag,
        }
    }
}

/// 逐个产生 [`Token`] 的扫描器
///
/// 末尾产生一个 [`TokenKind::Eof`]；遇到第一个词法错误后只再产生该错误，随后结束。
pub struct Scanner<'src> {
    lexer: Lexer<'src, TokenKind>,
    index: LineIndex<'src>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: TokenKind::lexer(source),
            index: LineIndex::new(source),
            finished: false,
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(result) = self.lexer.next() else {
            self.finished = true;
            let end = self.lexer.source().len();
            return Some(Ok(Token {
                kind: TokenKind::Eof,
                text: "<EOF>".to_string(),
                span: end..end,
                position: self.index.position(end),
            }));
        };

        let span = self.lexer.span();
        let position = self.index.position(span.start);
        match result {
            Ok(kind) => {
                let text = match &kind {
                    TokenKind::StringLit(content) => content.clone(),
                    _ => self.lexer.slice().to_string(),
                };
                Some(Ok(Token {
                    kind,
                    text,
                    span,
                    position,
                }))
            }
            Err(fault) => {
                self.finished = true;
                Some(Err(LexError::from_fault(
                    fault,
                    self.lexer.slice(),
                    span,
                    position,
                )))
            }
        }
    }
}

/// 扫描整段源码，得到以 EOF 结尾的词法单元序列
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let result: Result<Vec<Token>, LexError> = Scanner::new(source).collect();
    match &result {
        Ok(tokens) => log::debug!("scanned {} tokens", tokens.len()),
        Err(err) => log::trace!("scan failed at {}: {}", err.position, err),
    }
    result
}
