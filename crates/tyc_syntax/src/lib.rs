//! TyC Syntax
//!
//! TyC 前端：词法分析（logos）+ 语法分析（chumsky），产出带 span 的 AST。
//!
//! ```rust
//! use tyc_syntax::parse_source;
//!
//! let program = parse_source("int main() { return 0; }").unwrap();
//! assert_eq!(program.decls.len(), 1);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{FrontendError, FrontendResult, SyntaxError, SyntaxErrorKind};
pub use lexer::{scan, LexError, LexErrorKind, Scanner, Token, TokenKind};
pub use parser::parse;

use ast::Program;

/// 词法 + 语法分析，返回第一个失败
pub fn parse_source(source: &str) -> FrontendResult<Program> {
    let tokens = scan(source)?;
    Ok(parse(&tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_ok() {
        let program = parse_source("struct P { int x; }; void f(P p) { p.x = 1; }").unwrap();
        assert_eq!(program.structs().count(), 1);
        assert_eq!(program.functions().count(), 1);
    }

    #[test]
    fn test_parse_source_lex_error() {
        let err = parse_source("int x = 1 ? 2;").unwrap_err();
        assert!(matches!(err, FrontendError::Lex(_)));
        assert_eq!(err.to_string(), "Lexical error: Error Token ?");
    }

    #[test]
    fn test_parse_source_syntax_error() {
        let err = parse_source("void f() { return 1 }").unwrap_err();
        assert!(matches!(err, FrontendError::Syntax(_)));
        assert_eq!(err.position().line, 1);
        assert_eq!(err.position().column, 21);
    }
}
