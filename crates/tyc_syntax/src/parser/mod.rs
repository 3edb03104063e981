//! Parser Module
//!
//! 基于 chumsky 组合子的递归下降解析器。除函数头（显式/省略返回类型）
//! 需要多看一个记号外，其余位置都只依赖一个前瞻记号。

pub mod decl;
pub mod expr;
pub mod helpers;
pub mod stmt;

use crate::ast::Program;
use crate::error::SyntaxError;
use crate::lexer::{Token, TokenKind};
use chumsky::prelude::*;
use chumsky::Stream;

pub type ParserError = Simple<TokenKind>;

/// 主入口：解析整个程序
pub fn program_parser() -> impl Parser<TokenKind, Program, Error = ParserError> {
    decl::decl_parser()
        .repeated()
        .then_ignore(end())
        .map(|decls| Program { decls })
}

/// 解析 [`crate::lexer::scan`] 产生的词法单元序列
///
/// EOF 记号可有可无；遇到第一个语法错误即返回。
pub fn parse(tokens: &[Token]) -> Result<Program, SyntaxError> {
    let end = tokens.last().map_or(0, |t| t.span.end);
    let stream = Stream::from_iter(
        end..end,
        tokens
            .iter()
            .filter(|t| !t.is_eof())
            .map(|t| (t.kind.clone(), t.span.clone())),
    );

    match program_parser().parse(stream) {
        Ok(program) => {
            log::debug!("parsed {} top-level declarations", program.decls.len());
            Ok(program)
        }
        Err(errors) => {
            let err = SyntaxError::from_parser_errors(errors, tokens);
            log::trace!("parse failed at {}: {}", err.position, err.message);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::lexer::scan;

    fn parse_expr(source: &str) -> Expr {
        let src = format!("void main() {{ auto x = {}; }}", source);
        let program = parse(&scan(&src).unwrap()).unwrap();
        match &program.decls[0] {
            Decl::Function(func) => match &func.body[0] {
                Stmt::VarDecl(VarDecl {
                    init: Some(init), ..
                }) => init.clone(),
                other => panic!("expected var decl, got {:?}", other),
            },
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_parser_full_func() {
        let code = r#"
            int main() {
                auto a = 10;
                int b = a + 20;
                return b;
            }
        "#;

        let program = parse(&scan(code).unwrap()).unwrap();
        assert_eq!(program.decls.len(), 1);

        match &program.decls[0] {
            Decl::Function(FuncDecl {
                name,
                return_type,
                body,
                ..
            }) => {
                assert_eq!(name, "main");
                assert_eq!(return_type, &ReturnType::Explicit(TypeName::Int));
                assert_eq!(body.len(), 3);
            }
            _ => panic!("Expected func decl"),
        }
    }

    #[test]
    fn test_precedence_shapes() {
        assert_eq!(parse_expr("a + b * c").to_string(), "(a + (b * c))");
        assert_eq!(parse_expr("a * b + c").to_string(), "((a * b) + c)");
        assert_eq!(parse_expr("a - b - c").to_string(), "((a - b) - c)");
        assert_eq!(parse_expr("a < b == c").to_string(), "((a < b) == c)");
        assert_eq!(parse_expr("a == b && c").to_string(), "((a == b) && c)");
        assert_eq!(parse_expr("a && b || c").to_string(), "((a && b) || c)");
        assert_eq!(parse_expr("a = b || c").to_string(), "(a = (b || c))");
        assert_eq!(parse_expr("(a + b) * c").to_string(), "((a + b) * c)");
    }

    #[test]
    fn test_unary_postfix_member() {
        assert_eq!(parse_expr("a.b++").to_string(), "(a.b++)");
        assert_eq!(parse_expr("-a++").to_string(), "(-(a++))");
        assert_eq!(parse_expr("!a.b").to_string(), "(!a.b)");
        assert_eq!(parse_expr("++a").to_string(), "(++a)");
        assert_eq!(parse_expr("- -a").to_string(), "(-(-a))");
        assert_eq!(parse_expr("a++--").to_string(), "((a++)--)");
    }

    #[test]
    fn test_struct_literal_member() {
        assert_eq!(parse_expr("{1, 2}.x").to_string(), "{1, 2}.x");
        assert_eq!(parse_expr("{{1, 2}, 3}").to_string(), "{{1, 2}, 3}");
        assert_eq!(parse_expr("{}").to_string(), "{}");
        assert_eq!(parse_expr("f(1, g()) + 3").to_string(), "(f(1, g()) + 3)");
    }

    #[test]
    fn test_spans_cover_operands() {
        let expr = parse_expr("a + bb");
        // "void main() { auto x = " 共 23 字节
        assert_eq!(expr.span, 23..29);
    }

    #[test]
    fn test_missing_eof_token_is_fine() {
        let mut tokens = scan("void f() {}").unwrap();
        tokens.pop();
        assert!(parse(&tokens).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let program = parse(&scan("").unwrap()).unwrap();
        assert!(program.decls.is_empty());
        assert!(parse(&[]).unwrap().decls.is_empty());
    }
}
