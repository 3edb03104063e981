//! Declaration Parser
//!
//! 声明解析：结构体、函数

use super::helpers::{ident_parser, return_type_parser, value_type_parser};
use super::stmt::stmt_parser;
use crate::ast::*;
use crate::lexer::TokenKind;
use chumsky::prelude::*;

use super::ParserError;

/// 解析声明 (公共接口)
pub fn decl_parser() -> impl Parser<TokenKind, Decl, Error = ParserError> + Clone {
    let stmt = stmt_parser();

    // 结构体声明: struct Point { int x; int y; };
    // 字段类型不能是 auto/void，也不能嵌套 struct 定义
    let field = value_type_parser()
        .then(ident_parser())
        .then_ignore(just(TokenKind::Semicolon))
        .map(|(ty, name)| Field { ty, name });
    let struct_decl = just(TokenKind::Struct)
        .ignore_then(ident_parser())
        .then(
            field
                .repeated()
                .delimited_by(just(TokenKind::LBrace), just(TokenKind::RBrace)),
        )
        .then_ignore(just(TokenKind::Semicolon))
        .map_with_span(|(name, fields), span| {
            Decl::Struct(StructDecl { span, name, fields })
        });

    // 函数头: `<类型> <名字>` 或省略返回类型的 `<名字>`
    // 先读一个类型位置的记号，再看其后是否还有名字
    let head = return_type_parser()
        .then(ident_parser().or_not())
        .try_map(|(ty, name), span| match (ty, name) {
            (ty, Some(name)) => Ok((ReturnType::Explicit(ty), name)),
            (TypeName::Named(name), None) => Ok((ReturnType::Inferred, name)),
            (ty, None) => Err(Simple::custom(
                span,
                format!("expected function name after '{}'", ty),
            )),
        });

    // 参数: 逗号分隔，不允许尾随逗号，不允许 auto
    let params = value_type_parser()
        .then(ident_parser())
        .map(|(ty, name)| Param { ty, name })
        .separated_by(just(TokenKind::Comma))
        .delimited_by(just(TokenKind::LParen), just(TokenKind::RParen));

    let body = stmt
        .repeated()
        .delimited_by(just(TokenKind::LBrace), just(TokenKind::RBrace));

    let func = head.then(params).then(body).map_with_span(
        |(((return_type, name), params), body), span| {
            Decl::Function(FuncDecl {
                span,
                return_type,
                name,
                params,
                body,
            })
        },
    );

    choice((struct_decl, func)).labelled("declaration")
}
