use crate::ast::*;
use crate::lexer::TokenKind;
use crate::parser::helpers::ident_parser;
use chumsky::prelude::*;

use super::ParserError;

/// 字面量、名字、调用、括号表达式、结构体字面量
pub fn parser<'a>(
    expr: impl Parser<TokenKind, Expr, Error = ParserError> + Clone + 'a,
) -> impl Parser<TokenKind, Expr, Error = ParserError> + Clone + 'a {
    let literal = select! {
        TokenKind::IntLit(text) => Literal::Int(text),
        TokenKind::FloatLit(text) => Literal::Float(text),
        TokenKind::StringLit(text) => Literal::String(text),
    }
    .map_with_span(|lit, span| Expr::new(ExprKind::Literal(lit), span));

    // 名字后紧跟 `(` 即为调用: add(1, 2)
    let name_or_call = ident_parser()
        .then(
            expr.clone()
                .separated_by(just(TokenKind::Comma))
                .delimited_by(just(TokenKind::LParen), just(TokenKind::RParen))
                .or_not(),
        )
        .map_with_span(|(name, args), span| match args {
            Some(args) => Expr::new(ExprKind::Call { callee: name, args }, span),
            None => Expr::new(ExprKind::Identifier(name), span),
        });

    let paren = expr
        .clone()
        .delimited_by(just(TokenKind::LParen), just(TokenKind::RParen));

    // 结构体字面量: {1, 2}、{{1, 2}, 3}、{}
    let struct_literal = expr
        .separated_by(just(TokenKind::Comma))
        .delimited_by(just(TokenKind::LBrace), just(TokenKind::RBrace))
        .map_with_span(|items, span| Expr::new(ExprKind::StructLiteral(items), span));

    choice((literal, name_or_call, paren, struct_literal)).labelled("expression")
}
