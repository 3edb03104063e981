use crate::ast::*;
use crate::ast::Span;
use crate::lexer::TokenKind;
use crate::parser::helpers::ident_parser;
use chumsky::prelude::*;

use super::ParserError;

/// 成员访问比后缀运算绑定更紧: `a.b++` 是 `(a.b)++`
pub fn parser<'a>(
    atom: impl Parser<TokenKind, Expr, Error = ParserError> + Clone + 'a,
) -> impl Parser<TokenKind, Expr, Error = ParserError> + Clone + 'a {
    let member = atom
        .then(
            just(TokenKind::Dot)
                .ignore_then(ident_parser())
                .map_with_span(|field, span| (field, span))
                .repeated(),
        )
        .foldl(|object, (field, span): (String, Span)| {
            let span = object.span.start..span.end;
            Expr::new(
                ExprKind::Member {
                    object: Box::new(object),
                    field,
                },
                span,
            )
        })
        .boxed();

    member
        .then(
            just(TokenKind::PlusPlus)
                .to(PostfixOp::Inc)
                .or(just(TokenKind::MinusMinus).to(PostfixOp::Dec))
                .map_with_span(|op, span| (op, span))
                .repeated(),
        )
        .foldl(|operand, (op, span): (PostfixOp, Span)| {
            let span = operand.span.start..span.end;
            Expr::new(ExprKind::Postfix(op, Box::new(operand)), span)
        })
}
