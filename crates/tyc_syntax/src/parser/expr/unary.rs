use crate::ast::*;
use crate::ast::Span;
use crate::lexer::TokenKind;
use chumsky::prelude::*;

use super::ParserError;

/// 前缀运算符 (-, +, !, ++, --)，右结合；`-a++` 是 `-(a++)`
pub fn parser<'a>(
    postfix: impl Parser<TokenKind, Expr, Error = ParserError> + Clone + 'a,
) -> impl Parser<TokenKind, Expr, Error = ParserError> + Clone + 'a {
    just(TokenKind::Minus)
        .to(UnaryOp::Neg)
        .or(just(TokenKind::Plus).to(UnaryOp::Plus))
        .or(just(TokenKind::Bang).to(UnaryOp::Not))
        .or(just(TokenKind::PlusPlus).to(UnaryOp::PreInc))
        .or(just(TokenKind::MinusMinus).to(UnaryOp::PreDec))
        .map_with_span(|op, span| (op, span))
        .repeated()
        .then(postfix)
        .foldr(|(op, span): (UnaryOp, Span), operand| {
            let span = span.start..operand.span.end;
            Expr::new(ExprKind::Unary(op, Box::new(operand)), span)
        })
}
