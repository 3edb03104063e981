use crate::ast::*;
use crate::lexer::TokenKind;
use chumsky::prelude::*;

use super::ParserError;

fn binary_node(lhs: Expr, (op, rhs): (BinaryOp, Expr)) -> Expr {
    let span = lhs.span.start..rhs.span.end;
    Expr::new(ExprKind::Binary(Box::new(lhs), op, Box::new(rhs)), span)
}

/// 左结合的二元运算，自高到低: * / %  >  + -  >  < <= > >=  >  == !=  >  &&  >  ||
pub fn parser<'a>(
    unary: impl Parser<TokenKind, Expr, Error = ParserError> + Clone + 'a,
) -> impl Parser<TokenKind, Expr, Error = ParserError> + Clone + 'a {
    // Product: *, /, %
    let product = unary
        .clone()
        .then(
            just(TokenKind::Star)
                .to(BinaryOp::Mul)
                .or(just(TokenKind::Slash).to(BinaryOp::Div))
                .or(just(TokenKind::Percent).to(BinaryOp::Mod))
                .then(unary)
                .repeated(),
        )
        .foldl(binary_node)
        .boxed();

    // Sum: +, -
    let sum = product
        .clone()
        .then(
            just(TokenKind::Plus)
                .to(BinaryOp::Add)
                .or(just(TokenKind::Minus).to(BinaryOp::Sub))
                .then(product)
                .repeated(),
        )
        .foldl(binary_node)
        .boxed();

    // Relational: <, <=, >, >=
    let relational = sum
        .clone()
        .then(
            just(TokenKind::Leq)
                .to(BinaryOp::Leq)
                .or(just(TokenKind::Geq).to(BinaryOp::Geq))
                .or(just(TokenKind::Lt).to(BinaryOp::Lt))
                .or(just(TokenKind::Gt).to(BinaryOp::Gt))
                .then(sum)
                .repeated(),
        )
        .foldl(binary_node)
        .boxed();

    // Equality: ==, !=
    let equality = relational
        .clone()
        .then(
            just(TokenKind::EqEq)
                .to(BinaryOp::Eq)
                .or(just(TokenKind::NotEq).to(BinaryOp::Neq))
                .then(relational)
                .repeated(),
        )
        .foldl(binary_node)
        .boxed();

    // Logical And: &&
    let logical_and = equality
        .clone()
        .then(just(TokenKind::And).to(BinaryOp::And).then(equality).repeated())
        .foldl(binary_node)
        .boxed();

    // Logical Or: ||
    logical_and
        .clone()
        .then(just(TokenKind::Or).to(BinaryOp::Or).then(logical_and).repeated())
        .foldl(binary_node)
        .boxed()
}
