//! Expression Parser
//!
//! 表达式解析：按优先级自底向上组合
//! 原子 → 成员访问/后缀 → 前缀 → 二元运算 → 赋值

use crate::ast::*;
use crate::lexer::TokenKind;
use chumsky::prelude::*;

mod atom;
mod binary;
mod postfix;
mod unary;

use super::ParserError;

/// 解析表达式 (公共接口)
pub fn expr_parser() -> impl Parser<TokenKind, Expr, Error = ParserError> + Clone {
    recursive(|expr| {
        let atom = atom::parser(expr.clone()).boxed();
        let postfix = postfix::parser(atom).boxed();
        let unary = unary::parser(postfix).boxed();
        let logical_or = binary::parser(unary).boxed();

        // 赋值: 优先级最低，右结合；左侧只能是名字或成员访问
        // 非法目标照常建树，同时报告错误
        logical_or
            .then(just(TokenKind::Eq).ignore_then(expr).or_not())
            .validate(|(target, value), span, emit| match value {
                None => target,
                Some(value) => {
                    if !target.is_assignable() {
                        emit(Simple::custom(
                            target.span.clone(),
                            format!("invalid assignment target '{}'", target),
                        ));
                    }
                    Expr::new(
                        ExprKind::Assign {
                            target: Box::new(target),
                            value: Box::new(value),
                        },
                        span,
                    )
                }
            })
            .boxed()
    })
}
