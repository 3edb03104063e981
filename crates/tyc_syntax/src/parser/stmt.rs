//! Statement Parser
//!
//! 语句解析：块、变量声明、if/while/for/switch、跳转、表达式语句

use super::expr::expr_parser;
use super::helpers::{ident_parser, var_type_parser};
use crate::ast::*;
use crate::lexer::TokenKind;
use chumsky::prelude::*;

use super::ParserError;

/// 变量声明（不含分号）: int x = 1 / auto y / Point p = {1, 2}
///
/// `for` 的初始化部分与声明语句共用
pub fn var_decl_parser(
    expr: impl Parser<TokenKind, Expr, Error = ParserError> + Clone,
) -> impl Parser<TokenKind, VarDecl, Error = ParserError> + Clone {
    var_type_parser()
        .then(ident_parser())
        .then(just(TokenKind::Eq).ignore_then(expr).or_not())
        .map_with_span(|((ty, name), init), span| VarDecl {
            span,
            ty,
            name,
            init,
        })
}

/// 解析语句 (公共接口)
pub fn stmt_parser() -> impl Parser<TokenKind, Stmt, Error = ParserError> + Clone {
    let expr = expr_parser();
    let var_decl = var_decl_parser(expr.clone()).boxed();

    recursive(|stmt| {
        let semi = just(TokenKind::Semicolon);

        let paren_expr = expr
            .clone()
            .delimited_by(just(TokenKind::LParen), just(TokenKind::RParen));

        // 块语句: { ... }
        let block = stmt
            .clone()
            .repeated()
            .delimited_by(just(TokenKind::LBrace), just(TokenKind::RBrace))
            .map_with_span(|stmts, span| Stmt::Block { span, stmts });

        // If: else 由 or_not 贪婪消费，因此总是归属最近的 if
        let if_stmt = just(TokenKind::If)
            .ignore_then(paren_expr.clone())
            .then(stmt.clone())
            .then(just(TokenKind::Else).ignore_then(stmt.clone()).or_not())
            .map_with_span(|((condition, then_branch), else_branch), span| Stmt::If {
                span,
                condition,
                then_branch: Box::new(then_branch),
                else_branch: else_branch.map(Box::new),
            });

        // While
        let while_stmt = just(TokenKind::While)
            .ignore_then(paren_expr.clone())
            .then(stmt.clone())
            .map_with_span(|(condition, body), span| Stmt::While {
                span,
                condition,
                body: Box::new(body),
            });

        // For 循环: for (init; condition; update) body，三部分均可省略
        let for_init = var_decl
            .clone()
            .map(ForInit::VarDecl)
            .or(expr.clone().map(ForInit::Expr));
        let for_stmt = just(TokenKind::For)
            .ignore_then(
                for_init
                    .or_not()
                    .then_ignore(semi.clone())
                    .then(expr.clone().or_not())
                    .then_ignore(semi.clone())
                    .then(expr.clone().or_not())
                    .delimited_by(just(TokenKind::LParen), just(TokenKind::RParen)),
            )
            .then(stmt.clone())
            .map_with_span(|(((init, condition), update), body), span| Stmt::For {
                span,
                init,
                condition,
                update,
                body: Box::new(body),
            });

        // Switch: case/default 标签后跟零或多条语句，落空由结构体现
        let label = just(TokenKind::Case)
            .ignore_then(expr.clone())
            .then_ignore(just(TokenKind::Colon))
            .map(SwitchLabel::Case)
            .or(just(TokenKind::Default)
                .ignore_then(just(TokenKind::Colon))
                .to(SwitchLabel::Default));
        let arm = label
            .then(stmt.clone().repeated())
            .map_with_span(|(label, body), span| SwitchArm { span, label, body });
        let switch_stmt = just(TokenKind::Switch)
            .ignore_then(paren_expr)
            .then(
                arm.repeated()
                    .delimited_by(just(TokenKind::LBrace), just(TokenKind::RBrace)),
            )
            .validate(|(scrutinee, arms), span, emit| {
                let second_default = arms
                    .iter()
                    .filter(|arm| matches!(arm.label, SwitchLabel::Default))
                    .nth(1);
                if let Some(arm) = second_default {
                    emit(Simple::custom(
                        arm.span.clone(),
                        "multiple 'default' labels in one switch",
                    ));
                }
                Stmt::Switch {
                    span,
                    scrutinee,
                    arms,
                }
            });

        // Return
        let return_stmt = just(TokenKind::Return)
            .ignore_then(expr.clone().or_not())
            .then_ignore(semi.clone())
            .map_with_span(|value, span| Stmt::Return { span, value });

        // Break / Continue
        let break_stmt = just(TokenKind::Break)
            .then_ignore(semi.clone())
            .map_with_span(|_, span| Stmt::Break { span });
        let continue_stmt = just(TokenKind::Continue)
            .then_ignore(semi.clone())
            .map_with_span(|_, span| Stmt::Continue { span });

        // `<类型> <名字>` 开头的是声明，否则按表达式语句处理
        let var_stmt = var_decl
            .clone()
            .then_ignore(semi.clone())
            .map(Stmt::VarDecl);
        let expr_stmt = expr.clone().then_ignore(semi).map(Stmt::Expression);

        choice((
            block,
            if_stmt,
            while_stmt,
            for_stmt,
            switch_stmt,
            return_stmt,
            break_stmt,
            continue_stmt,
            var_stmt,
            // 必须放在最后，作为兜底
            expr_stmt,
        ))
        .labelled("statement")
        .boxed()
    })
}
