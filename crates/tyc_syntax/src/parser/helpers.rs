//! Parser Helper Functions
//!
//! 辅助解析函数：标识符、各语境下允许的类型名

use crate::ast::TypeName;
use crate::lexer::TokenKind;
use chumsky::prelude::*;

use super::ParserError;

/// 解析标识符
pub fn ident_parser() -> impl Parser<TokenKind, String, Error = ParserError> + Clone {
    select! { TokenKind::Ident(ident) => ident }.labelled("identifier")
}

/// 字段与参数的类型: int | float | string | ID
pub fn value_type_parser() -> impl Parser<TokenKind, TypeName, Error = ParserError> + Clone {
    select! {
        TokenKind::TypeInt => TypeName::Int,
        TokenKind::TypeFloat => TypeName::Float,
        TokenKind::TypeString => TypeName::String,
        TokenKind::Ident(name) => TypeName::Named(name),
    }
    .labelled("type")
}

/// 变量声明的类型: 额外允许 auto，不允许 void
pub fn var_type_parser() -> impl Parser<TokenKind, TypeName, Error = ParserError> + Clone {
    just(TokenKind::Auto)
        .to(TypeName::Auto)
        .or(value_type_parser())
        .labelled("type")
}

/// 函数返回类型: 额外允许 void
pub fn return_type_parser() -> impl Parser<TokenKind, TypeName, Error = ParserError> + Clone {
    just(TokenKind::TypeVoid)
        .to(TypeName::Void)
        .or(value_type_parser())
        .labelled("return type")
}
