pub mod expr;
pub mod stmt;
pub mod types;
pub mod visitor;

// 重新导出核心类型，方便外部直接使用 tyc_syntax::ast::Expr 等
pub use expr::{BinaryOp, Expr, ExprKind, Literal, PostfixOp, Span, UnaryOp};
pub use stmt::{
    Decl, Field, ForInit, FuncDecl, Param, Stmt, StructDecl, SwitchArm, SwitchLabel, VarDecl,
};
pub use types::{ReturnType, TypeName};
pub use visitor::{walk_decl, walk_expr, walk_program, walk_stmt, Visitor};

// 整个程序：按源码顺序排列的顶层声明
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub decls: Vec<Decl>,
}

impl Program {
    pub fn structs(&self) -> impl Iterator<Item = &StructDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Struct(s) => Some(s),
            Decl::Function(_) => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &FuncDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Function(f) => Some(f),
            Decl::Struct(_) => None,
        })
    }
}
