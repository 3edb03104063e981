use crate::ast::expr::{Expr, Span};
use crate::ast::types::{ReturnType, TypeName};

// 顶层定义：只能出现在文件最外层
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    // 结构体: struct Point { int x; int y; };
    Struct(StructDecl),

    // 函数: int add(int a, int b) { ... } 或 add(int a, int b) { ... }
    Function(FuncDecl),
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Decl::Struct(decl) => &decl.name,
            Decl::Function(decl) => &decl.name,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            Decl::Struct(decl) => &decl.span,
            Decl::Function(decl) => &decl.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub span: Span,
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub span: Span,
    pub return_type: ReturnType,
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: TypeName,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub ty: TypeName,
    pub name: String,
}

// 变量声明: int x; auto y = 1; Point p = {1, 2};
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub span: Span,
    pub ty: TypeName,
    pub name: String,
    pub init: Option<Expr>,
}

// for 的初始化部分：声明或表达式
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    VarDecl(VarDecl),
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwitchLabel {
    Case(Expr),
    Default,
}

// 一个标签及其后的语句；没有 break 时落入下一个标签
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchArm {
    pub span: Span,
    pub label: SwitchLabel,
    pub body: Vec<Stmt>,
}

// 语句：出现在函数体内部
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    // 块: { ... }
    Block {
        span: Span,
        stmts: Vec<Stmt>,
    },

    // 变量声明语句
    VarDecl(VarDecl),

    // 表达式语句: f(x); a = 1;
    Expression(Expr),

    // if (cond) stmt else stmt
    If {
        span: Span,
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    While {
        span: Span,
        condition: Expr,
        body: Box<Stmt>,
    },

    // for (init; condition; update) body，省略的部分为 None
    For {
        span: Span,
        init: Option<ForInit>,
        condition: Option<Expr>,
        update: Option<Expr>,
        body: Box<Stmt>,
    },

    Switch {
        span: Span,
        scrutinee: Expr,
        arms: Vec<SwitchArm>,
    },

    Return {
        span: Span,
        value: Option<Expr>,
    },
    Break {
        span: Span,
    },
    Continue {
        span: Span,
    },
}

impl Stmt {
    pub fn span(&self) -> &Span {
        match self {
            Stmt::VarDecl(decl) => &decl.span,
            Stmt::Expression(expr) => &expr.span,
            Stmt::Block { span, .. }
            | Stmt::If { span, .. }
            | Stmt::While { span, .. }
            | Stmt::For { span, .. }
            | Stmt::Switch { span, .. }
            | Stmt::Return { span, .. }
            | Stmt::Break { span }
            | Stmt::Continue { span } => span,
        }
    }
}
