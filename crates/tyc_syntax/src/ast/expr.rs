use std::fmt;

pub use tyc_diagnostics::Span;

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// 能否出现在赋值号左侧
    pub fn is_assignable(&self) -> bool {
        matches!(self.kind, ExprKind::Identifier(_) | ExprKind::Member { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // 字面量: 1, 3.14, "hello"
    Literal(Literal),

    // 变量使用: x, count
    Identifier(String),

    // 成员访问: p.x, {1, 2}.x
    Member {
        object: Box<Expr>,
        field: String,
    },

    // 函数调用: add(1, 2)，被调用者只能是名字
    Call {
        callee: String,
        args: Vec<Expr>,
    },

    // 前缀: -a, !b, ++i
    Unary(UnaryOp, Box<Expr>),

    // 后缀: i++, p.x--
    Postfix(PostfixOp, Box<Expr>),

    // 二元操作: a + b, a == b
    Binary(Box<Expr>, BinaryOp, Box<Expr>),

    // 赋值 (右结合): a = b = c
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },

    // 结构体字面量: {1, {2, 3}}
    StructLiteral(Vec<Expr>),
}

/// 字面量保留源码文本，语法层不求值
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Int(String),
    Float(String),
    String(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod, // +, -, *, /, %
    Eq,
    Neq, // ==, !=
    Lt,
    Gt,
    Leq,
    Geq, // <, >, <=, >=
    And,
    Or, // &&, ||
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Leq => "<=",
            Self::Geq => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,    // -x
    Plus,   // +x
    Not,    // !x
    PreInc, // ++x
    PreDec, // --x
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Plus => "+",
            Self::Not => "!",
            Self::PreInc => "++",
            Self::PreDec => "--",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostfixOp {
    Inc,
    Dec,
}

impl PostfixOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Inc => "++",
            Self::Dec => "--",
        }
    }
}

/// 全括号形式，便于测试中比较结合性
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Literal(Literal::Int(text)) | ExprKind::Literal(Literal::Float(text)) => {
                write!(f, "{}", text)
            }
            ExprKind::Literal(Literal::String(text)) => write!(f, "\"{}\"", text),
            ExprKind::Identifier(name) => write!(f, "{}", name),
            ExprKind::Member { object, field } => write!(f, "{}.{}", object, field),
            ExprKind::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                write_list(f, args)?;
                write!(f, ")")
            }
            ExprKind::Unary(op, operand) => write!(f, "({}{})", op.symbol(), operand),
            ExprKind::Postfix(op, operand) => write!(f, "({}{})", operand, op.symbol()),
            ExprKind::Binary(lhs, op, rhs) => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
            ExprKind::Assign { target, value } => write!(f, "({} = {})", target, value),
            ExprKind::StructLiteral(items) => {
                write!(f, "{{")?;
                write_list(f, items)?;
                write!(f, "}}")
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
