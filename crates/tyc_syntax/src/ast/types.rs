use std::fmt::{self, Display};

/// 源码中书写的类型名；语法层不检查结构体是否存在
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    Int,
    Float,
    String,
    /// 只能作为函数返回类型
    Void,
    /// 只能出现在变量声明中
    Auto,
    // 结构体类型: Point
    Named(String),
}

impl Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Void => write!(f, "void"),
            Self::Auto => write!(f, "auto"),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}

/// 函数返回类型：显式书写或省略（由语义分析推导）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReturnType {
    Explicit(TypeName),
    Inferred,
}

impl Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(ty) => write!(f, "{}", ty),
            Self::Inferred => write!(f, "<inferred>"),
        }
    }
}
