//! TyC Diagnostics
//!
//! TyC 前端的统一诊断系统：词法、语法错误都转换成 [`Diagnostic`]，
//! 由 [`Emitter`] 输出（可选 ariadne 源码片段渲染）。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning/Info/Note）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器
//! - [`Span`] / [`Position`] / [`LineIndex`] - 源码位置信息
//!
//! # 示例
//!
//! ```rust
//! use tyc_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
//!
//! let mut sink = DiagnosticSink::new();
//! sink.add(
//!     Diagnostic::error("unexpected token '}'")
//!         .span(10..11)
//!         .with_note("expected ';'")
//!         .suggest("terminate the statement with ';'"),
//! );
//!
//! if sink.has_errors() {
//!     let emitter = Emitter::without_colors();
//!     emitter.emit_all(sink.diagnostics());
//! }
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;
pub mod span;

pub use diagnostic::{Diagnostic, SpanLabel, Suggestion};
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
pub use span::{LineIndex, Position, Span, SpanExt};
