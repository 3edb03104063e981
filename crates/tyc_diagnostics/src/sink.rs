//! DiagnosticSink - 诊断收集器
//!
//! 按产生顺序收集诊断。词法与语法阶段都是失败即停，
//! 一次调用最多贡献一条错误；多文件场景下由调用方复用同一个 sink。

use crate::diagnostic::Diagnostic;
use crate::level::DiagnosticLevel;

#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::error(message));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::warning(message));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level.is_error())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn count(&self, level: DiagnosticLevel) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(DiagnosticLevel::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(DiagnosticLevel::Warning)
    }

    /// 取出全部诊断并清空
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl Extend<Diagnostic> for DiagnosticSink {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.diagnostics.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_creation() {
        let sink = DiagnosticSink::new();
        assert!(!sink.has_errors());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_counts() {
        let mut sink = DiagnosticSink::new();
        sink.error("e1");
        sink.error("e2");
        sink.warning("w1");
        sink.add(Diagnostic::note("n1"));

        assert!(sink.has_errors());
        assert_eq!(sink.error_count(), 2);
        assert_eq!(sink.warning_count(), 1);
        assert_eq!(sink.count(DiagnosticLevel::Note), 1);
        assert_eq!(sink.len(), 4);
    }

    #[test]
    fn test_take_clears() {
        let mut sink = DiagnosticSink::new();
        sink.extend(vec![Diagnostic::error("a"), Diagnostic::warning("b")]);

        let taken = sink.take();
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0].message, "a");
        assert!(sink.is_empty());
        assert!(!sink.has_errors());
    }
}
