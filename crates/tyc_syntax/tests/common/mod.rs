//! 集成测试共用工具

use tyc_syntax::ast::Program;
use tyc_syntax::{parse_source, FrontendError};

/// 安装测试模式的 logger；重复调用无副作用
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn parse_ok(source: &str) -> Program {
    init_logger();
    match parse_source(source) {
        Ok(program) => program,
        Err(err) => panic!("expected `{}` to parse, got: {}", source, err),
    }
}

#[allow(dead_code)]
pub fn parse_err(source: &str) -> FrontendError {
    init_logger();
    match parse_source(source) {
        Ok(program) => panic!("expected `{}` to fail, got: {:?}", source, program),
        Err(err) => err,
    }
}

/// 把语句包进 `void main() { ... }`
#[allow(dead_code)]
pub fn in_main(stmt: &str) -> String {
    format!("void main() {{ {} }}", stmt)
}
