//! API 类型定义

use pl0_core::ParseTrace;

/// 语法检查输出
#[derive(Debug, Clone)]
pub struct CheckOutput {
    /// 识别的记号数量（不含结束标记）
    pub token_count: usize,
    /// 语法树轨迹（开启时）
    pub trace: Option<ParseTrace>,
}
