//! DFA 状态

/// 词法自动机的当前模式
///
/// 任意时刻只有一个活动状态；转移只取决于（状态，下一个字符）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexerState {
    /// 初始状态
    #[default]
    Start,
    /// 读取整数部分
    InNumber,
    /// 读取小数部分
    InFraction,
    /// 读取标识符或关键字
    InIdentifier,
    /// 读到 ':'，等待 '='
    InAssignBegin,
    /// 读到 '>'
    InGreater,
    /// 读到 '<'
    InLess,
    /// 已识别 ':='
    CompleteAssign,
    /// 已识别 '>='
    CompleteGreaterEqual,
    /// 已识别 '<='
    CompleteLessEqual,
    /// 已识别 '<>'
    CompleteNotEqual,
    /// 注释内部
    InComment,
    /// 刚识别出 `end`，预期程序结束的 '.'
    AfterEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_start() {
        assert_eq!(LexerState::default(), LexerState::Start);
    }
}
