//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use pl0_api::Pl0Error;

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &Pl0Error, source: &str) {
    match e.code() {
        Some(code) => eprintln!("error[{code}]: {e}"),
        None => eprintln!("error: {e}"),
    }

    if let (Some(error_line), Some(col)) = (e.line(), e.column()) {
        eprint!("{}", source_context(source, error_line, col));
    }
}

/// 打印源代码上下文（显示错误行前后几行）
pub fn print_source_context(source: &str, error_line: usize, error_col: usize) {
    eprint!("{}", source_context(source, error_line, error_col));
}

fn source_context(source: &str, error_line: usize, error_col: usize) -> String {
    const CONTEXT_LINES: usize = 2;

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return String::new();
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);
    let width = end_line.to_string().len();

    let mut out = String::new();
    let separator = "-".repeat(width + 1);
    out.push_str(&format!("{separator}|--\n"));

    for line_idx in start_line..=end_line {
        out.push_str(&format!("{line_idx:>width$} | {}\n", lines[line_idx - 1]));
        if line_idx == error_line {
            let marker = " ".repeat(error_col.saturating_sub(1));
            out.push_str(&format!("{} | {marker}^\n", " ".repeat(width)));
        }
    }

    out.push_str(&format!("{separator}|--\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_under_column() {
        let context = source_context("var x;\nx := ;\n.", 2, 6);
        let lines: Vec<&str> = context.lines().collect();
        assert_eq!(lines[0], "--|--");
        assert_eq!(lines[1], "1 | var x;");
        assert_eq!(lines[2], "2 | x := ;");
        assert_eq!(lines[3], "  |      ^");
        assert_eq!(lines[4], "3 | .");
    }

    #[test]
    fn test_context_is_clipped() {
        let source = (1..=10).map(|i| format!("line{i}")).collect::<Vec<_>>().join("\n");
        let context = source_context(&source, 10, 1);
        assert!(context.contains(" 8 | line8"));
        assert!(!context.contains("line7"));
        assert!(context.contains("10 | line10"));
    }

    #[test]
    fn test_out_of_range_line() {
        assert!(source_context("x", 5, 1).is_empty());
        assert!(source_context("x", 0, 1).is_empty());
    }
}
