//! 语法树轨迹
//!
//! 递归下降时每进入一个产生式记一行带缩进深度的标签，
//! 整体构成一棵隐式的语法树，可渲染为缩进文本或 Graphviz DOT。

use std::fmt::Write as _;

/// 轨迹中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    pub depth: usize,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseTrace {
    lines: Vec<TraceLine>,
    depth: usize,
}

impl ParseTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在当前深度记一个节点
    pub fn node(&mut self, label: impl Into<String>) {
        self.lines.push(TraceLine {
            depth: self.depth,
            label: label.into(),
        });
    }

    pub fn enter(&mut self) {
        self.depth += 1;
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn lines(&self) -> &[TraceLine] {
        &self.lines
    }

    /// 每层缩进两个空格，一行一个标签
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let _ = writeln!(out, "{}{}", "  ".repeat(line.depth), line.label);
        }
        out
    }

    /// 渲染为 DOT 有向图
    ///
    /// 父节点是前面最近一个深度更小的行
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph ParseTree {\n");
        out.push_str("  node [shape=box, style=filled, fillcolor=lightgray];\n");

        let mut stack: Vec<(usize, usize)> = Vec::new();
        for (id, line) in self.lines.iter().enumerate() {
            let _ = writeln!(out, "  n{id} [label=\"{}\"];", escape_label(&line.label));

            while matches!(stack.last(), Some((depth, _)) if *depth >= line.depth) {
                stack.pop();
            }
            if let Some((_, parent)) = stack.last() {
                let _ = writeln!(out, "  n{parent} -> n{id};");
            }
            stack.push((line.depth, id));
        }

        out.push('}');
        out.push('\n');
        out
    }
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParseTrace {
        let mut trace = ParseTrace::new();
        trace.node("Program");
        trace.enter();
        trace.node("Block");
        trace.enter();
        trace.node("Statement");
        trace.leave();
        trace.node("SEMICOLON ';'");
        trace.leave();
        trace
    }

    #[test]
    fn test_render_indentation() {
        assert_eq!(
            sample().render(),
            "Program\n  Block\n    Statement\n  SEMICOLON ';'\n"
        );
    }

    #[test]
    fn test_to_dot_edges() {
        let dot = sample().to_dot();
        assert!(dot.starts_with("digraph ParseTree {\n"));
        assert!(dot.contains("  n0 [label=\"Program\"];"));
        assert!(dot.contains("  n0 -> n1;"));
        assert!(dot.contains("  n1 -> n2;"));
        assert!(dot.contains("  n0 -> n3;"));
        assert!(!dot.contains("n2 -> n3"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_dot_escapes_quotes() {
        let mut trace = ParseTrace::new();
        trace.node("say \"hi\"");
        assert!(trace.to_dot().contains(r#"label="say \"hi\"""#));
    }

    #[test]
    fn test_leave_saturates() {
        let mut trace = ParseTrace::new();
        trace.leave();
        trace.node("Root");
        assert_eq!(trace.lines()[0].depth, 0);
    }
}
