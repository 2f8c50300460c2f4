//! LL(1) 递归下降识别器
//!
//! 每个产生式一个方法，向前看一个记号，不回溯。游标只增不减。

use super::error::{ErrorLocation, ParseResult, ParserError, ParserErrorKind};
use super::tok::Tok;
use super::trace::ParseTrace;
use crate::compiler::lexer::Token;
use crate::compiler::token_file::RawToken;
use crate::kit::position::SourcePosition;
use tracing::{debug, trace};

/// 投影后的记号
#[derive(Debug, Clone)]
struct ParsedToken {
    tok: Tok,
    lexeme: String,
    position: Option<SourcePosition>,
    /// 种类名不在终结符表中时保留原名
    unknown_kind: Option<String>,
}

pub struct Parser {
    tokens: Vec<ParsedToken>,
    pos: usize,
    trace: Option<ParseTrace>,
}

impl Parser {
    /// 从边界记号构造：按种类名投影到终结符枚举，并追加结束标记
    pub fn new(raw: &[RawToken]) -> Self {
        let tokens = raw
            .iter()
            .map(|r| {
                let tok = Tok::from_name(&r.kind);
                let unknown_kind = (tok == Tok::End).then(|| r.kind.clone());
                ParsedToken {
                    tok,
                    lexeme: r.lexeme.clone(),
                    position: r.position,
                    unknown_kind,
                }
            })
            .collect();
        Self::with_tokens(tokens)
    }

    /// 直接从词法分析器的输出构造
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let tokens = tokens
            .iter()
            .map(|t| ParsedToken {
                tok: Tok::from(t.kind()),
                lexeme: t.lexeme().to_string(),
                position: Some(t.position()),
                unknown_kind: None,
            })
            .collect();
        Self::with_tokens(tokens)
    }

    fn with_tokens(mut tokens: Vec<ParsedToken>) -> Self {
        tokens.push(ParsedToken {
            tok: Tok::End,
            lexeme: String::new(),
            position: None,
            unknown_kind: None,
        });
        Self {
            tokens,
            pos: 0,
            trace: None,
        }
    }

    /// 开启语法树轨迹记录
    pub fn with_trace(mut self) -> Self {
        self.trace = Some(ParseTrace::new());
        self
    }

    pub fn trace(&self) -> Option<&ParseTrace> {
        self.trace.as_ref()
    }

    pub fn take_trace(&mut self) -> Option<ParseTrace> {
        self.trace.take()
    }

    /// 当前游标（已消费的记号数）
    pub fn position(&self) -> usize {
        self.pos
    }

    /// 解析整个程序，要求记号流恰好消费到结束标记
    pub fn parse(&mut self) -> ParseResult<()> {
        debug!(
            target: "pl0::parser",
            count = self.tokens.len() - 1,
            "Starting syntax analysis"
        );

        self.program()?;
        if self.pos != self.tokens.len() - 1 {
            return Err(self.error_here(ParserErrorKind::ExtraneousSymbols));
        }

        debug!(target: "pl0::parser", "Syntax analysis succeeded");
        Ok(())
    }

    // ------------ 小工具 ------------

    fn cur(&self) -> &ParsedToken {
        &self.tokens[self.pos]
    }

    fn is(&self, tok: Tok) -> bool {
        self.cur().tok == tok
    }

    fn adv(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    fn node(&mut self, label: impl Into<String>) {
        if let Some(trace) = self.trace.as_mut() {
            trace.node(label);
        }
    }

    fn enter(&mut self, production: &'static str) {
        trace!(target: "pl0::parser", production, pos = self.pos, "Entering production");
        self.node(production);
        if let Some(trace) = self.trace.as_mut() {
            trace.enter();
        }
    }

    fn leave(&mut self) {
        if let Some(trace) = self.trace.as_mut() {
            trace.leave();
        }
    }

    /// 创建带有当前位置的错误
    ///
    /// 停在未知种类的记号上时，报告未知种类而不是原本的错误
    fn error_here(&self, kind: ParserErrorKind) -> ParserError {
        let cur = self.cur();
        let kind = match &cur.unknown_kind {
            Some(name) => ParserErrorKind::UnknownTokenKind(name.clone()),
            None => kind,
        };
        let location = match cur.position {
            Some(pos) => ErrorLocation::At(pos),
            None if self.pos == self.tokens.len() - 1 => ErrorLocation::Eof,
            None => ErrorLocation::Unknown,
        };
        debug!(target: "pl0::parser", ?kind, pos = self.pos, "Syntax error");
        ParserError::new(kind, location, cur.lexeme.clone())
    }

    /// 期望并消费指定记号，否则返回错误
    fn expect(&mut self, tok: Tok) -> ParseResult<()> {
        if !self.is(tok) {
            return Err(self.error_here(ParserErrorKind::UnexpectedToken {
                expected: tok,
                found: self.cur().tok,
            }));
        }
        self.leaf();
        Ok(())
    }

    /// 记录并消费当前记号
    fn leaf(&mut self) {
        if self.trace.is_some() {
            let label = leaf_label(self.cur());
            self.node(label);
        }
        self.adv();
    }

    // ------------ 递归下降实现 ------------

    /// program = block "."
    fn program(&mut self) -> ParseResult<()> {
        self.enter("Program");
        self.block()?;
        if !self.is(Tok::Period) {
            return Err(self.error_here(ParserErrorKind::MissingPeriod));
        }
        // 结束句点不进入轨迹
        self.adv();
        self.leave();
        Ok(())
    }

    /// block = [constDecl] [varDecl] {procDecl} statement
    fn block(&mut self) -> ParseResult<()> {
        self.enter("Block");
        if self.is(Tok::Const) {
            self.const_decl()?;
        }
        if self.is(Tok::Var) {
            self.var_decl()?;
        }
        while self.is(Tok::Procedure) {
            self.proc_decl()?;
        }
        self.statement()?;
        self.leave();
        Ok(())
    }

    /// constDecl = "const" ident "=" number {"," ident "=" number} ";"
    fn const_decl(&mut self) -> ParseResult<()> {
        self.enter("Const Declaration");
        self.expect(Tok::Const)?;
        self.const_def()?;
        while self.is(Tok::Comma) {
            self.leaf();
            self.const_def()?;
        }
        self.expect(Tok::Semicolon)?;
        self.leave();
        Ok(())
    }

    fn const_def(&mut self) -> ParseResult<()> {
        self.expect(Tok::Ident)?;
        self.expect(Tok::Eql)?;
        self.expect(Tok::Number)
    }

    /// varDecl = "var" ident {"," ident} ";"
    fn var_decl(&mut self) -> ParseResult<()> {
        self.enter("Var Declaration");
        self.expect(Tok::Var)?;
        self.expect(Tok::Ident)?;
        while self.is(Tok::Comma) {
            self.leaf();
            self.expect(Tok::Ident)?;
        }
        self.expect(Tok::Semicolon)?;
        self.leave();
        Ok(())
    }

    /// procDecl = "procedure" ident ";" block ";"
    fn proc_decl(&mut self) -> ParseResult<()> {
        self.enter("Procedure Declaration");
        self.expect(Tok::Procedure)?;
        self.expect(Tok::Ident)?;
        self.expect(Tok::Semicolon)?;
        self.block()?;
        self.expect(Tok::Semicolon)?;
        self.leave();
        Ok(())
    }

    /// statement = assignment | call | beginEnd | ifStmt | whileStmt
    ///           | readStmt | writeStmt | ε
    fn statement(&mut self) -> ParseResult<()> {
        self.enter("Statement");
        match self.cur().tok {
            Tok::Ident => self.assignment()?,
            Tok::Call => self.call()?,
            Tok::Begin => self.begin_end()?,
            Tok::If => self.if_stmt()?,
            Tok::While => self.while_stmt()?,
            Tok::Read => self.read_stmt()?,
            Tok::Write => self.write_stmt()?,
            // 空语句
            _ => {}
        }
        self.leave();
        Ok(())
    }

    fn assignment(&mut self) -> ParseResult<()> {
        self.enter("Assignment");
        self.expect(Tok::Ident)?;
        self.expect(Tok::Becomes)?;
        self.expression()?;
        self.leave();
        Ok(())
    }

    fn call(&mut self) -> ParseResult<()> {
        self.enter("Procedure Call");
        self.expect(Tok::Call)?;
        self.expect(Tok::Ident)?;
        self.leave();
        Ok(())
    }

    fn begin_end(&mut self) -> ParseResult<()> {
        self.enter("Begin-End Block");
        self.expect(Tok::Begin)?;
        self.statement()?;
        while self.is(Tok::Semicolon) {
            self.leaf();
            self.statement()?;
        }
        self.expect(Tok::EndKw)?;
        self.leave();
        Ok(())
    }

    fn if_stmt(&mut self) -> ParseResult<()> {
        self.enter("If Statement");
        self.expect(Tok::If)?;
        self.condition()?;
        self.expect(Tok::Then)?;
        self.statement()?;
        if self.is(Tok::Else) {
            self.leaf();
            self.statement()?;
        }
        self.leave();
        Ok(())
    }

    fn while_stmt(&mut self) -> ParseResult<()> {
        self.enter("While Loop");
        self.expect(Tok::While)?;
        self.condition()?;
        self.expect(Tok::Do)?;
        self.statement()?;
        self.leave();
        Ok(())
    }

    fn read_stmt(&mut self) -> ParseResult<()> {
        self.enter("Read Statement");
        self.expect(Tok::Read)?;
        self.expect(Tok::LParen)?;
        self.expect(Tok::Ident)?;
        self.expect(Tok::RParen)?;
        self.leave();
        Ok(())
    }

    fn write_stmt(&mut self) -> ParseResult<()> {
        self.enter("Write Statement");
        self.expect(Tok::Write)?;
        self.expect(Tok::LParen)?;
        self.expression()?;
        self.expect(Tok::RParen)?;
        self.leave();
        Ok(())
    }

    /// condition = "odd" expression | expression relOp expression
    fn condition(&mut self) -> ParseResult<()> {
        self.enter("Condition");
        if self.is(Tok::Odd) {
            self.leaf();
            self.expression()?;
        } else {
            self.expression()?;
            if !self.cur().tok.is_relational() {
                return Err(self.error_here(ParserErrorKind::MissingRelationalOperator));
            }
            let label = format!("CompareOp: {}", self.cur().lexeme);
            self.node(label);
            self.adv();
            self.expression()?;
        }
        self.leave();
        Ok(())
    }

    /// expression = ["+"|"-"] term {("+"|"-") term}
    fn expression(&mut self) -> ParseResult<()> {
        self.enter("Expression");
        if !self.cur().tok.starts_expression() {
            return Err(self.error_here(ParserErrorKind::IllegalExpressionStart));
        }
        if self.is(Tok::Plus) || self.is(Tok::Minus) {
            let label = format!("UnaryOp:{}", self.cur().lexeme);
            self.node(label);
            self.adv();
        }
        self.term()?;
        while self.is(Tok::Plus) || self.is(Tok::Minus) {
            let label = format!("BinaryOp: {}", self.cur().lexeme);
            self.node(label);
            self.adv();
            self.term()?;
        }
        self.leave();
        Ok(())
    }

    /// term = factor {("*"|"/") factor}
    fn term(&mut self) -> ParseResult<()> {
        self.enter("Term");
        self.factor()?;
        while self.is(Tok::Times) || self.is(Tok::Slash) {
            let label = format!("BinaryOp: {}", self.cur().lexeme);
            self.node(label);
            self.adv();
            self.factor()?;
        }
        self.leave();
        Ok(())
    }

    /// factor = ident | number | "(" expression ")"
    fn factor(&mut self) -> ParseResult<()> {
        self.enter("Factor");
        match self.cur().tok {
            Tok::Ident | Tok::Number => self.leaf(),
            Tok::LParen => {
                self.node("(");
                self.adv();
                self.expression()?;
                if !self.is(Tok::RParen) {
                    return Err(self.error_here(ParserErrorKind::MissingRightParen));
                }
                self.node(")");
                self.adv();
            }
            _ => return Err(self.error_here(ParserErrorKind::IllegalFactor)),
        }
        self.leave();
        Ok(())
    }
}

/// 叶子节点的轨迹标签
fn leaf_label(token: &ParsedToken) -> String {
    let name = match token.tok {
        Tok::Ident => return format!("IDENT: {}", token.lexeme),
        Tok::Number => return format!("NUMBER: {}", token.lexeme),
        Tok::Eql => "EQL",
        Tok::Becomes => "BECOMES",
        Tok::LParen => "LPAREN",
        Tok::RParen => "RPAREN",
        Tok::Comma => "COMMA",
        Tok::Semicolon => "SEMICOLON",
        // 关键字：大写词本身
        _ => return token.lexeme.to_ascii_uppercase(),
    };
    format!("{name} {}", token.tok.describe())
}

/// 识别边界记号序列
pub fn recognize(tokens: &[RawToken]) -> ParseResult<()> {
    Parser::new(tokens).parse()
}
