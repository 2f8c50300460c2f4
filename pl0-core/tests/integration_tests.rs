//! 集成测试 - 源码经记号文件到识别的端到端流程

mod common;

use common::{check_via_file, lex, lex_to_file, SAMPLE};
use pl0_core::{
    read_tokens, recognize, write_tokens, Parser, ParserErrorKind, RawToken, Tok, TokenKind,
};

#[test]
fn test_sample_token_count() {
    let tokens = lex(SAMPLE);
    assert_eq!(tokens.len(), 21);
    assert_eq!(tokens[0].kind(), TokenKind::Const);
    assert_eq!(tokens[20].kind(), TokenKind::Period);
}

#[test]
fn test_sample_token_file() {
    let text = lex_to_file(SAMPLE);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "(constsym,const)");
    assert_eq!(lines[1], "(ident,m)");
    assert_eq!(lines[2], "(eql,=)");
    assert_eq!(lines[3], "(number,7)");
    assert_eq!(lines[4], "(semicolon,;)");
    assert_eq!(lines[10], "(becomes,:=)");
    assert_eq!(lines[12], "(times,*)");
    assert_eq!(lines[19], "(endsym,end)");
    assert_eq!(lines[20], "(period,.)");
}

#[test]
fn test_sample_recognized() {
    assert!(check_via_file(SAMPLE).is_ok());
}

#[test]
fn test_sample_without_period() {
    let code = SAMPLE.trim_end_matches('.');
    let err = check_via_file(code).unwrap_err();
    assert_eq!(err.kind, ParserErrorKind::MissingPeriod);
    assert_eq!(err.kind.code(), 9);
}

#[test]
fn test_token_file_round_trip() {
    let programs = [
        SAMPLE,
        "var a, b; begin read(a); b := (a + 1) / 2; if a # b then write(b) end.",
        "x := 3.25 * 10.",
        "{ comment } if a <= b then c := a - b else c := b.",
    ];
    for program in programs {
        let tokens = lex(program);
        let raw = read_tokens(&write_tokens(&tokens)).unwrap();
        assert_eq!(raw.len(), tokens.len());
        for (token, read) in tokens.iter().zip(&raw) {
            assert_eq!(read.kind, token.kind().name());
            assert_eq!(read.lexeme, token.lexeme());
        }
    }
}

#[test]
fn test_file_and_in_memory_paths_agree() {
    let programs = [SAMPLE, "x := ;", "begin x := 1", "while a do ."];
    for program in programs {
        let tokens = lex(program);
        let in_memory = Parser::from_tokens(&tokens).parse().map_err(|e| e.kind);
        let via_file = check_via_file(program).map_err(|e| e.kind);
        assert_eq!(in_memory, via_file, "program {program:?}");
    }
}

#[test]
fn test_missing_expression_names_expected() {
    let err = check_via_file("x := ;").unwrap_err();
    assert_eq!(err.kind, ParserErrorKind::IllegalExpressionStart);
    assert!(err.to_string().contains("identifier"));
}

#[test]
fn test_recognize_hand_written_file() {
    let text = "\
(varsym,var)
(ident,x)
(semicolon,;)
(ident,x)
(becomes,:=)
(number,1)
(period,.)
";
    let raw = read_tokens(text).unwrap();
    assert!(recognize(&raw).is_ok());
}

#[test]
fn test_token_file_errors_have_no_position() {
    let raw = vec![RawToken::new("ident", "x"), RawToken::new("eql", "=")];
    let err = recognize(&raw).unwrap_err();
    assert_eq!(
        err.kind,
        ParserErrorKind::UnexpectedToken {
            expected: Tok::Becomes,
            found: Tok::Eql
        }
    );
    assert_eq!(err.line(), None);
}

#[test]
fn test_in_memory_errors_carry_position() {
    let code = "var x;\nbegin\n  x := (1 + 2\nend.";
    let err = Parser::from_tokens(&lex(code)).parse().unwrap_err();
    assert_eq!(err.kind, ParserErrorKind::MissingRightParen);
    assert_eq!(err.line(), Some(4));
    assert_eq!(err.column(), Some(1));
}

#[test]
fn test_trace_for_sample() {
    let tokens = lex(SAMPLE);
    let mut parser = Parser::from_tokens(&tokens).with_trace();
    parser.parse().unwrap();
    let trace = parser.take_trace().unwrap();
    let rendered = trace.render();
    assert!(rendered.starts_with("Program\n  Block\n    Const Declaration\n      CONST\n"));
    assert!(rendered.contains("      IDENT: m\n      EQL '='\n      NUMBER: 7\n"));
    assert!(rendered.contains("BinaryOp: *"));
    assert!(rendered.contains("Write Statement"));
    assert!(rendered.ends_with("\n        END\n"));
    assert!(!rendered.contains("PERIOD"));

    let dot = trace.to_dot();
    assert!(dot.contains("n0 -> n1;"));
    assert_eq!(dot.matches("[label=").count(), trace.lines().len());
}
