mod common;
use common::*;

use expect_test::expect;
use trust_segment::{DelimiterKind, EndKind};

#[test]
fn leading_comments_belong_to_the_following_element() {
    let source = "\
(* Motor controller
   with interlock *)
// revision 2
FUNCTION_BLOCK FB_Motor
VAR
    run : BOOL;
END_VAR
    run := TRUE;
END_FUNCTION_BLOCK
";
    expect![[r#"
FUNCTION_BLOCK FB_Motor 1..4
VAR 5..5
END_VAR 6..7
END_FUNCTION_BLOCK 8..9
"#]]
    .assert_eq(&delimiters(source));

    let root = merged(source);
    assert_eq!(root.start_segment.start_line, 1);
}

#[test]
fn keywords_in_strings_and_comments_are_skipped() {
    let source = r#"FUNCTION_BLOCK FB_Strings
VAR
    msg : STRING := 'METHOD Fake';
    wide : WSTRING := "FUNCTION_BLOCK FB_Fake";
    escaped : STRING := 'it$'s END_VAR';
    // METHOD Commented
    (* END_FUNCTION_BLOCK (* END_VAR *)
    {attribute 'METHOD'}
END_VAR
    msg := 'END_VAR';
END_FUNCTION_BLOCK
"#;
    expect![[r#"
FUNCTION_BLOCK FB_Strings 1..1
VAR 2..2
END_VAR 3..9
END_FUNCTION_BLOCK 10..11
"#]]
    .assert_eq(&delimiters(source));
}

#[test]
fn inline_string_does_not_open_a_method() {
    let source = "FUNCTION_BLOCK FB\nVAR msg:STRING:='METHOD Fake';END_VAR\nEND_FUNCTION_BLOCK\n";
    let root = merged(source);
    assert!(root
        .sub_elements
        .iter()
        .all(|child| child.kind != ElementKind::Method));
    assert!(root.sub_elements.is_empty());
}

#[test]
fn keywords_are_case_insensitive() {
    let delimiters = scan("function_block fb_lower\nEnd_Function_Block\n");
    assert_eq!(
        delimiters[0].kind,
        DelimiterKind::Open(ElementKind::FunctionBlock)
    );
    assert_eq!(delimiters[0].name.as_deref(), Some("fb_lower"));
    assert_eq!(
        delimiters[1].kind,
        DelimiterKind::Close(EndKind::FunctionBlock)
    );
}

#[test]
fn text_without_keywords_scans_to_nothing() {
    assert!(scan("").is_empty());
    assert!(scan("// only a comment\nx := 1;\n").is_empty());
}

#[test]
fn every_variable_section_is_recognized() {
    let source = "\
PROGRAM P
VAR_INPUT END_VAR
VAR_OUTPUT END_VAR
VAR_IN_OUT END_VAR
VAR_TEMP END_VAR
VAR_STAT END_VAR
VAR_EXTERNAL END_VAR
VAR_INST END_VAR
END_PROGRAM
";
    let root = parse_element(source).unwrap().unwrap();
    let kinds: Vec<_> = root.sub_elements.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ElementKind::VarInput,
            ElementKind::VarOutput,
            ElementKind::VarInOut,
            ElementKind::VarTemp,
            ElementKind::VarStat,
            ElementKind::VarExternal,
            ElementKind::VarInst,
        ]
    );
}

#[test]
fn block_comments_end_at_the_first_close() {
    let source = "\
(* header (* old *)
FUNCTION_BLOCK FB_Header
    x := 1;
END_FUNCTION_BLOCK
";
    expect![[r#"
FUNCTION_BLOCK FB_Header 1..2
END_FUNCTION_BLOCK 3..4
"#]]
    .assert_eq(&delimiters(source));
    assert_round_trip(source);
}
