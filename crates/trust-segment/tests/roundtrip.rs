mod common;
use common::*;

use trust_segment::ElementKind;

#[test]
fn function_block_with_methods_and_actions() {
    assert_round_trip(
        "\
// Conveyor segment
FUNCTION_BLOCK FB_Conveyor
VAR_INPUT
    start : BOOL;
END_VAR
VAR_OUTPUT
    running : BOOL;
END_VAR
VAR
    timer : TON;
END_VAR

    METHOD Reset : BOOL
    VAR_INPUT
        hard : BOOL;
    END_VAR

        running := FALSE;
        Reset := TRUE;
    END_METHOD

    (* Stops the belt *)
    ACTION Halt:
        running := FALSE;
    END_ACTION

    timer(IN := start, PT := T#2S);
    running := timer.Q;
END_FUNCTION_BLOCK
",
    );
}

#[test]
fn inline_comments_after_keywords() {
    assert_round_trip(
        "\
FUNCTION_BLOCK FB_Notes // main block
VAR_INPUT (* inputs *)
    a : INT;
END_VAR (* note *)
VAR_OUTPUT
    b : INT; // result
END_VAR

    METHOD PUBLIC Compute : INT (* pure *)
        Compute := a * 2;
    END_METHOD // compute

    b := Compute();
END_FUNCTION_BLOCK // done
",
    );
}

#[test]
fn keyword_like_strings_and_comments() {
    let source = r#"FUNCTION_BLOCK FB_Strings
VAR
    msg : STRING := 'FUNCTION_BLOCK FB_Fake';
    wide : WSTRING := "METHOD Fake";
    // END_FUNCTION_BLOCK
    (* METHOD Hidden
       END_METHOD *)
END_VAR

    msg := 'END_VAR';
END_FUNCTION_BLOCK
"#;
    assert_round_trip(source);
    assert!(split(source).unwrap().children.is_empty());
}

#[test]
fn variable_section_after_a_method_stays_a_child() {
    let source = "\
PROGRAM PRG_Main
VAR
    a : INT;
END_VAR

    METHOD M
    END_METHOD

    VAR_TEMP
        t : INT;
    END_VAR

    a := 1;
END_PROGRAM
";
    assert_round_trip(source);
    let model = split(source).unwrap();
    let kinds: Vec<_> = model.children.iter().map(|child| child.kind).collect();
    assert_eq!(
        kinds,
        vec![Some(ElementKind::Method), Some(ElementKind::VarTemp)]
    );
}

#[test]
fn interface_and_lowercase_keywords() {
    assert_round_trip(
        "\
INTERFACE I_Axis EXTENDS I_Base
    METHOD MoveTo : BOOL
    VAR_INPUT
        position : LREAL;
    END_VAR
    END_METHOD

    method home : bool
    end_method
END_INTERFACE
",
    );
    assert_round_trip(
        "function_block fb_lower\nvar\n    x : int;\nend_var\n\n    method m\n        x := 1;\n    end_method\nend_function_block\n",
    );
}

#[test]
fn trivia_around_the_unit() {
    // trailing lines after the closing keyword
    assert_round_trip("FUNCTION F : INT\n    F := 1;\nEND_FUNCTION\n\n// end of file\n");
    // no final newline
    assert_round_trip("PROGRAM P\n    x := 1;\nEND_PROGRAM");
    // CRLF line endings
    assert_round_trip("FUNCTION F : INT\r\nVAR_INPUT\r\n    a : INT;\r\nEND_VAR\r\n\r\n    F := a;\r\nEND_FUNCTION\r\n");
    // declaration-only unit with trailing comment
    assert_round_trip("TYPE ST_Point :\nSTRUCT\n    x : REAL;\n    y : REAL;\nEND_STRUCT\nEND_TYPE\n(* point *)\n");
    // empty body on the header line
    assert_round_trip("FUNCTION_BLOCK FB_Empty END_FUNCTION_BLOCK\n");
}

#[test]
fn edited_model_reserializes_with_indentation() {
    let source = "\
FUNCTION_BLOCK FB_Edit
VAR
    x : INT;
END_VAR

    METHOD Update
        x := 1;
    END_METHOD

    Update();
END_FUNCTION_BLOCK
";
    let mut model = split(source).unwrap();
    model
        .find_mut("update")
        .unwrap()
        .implementation
        .replace("x := 2;\nIF x > 1 THEN\n    x := 0;\nEND_IF");

    let text = dumps(&model).unwrap();
    assert!(text.contains(
        "        x := 2;\n        IF x > 1 THEN\n            x := 0;\n        END_IF\n    END_METHOD\n"
    ));

    let again = split(&text).unwrap();
    assert_eq!(
        again.find("Update").unwrap().implementation.text(),
        "x := 2;\nIF x > 1 THEN\n    x := 0;\nEND_IF\n"
    );
    assert_round_trip(&text);
}

#[test]
fn canonical_tree_serializes_to_a_stable_unit() {
    let model = ElementNode::new(
        Some(ElementKind::FunctionBlock),
        Some("FB_Lamp"),
        "FUNCTION_BLOCK FB_Lamp\nVAR\n    on : BOOL;\nEND_VAR\n",
        "on := NOT on;\n",
    )
    .with_child(ElementNode::new(
        Some(ElementKind::Method),
        Some("Off"),
        "METHOD Off\n",
        "on := FALSE;\n",
    ))
    .with_child(ElementNode::new(
        Some(ElementKind::Action),
        Some("Blink"),
        "",
        "on := TRUE;\n",
    ));

    let text = dumps(&model).unwrap();
    assert_round_trip(&text);

    let reparsed = split(&text).unwrap();
    assert_eq!(reparsed.children.len(), 2);
    assert_eq!(
        reparsed.find("Blink").unwrap().implementation.text(),
        "on := TRUE;\n"
    );
}

#[test]
fn column_zero_root_body() {
    assert_round_trip(
        "\
FUNCTION_BLOCK FB
VAR
    x : INT;
END_VAR
x := 1;
END_FUNCTION_BLOCK
",
    );
}

#[test]
fn flat_export_without_nested_indentation() {
    assert_round_trip(
        "\
FUNCTION_BLOCK FB_Flat
VAR
    x : INT;
END_VAR
METHOD Reset
VAR_INPUT
    hard : BOOL;
END_VAR
x := 0;
END_METHOD
  x := x + 1;
END_FUNCTION_BLOCK
",
    );
}

#[test]
fn tab_indented_method() {
    assert_round_trip(
        "FUNCTION_BLOCK FB_Tab\nVAR\n\tx : INT;\nEND_VAR\n\tMETHOD M\n\t\tx := 1;\n\tEND_METHOD\n\tx := 2;\nEND_FUNCTION_BLOCK\n",
    );
}

#[test]
fn replaced_text_takes_the_nesting_indentation() {
    let mut model = split("PROGRAM Main\nx := 1;\nEND_PROGRAM\n").unwrap();
    assert_eq!(dumps(&model).unwrap(), "PROGRAM Main\nx := 1;\nEND_PROGRAM\n");

    model.implementation.replace("x := 2;\n");
    assert_eq!(
        dumps(&model).unwrap(),
        "PROGRAM Main\n    x := 2;\nEND_PROGRAM\n"
    );
}
