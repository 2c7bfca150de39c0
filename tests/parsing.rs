//! End-to-end tests: source text in, tree dump and rendered diagnostics out.

use sprig_diagnostic::{ErrorCode, render};
use sprig_parser::parse;
use sprig_syntax::{PrintConfig, printer};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

const SAMPLE: &str = "\
! Sum the numbers 1 to n.
let n : Integer; sum : Integer in
begin
    getint(out n);
    sum := 0;
    while (n > 0) do {
        sum := sum + n;
        n := n - 1
    };
    if (sum > 100) unless (sum > 1000) then
        putint(in sum)
    else
        tick()
end
";

#[test]
fn test_sample_program_parses_cleanly() {
    init_tracing();
    let (program, diags) = parse(SAMPLE);
    assert!(diags.is_empty(), "unexpected diagnostics: {:#?}", diags);
    assert_eq!(program.error_count(), 0);
}

#[test]
fn test_print_tree() {
    let (program, diags) = parse("let x is 1 in y := x");
    assert!(diags.is_empty());
    assert_eq!(
        printer::print_program(&program, &PrintConfig::default()),
        "Program\n  Let\n    Const x\n      Integer 1\n    Assign y\n      Identifier x\n"
    );
}

#[test]
fn test_print_tree_with_positions() {
    let (program, _) = parse("let x is 1 in y := x");
    let config = PrintConfig::new().show_positions(true);
    assert_eq!(
        printer::print_program(&program, &config),
        concat!(
            "Program @1:1\n",
            "  Let @1:1\n",
            "    Const x @1:5\n",
            "      Integer 1 @1:10\n",
            "    Assign y @1:15\n",
            "      Identifier x @1:20\n",
        )
    );
}

#[test]
fn test_print_error_placeholders() {
    let (program, diags) = parse("x := 1; )");
    assert_eq!(diags.len(), 1);
    let config = PrintConfig::new().trailing_newline(false);
    assert_eq!(
        printer::print_program(&program, &config),
        "Program\n  Sequence\n    Assign x\n      Integer 1\n    Error"
    );
}

#[test]
fn test_diagnostics_in_source_order() {
    init_tracing();
    let (_, diags) = parse("x := );\ny := ;\nz(q) }");
    let lines: Vec<u32> = diags
        .iter()
        .map(|d| d.position.map(|p| p.line).unwrap_or(0))
        .collect();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
    assert!(diags.iter().all(|d| d.code.is_some()));
}

#[test]
fn test_render_trailing_input() {
    let source = "x := 1 }";
    let (_, diags) = parse(source);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, Some(ErrorCode::TrailingInput));

    let out = render(source, "main.sprig", &diags[0]).unwrap();
    assert!(out.contains("E0109"), "{out}");
    assert!(out.contains("main.sprig"), "{out}");
    assert!(out.contains("found `}`"), "{out}");
}

#[test]
fn test_render_lexer_error() {
    let source = "x := 1 # 2";
    let (_, diags) = parse(source);
    let out = render(source, "main.sprig", &diags[0]).unwrap();
    assert!(out.contains("E0001"), "{out}");
    assert!(out.contains("unexpected character"), "{out}");
}
