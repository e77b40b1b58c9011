//! Integration tests for block-tree code generation.

#[cfg(test)]
mod tests {
    use crate::compiler::*;
    use crate::program::{Block, FunctionDef, ProgramStructure};
    use std::collections::HashMap;

    fn block(tag: &str) -> Block {
        Block {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    fn block_with(tag: &str, params: &[(&str, &str)]) -> Block {
        Block {
            tag: tag.to_string(),
            params: params
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect::<HashMap<_, _>>(),
            ..Default::default()
        }
    }

    fn func(name: &str, parameters: &[&str], blocks: Vec<Block>) -> FunctionDef {
        FunctionDef {
            name: name.to_string(),
            parameters: parameters.iter().map(|p| p.to_string()).collect(),
            blocks,
        }
    }

    fn program_of(functions: Vec<(&str, FunctionDef)>) -> ProgramStructure {
        ProgramStructure {
            functions: functions
                .into_iter()
                .map(|(id, def)| (id.to_string(), def))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_parameters_use_documented_defaults() {
        let program = program_of(vec![("fn_1", func("main", &[], vec![block("math.add")]))]);
        let code = generate(&program).unwrap();

        assert!(
            code.contains("let sum = Number(0) + Number(0);"),
            "defaults missing in:\n{code}"
        );
    }

    #[test]
    fn redeclaration_becomes_plain_reassignment() {
        let program = program_of(vec![(
            "fn_1",
            func(
                "main",
                &[],
                vec![
                    block_with("variables.declareVariable", &[("name", "x"), ("value", "1")]),
                    block_with("variables.declareVariable", &[("name", "x"), ("value", "2")]),
                ],
            ),
        )]);
        let code = generate(&program).unwrap();

        assert!(code.contains("let x = 1;"));
        assert!(code.contains("\n  x = 2;"));
        assert_eq!(code.matches("let x").count(), 1);
    }

    #[test]
    fn sibling_branches_declare_independently() {
        let mut branch = block_with("flow.if", &[("condition", "flag")]);
        branch.has_else = true;
        branch.child_blocks = vec![block_with(
            "variables.declareVariable",
            &[("name", "y"), ("value", "1")],
        )];
        branch.else_blocks = vec![block_with(
            "variables.declareVariable",
            &[("name", "y"), ("value", "2")],
        )];

        let program = program_of(vec![("fn_1", func("main", &[], vec![branch]))]);
        let code = generate(&program).unwrap();

        // Neither branch observes the other's binding.
        assert_eq!(code.matches("let y").count(), 2);
        assert!(code.contains("if (flag) {"));
        assert!(code.contains("} else {"));
    }

    #[test]
    fn loop_body_declarations_do_not_leak_to_siblings() {
        let mut range = block("flow.for");
        range.child_blocks = vec![block_with(
            "variables.declareVariable",
            &[("name", "tmp"), ("value", "0")],
        )];

        let program = program_of(vec![(
            "fn_1",
            func(
                "main",
                &[],
                vec![
                    range,
                    block_with("variables.declareVariable", &[("name", "tmp"), ("value", "1")]),
                ],
            ),
        )]);
        let code = generate(&program).unwrap();

        // The sibling after the loop declares afresh.
        assert_eq!(code.matches("let tmp").count(), 2);
    }

    #[test]
    fn post_test_loop_runs_at_least_once() {
        let mut loop_block = block_with("flow.doWhile", &[("condition", "false")]);
        loop_block.child_blocks = vec![block_with("display.logOutput", &[("message", "1")])];

        let program = program_of(vec![("fn_1", func("main", &[], vec![loop_block]))]);
        let code = generate(&program).unwrap();

        assert!(code.contains("  do {\n    console.log(1);\n  } while (false);\n"));
    }

    #[test]
    fn counted_range_uses_a_strict_upper_bound() {
        let five = block_with(
            "flow.for",
            &[("start", "0"), ("end", "5"), ("step", "1"), ("counterName", "i")],
        );
        let empty = block_with(
            "flow.for",
            &[("start", "0"), ("end", "0"), ("step", "1"), ("counterName", "i")],
        );

        let program = program_of(vec![("fn_1", func("main", &[], vec![five, empty]))]);
        let code = generate(&program).unwrap();

        // Counter values 0..4, then a header that fails its first bound test.
        assert!(code.contains("for (let i = 0; i < 5; i += 1) {"));
        assert!(code.contains("for (let i = 0; i < 0; i += 1) {"));
    }

    #[test]
    fn implicit_loop_bindings_are_visible_inside_the_body() {
        let mut each = block_with("flow.forEach", &[("array", "rows"), ("itemName", "row")]);
        each.child_blocks = vec![block_with(
            "variables.declareVariable",
            &[("name", "row"), ("value", "0")],
        )];

        let program = program_of(vec![("fn_1", func("main", &[], vec![each]))]);
        let code = generate(&program).unwrap();

        assert!(code.contains("rows.forEach(function(row) {"));
        // `row` is already bound by the loop, so the body reassigns.
        assert!(code.contains("\n    row = 0;"));
        assert!(!code.contains("let row"));
    }

    #[test]
    fn unknown_tags_degrade_to_annotations() {
        let program = program_of(vec![(
            "fn_1",
            func(
                "main",
                &[],
                vec![
                    block_with("display.logOutput", &[("message", "1")]),
                    block("foo.bar"),
                    block_with("display.logOutput", &[("message", "2")]),
                ],
            ),
        )]);
        let code = generate(&program).unwrap();

        assert!(code.contains("console.log(1);\n  // foo.bar\n  console.log(2);"));
    }

    #[test]
    fn function_parameters_seed_the_scope() {
        let program = program_of(vec![
            (
                "fn_1",
                func(
                    "helper",
                    &["x", "y"],
                    vec![block_with(
                        "variables.declareVariable",
                        &[("name", "x"), ("value", "0")],
                    )],
                ),
            ),
            ("fn_2", func("main", &[], vec![])),
        ]);
        let code = generate(&program).unwrap();

        assert!(code.contains("function helper(x, y) {"));
        // `x` arrived through the parameter list, so the body reassigns.
        assert!(code.contains("\n  x = 0;"));
        assert!(!code.contains("let x"));
    }

    #[test]
    fn entry_point_is_wrapped_once_and_emitted_last() {
        let program = program_of(vec![
            ("fn_1", func("main", &[], vec![block("display.clearOutput")])),
            (
                "fn_2",
                func(
                    "helper",
                    &[],
                    vec![block_with("display.logOutput", &[("message", "1")])],
                ),
            ),
        ]);
        let code = generate(&program).unwrap();

        let helper_at = code.find("function helper(").unwrap();
        let main_at = code.find("function main(").unwrap();
        assert!(helper_at < main_at, "helper must precede the entry point");
        assert_eq!(code.matches("function main(").count(), 1);
    }

    #[test]
    fn program_without_an_entry_point_still_generates() {
        let program = program_of(vec![(
            "fn_1",
            func("helper", &[], vec![block("display.clearOutput")]),
        )]);
        let code = generate(&program).unwrap();

        assert!(code.contains("function helper() {"));
        assert!(!code.contains("function main("));
    }

    #[test]
    fn duplicate_entry_points_are_a_validation_error() {
        let program = program_of(vec![
            ("fn_1", func("main", &[], vec![])),
            ("fn_2", func("main", &[], vec![])),
        ]);

        assert_eq!(
            generate(&program),
            Err(GenerateError::AmbiguousEntryPoint { count: 2 })
        );
    }

    #[test]
    fn pathological_nesting_is_reported_not_overflowed() {
        let mut nested = block("flow.if");
        for _ in 0..(MAX_RENDER_DEPTH + 4) {
            let mut outer = block("flow.if");
            outer.child_blocks = vec![nested];
            nested = outer;
        }

        let program = program_of(vec![("fn_1", func("main", &[], vec![nested]))]);
        assert_eq!(
            generate(&program),
            Err(GenerateError::NestingTooDeep {
                limit: MAX_RENDER_DEPTH
            })
        );
    }

    #[test]
    fn host_object_calls_use_conventional_or_named_receivers() {
        let mut named = block("spreadsheet.getRange");
        named.source_ref = Some("budgetSheet".to_string());
        named.variable_name = Some("totals".to_string());

        let program = program_of(vec![(
            "fn_1",
            func(
                "main",
                &[],
                vec![
                    block("spreadsheet.getActiveSpreadsheet"),
                    block("spreadsheet.getActiveSheet"),
                    block("spreadsheet.getRange"),
                    named,
                ],
            ),
        )]);
        let code = generate(&program).unwrap();

        assert!(code.contains("let ss = SpreadsheetApp.getActiveSpreadsheet();"));
        assert!(code.contains("let sheet = SpreadsheetApp.getActiveSheet();"));
        assert!(code.contains("let range = sheet.getRange(1, 1, 1, 1);"));
        assert!(code.contains("let totals = budgetSheet.getRange(1, 1, 1, 1);"));
    }

    #[test]
    fn value_only_blocks_emit_no_statements() {
        let program = program_of(vec![(
            "fn_1",
            func(
                "main",
                &[],
                vec![
                    block_with("logic.equals", &[("left", "a"), ("right", "b")]),
                    block_with("variables.getVariable", &[("name", "a")]),
                    block_with("flow.function", &[("name", "inner")]),
                ],
            ),
        )]);
        let code = generate(&program).unwrap();

        assert_eq!(code, "// Generated Apps Script Code\n\nfunction main() {\n}\n\n");
    }

    #[test]
    fn symbolic_operators_join_text_without_coercion() {
        let program = program_of(vec![(
            "fn_1",
            func(
                "main",
                &[],
                vec![
                    block_with("operator.plus", &[("left", "a"), ("right", "b")]),
                    block_with("operator.increment", &[("variable", "n")]),
                    block_with("operator.assign", &[("variable", "n"), ("value", "a + b")]),
                ],
            ),
        )]);
        let code = generate(&program).unwrap();

        assert!(code.contains("let result = a + b;"));
        assert!(code.contains("n++;"));
        assert!(code.contains("\n  n = a + b;"));
    }

    #[test]
    fn ui_components_render_before_functions_with_bootstrap_last() {
        let mut program = program_of(vec![(
            "fn_1",
            func("main", &[], vec![block("display.clearOutput")]),
        )]);
        program.html_components = vec![crate::program::UiComponent {
            id: "comp_1".to_string(),
            kind: "button".to_string(),
            name: "Button".to_string(),
            properties: [("backgroundColor", "#4CAF50"), ("color", "white")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }];
        program.has_html_components = true;

        let code = generate(&program).unwrap();

        assert!(code.contains("// HTML Components"));
        assert!(code.contains("const comp_1 = document.createElement(\"button\");"));

        // Preamble before functions, bootstrap after everything.
        let preamble_at = code.find("const comp_1").unwrap();
        let main_at = code.find("function main(").unwrap();
        let bootstrap_at = code.find("function doGet()").unwrap();
        assert!(preamble_at < main_at && main_at < bootstrap_at);

        // Style properties in declaration order.
        let bg_at = code.find("comp_1.style.backgroundColor = \"#4CAF50\";").unwrap();
        let color_at = code.find("comp_1.style.color = \"white\";").unwrap();
        assert!(bg_at < color_at);

        // The bootstrap wires the page load to the entry point.
        assert!(code.contains(".main();"));
        assert_eq!(code.matches("function doGet()").count(), 1);
    }

    #[test]
    fn generation_is_deterministic() {
        let mut branch = block_with("flow.if", &[("condition", "flag")]);
        branch.has_else = true;
        branch.child_blocks = vec![block("math.random"), block("utilities.formatDate")];
        branch.else_blocks = vec![block("display.displayTable")];

        let program = program_of(vec![
            ("fn_1", func("helper", &["a"], vec![branch])),
            ("fn_2", func("main", &[], vec![block("ui.prompt")])),
        ]);

        assert_eq!(generate(&program).unwrap(), generate(&program).unwrap());
    }
}
