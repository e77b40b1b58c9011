//! Recursive block walker and per-operation emission rules.
//!
//! Dispatch is two-level and closed: the catalog resolves a block's tag to
//! an [`OperationSpec`] carrying its [`BlockKind`], and every operation
//! variant is matched exhaustively below. A tag the catalog does not know
//! degrades to a single annotation comment and the walk continues; the walk
//! itself only fails on pathological container nesting.

use itertools::Itertools;

use super::emit::{Stmt, INDENT};
use super::scope::Scope;
use super::{GenerateError, MAX_RENDER_DEPTH};
use crate::catalog::{
    self, BlockKind, DisplayOp, FlowOp, LogicOp, MathOp, OperationSpec, OperatorOp,
    SpreadsheetOp, UiOp, UtilitiesOp, VariablesOp,
};
use crate::program::Block;

/// Render an ordered block sequence against `scope`, returning the emitted
/// statements and the scope as later siblings observe it.
pub fn render_blocks(
    blocks: &[Block],
    scope: Scope,
    depth: usize,
) -> Result<(Vec<Stmt>, Scope), GenerateError> {
    if depth > MAX_RENDER_DEPTH {
        return Err(GenerateError::NestingTooDeep {
            limit: MAX_RENDER_DEPTH,
        });
    }

    let mut stmts = Vec::new();
    let mut scope = scope;

    for block in blocks {
        if block.tag.is_empty() {
            continue;
        }
        let Some(spec) = catalog::catalog().resolve(&block.tag) else {
            tracing::warn!("CODEGEN: unknown block tag '{}', emitting annotation", block.tag);
            stmts.push(Stmt::comment(block.tag.clone()));
            continue;
        };
        scope = emit_block(block, spec, &mut stmts, scope, depth)?;
    }

    Ok((stmts, scope))
}

fn emit_block(
    block: &Block,
    spec: &'static OperationSpec,
    stmts: &mut Vec<Stmt>,
    scope: Scope,
    depth: usize,
) -> Result<Scope, GenerateError> {
    match spec.kind {
        BlockKind::Variables(op) => Ok(emit_variables(op, block, spec, stmts, scope)),
        BlockKind::Spreadsheet(op) => Ok(emit_spreadsheet(op, block, spec, stmts, scope)),
        BlockKind::Ui(op) => Ok(emit_ui(op, block, spec, stmts, scope)),
        BlockKind::Utilities(op) => Ok(emit_utilities(op, block, spec, stmts, scope)),
        BlockKind::Display(op) => Ok(emit_display(op, block, spec, stmts, scope)),
        BlockKind::Flow(op) => emit_flow(op, block, spec, stmts, scope, depth),
        BlockKind::Logic(op) => Ok(emit_logic(op, scope)),
        BlockKind::Math(op) => Ok(emit_math(op, block, spec, stmts, scope)),
        BlockKind::Operator(op) => Ok(emit_operator(op, block, spec, stmts, scope)),
    }
}

/// Parameter text from the block, or the catalog's documented default.
fn param(block: &Block, spec: &OperationSpec, name: &str) -> String {
    block
        .param(name)
        .unwrap_or_else(|| spec.default_of(name))
        .to_string()
}

/// Receiver a host-object call is made on.
fn receiver(block: &Block, spec: &OperationSpec) -> String {
    block
        .receiver()
        .or(spec.receiver)
        .unwrap_or("result")
        .to_string()
}

/// Output variable a value-yielding operation binds to.
fn result_var(block: &Block, spec: &OperationSpec) -> String {
    block
        .output_var()
        .or(spec.result_name)
        .unwrap_or("result")
        .to_string()
}

/// Bind the operation's value to its output variable through the scope
/// tracker.
fn bind_result(
    block: &Block,
    spec: &OperationSpec,
    init: String,
    stmts: &mut Vec<Stmt>,
    scope: Scope,
) -> Scope {
    let name = result_var(block, spec);
    let (stmt, scope) = scope.bind(&name, init);
    stmts.push(stmt);
    scope
}

fn emit_variables(
    op: VariablesOp,
    block: &Block,
    spec: &OperationSpec,
    stmts: &mut Vec<Stmt>,
    scope: Scope,
) -> Scope {
    match op {
        VariablesOp::DeclareVariable => {
            let name = param(block, spec, "name");
            let value = param(block, spec, "value");
            let (stmt, scope) = scope.bind(&name, value);
            stmts.push(stmt);
            scope
        }
        // Pure value reference; consumed inside other blocks' expressions.
        VariablesOp::GetVariable => scope,
        VariablesOp::SetVariable => {
            stmts.push(Stmt::assign(
                param(block, spec, "name"),
                param(block, spec, "value"),
            ));
            scope
        }
        VariablesOp::CreateArray => {
            bind_result(block, spec, param(block, spec, "elements"), stmts, scope)
        }
    }
}

fn emit_spreadsheet(
    op: SpreadsheetOp,
    block: &Block,
    spec: &OperationSpec,
    stmts: &mut Vec<Stmt>,
    scope: Scope,
) -> Scope {
    match op {
        SpreadsheetOp::GetActiveSpreadsheet => bind_result(
            block,
            spec,
            "SpreadsheetApp.getActiveSpreadsheet()".to_string(),
            stmts,
            scope,
        ),
        SpreadsheetOp::GetActiveSheet => {
            let init = format!("{}.getActiveSheet()", receiver(block, spec));
            bind_result(block, spec, init, stmts, scope)
        }
        SpreadsheetOp::GetRange => {
            let args = ["row", "column", "numRows", "numColumns"]
                .into_iter()
                .map(|name| param(block, spec, name))
                .join(", ");
            let init = format!("{}.getRange({})", receiver(block, spec), args);
            bind_result(block, spec, init, stmts, scope)
        }
        SpreadsheetOp::GetValue => {
            let init = format!("{}.getValue()", receiver(block, spec));
            bind_result(block, spec, init, stmts, scope)
        }
        SpreadsheetOp::SetValue => {
            stmts.push(Stmt::expr(format!(
                "{}.setValue({})",
                receiver(block, spec),
                param(block, spec, "value")
            )));
            scope
        }
        SpreadsheetOp::GetValues => {
            let init = format!("{}.getValues()", receiver(block, spec));
            bind_result(block, spec, init, stmts, scope)
        }
        SpreadsheetOp::SetValues => {
            stmts.push(Stmt::expr(format!(
                "{}.setValues({})",
                receiver(block, spec),
                param(block, spec, "values")
            )));
            scope
        }
    }
}

fn emit_ui(
    op: UiOp,
    block: &Block,
    spec: &OperationSpec,
    stmts: &mut Vec<Stmt>,
    scope: Scope,
) -> Scope {
    match op {
        UiOp::Alert => {
            stmts.push(Stmt::expr(format!(
                "SpreadsheetApp.getUi().alert({})",
                param(block, spec, "message")
            )));
            scope
        }
        UiOp::Prompt => {
            let init = format!(
                "SpreadsheetApp.getUi().prompt({}, {})",
                param(block, spec, "message"),
                param(block, spec, "title")
            );
            bind_result(block, spec, init, stmts, scope)
        }
        UiOp::Confirm => {
            let init = format!(
                "SpreadsheetApp.getUi().alert({}, SpreadsheetApp.getUi().ButtonSet.YES_NO) === SpreadsheetApp.getUi().Button.YES",
                param(block, spec, "message")
            );
            bind_result(block, spec, init, stmts, scope)
        }
        UiOp::CreateHtmlOutput => {
            let init = format!(
                "HtmlService.createHtmlOutput({})",
                param(block, spec, "html")
            );
            bind_result(block, spec, init, stmts, scope)
        }
        UiOp::ShowModalDialog => {
            stmts.push(Stmt::expr(format!(
                "SpreadsheetApp.getUi().showModalDialog({}, {})",
                param(block, spec, "html"),
                param(block, spec, "title")
            )));
            scope
        }
    }
}

fn emit_utilities(
    op: UtilitiesOp,
    block: &Block,
    spec: &OperationSpec,
    stmts: &mut Vec<Stmt>,
    scope: Scope,
) -> Scope {
    match op {
        UtilitiesOp::Sleep => {
            stmts.push(Stmt::expr(format!(
                "Utilities.sleep({})",
                param(block, spec, "milliseconds")
            )));
            scope
        }
        UtilitiesOp::FormatDate => {
            let init = format!(
                "Utilities.formatDate({}, {}, {})",
                param(block, spec, "date"),
                param(block, spec, "timeZone"),
                param(block, spec, "format")
            );
            bind_result(block, spec, init, stmts, scope)
        }
        UtilitiesOp::ParseCsv => {
            let init = format!("Utilities.parseCsv({})", param(block, spec, "csv"));
            bind_result(block, spec, init, stmts, scope)
        }
        UtilitiesOp::Base64Encode => {
            let init = format!("Utilities.base64Encode({})", param(block, spec, "data"));
            bind_result(block, spec, init, stmts, scope)
        }
        UtilitiesOp::Base64Decode => {
            let init = format!("Utilities.base64Decode({})", param(block, spec, "encoded"));
            bind_result(block, spec, init, stmts, scope)
        }
    }
}

fn emit_display(
    op: DisplayOp,
    block: &Block,
    spec: &OperationSpec,
    stmts: &mut Vec<Stmt>,
    scope: Scope,
) -> Scope {
    match op {
        DisplayOp::LogOutput => {
            stmts.push(Stmt::expr(format!(
                "console.log({})",
                param(block, spec, "message")
            )));
            scope
        }
        DisplayOp::ShowResult => {
            stmts.push(Stmt::expr(format!(
                "SpreadsheetApp.getUi().alert({}, {}, SpreadsheetApp.getUi().ButtonSet.OK)",
                param(block, spec, "title"),
                param(block, spec, "message")
            )));
            scope
        }
        DisplayOp::SimpleOutput => {
            let value = param(block, spec, "value");
            stmts.push(Stmt::raw([
                format!("console.log(\"Output: \" + ({value}));"),
                "// For UI display".to_string(),
                "if (typeof outputElement !== 'undefined') {".to_string(),
                format!("{INDENT}outputElement.innerHTML += \"<div>Output: \" + ({value}) + \"</div>\";"),
                "}".to_string(),
            ]));
            scope
        }
        DisplayOp::AppendToOutput => {
            let value = param(block, spec, "value");
            stmts.push(Stmt::raw([
                format!("console.log({value});"),
                "// For UI display".to_string(),
                "if (typeof outputElement !== 'undefined') {".to_string(),
                format!("{INDENT}outputElement.innerHTML += \"<div>\" + ({value}) + \"</div>\";"),
                "}".to_string(),
            ]));
            scope
        }
        DisplayOp::ClearOutput => {
            stmts.push(Stmt::raw([
                "// Clear the output display".to_string(),
                "if (typeof outputElement !== 'undefined') {".to_string(),
                format!("{INDENT}outputElement.innerHTML = \"\";"),
                "}".to_string(),
            ]));
            scope
        }
        DisplayOp::CreateChart => {
            let init = format!(
                "Charts.newLineChart()\n{i}.setTitle({})\n{i}.setDataTable({})\n{i}.build()",
                param(block, spec, "title"),
                param(block, spec, "data"),
                i = INDENT
            );
            bind_result(block, spec, init, stmts, scope)
        }
        DisplayOp::DisplayTable => {
            let var = result_var(block, spec);
            let data = param(block, spec, "data");
            let headers = param(block, spec, "headers");

            stmts.push(Stmt::comment("Create HTML table from data"));
            let (decl, scope) = scope.bind(
                &var,
                "'<table border=\"1\" style=\"border-collapse: collapse;\">'",
            );
            stmts.push(decl);
            stmts.push(Stmt::raw([
                "// Add headers".to_string(),
                format!("{var} += '<tr>';"),
                format!("for (const header of {headers}) {{"),
                format!("{INDENT}{var} += '<th>' + header + '</th>';"),
                "}".to_string(),
                format!("{var} += '</tr>';"),
                "// Add data rows".to_string(),
                format!("for (const row of {data}) {{"),
                format!("{INDENT}{var} += '<tr>';"),
                format!("{INDENT}for (const cell of row) {{"),
                format!("{INDENT}{INDENT}{var} += '<td>' + cell + '</td>';"),
                format!("{INDENT}}}"),
                format!("{INDENT}{var} += '</tr>';"),
                "}".to_string(),
                format!("{var} += '</table>';"),
            ]));
            scope
        }
        DisplayOp::CreateDashboard => {
            let var = result_var(block, spec);
            let title = param(block, spec, "title");
            let components = param(block, spec, "components");

            stmts.push(Stmt::comment("Assemble dashboard markup"));
            let (decl, scope) = scope.bind(&var, "'<div class=\"dashboard\">'");
            stmts.push(decl);
            stmts.push(Stmt::raw([
                format!("{var} += '<h2>' + ({title}) + '</h2>';"),
                format!("for (const component of {components}) {{"),
                format!("{INDENT}{var} += '<div class=\"dashboard-item\">' + component + '</div>';"),
                "}".to_string(),
                format!("{var} += '</div>';"),
            ]));
            scope
        }
    }
}

fn emit_flow(
    op: FlowOp,
    block: &Block,
    spec: &OperationSpec,
    stmts: &mut Vec<Stmt>,
    scope: Scope,
    depth: usize,
) -> Result<Scope, GenerateError> {
    match op {
        FlowOp::If => {
            // Both branches fork from the pre-branch scope; they are
            // siblings, not sequential.
            let (then_body, _) = render_blocks(&block.child_blocks, scope.fork(), depth + 1)?;
            let else_body = if block.has_else {
                let (body, _) = render_blocks(&block.else_blocks, scope.fork(), depth + 1)?;
                Some(body)
            } else {
                None
            };
            stmts.push(Stmt::If {
                cond: param(block, spec, "condition"),
                then_body,
                else_body,
            });
            Ok(scope)
        }
        FlowOp::ForEach => {
            let item = param(block, spec, "itemName");
            let (body, _) =
                render_blocks(&block.child_blocks, scope.fork().with(&item), depth + 1)?;
            stmts.push(Stmt::ForEach {
                array: param(block, spec, "array"),
                item,
                body,
            });
            Ok(scope)
        }
        FlowOp::For => {
            let counter = param(block, spec, "counterName");
            let (body, _) =
                render_blocks(&block.child_blocks, scope.fork().with(&counter), depth + 1)?;
            stmts.push(Stmt::For {
                counter,
                start: param(block, spec, "start"),
                end: param(block, spec, "end"),
                step: param(block, spec, "step"),
                body,
            });
            Ok(scope)
        }
        FlowOp::While => {
            let (body, _) = render_blocks(&block.child_blocks, scope.fork(), depth + 1)?;
            stmts.push(Stmt::While {
                cond: param(block, spec, "condition"),
                body,
            });
            Ok(scope)
        }
        FlowOp::DoWhile => {
            let (body, _) = render_blocks(&block.child_blocks, scope.fork(), depth + 1)?;
            stmts.push(Stmt::DoWhile {
                cond: param(block, spec, "condition"),
                body,
            });
            Ok(scope)
        }
        // Function bodies are realized by the assembler from the program's
        // function table; the block form emits nothing.
        FlowOp::Function => Ok(scope),
    }
}

/// Logical connectives and comparisons supply expression text to whichever
/// statement-producing block references them; standalone they emit nothing.
fn emit_logic(op: LogicOp, scope: Scope) -> Scope {
    match op {
        LogicOp::And
        | LogicOp::Or
        | LogicOp::Not
        | LogicOp::Equals
        | LogicOp::NotEquals
        | LogicOp::GreaterThan
        | LogicOp::LessThan => scope,
    }
}

fn emit_math(
    op: MathOp,
    block: &Block,
    spec: &OperationSpec,
    stmts: &mut Vec<Stmt>,
    scope: Scope,
) -> Scope {
    let init = match op {
        MathOp::Calculate => param(block, spec, "expression"),
        // Coerce both sides for addition so text operands don't silently
        // concatenate.
        MathOp::Add => format!(
            "Number({}) + Number({})",
            param(block, spec, "left"),
            param(block, spec, "right")
        ),
        MathOp::Subtract => format!(
            "{} - {}",
            param(block, spec, "left"),
            param(block, spec, "right")
        ),
        MathOp::Multiply => format!(
            "{} * {}",
            param(block, spec, "left"),
            param(block, spec, "right")
        ),
        MathOp::Divide => format!(
            "{} / {}",
            param(block, spec, "left"),
            param(block, spec, "right")
        ),
        MathOp::Mod => format!(
            "{} % {}",
            param(block, spec, "left"),
            param(block, spec, "right")
        ),
        MathOp::Power => format!(
            "Math.pow({}, {})",
            param(block, spec, "base"),
            param(block, spec, "exponent")
        ),
        MathOp::Sqrt => format!("Math.sqrt({})", param(block, spec, "number")),
        MathOp::Random => {
            let min = param(block, spec, "min");
            let max = param(block, spec, "max");
            format!("Math.random() * (({max}) - ({min})) + ({min})")
        }
        MathOp::Round => format!("Math.round({})", param(block, spec, "number")),
        MathOp::Floor => format!("Math.floor({})", param(block, spec, "number")),
        MathOp::Ceil => format!("Math.ceil({})", param(block, spec, "number")),
    };
    bind_result(block, spec, init, stmts, scope)
}

fn emit_operator(
    op: OperatorOp,
    block: &Block,
    spec: &OperationSpec,
    stmts: &mut Vec<Stmt>,
    scope: Scope,
) -> Scope {
    // Binary shorthand joins the operand text with its fixed symbol, no
    // coercion.
    let binary = |symbol: &str, stmts: &mut Vec<Stmt>, scope: Scope| {
        let init = format!(
            "{} {} {}",
            param(block, spec, "left"),
            symbol,
            param(block, spec, "right")
        );
        bind_result(block, spec, init, stmts, scope)
    };

    match op {
        OperatorOp::Plus => binary("+", stmts, scope),
        OperatorOp::Minus => binary("-", stmts, scope),
        OperatorOp::Times => binary("*", stmts, scope),
        OperatorOp::DividedBy => binary("/", stmts, scope),
        OperatorOp::Modulo => binary("%", stmts, scope),
        OperatorOp::Increment => {
            stmts.push(Stmt::expr(format!("{}++", param(block, spec, "variable"))));
            scope
        }
        OperatorOp::Decrement => {
            stmts.push(Stmt::expr(format!("{}--", param(block, spec, "variable"))));
            scope
        }
        OperatorOp::Assign => {
            stmts.push(Stmt::assign(
                param(block, spec, "variable"),
                param(block, spec, "value"),
            ));
            scope
        }
    }
}
