//! Whole-program assembly: function ordering, entry-point wrapping, UI
//! component preamble, and the optional web-app bootstrap.

use itertools::Itertools;

use super::emit::{self, Stmt};
use super::scope::Scope;
use super::{dispatch, GenerateError, ENTRY_POINT_NAME};
use crate::program::{FunctionDef, ProgramStructure, UiComponent};

/// Fixed closing section wiring a minimal web page to the entry point.
const UI_BOOTSTRAP: &str = r##"
/**
 * Creates UI elements and shows the web app
 */
function doGet() {
  const htmlOutput = HtmlService.createHtmlOutput();

  // Add HTML content
  htmlOutput.setContent(`
    <!DOCTYPE html>
    <html>
      <head>
        <base target="_top">
        <meta charset="utf-8">
        <meta name="viewport" content="width=device-width, initial-scale=1">
        <title>Generated App</title>
        <style>
          body { font-family: Arial, sans-serif; margin: 20px; }
        </style>
      </head>
      <body>
        <div id="app-container"></div>
        <script>
          // Initialization code
          document.addEventListener('DOMContentLoaded', function() {
            google.script.run
              .withSuccessHandler(function(result) {
                console.log('App initialized');
              })
              .main();
          });
        </script>
      </body>
    </html>
  `);

  return htmlOutput.setTitle('Generated App');
}
"##;

/// Assemble the full script: UI preamble, helper functions in encounter
/// order, then the entry point last under its fixed name.
pub fn assemble(program: &ProgramStructure) -> Result<String, GenerateError> {
    let entry_count = program
        .functions
        .values()
        .filter(|func| func.name == ENTRY_POINT_NAME)
        .count();
    if entry_count > 1 {
        return Err(GenerateError::AmbiguousEntryPoint { count: entry_count });
    }

    let mut code = String::from("// Generated Apps Script Code\n\n");

    if !program.html_components.is_empty() {
        code.push_str("// HTML Components\n");
        for component in &program.html_components {
            code.push_str(&render_component(component));
        }
    }

    let mut entry_code = String::new();
    for func in program.functions.values() {
        if func.name == ENTRY_POINT_NAME {
            entry_code = render_function(func, ENTRY_POINT_NAME)?;
        } else {
            code.push_str(&render_function(func, &func.name)?);
        }
    }
    code.push_str(&entry_code);

    if program.has_html_components {
        code.push_str(UI_BOOTSTRAP);
    }

    Ok(code)
}

/// Render one function body against a fresh scope seeded with its
/// parameters, wrapped as a named function definition.
fn render_function(func: &FunctionDef, name: &str) -> Result<String, GenerateError> {
    tracing::debug!(
        "CODEGEN: rendering function '{}' ({} blocks)",
        name,
        func.blocks.len()
    );

    let scope = Scope::seeded(func.parameters.iter().map(String::as_str));
    let (body, _) = dispatch::render_blocks(&func.blocks, scope, 0)?;

    Ok(format!(
        "function {}({}) {{\n{}}}\n\n",
        name,
        func.parameters.iter().join(", "),
        emit::render_stmts(&body, 1)
    ))
}

/// Instantiate one dropped component and apply its style properties in
/// declaration order.
fn render_component(component: &UiComponent) -> String {
    let mut stmts = vec![Stmt::const_decl(
        component.id.clone(),
        format!("document.createElement(\"{}\")", component.kind),
    )];
    for (property, value) in &component.properties {
        stmts.push(Stmt::assign(
            format!("{}.style.{}", component.id, property),
            format!("\"{value}\""),
        ));
    }

    let mut text = emit::render_stmts(&stmts, 0);
    text.push('\n');
    text
}
