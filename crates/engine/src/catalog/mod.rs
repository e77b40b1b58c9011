//! # Operation Catalog
//!
//! Static registry of every block operation the visual editor can place.
//!
//! The registry serves two consumers: the external editor reads it (as JSON)
//! to populate its palette and pre-validate connections, and the code
//! emitter consults it for parameter defaults and conventional result /
//! receiver names. The registry is immutable and shared process-wide; the
//! lookup index is built once behind a `OnceLock` and every query sees the
//! same data.
//!
//! Each entry also carries a [`BlockKind`]: a closed tagged variant the
//! emitter matches exhaustively, so an operation added here without a render
//! rule is a compile error rather than a silent fallthrough.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Closed set of operations, grouped by category. The emitter dispatches on
/// this, category first, then operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Variables(VariablesOp),
    Spreadsheet(SpreadsheetOp),
    Ui(UiOp),
    Utilities(UtilitiesOp),
    Display(DisplayOp),
    Flow(FlowOp),
    Logic(LogicOp),
    Math(MathOp),
    Operator(OperatorOp),
}

impl BlockKind {
    /// Tag prefix for this kind's category, e.g. `"flow"` in `"flow.if"`.
    pub const fn category_key(self) -> &'static str {
        match self {
            BlockKind::Variables(_) => "variables",
            BlockKind::Spreadsheet(_) => "spreadsheet",
            BlockKind::Ui(_) => "ui",
            BlockKind::Utilities(_) => "utilities",
            BlockKind::Display(_) => "display",
            BlockKind::Flow(_) => "flow",
            BlockKind::Logic(_) => "logic",
            BlockKind::Math(_) => "math",
            BlockKind::Operator(_) => "operator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariablesOp {
    DeclareVariable,
    GetVariable,
    SetVariable,
    CreateArray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetOp {
    GetActiveSpreadsheet,
    GetActiveSheet,
    GetRange,
    GetValue,
    SetValue,
    GetValues,
    SetValues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiOp {
    Alert,
    Prompt,
    Confirm,
    CreateHtmlOutput,
    ShowModalDialog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilitiesOp {
    Sleep,
    FormatDate,
    ParseCsv,
    Base64Encode,
    Base64Decode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOp {
    LogOutput,
    ShowResult,
    SimpleOutput,
    AppendToOutput,
    ClearOutput,
    CreateChart,
    DisplayTable,
    CreateDashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOp {
    If,
    ForEach,
    For,
    While,
    DoWhile,
    Function,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
    Not,
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOp {
    Calculate,
    Add,
    Subtract,
    Multiply,
    Divide,
    Mod,
    Power,
    Sqrt,
    Random,
    Round,
    Floor,
    Ceil,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorOp {
    Plus,
    Minus,
    Times,
    DividedBy,
    Modulo,
    Increment,
    Decrement,
    Assign,
}

/// Connector-compatibility shape, consumed only by the editor when deciding
/// which blocks may snap together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConnectorShape {
    #[serde(rename = "puzzle-out")]
    PuzzleOut,
    #[serde(rename = "puzzle-in")]
    PuzzleIn,
    #[serde(rename = "none")]
    None,
}

/// One declared parameter and its documented default literal. Generation is
/// never blocked by a missing parameter; the default is substituted verbatim.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: &'static str,
}

const fn p(name: &'static str, default: &'static str) -> ParamSpec {
    ParamSpec { name, default }
}

/// Immutable descriptor of one operation.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSpec {
    #[serde(skip)]
    pub kind: BlockKind,
    pub name: &'static str,
    pub params: &'static [ParamSpec],
    pub description: &'static str,
    /// Whether the operation produces a value bindable to an output variable.
    pub returns_value: bool,
    /// Whether the block owns one or more nested child-block sequences.
    pub is_container: bool,
    /// Whether the container carries an alternate (else) body.
    pub has_else: bool,
    /// Whether the block additionally denotes a function definition.
    pub is_function_def: bool,
    /// Fixed textual operator for symbolic-operator shorthand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
    /// Conventional output-variable name used when the block names none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_name: Option<&'static str>,
    /// Conventional receiver used when the block names no source reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<&'static str>,
    pub output_shape: ConnectorShape,
    pub input_shape: ConnectorShape,
}

impl OperationSpec {
    const fn new(
        kind: BlockKind,
        name: &'static str,
        params: &'static [ParamSpec],
        description: &'static str,
    ) -> Self {
        Self {
            kind,
            name,
            params,
            description,
            returns_value: false,
            is_container: false,
            has_else: false,
            is_function_def: false,
            symbol: None,
            result_name: None,
            receiver: None,
            output_shape: ConnectorShape::PuzzleOut,
            input_shape: ConnectorShape::PuzzleIn,
        }
    }

    const fn value(mut self) -> Self {
        self.returns_value = true;
        self
    }

    const fn result(mut self, name: &'static str) -> Self {
        self.returns_value = true;
        self.result_name = Some(name);
        self
    }

    const fn acts_on(mut self, receiver: &'static str) -> Self {
        self.receiver = Some(receiver);
        self
    }

    const fn container(mut self) -> Self {
        self.is_container = true;
        self
    }

    const fn branching(mut self) -> Self {
        self.has_else = true;
        self
    }

    const fn function_def(mut self) -> Self {
        self.is_function_def = true;
        self
    }

    const fn symbol(mut self, symbol: &'static str) -> Self {
        self.symbol = Some(symbol);
        self
    }

    const fn free_standing(mut self) -> Self {
        self.input_shape = ConnectorShape::None;
        self
    }

    const fn no_connectors(mut self) -> Self {
        self.input_shape = ConnectorShape::None;
        self.output_shape = ConnectorShape::None;
        self
    }

    /// Documented default literal for a declared parameter.
    pub fn default_of(&self, name: &str) -> &'static str {
        self.params
            .iter()
            .find(|param| param.name == name)
            .map(|param| param.default)
            .unwrap_or("")
    }

    /// Full `"category.operation"` tag of this entry.
    pub fn tag(&self) -> String {
        format!("{}.{}", self.kind.category_key(), self.name)
    }
}

/// One palette category and its operations, in palette order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategorySpec {
    pub key: &'static str,
    pub category: &'static str,
    pub functions: &'static [OperationSpec],
}

use BlockKind as K;

static VARIABLES_OPS: &[OperationSpec] = &[
    OperationSpec::new(
        K::Variables(VariablesOp::DeclareVariable),
        "declareVariable",
        &[p("name", "myVar"), p("value", "\"\"")],
        "Declare a variable with a value",
    )
    .value()
    .free_standing(),
    OperationSpec::new(
        K::Variables(VariablesOp::GetVariable),
        "getVariable",
        &[p("name", "myVar")],
        "Get a variable's value",
    )
    .value()
    .free_standing(),
    OperationSpec::new(
        K::Variables(VariablesOp::SetVariable),
        "setVariable",
        &[p("name", "myVar"), p("value", "\"\"")],
        "Set a variable's value",
    ),
    OperationSpec::new(
        K::Variables(VariablesOp::CreateArray),
        "createArray",
        &[p("elements", "[]")],
        "Create an array with elements",
    )
    .result("myArray")
    .free_standing(),
];

static SPREADSHEET_OPS: &[OperationSpec] = &[
    OperationSpec::new(
        K::Spreadsheet(SpreadsheetOp::GetActiveSpreadsheet),
        "getActiveSpreadsheet",
        &[],
        "Gets the active spreadsheet",
    )
    .result("ss")
    .free_standing(),
    OperationSpec::new(
        K::Spreadsheet(SpreadsheetOp::GetActiveSheet),
        "getActiveSheet",
        &[],
        "Gets the active sheet in the active spreadsheet",
    )
    .result("sheet")
    .acts_on("SpreadsheetApp"),
    OperationSpec::new(
        K::Spreadsheet(SpreadsheetOp::GetRange),
        "getRange",
        &[
            p("row", "1"),
            p("column", "1"),
            p("numRows", "1"),
            p("numColumns", "1"),
        ],
        "Gets a range at the specified coordinates",
    )
    .result("range")
    .acts_on("sheet"),
    OperationSpec::new(
        K::Spreadsheet(SpreadsheetOp::GetValue),
        "getValue",
        &[],
        "Gets the value of a range or cell",
    )
    .result("value")
    .acts_on("range"),
    OperationSpec::new(
        K::Spreadsheet(SpreadsheetOp::SetValue),
        "setValue",
        &[p("value", "\"\"")],
        "Sets the value of a range or cell",
    )
    .acts_on("range"),
    OperationSpec::new(
        K::Spreadsheet(SpreadsheetOp::GetValues),
        "getValues",
        &[],
        "Gets the values of a range as a 2D array",
    )
    .result("values")
    .acts_on("range"),
    OperationSpec::new(
        K::Spreadsheet(SpreadsheetOp::SetValues),
        "setValues",
        &[p("values", "[[]]")],
        "Sets the values of a range from a 2D array",
    )
    .acts_on("range"),
];

static UI_OPS: &[OperationSpec] = &[
    OperationSpec::new(
        K::Ui(UiOp::Alert),
        "alert",
        &[p("message", "\"\"")],
        "Shows an alert dialog",
    ),
    OperationSpec::new(
        K::Ui(UiOp::Prompt),
        "prompt",
        &[p("message", "\"\""), p("title", "\"\"")],
        "Shows a prompt dialog",
    )
    .result("result"),
    OperationSpec::new(
        K::Ui(UiOp::Confirm),
        "confirm",
        &[p("message", "\"\"")],
        "Shows a confirmation dialog",
    )
    .result("result"),
    OperationSpec::new(
        K::Ui(UiOp::CreateHtmlOutput),
        "createHtmlOutput",
        &[p("html", "\"\"")],
        "Creates HTML output",
    )
    .result("htmlOutput"),
    OperationSpec::new(
        K::Ui(UiOp::ShowModalDialog),
        "showModalDialog",
        &[p("html", "htmlOutput"), p("title", "\"\"")],
        "Shows modal dialog with HTML content",
    ),
];

static UTILITIES_OPS: &[OperationSpec] = &[
    OperationSpec::new(
        K::Utilities(UtilitiesOp::Sleep),
        "sleep",
        &[p("milliseconds", "1000")],
        "Suspends execution for the specified duration",
    ),
    OperationSpec::new(
        K::Utilities(UtilitiesOp::FormatDate),
        "formatDate",
        &[
            p("date", "new Date()"),
            p("timeZone", "Session.getScriptTimeZone()"),
            p("format", "\"yyyy-MM-dd\""),
        ],
        "Formats a date according to the pattern",
    )
    .result("formattedDate"),
    OperationSpec::new(
        K::Utilities(UtilitiesOp::ParseCsv),
        "parseCsv",
        &[p("csv", "\"\"")],
        "Parses CSV data into a 2D array",
    )
    .result("parsedCsv"),
    OperationSpec::new(
        K::Utilities(UtilitiesOp::Base64Encode),
        "base64Encode",
        &[p("data", "\"\"")],
        "Encodes data as Base64",
    )
    .result("encodedData"),
    OperationSpec::new(
        K::Utilities(UtilitiesOp::Base64Decode),
        "base64Decode",
        &[p("encoded", "\"\"")],
        "Decodes Base64 data",
    )
    .result("decodedData"),
];

static DISPLAY_OPS: &[OperationSpec] = &[
    OperationSpec::new(
        K::Display(DisplayOp::LogOutput),
        "logOutput",
        &[p("message", "\"\"")],
        "Logs a message to the console",
    ),
    OperationSpec::new(
        K::Display(DisplayOp::ShowResult),
        "showResult",
        &[p("title", "\"Result\""), p("message", "\"\"")],
        "Shows a result dialog with a title and message",
    ),
    OperationSpec::new(
        K::Display(DisplayOp::SimpleOutput),
        "simpleOutput",
        &[p("value", "\"\"")],
        "Simple output display of a value",
    ),
    OperationSpec::new(
        K::Display(DisplayOp::AppendToOutput),
        "appendToOutput",
        &[p("value", "\"\"")],
        "Append value to output log",
    ),
    OperationSpec::new(
        K::Display(DisplayOp::ClearOutput),
        "clearOutput",
        &[],
        "Clear the output display",
    ),
    OperationSpec::new(
        K::Display(DisplayOp::CreateChart),
        "createChart",
        &[p("title", "\"\""), p("data", "[]"), p("type", "\"LINE\"")],
        "Creates a chart with the given data",
    )
    .result("chart"),
    OperationSpec::new(
        K::Display(DisplayOp::DisplayTable),
        "displayTable",
        &[p("data", "[]"), p("headers", "[]")],
        "Displays data as a table",
    )
    .result("table"),
    OperationSpec::new(
        K::Display(DisplayOp::CreateDashboard),
        "createDashboard",
        &[p("title", "\"Dashboard\""), p("components", "[]")],
        "Creates a dashboard with components",
    )
    .result("dashboard"),
];

static FLOW_OPS: &[OperationSpec] = &[
    OperationSpec::new(
        K::Flow(FlowOp::If),
        "if",
        &[p("condition", "true")],
        "Conditional execution",
    )
    .container()
    .branching(),
    OperationSpec::new(
        K::Flow(FlowOp::ForEach),
        "forEach",
        &[p("array", "[]"), p("itemName", "item")],
        "Loop through elements in an array",
    )
    .container(),
    OperationSpec::new(
        K::Flow(FlowOp::For),
        "for",
        &[
            p("start", "0"),
            p("end", "10"),
            p("step", "1"),
            p("counterName", "i"),
        ],
        "Loop from start to end",
    )
    .container(),
    OperationSpec::new(
        K::Flow(FlowOp::While),
        "while",
        &[p("condition", "true")],
        "Loop while a condition is true",
    )
    .container(),
    OperationSpec::new(
        K::Flow(FlowOp::DoWhile),
        "doWhile",
        &[p("condition", "true")],
        "Loop at least once, then while condition is true",
    )
    .container(),
    OperationSpec::new(
        K::Flow(FlowOp::Function),
        "function",
        &[p("name", "myFunction"), p("params", "")],
        "Define a function",
    )
    .container()
    .function_def()
    .no_connectors(),
];

static LOGIC_OPS: &[OperationSpec] = &[
    OperationSpec::new(
        K::Logic(LogicOp::And),
        "and",
        &[p("left", "true"), p("right", "true")],
        "Logical AND of two conditions",
    )
    .value()
    .free_standing(),
    OperationSpec::new(
        K::Logic(LogicOp::Or),
        "or",
        &[p("left", "true"), p("right", "true")],
        "Logical OR of two conditions",
    )
    .value()
    .free_standing(),
    OperationSpec::new(
        K::Logic(LogicOp::Not),
        "not",
        &[p("condition", "true")],
        "Logical NOT of a condition",
    )
    .value()
    .free_standing(),
    OperationSpec::new(
        K::Logic(LogicOp::Equals),
        "equals",
        &[p("left", "0"), p("right", "0")],
        "Equality comparison",
    )
    .value()
    .free_standing(),
    OperationSpec::new(
        K::Logic(LogicOp::NotEquals),
        "notEquals",
        &[p("left", "0"), p("right", "0")],
        "Inequality comparison",
    )
    .value()
    .free_standing(),
    OperationSpec::new(
        K::Logic(LogicOp::GreaterThan),
        "greaterThan",
        &[p("left", "0"), p("right", "0")],
        "Greater than comparison",
    )
    .value()
    .free_standing(),
    OperationSpec::new(
        K::Logic(LogicOp::LessThan),
        "lessThan",
        &[p("left", "0"), p("right", "0")],
        "Less than comparison",
    )
    .value()
    .free_standing(),
];

static MATH_OPS: &[OperationSpec] = &[
    OperationSpec::new(
        K::Math(MathOp::Calculate),
        "calculate",
        &[p("expression", "0")],
        "Calculate a mathematical expression",
    )
    .result("result")
    .free_standing(),
    OperationSpec::new(
        K::Math(MathOp::Add),
        "add",
        &[p("left", "0"), p("right", "0")],
        "Addition",
    )
    .result("sum")
    .free_standing(),
    OperationSpec::new(
        K::Math(MathOp::Subtract),
        "subtract",
        &[p("left", "0"), p("right", "0")],
        "Subtraction",
    )
    .result("difference")
    .free_standing(),
    OperationSpec::new(
        K::Math(MathOp::Multiply),
        "multiply",
        &[p("left", "0"), p("right", "0")],
        "Multiplication",
    )
    .result("product")
    .free_standing(),
    OperationSpec::new(
        K::Math(MathOp::Divide),
        "divide",
        &[p("left", "0"), p("right", "1")],
        "Division",
    )
    .result("quotient")
    .free_standing(),
    OperationSpec::new(
        K::Math(MathOp::Mod),
        "mod",
        &[p("left", "0"), p("right", "1")],
        "Modulus (remainder)",
    )
    .result("remainder")
    .free_standing(),
    OperationSpec::new(
        K::Math(MathOp::Power),
        "power",
        &[p("base", "0"), p("exponent", "1")],
        "Raise a number to a power",
    )
    .result("power")
    .free_standing(),
    OperationSpec::new(
        K::Math(MathOp::Sqrt),
        "sqrt",
        &[p("number", "0")],
        "Square root of a number",
    )
    .result("squareRoot")
    .free_standing(),
    OperationSpec::new(
        K::Math(MathOp::Random),
        "random",
        &[p("min", "0"), p("max", "1")],
        "Random number between min and max",
    )
    .result("randomNumber")
    .free_standing(),
    OperationSpec::new(
        K::Math(MathOp::Round),
        "round",
        &[p("number", "0")],
        "Round to nearest integer",
    )
    .result("rounded")
    .free_standing(),
    OperationSpec::new(
        K::Math(MathOp::Floor),
        "floor",
        &[p("number", "0")],
        "Round down to nearest integer",
    )
    .result("floored")
    .free_standing(),
    OperationSpec::new(
        K::Math(MathOp::Ceil),
        "ceil",
        &[p("number", "0")],
        "Round up to nearest integer",
    )
    .result("ceiling")
    .free_standing(),
];

static OPERATOR_OPS: &[OperationSpec] = &[
    OperationSpec::new(
        K::Operator(OperatorOp::Plus),
        "plus",
        &[p("left", "0"), p("right", "0")],
        "Addition (+)",
    )
    .result("result")
    .symbol("+")
    .free_standing(),
    OperationSpec::new(
        K::Operator(OperatorOp::Minus),
        "minus",
        &[p("left", "0"), p("right", "0")],
        "Subtraction (-)",
    )
    .result("result")
    .symbol("-")
    .free_standing(),
    OperationSpec::new(
        K::Operator(OperatorOp::Times),
        "times",
        &[p("left", "0"), p("right", "0")],
        "Multiplication (*)",
    )
    .result("result")
    .symbol("*")
    .free_standing(),
    OperationSpec::new(
        K::Operator(OperatorOp::DividedBy),
        "dividedBy",
        &[p("left", "0"), p("right", "1")],
        "Division (/)",
    )
    .result("result")
    .symbol("/")
    .free_standing(),
    OperationSpec::new(
        K::Operator(OperatorOp::Modulo),
        "modulo",
        &[p("left", "0"), p("right", "1")],
        "Modulus (%)",
    )
    .result("result")
    .symbol("%")
    .free_standing(),
    OperationSpec::new(
        K::Operator(OperatorOp::Increment),
        "increment",
        &[p("variable", "x")],
        "Increment (++)",
    ),
    OperationSpec::new(
        K::Operator(OperatorOp::Decrement),
        "decrement",
        &[p("variable", "x")],
        "Decrement (--)",
    ),
    OperationSpec::new(
        K::Operator(OperatorOp::Assign),
        "assign",
        &[p("variable", "x"), p("value", "0")],
        "Assignment (=)",
    ),
];

static CATEGORY_SPECS: &[CategorySpec] = &[
    CategorySpec {
        key: "variables",
        category: "Variables",
        functions: VARIABLES_OPS,
    },
    CategorySpec {
        key: "spreadsheet",
        category: "Spreadsheet",
        functions: SPREADSHEET_OPS,
    },
    CategorySpec {
        key: "ui",
        category: "User Interface",
        functions: UI_OPS,
    },
    CategorySpec {
        key: "utilities",
        category: "Utilities",
        functions: UTILITIES_OPS,
    },
    CategorySpec {
        key: "display",
        category: "Display",
        functions: DISPLAY_OPS,
    },
    CategorySpec {
        key: "flow",
        category: "Control Flow",
        functions: FLOW_OPS,
    },
    CategorySpec {
        key: "logic",
        category: "Logic",
        functions: LOGIC_OPS,
    },
    CategorySpec {
        key: "math",
        category: "Math",
        functions: MATH_OPS,
    },
    CategorySpec {
        key: "operator",
        category: "Operators",
        functions: OPERATOR_OPS,
    },
];

/// The full registry plus a tag lookup index.
pub struct Catalog {
    categories: &'static [CategorySpec],
    by_tag: HashMap<String, &'static OperationSpec>,
}

impl Catalog {
    fn build() -> Self {
        let mut by_tag = HashMap::new();
        for category in CATEGORY_SPECS {
            for op in category.functions {
                by_tag.insert(format!("{}.{}", category.key, op.name), op);
            }
        }
        Self {
            categories: CATEGORY_SPECS,
            by_tag,
        }
    }

    /// All categories in palette order.
    pub fn categories(&self) -> &'static [CategorySpec] {
        self.categories
    }

    /// Resolve a `"category.operation"` tag; `None` for anything unknown.
    pub fn resolve(&self, tag: &str) -> Option<&'static OperationSpec> {
        self.by_tag.get(tag).copied()
    }
}

/// The process-wide operation registry (lazily indexed, identical every call).
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::build)
}

/// A draggable UI component template for the editor's canvas.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComponentTemplate {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'static str,
    /// Default style properties, applied in this order when instantiated.
    pub properties: &'static [(&'static str, &'static str)],
}

static COMPONENT_TEMPLATES: &[ComponentTemplate] = &[
    ComponentTemplate {
        kind: "div",
        name: "Container",
        properties: &[
            ("width", "100px"),
            ("height", "100px"),
            ("backgroundColor", "#f0f0f0"),
            ("color", "#000000"),
            ("padding", "10px"),
        ],
    },
    ComponentTemplate {
        kind: "button",
        name: "Button",
        properties: &[
            ("text", "Click Me"),
            ("backgroundColor", "#4CAF50"),
            ("color", "white"),
            ("padding", "10px"),
            ("borderRadius", "4px"),
        ],
    },
    ComponentTemplate {
        kind: "input",
        name: "Text Input",
        properties: &[
            ("placeholder", "Enter text..."),
            ("width", "150px"),
            ("padding", "8px"),
        ],
    },
    ComponentTemplate {
        kind: "select",
        name: "Dropdown",
        properties: &[
            ("options", "Option 1,Option 2,Option 3"),
            ("width", "150px"),
            ("padding", "8px"),
        ],
    },
    ComponentTemplate {
        kind: "table",
        name: "Table",
        properties: &[
            ("rows", "3"),
            ("columns", "3"),
            ("width", "200px"),
            ("borderCollapse", "collapse"),
        ],
    },
    ComponentTemplate {
        kind: "label",
        name: "Label",
        properties: &[("text", "Text Label"), ("fontWeight", "bold")],
    },
];

/// Fixed list of component templates for the editor's canvas palette.
pub fn component_templates() -> &'static [ComponentTemplate] {
    COMPONENT_TEMPLATES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_resolves_by_its_own_tag() {
        for category in catalog().categories() {
            for op in category.functions {
                let tag = op.tag();
                let resolved = catalog().resolve(&tag);
                assert!(resolved.is_some(), "tag {tag} did not resolve");
                assert_eq!(resolved.unwrap().name, op.name);
                assert_eq!(op.kind.category_key(), category.key);
            }
        }
    }

    #[test]
    fn unknown_tags_do_not_resolve() {
        assert!(catalog().resolve("foo.bar").is_none());
        assert!(catalog().resolve("math.foo").is_none());
        assert!(catalog().resolve("mathadd").is_none());
        assert!(catalog().resolve("").is_none());
    }

    #[test]
    fn defaults_and_shape_flags() {
        let spec = catalog().resolve("flow.if").unwrap();
        assert!(spec.is_container);
        assert!(spec.has_else);
        assert_eq!(spec.default_of("condition"), "true");

        let spec = catalog().resolve("flow.function").unwrap();
        assert!(spec.is_function_def);

        let spec = catalog().resolve("spreadsheet.getRange").unwrap();
        assert_eq!(spec.receiver, Some("sheet"));
        assert_eq!(spec.result_name, Some("range"));
        assert_eq!(spec.default_of("numRows"), "1");

        let spec = catalog().resolve("operator.modulo").unwrap();
        assert_eq!(spec.symbol, Some("%"));
        assert_eq!(spec.default_of("right"), "1");
    }

    #[test]
    fn six_component_templates() {
        let templates = component_templates();
        assert_eq!(templates.len(), 6);
        assert_eq!(templates[0].kind, "div");
        assert_eq!(templates[0].name, "Container");
        assert!(templates
            .iter()
            .any(|t| t.kind == "button" && t.properties.iter().any(|(k, _)| *k == "borderRadius")));
    }

    #[test]
    fn palette_serializes_for_the_editor() {
        let json = serde_json::to_string(catalog().categories()).unwrap();
        assert!(json.contains("\"category\":\"Control Flow\""));
        assert!(json.contains("\"puzzle-out\""));
        assert!(json.contains("\"default\":\"myVar\""));
    }
}
