//! Structured statement nodes and their one-pass text rendering.
//!
//! The dispatcher builds `Stmt` trees instead of concatenating strings, so
//! indentation is applied in exactly one place. Expression text inside a
//! statement stays verbatim; it is whatever the editor (or a catalog
//! default) supplied.

use std::fmt::Write as _;

/// Indentation unit of the emitted script.
pub const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKw {
    Let,
    Const,
}

/// One emitted statement. Containers own their bodies; the writer recurses.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Decl {
        kw: DeclKw,
        name: String,
        init: String,
    },
    Assign {
        target: String,
        value: String,
    },
    /// Expression statement; the writer appends the terminator.
    Expr(String),
    /// Inert annotation line (`// text`).
    Comment(String),
    If {
        cond: String,
        then_body: Vec<Stmt>,
        else_body: Option<Vec<Stmt>>,
    },
    ForEach {
        array: String,
        item: String,
        body: Vec<Stmt>,
    },
    For {
        counter: String,
        start: String,
        end: String,
        step: String,
        body: Vec<Stmt>,
    },
    While {
        cond: String,
        body: Vec<Stmt>,
    },
    DoWhile {
        cond: String,
        body: Vec<Stmt>,
    },
    /// Pre-shaped template lines, written verbatim at the current indent.
    /// Lines may carry their own relative indentation.
    Raw(Vec<String>),
}

impl Stmt {
    pub fn decl(name: impl Into<String>, init: impl Into<String>) -> Self {
        Stmt::Decl {
            kw: DeclKw::Let,
            name: name.into(),
            init: init.into(),
        }
    }

    pub fn const_decl(name: impl Into<String>, init: impl Into<String>) -> Self {
        Stmt::Decl {
            kw: DeclKw::Const,
            name: name.into(),
            init: init.into(),
        }
    }

    pub fn assign(target: impl Into<String>, value: impl Into<String>) -> Self {
        Stmt::Assign {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn expr(text: impl Into<String>) -> Self {
        Stmt::Expr(text.into())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Stmt::Comment(text.into())
    }

    pub fn raw<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Stmt::Raw(lines.into_iter().map(Into::into).collect())
    }
}

/// Render a statement sequence at the given indent level.
pub fn render_stmts(stmts: &[Stmt], level: usize) -> String {
    let mut out = String::new();
    write_stmts(&mut out, stmts, level);
    out
}

fn write_stmts(out: &mut String, stmts: &[Stmt], level: usize) {
    for stmt in stmts {
        write_stmt(out, stmt, level);
    }
}

fn write_stmt(out: &mut String, stmt: &Stmt, level: usize) {
    match stmt {
        Stmt::Decl { kw, name, init } => {
            let kw = match kw {
                DeclKw::Let => "let",
                DeclKw::Const => "const",
            };
            write_line(out, level, &format!("{kw} {name} = {init};"));
        }
        Stmt::Assign { target, value } => {
            write_line(out, level, &format!("{target} = {value};"));
        }
        Stmt::Expr(text) => write_line(out, level, &format!("{text};")),
        Stmt::Comment(text) => write_line(out, level, &format!("// {text}")),
        Stmt::If {
            cond,
            then_body,
            else_body,
        } => {
            write_line(out, level, &format!("if ({cond}) {{"));
            write_stmts(out, then_body, level + 1);
            if let Some(else_body) = else_body {
                write_line(out, level, "} else {");
                write_stmts(out, else_body, level + 1);
            }
            write_line(out, level, "}");
        }
        Stmt::ForEach { array, item, body } => {
            write_line(out, level, &format!("{array}.forEach(function({item}) {{"));
            write_stmts(out, body, level + 1);
            write_line(out, level, "});");
        }
        Stmt::For {
            counter,
            start,
            end,
            step,
            body,
        } => {
            write_line(
                out,
                level,
                &format!("for (let {counter} = {start}; {counter} < {end}; {counter} += {step}) {{"),
            );
            write_stmts(out, body, level + 1);
            write_line(out, level, "}");
        }
        Stmt::While { cond, body } => {
            write_line(out, level, &format!("while ({cond}) {{"));
            write_stmts(out, body, level + 1);
            write_line(out, level, "}");
        }
        Stmt::DoWhile { cond, body } => {
            write_line(out, level, "do {");
            write_stmts(out, body, level + 1);
            write_line(out, level, &format!("}} while ({cond});"));
        }
        Stmt::Raw(lines) => {
            for line in lines {
                write_line(out, level, line);
            }
        }
    }
}

/// Write one statement's text, indenting every physical line it spans.
fn write_line(out: &mut String, level: usize, text: &str) {
    for line in text.split('\n') {
        for _ in 0..level {
            out.push_str(INDENT);
        }
        let _ = writeln!(out, "{line}");
    }
}
