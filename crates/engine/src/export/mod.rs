//! # Export Packager
//!
//! Wraps finished script text into a human-readable download page. The
//! packager never re-validates or rewrites the source it is handed; it only
//! escapes it for embedding. Failure while building the wrapper is reported
//! as a structured result, mirroring how the editor consumes it.

use anyhow::Result;
use serde::Serialize;

const DEFAULT_PROJECT_NAME: &str = "Generated Apps Script";

/// Outcome of packaging a script for download.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    /// The source text, unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Standalone HTML document with the escaped source, usage
    /// instructions, and the download trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_code: Option<String>,
}

/// Package generated source under a project name. An empty name falls back
/// to a generic title.
pub fn package(code: &str, project_name: &str) -> ExportResult {
    match build_wrapper(code, project_name) {
        Ok(html_code) => ExportResult {
            success: true,
            message: "Code generated successfully. Click the links to download the file."
                .to_string(),
            code: Some(code.to_string()),
            html_code: Some(html_code),
        },
        Err(err) => ExportResult {
            success: false,
            message: format!("Error creating project: {err}"),
            code: None,
            html_code: None,
        },
    }
}

fn build_wrapper(code: &str, project_name: &str) -> Result<String> {
    let title = if project_name.is_empty() {
        DEFAULT_PROJECT_NAME
    } else {
        project_name
    };

    Ok(WRAPPER_TEMPLATE
        .replace("{{title}}", &escape_html(title))
        .replace("{{code}}", &escape_html(code)))
}

/// Escape markup metacharacters for embedding inside the wrapper document.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const WRAPPER_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>{{title}}</title>
  <script>
    function downloadCode() {
      const blob = new Blob([document.getElementById('codeContent').textContent], {type: 'text/javascript'});
      const url = URL.createObjectURL(blob);
      const a = document.createElement('a');
      a.href = url;
      a.download = 'Code.gs';
      document.body.appendChild(a);
      a.click();
      document.body.removeChild(a);
      URL.revokeObjectURL(url);
    }
  </script>
  <style>
    body { font-family: Arial, sans-serif; margin: 20px; }
    pre { background-color: #f5f5f5; padding: 15px; border-radius: 5px; overflow: auto; }
    .button { background-color: #4CAF50; color: white; padding: 10px 20px; border: none;
             border-radius: 4px; cursor: pointer; margin: 10px 0; }
    .instructions { background-color: #e9f7ef; padding: 15px; border-radius: 5px; margin-bottom: 20px; }
  </style>
</head>
<body>
  <h1>{{title}}</h1>

  <div class="instructions">
    <h2>How to use this code:</h2>
    <ol>
      <li>Click the "Download Code.gs" button below</li>
      <li>In Google Sheets, go to Extensions &gt; Apps Script</li>
      <li>Replace the content in the Code.gs file with this code</li>
      <li>Save the project</li>
      <li>Run the function you want to execute</li>
    </ol>
  </div>

  <button class="button" onclick="downloadCode()">Download Code.gs</button>

  <h2>Code Preview:</h2>
  <pre id="codeContent">{{code}}</pre>

  <button class="button" onclick="downloadCode()">Download Code.gs</button>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_source_text_unmodified() {
        let code = "function main() {\n  console.log(\"hi\");\n}\n";
        let result = package(code, "My Project");

        assert!(result.success);
        assert_eq!(result.code.as_deref(), Some(code));

        let html = result.html_code.unwrap();
        assert!(html.contains("<h1>My Project</h1>"));
        assert!(html.contains("a.download = 'Code.gs';"));
    }

    #[test]
    fn escapes_markup_metacharacters_in_the_preview() {
        let result = package("if (a < b && b > c) {}", "");
        let html = result.html_code.unwrap();

        assert!(html.contains("if (a &lt; b &amp;&amp; b &gt; c) {}"));
        // The returned source itself stays untouched.
        assert_eq!(result.code.as_deref(), Some("if (a < b && b > c) {}"));
    }

    #[test]
    fn empty_project_name_uses_the_generic_title() {
        let result = package("// code", "");
        let html = result.html_code.unwrap();
        assert!(html.contains("<title>Generated Apps Script</title>"));
    }

    #[test]
    fn serializes_with_editor_facing_field_names() {
        let json = serde_json::to_string(&package("// code", "P")).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"htmlCode\""));
    }
}
