//! JavaScript lexical rules.
//!
//! A class becomes an immediately invoked module exposing `main`, followed by a call to it. The browser runtime
//! cannot read training files, so the entry point never calls a separate training function.

use std::path::Path;

use super::syntax::{LanguageSyntax, join_values, quote_c_string, write_value_lines};
use crate::backend::writer::CodeWriter;

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptSyntax;

impl LanguageSyntax for JavaScriptSyntax {
    fn supports_separate_training(&self) -> bool {
        false
    }

    fn class_open(&self, w: &mut CodeWriter, name: &str) {
        w.writeln(&format!("var {name} = (function () {{"));
        w.indent();
        w.writeln("'use strict';");
        w.newline();
    }

    fn class_close(&self, w: &mut CodeWriter, name: &str) {
        w.newline();
        w.writeln("return { main: main };");
        w.dedent();
        w.writeln("})();");
        w.newline();
        w.writeln(&format!("{name}.main();"));
    }

    fn array(&self, w: &mut CodeWriter, name: &str, values: &[f64], per_line: usize) {
        if values.is_empty() {
            w.writeln(&format!("var {name} = [];"));
            return;
        }
        w.writeln(&format!("var {name} = ["));
        w.indent();
        write_value_lines(self, w, values, per_line);
        w.dedent();
        w.writeln("];");
    }

    fn matrix(&self, w: &mut CodeWriter, name: &str, rows: &[Vec<f64>]) {
        if rows.is_empty() {
            w.writeln(&format!("var {name} = [];"));
            return;
        }
        w.writeln(&format!("var {name} = ["));
        w.indent();
        for (i, row) in rows.iter().enumerate() {
            let sep = if i + 1 < rows.len() { "," } else { "" };
            w.writeln(&format!("[{}]{sep}", join_values(self, row)));
        }
        w.dedent();
        w.writeln("];");
    }

    fn function_open(&self, w: &mut CodeWriter, name: &str, _return_type: Option<&str>) {
        w.writeln(&format!("function {name}() {{"));
        w.indent();
    }

    fn function_close(&self, w: &mut CodeWriter) {
        w.dedent();
        w.writeln("}");
    }

    fn main_open(&self, w: &mut CodeWriter) {
        self.function_open(w, "main", None);
    }

    fn load_model(&self, w: &mut CodeWriter, variable: &str, _result_type: &str, file: &Path) {
        w.writeln(&format!("var {variable} = mlgen.loadMethod({});", quote_c_string(file)));
    }

    fn decode_weights(&self, w: &mut CodeWriter, variable: &str, weights: &str) {
        w.writeln(&format!("mlgen.decodeFromArray({variable}, {weights});"));
    }

    fn load_training_file(&self, w: &mut CodeWriter, variable: &str, _result_type: &str, file: &Path) {
        w.writeln(&format!("var {variable} = mlgen.loadTraining({});", quote_c_string(file)));
    }

    fn load_training_embedded(&self, w: &mut CodeWriter, variable: &str, _result_type: &str, input: &str, ideal: &str) {
        w.writeln(&format!("var {variable} = mlgen.dataSet({input}, {ideal});"));
    }

    fn return_value(&self, w: &mut CodeWriter, variable: &str) {
        w.writeln(&format!("return {variable};"));
    }

    fn call(&self, w: &mut CodeWriter, function: &str, _result_type: &str, variable: &str) {
        w.writeln(&format!("var {variable} = {function}();"));
    }

    fn non_finite_literal(&self, value: f64) -> String {
        if value.is_nan() {
            "NaN".to_string()
        } else if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_module_wrapper() {
        let mut w = CodeWriter::new(2);
        JavaScriptSyntax.class_open(&mut w, "Demo");
        JavaScriptSyntax.main_open(&mut w);
        JavaScriptSyntax.function_close(&mut w);
        JavaScriptSyntax.class_close(&mut w, "Demo");
        assert_eq!(
            w.as_str(),
            "var Demo = (function () {\n  'use strict';\n\n  function main() {\n  }\n\n  return { main: main };\n})();\n\nDemo.main();\n"
        );
    }

    #[test]
    fn test_untyped_locals() {
        let mut w = CodeWriter::new(4);
        JavaScriptSyntax.call(&mut w, "createNetwork", "MLMethod", "network");
        assert_eq!(w.as_str(), "var network = createNetwork();\n");
    }

    #[test]
    fn test_nested_arrays() {
        let mut w = CodeWriter::new(4);
        JavaScriptSyntax.matrix(&mut w, "INPUT_DATA", &[vec![0.0, 1.0], vec![f64::INFINITY, 2.5]]);
        assert_eq!(
            w.as_str(),
            "var INPUT_DATA = [\n    [0.0, 1.0],\n    [Infinity, 2.5]\n];\n"
        );
    }

    #[test]
    fn test_no_separate_training() {
        assert!(!JavaScriptSyntax.supports_separate_training());
    }
}
