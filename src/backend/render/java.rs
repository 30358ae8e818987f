//! Java lexical rules.

use std::path::Path;

use super::syntax::{LanguageSyntax, join_values, quote_c_string, write_value_lines};
use crate::backend::writer::CodeWriter;

/// Java: a public class of static members with a `main(String[])` entry point.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaSyntax;

impl LanguageSyntax for JavaSyntax {
    fn prologue(&self, w: &mut CodeWriter) {
        w.writeln("import java.io.File;");
        w.writeln("import mlgen.runtime.*;");
        w.newline();
    }

    fn class_open(&self, w: &mut CodeWriter, name: &str) {
        w.writeln(&format!("public class {name} {{"));
        w.indent();
    }

    fn class_close(&self, w: &mut CodeWriter, _name: &str) {
        w.dedent();
        w.writeln("}");
    }

    fn array(&self, w: &mut CodeWriter, name: &str, values: &[f64], per_line: usize) {
        if values.is_empty() {
            w.writeln(&format!("public static final double[] {name} = {{}};"));
            return;
        }
        w.writeln(&format!("public static final double[] {name} = {{"));
        w.indent();
        write_value_lines(self, w, values, per_line);
        w.dedent();
        w.writeln("};");
    }

    fn matrix(&self, w: &mut CodeWriter, name: &str, rows: &[Vec<f64>]) {
        if rows.is_empty() {
            w.writeln(&format!("public static final double[][] {name} = {{}};"));
            return;
        }
        w.writeln(&format!("public static final double[][] {name} = {{"));
        w.indent();
        for (i, row) in rows.iter().enumerate() {
            let sep = if i + 1 < rows.len() { "," } else { "" };
            w.writeln(&format!("{{{}}}{sep}", join_values(self, row)));
        }
        w.dedent();
        w.writeln("};");
    }

    fn function_open(&self, w: &mut CodeWriter, name: &str, return_type: Option<&str>) {
        let ret = return_type.unwrap_or("void");
        w.writeln(&format!("public static {ret} {name}() {{"));
        w.indent();
    }

    fn function_close(&self, w: &mut CodeWriter) {
        w.dedent();
        w.writeln("}");
    }

    fn main_open(&self, w: &mut CodeWriter) {
        w.writeln("public static void main(String[] args) {");
        w.indent();
    }

    fn load_model(&self, w: &mut CodeWriter, variable: &str, result_type: &str, file: &Path) {
        let path = quote_c_string(file);
        w.writeln(&format!("{result_type} {variable} = ModelIO.loadMethod(new File({path}));"));
    }

    fn decode_weights(&self, w: &mut CodeWriter, variable: &str, weights: &str) {
        w.writeln(&format!("ModelIO.decodeFromArray({variable}, {weights});"));
    }

    fn load_training_file(&self, w: &mut CodeWriter, variable: &str, result_type: &str, file: &Path) {
        let path = quote_c_string(file);
        w.writeln(&format!("{result_type} {variable} = ModelIO.loadTraining(new File({path}));"));
    }

    fn load_training_embedded(&self, w: &mut CodeWriter, variable: &str, result_type: &str, input: &str, ideal: &str) {
        w.writeln(&format!("{result_type} {variable} = ModelIO.dataSet({input}, {ideal});"));
    }

    fn return_value(&self, w: &mut CodeWriter, variable: &str) {
        w.writeln(&format!("return {variable};"));
    }

    fn call(&self, w: &mut CodeWriter, function: &str, result_type: &str, variable: &str) {
        w.writeln(&format!("{result_type} {variable} = {function}();"));
    }

    fn non_finite_literal(&self, value: f64) -> String {
        if value.is_nan() {
            "Double.NaN".to_string()
        } else if value > 0.0 {
            "Double.POSITIVE_INFINITY".to_string()
        } else {
            "Double.NEGATIVE_INFINITY".to_string()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_array_wraps_lines() {
        let mut w = CodeWriter::new(4);
        JavaSyntax.array(&mut w, "W", &[1.0, 2.0, 3.0], 2);
        assert_eq!(
            w.as_str(),
            "public static final double[] W = {\n    1.0, 2.0,\n    3.0\n};\n"
        );
    }

    #[test]
    fn test_empty_array() {
        let mut w = CodeWriter::new(4);
        JavaSyntax.array(&mut w, "W", &[], 2);
        assert_eq!(w.as_str(), "public static final double[] W = {};\n");
    }

    #[test]
    fn test_matrix_rows() {
        let mut w = CodeWriter::new(2);
        JavaSyntax.matrix(&mut w, "M", &[vec![0.0, 1.0], vec![1.0, 0.5]]);
        assert_eq!(
            w.as_str(),
            "public static final double[][] M = {\n  {0.0, 1.0},\n  {1.0, 0.5}\n};\n"
        );
    }

    #[test]
    fn test_non_finite_literals() {
        assert_eq!(JavaSyntax.double_literal(f64::NAN), "Double.NaN");
        assert_eq!(JavaSyntax.double_literal(f64::NEG_INFINITY), "Double.NEGATIVE_INFINITY");
        assert_eq!(JavaSyntax.double_literal(-0.25), "-0.25");
    }

    #[test]
    fn test_windows_paths_are_escaped() {
        let mut w = CodeWriter::new(4);
        JavaSyntax.load_model(&mut w, "network", "MLMethod", Path::new(r"C:\models\net.json"));
        assert_eq!(
            w.as_str(),
            "MLMethod network = ModelIO.loadMethod(new File(\"C:\\\\models\\\\net.json\"));\n"
        );
    }
}
