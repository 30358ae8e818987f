//! C# lexical rules.

use std::path::Path;

use super::syntax::{LanguageSyntax, join_values, write_value_lines};
use crate::backend::writer::CodeWriter;

/// C#: Allman braces, PascalCase methods, verbatim path strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpSyntax;

/// `createNetwork` -> `CreateNetwork`
fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `@"..."` with doubled quotes.
fn verbatim_string(path: &Path) -> String {
    format!("@\"{}\"", path.display().to_string().replace('"', "\"\""))
}

impl CSharpSyntax {
    fn open_block(&self, w: &mut CodeWriter, header: &str) {
        w.writeln(header);
        w.writeln("{");
        w.indent();
    }
}

impl LanguageSyntax for CSharpSyntax {
    fn prologue(&self, w: &mut CodeWriter) {
        w.writeln("using System;");
        w.writeln("using Mlgen.Runtime;");
        w.newline();
    }

    fn class_open(&self, w: &mut CodeWriter, name: &str) {
        self.open_block(w, &format!("public class {name}"));
    }

    fn class_close(&self, w: &mut CodeWriter, _name: &str) {
        self.function_close(w);
    }

    fn array(&self, w: &mut CodeWriter, name: &str, values: &[f64], per_line: usize) {
        if values.is_empty() {
            w.writeln(&format!("public static readonly double[] {name} = {{ }};"));
            return;
        }
        w.writeln(&format!("public static readonly double[] {name} = {{"));
        w.indent();
        write_value_lines(self, w, values, per_line);
        w.dedent();
        w.writeln("};");
    }

    fn matrix(&self, w: &mut CodeWriter, name: &str, rows: &[Vec<f64>]) {
        if rows.is_empty() {
            w.writeln(&format!("public static readonly double[][] {name} = {{ }};"));
            return;
        }
        w.writeln(&format!("public static readonly double[][] {name} = {{"));
        w.indent();
        for (i, row) in rows.iter().enumerate() {
            let sep = if i + 1 < rows.len() { "," } else { "" };
            w.writeln(&format!("new double[] {{ {} }}{sep}", join_values(self, row)));
        }
        w.dedent();
        w.writeln("};");
    }

    fn function_open(&self, w: &mut CodeWriter, name: &str, return_type: Option<&str>) {
        let ret = return_type.unwrap_or("void");
        self.open_block(w, &format!("public static {ret} {}()", pascal_case(name)));
    }

    fn function_close(&self, w: &mut CodeWriter) {
        w.dedent();
        w.writeln("}");
    }

    fn main_open(&self, w: &mut CodeWriter) {
        self.open_block(w, "public static void Main(string[] args)");
    }

    fn load_model(&self, w: &mut CodeWriter, variable: &str, result_type: &str, file: &Path) {
        let path = verbatim_string(file);
        w.writeln(&format!("{result_type} {variable} = ModelIO.LoadMethod({path});"));
    }

    fn decode_weights(&self, w: &mut CodeWriter, variable: &str, weights: &str) {
        w.writeln(&format!("ModelIO.DecodeFromArray({variable}, {weights});"));
    }

    fn load_training_file(&self, w: &mut CodeWriter, variable: &str, result_type: &str, file: &Path) {
        let path = verbatim_string(file);
        w.writeln(&format!("{result_type} {variable} = ModelIO.LoadTraining({path});"));
    }

    fn load_training_embedded(&self, w: &mut CodeWriter, variable: &str, result_type: &str, input: &str, ideal: &str) {
        w.writeln(&format!("{result_type} {variable} = ModelIO.DataSet({input}, {ideal});"));
    }

    fn return_value(&self, w: &mut CodeWriter, variable: &str) {
        w.writeln(&format!("return {variable};"));
    }

    fn call(&self, w: &mut CodeWriter, function: &str, result_type: &str, variable: &str) {
        w.writeln(&format!("{result_type} {variable} = {}();", pascal_case(function)));
    }

    fn non_finite_literal(&self, value: f64) -> String {
        if value.is_nan() {
            "double.NaN".to_string()
        } else if value > 0.0 {
            "double.PositiveInfinity".to_string()
        } else {
            "double.NegativeInfinity".to_string()
        }
    }
}
