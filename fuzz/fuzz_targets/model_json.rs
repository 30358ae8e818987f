#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use mlgen::backend::ir::Program;
use mlgen::backend::embed::embed_weights;
use mlgen::dataset::TrainingSet;
use mlgen::model::PersistedModel;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let path = Path::new("fuzz.json");
        // Fuzz the model reader
        if let Ok(model) = PersistedModel::from_json(s, path) {
            // If parsing succeeds, embedding must not panic
            let method = model.into_method();
            let mut program = Program::new();
            let class = program.create_class("Fuzz");
            let _ = embed_weights(&mut program, class, method.as_ref());
        }
        let _ = TrainingSet::from_json(s, path);
    }
});
