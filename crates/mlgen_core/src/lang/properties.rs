//! Analyst script property keys.
//!
//! Analyst scripts store settings as flat `SECTION:SUBSECTION_name` strings. These constants are the keys the
//! generator reads; template placeholders may reference any of them by the same spelling.

/// File identifier of the trained machine-learning method.
pub const ML_CONFIG_MACHINE_LEARNING_FILE: &str = "ML:CONFIG_machineLearningFile";

/// File identifier of the training dataset.
pub const ML_CONFIG_TRAINING_FILE: &str = "ML:CONFIG_trainingFile";

/// Machine-learning method type (e.g. `feedforward`).
pub const ML_CONFIG_TYPE: &str = "ML:CONFIG_type";

/// Architecture string of the machine-learning method.
pub const ML_CONFIG_ARCHITECTURE: &str = "ML:CONFIG_architecture";

/// Every key the generator knows about, in documentation order.
pub const KNOWN_PROPERTIES: &[&str] = &[
    ML_CONFIG_MACHINE_LEARNING_FILE,
    ML_CONFIG_TRAINING_FILE,
    ML_CONFIG_TYPE,
    ML_CONFIG_ARCHITECTURE,
];
