//! Turn a [`Program`] or an analyst configuration into target source text.
//!
//! Exactly one [`Renderer`] serves a session. It is picked from the target tag once, by [`Renderer::for_target`],
//! and never re-inspected by type afterwards; callers ask it for capabilities instead.
//!
//! ## Variants
//!
//! - [`ProgramRenderer`] walks the IR. Every implementation shares [`SyntaxRenderer`]'s traversal and only supplies
//!   lexical rules through [`LanguageSyntax`] (`java`, `csharp`, `javascript`).
//! - [`TemplateRenderer`] ignores the IR and fills a canned template from analyst properties (`template`).

mod csharp;
mod java;
mod javascript;
mod syntax;
mod template;

pub use csharp::CSharpSyntax;
pub use java::JavaSyntax;
pub use javascript::JavaScriptSyntax;
pub use syntax::{IDEAL_DATA_ARRAY, INPUT_DATA_ARRAY, LanguageSyntax, SyntaxRenderer};
pub use template::{CannedTemplate, fill_template};

use std::fs;
use std::path::Path;

use mlgen_core::lang::targets::{RendererVariant, TargetLanguage};

use super::config::RenderConfig;
use super::errors::GenerationError;
use super::ir::Program;
use crate::analyst::AnalystConfig;
use crate::metadata::BuildMetadata;

/// Renders a whole [`Program`] by walking it.
pub trait ProgramRenderer {
    /// Render `program`, replacing any previous contents.
    fn generate(&mut self, program: &Program, embed_data: bool) -> Result<(), GenerationError>;

    /// Materialized document (empty before the first `generate`).
    fn contents(&self) -> &str;

    /// Whether the generated entry point may call a separate training-creation function.
    fn supports_separate_training(&self) -> bool {
        true
    }
}

/// Renders a fixed template from an analyst configuration.
pub trait TemplateRenderer {
    /// Fill the template, replacing any previous contents.
    fn generate(&mut self, config: &dyn AnalystConfig, metadata: &dyn BuildMetadata) -> Result<(), GenerationError>;

    /// Materialized document (empty before the first `generate`).
    fn contents(&self) -> &str;
}

/// The renderer selected for a session.
pub enum Renderer {
    Program(Box<dyn ProgramRenderer>),
    Template(Box<dyn TemplateRenderer>),
}

impl Renderer {
    /// Pick the renderer for `target`. A target without a registered variant is a configuration error.
    pub fn for_target(target: TargetLanguage, config: &RenderConfig) -> Result<Self, GenerationError> {
        let variant = target.variant().ok_or(GenerationError::Configuration)?;
        let renderer = match variant {
            RendererVariant::Program => Renderer::Program(program_renderer(target, config)?),
            RendererVariant::Template => Renderer::Template(template_renderer(target)?),
        };
        Ok(renderer)
    }

    pub fn variant(&self) -> RendererVariant {
        match self {
            Renderer::Program(_) => RendererVariant::Program,
            Renderer::Template(_) => RendererVariant::Template,
        }
    }

    /// Template renderers have no separate training function to call.
    pub fn supports_separate_training(&self) -> bool {
        match self {
            Renderer::Program(r) => r.supports_separate_training(),
            Renderer::Template(_) => false,
        }
    }

    pub fn contents(&self) -> &str {
        match self {
            Renderer::Program(r) => r.contents(),
            Renderer::Template(r) => r.contents(),
        }
    }

    /// Write the materialized document to `path` in one call.
    pub fn write_contents(&self, path: &Path) -> Result<(), GenerationError> {
        fs::write(path, self.contents()).map_err(|source| GenerationError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fail unless this is a `variant` renderer.
    pub fn expect_variant(&self, variant: RendererVariant, operation: &'static str) -> Result<(), GenerationError> {
        let actual = self.variant();
        if actual == variant {
            Ok(())
        } else {
            Err(GenerationError::InvalidRendererUse {
                operation,
                expected: variant,
                actual,
            })
        }
    }

    pub fn as_program_mut(&mut self, operation: &'static str) -> Result<&mut dyn ProgramRenderer, GenerationError> {
        match self {
            Renderer::Program(r) => Ok(r.as_mut()),
            Renderer::Template(_) => Err(GenerationError::InvalidRendererUse {
                operation,
                expected: RendererVariant::Program,
                actual: RendererVariant::Template,
            }),
        }
    }

    pub fn as_template_mut(&mut self, operation: &'static str) -> Result<&mut dyn TemplateRenderer, GenerationError> {
        match self {
            Renderer::Template(r) => Ok(r.as_mut()),
            Renderer::Program(_) => Err(GenerationError::InvalidRendererUse {
                operation,
                expected: RendererVariant::Template,
                actual: RendererVariant::Program,
            }),
        }
    }
}

/// Lexical rules for a target registered as [`RendererVariant::Program`].
fn program_renderer(target: TargetLanguage, config: &RenderConfig) -> Result<Box<dyn ProgramRenderer>, GenerationError> {
    let renderer: Box<dyn ProgramRenderer> = match target {
        TargetLanguage::Java => Box::new(SyntaxRenderer::new(JavaSyntax, config)),
        TargetLanguage::CSharp => Box::new(SyntaxRenderer::new(CSharpSyntax, config)),
        TargetLanguage::JavaScript => Box::new(SyntaxRenderer::new(JavaScriptSyntax, config)),
        other => {
            tracing::error!(target = %other, "no lexical rules for program target");
            return Err(GenerationError::Configuration);
        }
    };
    Ok(renderer)
}

/// Canned template for a target registered as [`RendererVariant::Template`].
fn template_renderer(target: TargetLanguage) -> Result<Box<dyn TemplateRenderer>, GenerationError> {
    let template = match target {
        TargetLanguage::Mql4 => CannedTemplate::mql4(),
        TargetLanguage::NinjaScript => CannedTemplate::ninjascript(),
        other => {
            tracing::error!(target = %other, "no canned template for template target");
            return Err(GenerationError::Configuration);
        }
    };
    Ok(Box::new(template))
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Renderer").field(&self.variant()).finish()
    }
}
