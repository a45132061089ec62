//! Versioned device programs with a typed binding layout.
//!
//! A [`ProgramSource`] pairs WGSL text with the [`ProgramLayout`] the host
//! code was written against: vertex attributes by location and uniform
//! blocks by group/binding, with member byte offsets taken from the
//! `#[repr(C)]` Rust structs. [`validate_program`] parses and validates the
//! WGSL with naga and checks the layout against the parsed module, so a
//! drifted shader fails at load time instead of rendering garbage.

mod catalog;
mod contract;


pub use catalog::{instances_program, points_program};

/// A vertex attribute the host feeds at `location`.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDesc {
    pub name: &'static str,
    pub location: u32,
    pub format: wgpu::VertexFormat,
}

/// One member of a uniform block and its byte offset.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformMember {
    pub name: &'static str,
    pub offset: u32,
}

/// A uniform buffer the host writes at `@group(group) @binding(binding)`.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformBlockDesc {
    pub group: u32,
    pub binding: u32,
    /// Size of the host struct in bytes.
    pub size: u32,
    pub members: Vec<UniformMember>,
}

/// Everything the host assumes about a program's interface.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramLayout {
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
    pub attributes: Vec<AttributeDesc>,
    pub uniforms: Vec<UniformBlockDesc>,
}

/// WGSL source plus the layout it must satisfy.
#[derive(Debug, Clone)]
pub struct ProgramSource {
    pub name: &'static str,
    pub version: u32,
    pub source: &'static str,
    pub layout: ProgramLayout,
}

/// A program that passed [`validate_program`]. Pipelines are only built
/// from these.
#[derive(Debug, Clone)]
pub struct ValidatedProgram {
    name: &'static str,
    version: u32,
    source: &'static str,
    layout: ProgramLayout,
}

impl ValidatedProgram {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn layout(&self) -> &ProgramLayout {
        &self.layout
    }

    pub fn create_shader_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(self.name),
            source: wgpu::ShaderSource::Wgsl(self.source.into()),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("program '{program}' failed to parse:\n{message}")]
    Parse { program: String, message: String },

    #[error("program '{program}' failed validation: {message}")]
    Validation { program: String, message: String },

    #[error("program '{program}' breaks its binding layout: {message}")]
    Contract { program: String, message: String },
}

/// Parse, validate, and contract-check a program.
pub fn validate_program(program: &ProgramSource) -> Result<ValidatedProgram, ProgramError> {
    let module = naga::front::wgsl::parse_str(program.source).map_err(|e| ProgramError::Parse {
        program: program.name.to_string(),
        message: e.emit_to_string(program.source),
    })?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    )
    .validate(&module)
    .map_err(|e| ProgramError::Validation {
        program: program.name.to_string(),
        message: e.into_inner().to_string(),
    })?;

    let violations = contract::check(&module, &program.layout);
    if !violations.is_empty() {
        return Err(ProgramError::Contract {
            program: program.name.to_string(),
            message: violations.join("; "),
        });
    }

    tracing::debug!("program '{}' v{} validated", program.name, program.version);

    Ok(ValidatedProgram {
        name: program.name,
        version: program.version,
        source: program.source,
        layout: program.layout.clone(),
    })
}
