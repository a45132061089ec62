//! Checks a parsed module against a [`ProgramLayout`].

use naga::{AddressSpace, Binding, Handle, Module, ShaderStage, Type, TypeInner};

use super::{AttributeDesc, ProgramLayout, UniformBlockDesc};

struct VertexInput {
    name: String,
    location: u32,
    components: Option<u32>,
}

/// Every mismatch between `module` and `layout`, empty when they agree.
pub(super) fn check(module: &Module, layout: &ProgramLayout) -> Vec<String> {
    let mut errors = Vec::new();

    check_entry(module, layout.fragment_entry, ShaderStage::Fragment, &mut errors);

    match find_entry(module, layout.vertex_entry, ShaderStage::Vertex) {
        Some(function) => {
            let inputs = vertex_inputs(module, function);
            for attr in &layout.attributes {
                check_attribute(&inputs, attr, &mut errors);
            }
            for input in &inputs {
                if !layout.attributes.iter().any(|a| a.location == input.location) {
                    errors.push(format!(
                        "vertex input `{}` at location {} has no host attribute",
                        input.name, input.location
                    ));
                }
            }
        }
        None => errors.push(format!(
            "missing vertex entry point `{}`",
            layout.vertex_entry
        )),
    }

    for block in &layout.uniforms {
        check_uniform(module, block, &mut errors);
    }

    errors
}

fn find_entry<'m>(module: &'m Module, name: &str, stage: ShaderStage) -> Option<&'m naga::Function> {
    module
        .entry_points
        .iter()
        .find(|ep| ep.name == name && ep.stage == stage)
        .map(|ep| &ep.function)
}

fn check_entry(module: &Module, name: &str, stage: ShaderStage, errors: &mut Vec<String>) {
    if find_entry(module, name, stage).is_none() {
        errors.push(format!("missing {stage:?} entry point `{name}`"));
    }
}

fn components(module: &Module, ty: Handle<Type>) -> Option<u32> {
    match module.types[ty].inner {
        TypeInner::Scalar(_) => Some(1),
        TypeInner::Vector { size, .. } => Some(size as u32),
        _ => None,
    }
}

fn format_components(format: wgpu::VertexFormat) -> Option<u32> {
    match format {
        wgpu::VertexFormat::Float32 | wgpu::VertexFormat::Uint32 => Some(1),
        wgpu::VertexFormat::Float32x2 => Some(2),
        wgpu::VertexFormat::Float32x3 => Some(3),
        wgpu::VertexFormat::Float32x4 => Some(4),
        _ => None,
    }
}

/// Location-bound inputs of a vertex entry, flattening struct arguments.
fn vertex_inputs(module: &Module, function: &naga::Function) -> Vec<VertexInput> {
    let mut inputs = Vec::new();

    for arg in &function.arguments {
        match &arg.binding {
            Some(Binding::Location { location, .. }) => inputs.push(VertexInput {
                name: arg.name.clone().unwrap_or_default(),
                location: *location,
                components: components(module, arg.ty),
            }),
            Some(Binding::BuiltIn(_)) => {}
            None => {
                if let TypeInner::Struct { ref members, .. } = module.types[arg.ty].inner {
                    for member in members {
                        if let Some(Binding::Location { location, .. }) = member.binding {
                            inputs.push(VertexInput {
                                name: member.name.clone().unwrap_or_default(),
                                location,
                                components: components(module, member.ty),
                            });
                        }
                    }
                }
            }
        }
    }

    inputs
}

fn check_attribute(inputs: &[VertexInput], attr: &AttributeDesc, errors: &mut Vec<String>) {
    let Some(input) = inputs.iter().find(|i| i.location == attr.location) else {
        errors.push(format!(
            "attribute `{}` expects a vertex input at location {}",
            attr.name, attr.location
        ));
        return;
    };

    if input.name != attr.name {
        errors.push(format!(
            "location {} is `{}` in the program but `{}` on the host",
            attr.location, input.name, attr.name
        ));
    }

    if input.components != format_components(attr.format) {
        errors.push(format!(
            "attribute `{}` is {:?} on the host but has {:?} components in the program",
            attr.name, attr.format, input.components
        ));
    }
}

fn check_uniform(module: &Module, block: &UniformBlockDesc, errors: &mut Vec<String>) {
    let var = module.global_variables.iter().map(|(_, v)| v).find(|v| {
        v.space == AddressSpace::Uniform
            && v
                .binding
                .as_ref()
                .is_some_and(|b| b.group == block.group && b.binding == block.binding)
    });

    let Some(var) = var else {
        errors.push(format!(
            "no uniform at @group({}) @binding({})",
            block.group, block.binding
        ));
        return;
    };

    let TypeInner::Struct {
        ref members, span, ..
    } = module.types[var.ty].inner
    else {
        errors.push(format!(
            "uniform at @group({}) @binding({}) is not a struct",
            block.group, block.binding
        ));
        return;
    };

    if span != block.size {
        errors.push(format!(
            "uniform @group({}) @binding({}) is {span} bytes in the program but {} on the host",
            block.group, block.binding, block.size
        ));
    }

    for expected in &block.members {
        match members
            .iter()
            .find(|m| m.name.as_deref() == Some(expected.name))
        {
            Some(m) if m.offset == expected.offset => {}
            Some(m) => errors.push(format!(
                "uniform member `{}` sits at offset {} in the program but {} on the host",
                expected.name, m.offset, expected.offset
            )),
            None => errors.push(format!(
                "uniform member `{}` missing from @group({}) @binding({})",
                expected.name, block.group, block.binding
            )),
        }
    }
}
