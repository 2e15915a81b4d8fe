use std::path::Path;

use anyhow::Context;
use wgsl_dump::{
    load_config, BindGroupDescriptor, BindGroupEntry, CaptureConfig, ComputePipelineDescriptor,
    GpuDevice, MockDevice,
};

const DEFAULT_TEST: &str = "webgpu:shader,execution,expression:call,builtin:abs:f32";
const CONFIG_FILE: &str = "wgsl_dump.toml";

const ABS_SHADER: &str = r#"
@group(0) @binding(0) var<storage, read> inputs: array<f32>;
@group(0) @binding(1) var<storage, read_write> outputs: array<f32>;

@compute @workgroup_size(1)
fn main(@builtin(global_invocation_id) id: vec3<u32>) {
    outputs[id.x] = abs(inputs[id.x]);
}
"#;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Case {
    input: f32,
    expected: f32,
}

fn build_device(config: CaptureConfig) -> anyhow::Result<MockDevice> {
    let gpu = wgsl_dump::create(config);
    let adapter = pollster::block_on(gpu.request_adapter()).context("no adapter")?;
    Ok(pollster::block_on(adapter.request_device()))
}

/// Runs one abs() case list the way a CTS builtin test would.
fn run_abs_test<D: GpuDevice>(device: &D, cases: &[Case]) -> anyhow::Result<()> {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("abs"),
        source: wgpu::ShaderSource::Wgsl(ABS_SHADER.into()),
    })?;
    println!("shader dumped to {}", module.artifact().display());

    let inputs: Vec<f32> = cases.iter().map(|c| c.input).collect();
    let byte_len = std::mem::size_of_val(inputs.as_slice()) as u64;
    let input = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("inputs"),
        size: byte_len,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
        mapped_at_creation: true,
    });
    input.write_mapped(0, &inputs);
    input.unmap();

    let output = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("outputs"),
        size: byte_len,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
        mapped_at_creation: false,
    });

    let pipeline = device.create_compute_pipeline(&ComputePipelineDescriptor {
        label: Some("abs-pipeline"),
        layout: None,
        module: &module,
        entry_point: Some("main"),
    });
    let layout = pipeline.get_bind_group_layout(0);
    let bind_group = device.create_bind_group(&BindGroupDescriptor {
        label: Some("abs-bind-group"),
        layout: &layout,
        entries: &[
            BindGroupEntry {
                binding: 0,
                resource: input.as_entire_binding(),
            },
            BindGroupEntry {
                binding: 1,
                resource: output.as_entire_binding(),
            },
        ],
    })?;

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor::default());
    {
        let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor::default());
        pass.set_pipeline(&pipeline);
        pass.set_bind_group(0, &bind_group, &[]);
        pass.dispatch_workgroups(cases.len() as u32, 1, 1);
        pass.end();
    }
    device.queue().submit([encoder.finish()]);

    let expected: Vec<f32> = cases.iter().map(|c| c.expected).collect();
    log::info!("expected results: {expected:?}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = if Path::new(CONFIG_FILE).exists() {
        load_config(CONFIG_FILE)?
    } else {
        CaptureConfig::default()
    }
    .with_env_overrides();

    let test_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TEST.to_string());

    let device = build_device(config)?;
    device.set_test_name(&test_name);

    let cases = [
        Case {
            input: -1.5,
            expected: 1.5,
        },
        Case {
            input: 0.0,
            expected: 0.0,
        },
        Case {
            input: 2.25,
            expected: 2.25,
        },
    ];
    run_abs_test(&device, &cases).with_context(|| format!("capturing {test_name}"))?;

    device.destroy();
    let lost = pollster::block_on(device.lost());
    println!(
        "artifacts for {test_name} under {} ({})",
        device.artifact_root().display(),
        lost.message
    );
    Ok(())
}
