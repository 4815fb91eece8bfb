use std::path::Path;

use ndarray::Array3;

use holoreel::{AnimateOpts, Colormap, Fps, ImageStack, animate_to_mp4, output_path};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // A gaussian blob orbiting the frame center.
    let frames = 90;
    let size = 96;
    let stack = ImageStack::from_real(Array3::from_shape_fn((frames, size, size), |(t, r, c)| {
        let phase = t as f64 / frames as f64 * std::f64::consts::TAU;
        let cy = size as f64 / 2.0 + size as f64 / 4.0 * phase.sin();
        let cx = size as f64 / 2.0 + size as f64 / 4.0 * phase.cos();
        let d2 = (r as f64 - cy).powi(2) + (c as f64 - cx).powi(2);
        (-d2 / 120.0).exp()
    }));

    let mut opts = AnimateOpts::new(Fps::from_hz(30)?);
    opts.autoscale = true;
    opts.colormap = Colormap::Plasma;
    opts.pixel_scale = 2;
    opts.parallel = true;

    let out_dir = Path::new("target/demos");
    let stats = animate_to_mp4(&stack, out_dir, "blob", &opts)?;
    eprintln!(
        "wrote {} ({} frames)",
        output_path(out_dir, "blob").display(),
        stats.frames_total
    );
    Ok(())
}
