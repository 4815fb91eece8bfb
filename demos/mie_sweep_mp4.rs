use std::path::Path;

use num_complex::Complex64;

use holoreel::mie::{NearFieldOpts, Sphere, near_field_sweep};
use holoreel::{AnimateOpts, ChannelSelect, Colormap, Fps, animate_to_mp4, output_path};

fn main() -> anyhow::Result<()> {
    // A weakly absorbing bead, sizes in units of the wavelength.
    let sphere = Sphere::new(0.6, Complex64::new(1.2, 0.01))?;
    let opts = NearFieldOpts::new(128, 8.0);

    // Sweep the observation plane away from the sphere, one twentieth of a wavelength
    // per frame.
    let zs: Vec<f64> = (1..=72).map(|i| 0.75 + i as f64 * 0.05).collect();
    let stack = near_field_sweep(&sphere, &opts, &zs)?;

    let mut anim = AnimateOpts::new(Fps::from_hz(24)?);
    anim.channel = ChannelSelect::Real;
    anim.autoscale = true;
    anim.colormap = Colormap::Viridis;
    anim.pixel_scale = 4;
    anim.parallel = true;

    let out_dir = Path::new("target/demos");
    let stats = animate_to_mp4(&stack, out_dir, "mie_sweep", &anim)?;
    eprintln!(
        "wrote {} ({} frames)",
        output_path(out_dir, "mie_sweep").display(),
        stats.frames_total
    );
    Ok(())
}
