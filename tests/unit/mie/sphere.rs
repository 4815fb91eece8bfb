use super::*;

#[test]
fn scattering_order_grows_with_the_size_parameter() {
    assert_eq!(scattering_order(1.0, 1.0), 16);
    assert!(scattering_order(2.0, 1.0) > scattering_order(1.0, 1.0));
    assert!(scattering_order(1.0, 2.0) < scattering_order(1.0, 1.0));
}

#[test]
fn unit_index_scatters_nothing() {
    let sphere = Sphere::new(1.0, Complex64::new(1.0, 0.0)).unwrap();
    let b = sphere.b_coefficients(1.0).unwrap();
    assert_eq!(b.len(), scattering_order(1.0, 1.0) + 1);
    assert!(b.iter().all(|c| c.norm() < 1e-10));
}

#[test]
fn degenerate_inputs_are_rejected() {
    assert!(Sphere::new(0.0, Complex64::new(1.5, 0.0)).is_err());
    assert!(Sphere::new(-1.0, Complex64::new(1.5, 0.0)).is_err());

    let sphere = Sphere::new(0.5, Complex64::new(1.5, 0.0)).unwrap();
    assert!(sphere.b_coefficients(0.0).is_err());

    let mut opts = NearFieldOpts::new(8, 4.0);
    opts.resolution = 1;
    assert!(near_field_slice(&sphere, &opts, 1.0).is_err());

    let mut opts = NearFieldOpts::new(8, 4.0);
    opts.k_dir = [0.0; 3];
    assert!(near_field_slice(&sphere, &opts, 1.0).is_err());

    let opts = NearFieldOpts::new(8, 4.0);
    let err = near_field_slice(&sphere, &opts, 0.0).unwrap_err();
    assert!(matches!(err, HoloreelError::Validation(_)));
    assert!(err.to_string().contains("z must be non-zero"));
}

#[test]
fn axial_incidence_is_rotationally_symmetric() {
    // With the wave along -z the field depends on the grid radius only, so the slice
    // must be symmetric under transposition and row reversal.
    let sphere = Sphere::new(0.5, Complex64::new(1.5, 0.0)).unwrap();
    let opts = NearFieldOpts::new(4, 4.0);
    let field = near_field_slice(&sphere, &opts, 1.3).unwrap();
    let res = opts.resolution;
    for r in 0..res {
        for c in 0..res {
            let v = field[[r, c]];
            assert!((v - field[[c, r]]).norm() < 1e-9);
            assert!((v - field[[res - 1 - r, c]]).norm() < 1e-9);
        }
    }
}

#[test]
fn the_scattered_field_fades_with_distance() {
    let sphere = Sphere::new(0.5, Complex64::new(1.5, 0.0)).unwrap();
    let opts = NearFieldOpts::new(8, 4.0);
    let near = near_field_slice(&sphere, &opts, 1.0).unwrap();
    let far = near_field_slice(&sphere, &opts, 4.0).unwrap();
    let mean =
        |f: &Array2<Complex64>| f.iter().map(|v| v.norm()).sum::<f64>() / (f.len() as f64);
    assert!(mean(&near) > mean(&far));
}

#[test]
fn sweeps_stack_one_frame_per_plane() {
    let sphere = Sphere::new(0.5, Complex64::new(1.33, 0.0)).unwrap();
    let opts = NearFieldOpts::new(5, 3.0);
    let zs = [0.8, 1.2, 1.6];
    let ImageStack::Complex(arr) = near_field_sweep(&sphere, &opts, &zs).unwrap() else {
        panic!("sweep must produce a native-complex stack");
    };
    assert_eq!(arr.dim(), (3, 5, 5));

    let direct = near_field_slice(&sphere, &opts, zs[1]).unwrap();
    assert_eq!(arr.slice(s![1, .., ..]), direct);
}

#[test]
fn sweep_rejects_empty_and_degenerate_planes() {
    let sphere = Sphere::new(0.5, Complex64::new(1.5, 0.0)).unwrap();
    let opts = NearFieldOpts::new(4, 2.0);
    assert!(near_field_sweep(&sphere, &opts, &[]).is_err());
    assert!(near_field_sweep(&sphere, &opts, &[1.0, 0.0]).is_err());
}
