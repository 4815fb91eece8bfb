use super::*;

#[test]
fn grayscale_is_a_linear_ramp() {
    assert_eq!(Colormap::Grayscale.sample(0.0), [0, 0, 0]);
    assert_eq!(Colormap::Grayscale.sample(0.5), [128, 128, 128]);
    assert_eq!(Colormap::Grayscale.sample(1.0), [255, 255, 255]);
}

#[test]
fn viridis_endpoints_match_reference_palette() {
    // matplotlib viridis starts at (68, 1, 84) and ends at (253, 231, 37).
    assert_eq!(Colormap::Viridis.sample(0.0), [68, 1, 84]);
    assert_eq!(Colormap::Viridis.sample(1.0), [253, 231, 37]);
}

#[test]
fn plasma_starts_deep_blue() {
    assert_eq!(Colormap::Plasma.sample(0.0), [13, 8, 135]);
}

#[test]
fn jet_hits_classic_waypoints() {
    assert_eq!(Colormap::Jet.sample(0.0), [0, 0, 128]);
    assert_eq!(Colormap::Jet.sample(0.5), [128, 255, 128]);
    assert_eq!(Colormap::Jet.sample(1.0), [255, 0, 0]);
}

#[test]
fn samples_clamp_out_of_range_input() {
    for map in [
        Colormap::Grayscale,
        Colormap::Viridis,
        Colormap::Plasma,
        Colormap::Jet,
    ] {
        assert_eq!(map.sample(-3.0), map.sample(0.0));
        assert_eq!(map.sample(42.0), map.sample(1.0));
    }
}
