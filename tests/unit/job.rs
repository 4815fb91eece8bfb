use super::*;

#[test]
fn minimal_job_fills_in_defaults() {
    let job = VideoJob::from_reader(r#"{ "fps": 25 }"#.as_bytes()).unwrap();
    assert_eq!(job.fps, 25);
    assert_eq!(job.data_dir, PathBuf::from("."));
    assert_eq!(job.fname, "animation");
    assert_eq!(job.option, ChannelSelect::Real);
    assert!(!job.autoscale);
    assert_eq!(job.colormap, Colormap::Viridis);
    assert_eq!(job.pixel_scale, 1);
    job.validate().unwrap();
}

#[test]
fn full_job_parses_every_field() {
    let json = r#"{
        "fps": 30,
        "data_dir": "out/waves",
        "fname": "field",
        "option": "Imaginary",
        "autoscale": true,
        "colormap": "jet",
        "pixel_scale": 4
    }"#;
    let job = VideoJob::from_reader(json.as_bytes()).unwrap();
    assert_eq!(job.option, ChannelSelect::Imaginary);
    assert!(job.autoscale);
    assert_eq!(job.colormap, Colormap::Jet);
    assert_eq!(job.pixel_scale, 4);
    assert_eq!(job.output_path(), PathBuf::from("out/waves/field.mp4"));
}

#[test]
fn unknown_option_values_fail_at_parse_time() {
    let err = VideoJob::from_reader(r#"{ "fps": 30, "option": "Phase" }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, HoloreelError::Validation(_)));
    assert!(err.to_string().contains("parse video job JSON"));
}

#[test]
fn validate_rejects_degenerate_fields() {
    let mut job = VideoJob::from_reader(r#"{ "fps": 30 }"#.as_bytes()).unwrap();
    job.fps = 0;
    assert!(job.validate().is_err());

    let mut job = VideoJob::from_reader(r#"{ "fps": 30 }"#.as_bytes()).unwrap();
    job.fname = String::new();
    assert!(job.validate().is_err());

    let mut job = VideoJob::from_reader(r#"{ "fps": 30 }"#.as_bytes()).unwrap();
    job.pixel_scale = 0;
    assert!(job.validate().is_err());
}

#[test]
fn to_opts_maps_the_job_onto_pipeline_options() {
    let json = r#"{ "fps": 24, "option": "Imaginary", "autoscale": true, "pixel_scale": 3 }"#;
    let job = VideoJob::from_reader(json.as_bytes()).unwrap();
    let opts = job.to_opts().unwrap();

    assert_eq!(opts.fps, Fps::from_hz(24).unwrap());
    assert_eq!(opts.channel, ChannelSelect::Imaginary);
    assert!(opts.autoscale);
    assert_eq!(opts.pixel_scale, 3);
}

#[test]
fn to_opts_rejects_zero_fps() {
    let mut job = VideoJob::from_reader(r#"{ "fps": 30 }"#.as_bytes()).unwrap();
    job.fps = 0;
    assert!(job.to_opts().is_err());
}
